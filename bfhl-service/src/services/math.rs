//! Pure numeric operations behind `/bfhl`.
//!
//! Every function is deterministic and only fails on invalid input.

use num_bigint::BigUint;
use service_core::error::AppError;

/// Longest sequence served in one response. The last term at this length has
/// roughly 2,100 decimal digits.
pub const MAX_FIBONACCI_TERMS: u64 = 10_000;

/// First `n` Fibonacci numbers, starting `0, 1, 1, 2, ...`.
pub fn fibonacci(n: u64) -> Result<Vec<BigUint>, AppError> {
    if n > MAX_FIBONACCI_TERMS {
        return Err(AppError::validation(format!(
            "Fibonacci input must not exceed {}",
            MAX_FIBONACCI_TERMS
        )));
    }

    let n = n as usize;
    let mut sequence: Vec<BigUint> = Vec::with_capacity(n);
    for i in 0..n {
        let term = if i < 2 {
            BigUint::from(i)
        } else {
            &sequence[i - 1] + &sequence[i - 2]
        };
        sequence.push(term);
    }
    Ok(sequence)
}

/// Trial division by every integer in `2..=isqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    let mut divisor = 2u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Keeps the prime inputs, in their original order.
pub fn primes(numbers: &[i64]) -> Result<Vec<i64>, AppError> {
    if numbers.is_empty() {
        return Err(AppError::validation("Prime input cannot be empty"));
    }
    Ok(numbers.iter().copied().filter(|&n| is_prime(n)).collect())
}

/// Iterative Euclid. `gcd(0, 0)` is 0.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of the absolute values.
pub fn lcm(numbers: &[i64]) -> Result<u64, AppError> {
    if numbers.len() < 2 {
        return Err(AppError::validation("LCM needs at least 2 numbers"));
    }
    if numbers.contains(&0) {
        return Err(AppError::validation("LCM cannot include 0"));
    }

    numbers[1..]
        .iter()
        .try_fold(numbers[0].unsigned_abs(), |acc, n| {
            let n = n.unsigned_abs();
            (acc / gcd(acc, n)).checked_mul(n)
        })
        .ok_or_else(|| AppError::validation("LCM result is too large"))
}

/// Highest common factor of the absolute values.
pub fn hcf(numbers: &[i64]) -> Result<u64, AppError> {
    if numbers.len() < 2 {
        return Err(AppError::validation("HCF needs at least 2 numbers"));
    }

    Ok(numbers
        .iter()
        .map(|n| n.unsigned_abs())
        .fold(0, gcd))
}
