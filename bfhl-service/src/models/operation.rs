use serde_json::{Map, Number, Value};
use service_core::error::AppError;

/// Body keys that select an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKey {
    Fibonacci,
    Prime,
    Lcm,
    Hcf,
    Ai,
}

impl OperationKey {
    pub const ALL: [OperationKey; 5] = [
        OperationKey::Fibonacci,
        OperationKey::Prime,
        OperationKey::Lcm,
        OperationKey::Hcf,
        OperationKey::Ai,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKey::Fibonacci => "fibonacci",
            OperationKey::Prime => "prime",
            OperationKey::Lcm => "lcm",
            OperationKey::Hcf => "hcf",
            OperationKey::Ai => "AI",
        }
    }
}

/// A `/bfhl` request body reduced to the one operation it asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Fibonacci(u64),
    Prime(Vec<i64>),
    Lcm(Vec<i64>),
    Hcf(Vec<i64>),
    /// Trimmed, non-empty question.
    Ai(String),
}

impl Operation {
    /// Parses a raw JSON body. Exactly one recognized key must carry a
    /// non-null value; unrecognized keys are ignored.
    pub fn from_body(body: Value) -> Result<Self, AppError> {
        let Value::Object(mut fields) = body else {
            return Err(AppError::validation("Request body must be a JSON object"));
        };

        let present: Vec<OperationKey> = OperationKey::ALL
            .into_iter()
            .filter(|key| fields.get(key.as_str()).is_some_and(|v| !v.is_null()))
            .collect();

        let &[key] = present.as_slice() else {
            return Err(AppError::validation(
                "Exactly ONE of fibonacci, prime, lcm, hcf, AI must be provided",
            ));
        };

        let value = take(&mut fields, key);
        match key {
            OperationKey::Fibonacci => {
                term_count(&value).map(Operation::Fibonacci).ok_or_else(|| {
                    AppError::validation("Fibonacci input must be a non-negative integer")
                })
            }
            OperationKey::Prime => integers(key, &value).map(Operation::Prime),
            OperationKey::Lcm => integers(key, &value).map(Operation::Lcm),
            OperationKey::Hcf => integers(key, &value).map(Operation::Hcf),
            OperationKey::Ai => {
                let Value::String(question) = value else {
                    return Err(AppError::validation("AI input must be a string"));
                };
                let question = question.trim();
                if question.is_empty() {
                    return Err(AppError::validation("AI question cannot be empty"));
                }
                Ok(Operation::Ai(question.to_string()))
            }
        }
    }

    pub fn kind(&self) -> OperationKey {
        match self {
            Operation::Fibonacci(_) => OperationKey::Fibonacci,
            Operation::Prime(_) => OperationKey::Prime,
            Operation::Lcm(_) => OperationKey::Lcm,
            Operation::Hcf(_) => OperationKey::Hcf,
            Operation::Ai(_) => OperationKey::Ai,
        }
    }

    /// The body key this operation was selected by.
    pub fn key(&self) -> &'static str {
        self.kind().as_str()
    }
}

fn take(fields: &mut Map<String, Value>, key: OperationKey) -> Value {
    fields.remove(key.as_str()).unwrap_or(Value::Null)
}

/// Integral floats such as `7.0` count as integers; `7.5` does not.
fn integral_float(number: &Number) -> Option<f64> {
    number.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0)
}

fn term_count(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_u64().or_else(|| {
        // Saturates past u64::MAX, which the length ceiling then rejects.
        integral_float(number)
            .filter(|f| *f >= 0.0)
            .map(|f| f as u64)
    })
}

fn integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        integral_float(number)
            .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn integers(key: OperationKey, value: &Value) -> Result<Vec<i64>, AppError> {
    value
        .as_array()
        .and_then(|items| items.iter().map(integer).collect::<Option<Vec<_>>>())
        .ok_or_else(|| {
            AppError::validation(format!("{} input must be an array of integers", key.as_str()))
        })
}
