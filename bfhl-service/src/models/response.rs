use chrono::{DateTime, Utc};
use num_bigint::BigUint;
use serde::ser::{Error as _, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// Result payload; its shape depends on the operation that ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OperationData {
    /// Fibonacci terms, written as plain JSON integers of any size.
    Sequence(#[serde(serialize_with = "serialize_integers")] Vec<BigUint>),
    /// Filtered inputs (primes).
    Numbers(Vec<i64>),
    /// LCM or HCF.
    Number(u64),
    /// One-word AI answer.
    Answer(String),
}

fn serialize_integers<S>(terms: &[BigUint], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(terms.len()))?;
    for term in terms {
        let number = RawValue::from_string(term.to_string()).map_err(S::Error::custom)?;
        seq.serialize_element(&number)?;
    }
    seq.end()
}

#[derive(Debug, Serialize)]
pub struct BfhlResponse {
    pub is_success: bool,
    pub official_email: String,
    pub data: OperationData,
    pub operation: &'static str,
}

impl BfhlResponse {
    pub fn success(official_email: &str, operation: &'static str, data: OperationData) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data,
            operation,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub is_success: bool,
    pub official_email: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the process started serving.
    pub uptime: f64,
}
