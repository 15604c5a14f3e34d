use serde::{Deserialize, Serialize};
use std::fmt;

/// A JSON value the server sends either as a number or as a pre-formatted
/// string. The wallet endpoint emits `balance` and `balance_after` as
/// strings but `credit`/`debit` as floats; notification ids are integers.
/// Display passes the server's formatting through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}
