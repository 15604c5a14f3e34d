use serde::{Deserialize, Serialize};

use super::scalar::Scalar;

/// One row of the wallet's transaction history. Credit and debit are
/// mutually exclusive on the server but nothing here assumes that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    pub credit: Option<Scalar>,
    pub debit: Option<Scalar>,
    pub balance_after: Option<Scalar>,
}

/// Response from the wallet poll endpoint: current balance plus the ledger
/// in server order (most recent first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub balance: Option<Scalar>,
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,
}
