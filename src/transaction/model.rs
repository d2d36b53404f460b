use serde::{Deserialize, Serialize};

/// A value transfer between two parties.
///
/// Sender and receiver are opaque identifiers; amounts carry no sign
/// or balance constraint on purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub receiver: String,
    pub amount: i64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, receiver: impl Into<String>, amount: i64) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
        }
    }
}
