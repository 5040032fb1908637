use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: u64,
    pub name: String,
    pub department: String,
    /// Hourly rate in the currency's major unit, non-negative.
    pub rate: f64,
}
