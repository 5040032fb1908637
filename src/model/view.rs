use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Navigation targets exposed by the UI shell. Which of these a session may
/// switch to depends on its role.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum View {
    Attendance,
    History,
    Dashboard,
    Workers,
    Reports,
}
