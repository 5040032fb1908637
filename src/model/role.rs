use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::model::view::View;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Worker,
    Admin,
}

impl Role {
    /// The view a fresh session of this role lands on.
    pub fn default_view(self) -> View {
        match self {
            Role::Worker => View::Attendance,
            Role::Admin => View::Dashboard,
        }
    }

    pub fn allows(self, view: View) -> bool {
        match self {
            Role::Worker => matches!(view, View::Attendance | View::History),
            Role::Admin => matches!(view, View::Dashboard | View::Workers | View::Reports),
        }
    }
}
