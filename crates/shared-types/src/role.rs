use serde::{Deserialize, Serialize};

/// Portal user role driving authorization decisions.
///
/// - `Hr` — human resources staff. Full access to every portal area.
/// - `Manager` — team lead. Sees their team's attendance, training,
///   performance, and the employee directory.
/// - `Employee` — regular staff member. Self-service screens only.
/// - `Unknown` — unauthenticated or unrecognized role string. Grants nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Unknown,
    Employee,
    Manager,
    Hr,
}

impl Role {
    /// Parse the role string persisted at login. Unknown values normalize to
    /// `Unknown` rather than flowing through comparisons as raw strings.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hr" => Role::Hr,
            "manager" => Role::Manager,
            "employee" => Role::Employee,
            _ => Role::Unknown,
        }
    }

    /// Lowercase string for client-local storage / JWT claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hr => "hr",
            Role::Manager => "manager",
            Role::Employee => "employee",
            Role::Unknown => "unknown",
        }
    }

    /// All roles a real user can hold. `Unknown` is excluded on purpose.
    pub const KNOWN: [Role; 3] = [Role::Employee, Role::Manager, Role::Hr];
}
