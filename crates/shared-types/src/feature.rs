use serde::{Deserialize, Serialize};

/// Feature key grouping a set of navigation destinations under one
/// authorization check. The camelCase tags match what the login flow
/// persists in client-local storage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FeatureKey {
    #[default]
    Unknown,
    Leave,
    Payroll,
    Recruitment,
    Training,
    Attendance,
    Performance,
    EmployeeManagement,
    EmployeeRequest,
    PropertyLoss,
}

impl FeatureKey {
    /// Parse a feature tag. Unknown tags normalize to `Unknown`, which no
    /// role is ever granted.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "leave" => FeatureKey::Leave,
            "payroll" => FeatureKey::Payroll,
            "recruitment" => FeatureKey::Recruitment,
            "training" => FeatureKey::Training,
            "attendance" => FeatureKey::Attendance,
            "performance" => FeatureKey::Performance,
            "employeeManagement" => FeatureKey::EmployeeManagement,
            "employeeRequest" => FeatureKey::EmployeeRequest,
            "propertyLoss" => FeatureKey::PropertyLoss,
            _ => FeatureKey::Unknown,
        }
    }

    /// The camelCase tag persisted in client-local storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKey::Leave => "leave",
            FeatureKey::Payroll => "payroll",
            FeatureKey::Recruitment => "recruitment",
            FeatureKey::Training => "training",
            FeatureKey::Attendance => "attendance",
            FeatureKey::Performance => "performance",
            FeatureKey::EmployeeManagement => "employeeManagement",
            FeatureKey::EmployeeRequest => "employeeRequest",
            FeatureKey::PropertyLoss => "propertyLoss",
            FeatureKey::Unknown => "unknown",
        }
    }
}
