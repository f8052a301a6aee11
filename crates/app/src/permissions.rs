use shared_types::FeatureKey::{self, *};
use shared_types::Role;

/// The features each role is granted. Static, loaded once per session, never
/// user-editable at runtime. This table is the authoritative gate at
/// navigation time; per-entry `allowed_roles` only shapes the menu.
pub fn allowed_features(role: Role) -> &'static [FeatureKey] {
    match role {
        Role::Hr => &[
            Leave,
            Payroll,
            Recruitment,
            Training,
            Attendance,
            Performance,
            EmployeeManagement,
            EmployeeRequest,
            PropertyLoss,
        ],
        Role::Manager => &[
            Leave,
            Training,
            Attendance,
            Performance,
            EmployeeManagement,
            EmployeeRequest,
            PropertyLoss,
        ],
        Role::Employee => &[
            Leave,
            Training,
            Attendance,
            Performance,
            EmployeeRequest,
            PropertyLoss,
        ],
        Role::Unknown => &[],
    }
}

/// Membership test against the table. Returns `false` — never errors — for
/// unknown roles and unknown feature keys: absence of a mapping is "not
/// allowed", not "allowed".
pub fn is_feature_allowed(role: Role, feature: FeatureKey) -> bool {
    allowed_features(role).contains(&feature)
}
