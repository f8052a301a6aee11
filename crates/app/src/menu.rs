use shared_types::{FeatureKey, NavigationEntry, Role};

use crate::permissions::is_feature_allowed;

const EVERYONE: &[Role] = &[Role::Hr, Role::Manager, Role::Employee];
const MANAGERIAL: &[Role] = &[Role::Hr, Role::Manager];
const HR_ONLY: &[Role] = &[Role::Hr];

/// The portal's navigation menu, in display order.
pub static NAV_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry {
        display_name: "Apply for Leave",
        target_path: "/leave",
        feature: FeatureKey::Leave,
        allowed_roles: EVERYONE,
    },
    NavigationEntry {
        display_name: "Leave Balance",
        target_path: "/leave/balance",
        feature: FeatureKey::Leave,
        allowed_roles: EVERYONE,
    },
    NavigationEntry {
        display_name: "Manage Leave Requests",
        target_path: "/leave/requests",
        feature: FeatureKey::Leave,
        allowed_roles: HR_ONLY,
    },
    NavigationEntry {
        display_name: "Company Details",
        target_path: "/companydetails",
        feature: FeatureKey::Payroll,
        allowed_roles: HR_ONLY,
    },
    NavigationEntry {
        display_name: "Run Payroll",
        target_path: "/payroll",
        feature: FeatureKey::Payroll,
        allowed_roles: HR_ONLY,
    },
    NavigationEntry {
        display_name: "Job Openings",
        target_path: "/recruitment/jobs",
        feature: FeatureKey::Recruitment,
        allowed_roles: HR_ONLY,
    },
    NavigationEntry {
        display_name: "Manage Recruitment",
        target_path: "/recruitment/manage",
        feature: FeatureKey::Recruitment,
        allowed_roles: HR_ONLY,
    },
    NavigationEntry {
        display_name: "My Trainings",
        target_path: "/training",
        feature: FeatureKey::Training,
        allowed_roles: EVERYONE,
    },
    NavigationEntry {
        display_name: "Assign Training",
        target_path: "/training/assign",
        feature: FeatureKey::Training,
        allowed_roles: MANAGERIAL,
    },
    NavigationEntry {
        display_name: "My Attendance",
        target_path: "/attendance",
        feature: FeatureKey::Attendance,
        allowed_roles: EVERYONE,
    },
    NavigationEntry {
        display_name: "Team Attendance",
        target_path: "/attendance/team",
        feature: FeatureKey::Attendance,
        allowed_roles: MANAGERIAL,
    },
    NavigationEntry {
        display_name: "Performance Review",
        target_path: "/performance",
        feature: FeatureKey::Performance,
        allowed_roles: EVERYONE,
    },
    NavigationEntry {
        display_name: "Team Performance",
        target_path: "/performance/team",
        feature: FeatureKey::Performance,
        allowed_roles: MANAGERIAL,
    },
    NavigationEntry {
        display_name: "Employee Directory",
        target_path: "/employees",
        feature: FeatureKey::EmployeeManagement,
        allowed_roles: MANAGERIAL,
    },
    NavigationEntry {
        display_name: "Add Employee",
        target_path: "/employees/new",
        feature: FeatureKey::EmployeeManagement,
        allowed_roles: HR_ONLY,
    },
    NavigationEntry {
        display_name: "My Requests",
        target_path: "/requests",
        feature: FeatureKey::EmployeeRequest,
        allowed_roles: EVERYONE,
    },
    NavigationEntry {
        display_name: "Review Employee Requests",
        target_path: "/requests/review",
        feature: FeatureKey::EmployeeRequest,
        allowed_roles: HR_ONLY,
    },
    NavigationEntry {
        display_name: "Property Loss Declaration",
        target_path: "/propertyloss",
        feature: FeatureKey::PropertyLoss,
        allowed_roles: EVERYONE,
    },
];

/// The menu visible to `role`, in source order.
///
/// Lazy and restartable: each call re-filters the static list, so the menu
/// always reflects whatever role the caller just read from session state.
/// Nothing is cached or sorted.
pub fn visible_entries(role: Role) -> impl Iterator<Item = &'static NavigationEntry> {
    NAV_ENTRIES.iter().filter(move |entry| entry.is_visible_to(role))
}

/// Cross-check every entry's `allowed_roles` against the permission table.
///
/// The menu and the table are separate by construction; an entry visible to a
/// role whose feature the table denies would produce a menu item that always
/// dead-ends in a denial. Returns one description per violation.
pub fn validate_entries() -> Vec<String> {
    let mut violations = Vec::new();
    for entry in NAV_ENTRIES {
        for &role in entry.allowed_roles {
            if !is_feature_allowed(role, entry.feature) {
                violations.push(format!(
                    "'{}' is visible to '{}' but feature '{}' is not granted to that role",
                    entry.display_name,
                    role.as_str(),
                    entry.feature.as_str()
                ));
            }
        }
    }
    if !violations.is_empty() {
        tracing::warn!(count = violations.len(), "navigation table inconsistent");
    }
    violations
}
