use app::menu::{visible_entries, NAV_ENTRIES};
use pretty_assertions::assert_eq;
use shared_types::Role;

#[test]
fn entry_is_visible_iff_role_is_listed() {
    for role in [Role::Hr, Role::Manager, Role::Employee, Role::Unknown] {
        let visible: Vec<_> = visible_entries(role).collect();
        for entry in NAV_ENTRIES {
            assert_eq!(
                visible.contains(&entry),
                entry.allowed_roles.contains(&role),
                "{} for {:?}",
                entry.display_name,
                role
            );
        }
    }
}

#[test]
fn repeated_calls_yield_identical_order_stable_sequences() {
    for role in Role::KNOWN {
        let first: Vec<_> = visible_entries(role).map(|e| e.target_path).collect();
        let second: Vec<_> = visible_entries(role).map(|e| e.target_path).collect();
        assert_eq!(first, second);

        // Source order is preserved: the visible list is a subsequence of the
        // full static list.
        let mut remaining = NAV_ENTRIES.iter().map(|e| e.target_path);
        for path in &first {
            assert!(
                remaining.any(|p| p == *path),
                "{} out of source order",
                path
            );
        }
    }
}

#[test]
fn employee_menu_is_self_service_only() {
    let employee: Vec<_> = visible_entries(Role::Employee)
        .map(|e| e.display_name)
        .collect();

    assert!(employee.contains(&"Apply for Leave"));
    assert!(employee.contains(&"Property Loss Declaration"));
    assert!(!employee.contains(&"Run Payroll"));
    assert!(!employee.contains(&"Manage Leave Requests"));
    assert!(!employee.contains(&"Employee Directory"));
}

#[test]
fn manager_sees_team_views_but_not_hr_administration() {
    let manager: Vec<_> = visible_entries(Role::Manager)
        .map(|e| e.display_name)
        .collect();

    assert!(manager.contains(&"Team Attendance"));
    assert!(manager.contains(&"Employee Directory"));
    assert!(!manager.contains(&"Add Employee"));
    assert!(!manager.contains(&"Company Details"));
}

#[test]
fn hr_sees_the_entire_menu() {
    assert_eq!(visible_entries(Role::Hr).count(), NAV_ENTRIES.len());
}
