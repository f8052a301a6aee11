use app::notices::{NoticeLevel, Notices};
use app::resolver::{navigate, Action};
use app::store::{keys, MemoryStore, SessionStore};
use pretty_assertions::assert_eq;
use shared_types::{FeatureKey, Role};

use crate::common::logged_in_store;

#[test]
fn unauthenticated_click_records_destination_and_goes_to_login() {
    let mut store = MemoryStore::new();
    let notices = Notices::new();

    let action = navigate(&mut store, &notices, "/leave", FeatureKey::Leave);

    assert_eq!(action, Action::RedirectToLogin);
    assert_eq!(store.get(keys::REDIRECT_PATH), Some("/leave".to_string()));
    assert_eq!(store.get(keys::REQUIRED_FEATURE), Some("leave".to_string()));
}

#[test]
fn unauthenticated_click_never_reaches_the_permission_check() {
    // Even a feature no role could ever hold resolves to the login redirect,
    // not a denial: the auth check comes first.
    let mut store = MemoryStore::new();
    let notices = Notices::new();

    let action = navigate(&mut store, &notices, "/nowhere", FeatureKey::Unknown);

    assert_eq!(action, Action::RedirectToLogin);
    assert!(notices.is_empty(), "no denial notice on the login path");
}

#[test]
fn hr_reaches_payroll_company_details() {
    let mut store = logged_in_store(Role::Hr);
    let notices = Notices::new();

    let action = navigate(&mut store, &notices, "/companydetails", FeatureKey::Payroll);

    assert_eq!(action, Action::RedirectTo("/companydetails".to_string()));
    assert!(notices.is_empty());
}

#[test]
fn employee_denied_hr_recruitment_stays_on_page() {
    let mut store = logged_in_store(Role::Employee);
    let notices = Notices::new();

    let action = navigate(
        &mut store,
        &notices,
        "/recruitment/manage",
        FeatureKey::Recruitment,
    );

    assert_eq!(action, Action::NoOp);
    let drained = notices.drain();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].level, NoticeLevel::Error);
    // Still authenticated; no redirect state was written.
    assert!(store.get(keys::TOKEN).is_some());
    assert_eq!(store.get(keys::REDIRECT_PATH), None);
}

#[test]
fn a_denial_is_terminal_for_the_attempt() {
    let mut store = logged_in_store(Role::Employee);
    let notices = Notices::new();

    let first = navigate(&mut store, &notices, "/payroll", FeatureKey::Payroll);
    let second = navigate(&mut store, &notices, "/payroll", FeatureKey::Payroll);

    // No retry machinery: each attempt independently re-evaluates and each
    // denial surfaces its own notice.
    assert_eq!(first, Action::NoOp);
    assert_eq!(second, Action::NoOp);
    assert_eq!(notices.drain().len(), 2);
}

#[test]
fn unknown_feature_key_is_denied_for_every_role() {
    for role in Role::KNOWN {
        let mut store = logged_in_store(role);
        let notices = Notices::new();
        let action = navigate(&mut store, &notices, "/mystery", FeatureKey::Unknown);
        assert_eq!(action, Action::NoOp, "{:?}", role);
    }
}

#[test]
fn role_changes_are_picked_up_on_the_next_attempt() {
    let mut store = logged_in_store(Role::Employee);
    let notices = Notices::new();

    assert_eq!(
        navigate(&mut store, &notices, "/payroll", FeatureKey::Payroll),
        Action::NoOp
    );

    // Session role rewritten elsewhere (e.g. re-login as HR): nothing is
    // cached between attempts.
    store.set(keys::ROLE, Role::Hr.as_str());
    assert_eq!(
        navigate(&mut store, &notices, "/payroll", FeatureKey::Payroll),
        Action::RedirectTo("/payroll".to_string())
    );
}
