//! Client-side access layer for the HR portal: the role-permission table,
//! the navigation resolver, and the protected-route guard, plus the local
//! notification bookkeeping and menu search that live alongside the navbar.
//!
//! Everything here is policy over externally-managed session state. There is
//! no network I/O; reads go against static tables or the injected session
//! store, and every denial is user-visible through [`notices::Notices`].

pub mod auth;
pub mod guard;
pub mod listener;
pub mod menu;
pub mod notices;
pub mod notifications;
pub mod permissions;
pub mod resolver;
pub mod search;
pub mod store;
