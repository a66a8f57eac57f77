//! Engine modules: the reconciliation core.
//!
//! The engine sits between the kit snapshots (what exists, what is offered)
//! and the presentation layer (what to render). Everything here is a pure
//! transformation that returns freshly built views.

pub mod check;
pub mod grouping;
pub mod ordering;
pub mod reconcile;
pub mod transition;

pub use check::{CheckGroup, CheckItem, checked_components};
pub use grouping::group_by_category;
pub use ordering::sort_for_display;
pub use reconcile::{compute_check_groups, fresh_install_items, restricted_in};
pub use transition::Transition;
