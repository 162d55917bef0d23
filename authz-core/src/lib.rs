//! authz-core: Invoice lifecycle authorization for portal UIs.
//!
//! Given the status of an invoice owned by a remote invoicing API and the
//! caller's granted permission set, this crate resolves which actions the UI
//! may offer (edit, submit, approve, reject, mark paid) and supplies stable
//! badge metadata for each status. The backend owns every status transition;
//! this crate only classifies a presented status.
//!
//! Resolution is pure and fail-closed: a missing or unrecognized status
//! yields an empty action list rather than an error, because these results
//! gate payment-sensitive UI affordances.

pub mod models;
pub mod services;

pub use models::{
    permissions, roles, Action, Invoice, InvoiceStatus, PermissionSet, RoleSet, StatusBadge,
    StatusColor,
};
pub use services::authz::{can_write_invoices, permitted_actions};
