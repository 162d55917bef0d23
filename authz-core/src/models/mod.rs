pub mod action;
pub mod invoice;
pub mod permission;
pub mod role;

pub use action::Action;
pub use invoice::{Invoice, InvoiceStatus, StatusBadge, StatusColor};
pub use permission::{permissions, PermissionSet};
pub use role::{roles, RoleSet};
