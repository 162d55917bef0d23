//! Action vocabulary offered on invoices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An action the UI may offer on an invoice.
///
/// Actions are derived, never stored: the resolver recomputes them from
/// (status, permission set) on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Edit,
    Submit,
    Approve,
    Reject,
    MarkPaid,
}

impl Action {
    /// The full action vocabulary.
    pub const ALL: [Action; 5] = [
        Action::Edit,
        Action::Submit,
        Action::Approve,
        Action::Reject,
        Action::MarkPaid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Edit => "edit",
            Action::Submit => "submit",
            Action::Approve => "approve",
            Action::Reject => "reject",
            Action::MarkPaid => "mark-paid",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
