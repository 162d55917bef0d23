//! Invoice model for the portal authorization core.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Invoice lifecycle status.
///
/// The backend owns every transition (Draft → Tax Generated → Submitted →
/// Approved/Rejected → Paid; a rejected invoice is reset to Draft server
/// side). Any label outside the six known ones is carried verbatim in
/// `Unknown` and resolves to no actions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    Draft,
    TaxGenerated,
    Submitted,
    Approved,
    Rejected,
    Paid,
    Unknown(String),
}

impl InvoiceStatus {
    /// The six defined lifecycle statuses, in lifecycle order.
    pub const KNOWN: [InvoiceStatus; 6] = [
        InvoiceStatus::Draft,
        InvoiceStatus::TaxGenerated,
        InvoiceStatus::Submitted,
        InvoiceStatus::Approved,
        InvoiceStatus::Rejected,
        InvoiceStatus::Paid,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::TaxGenerated => "Tax Generated",
            InvoiceStatus::Submitted => "Submitted",
            InvoiceStatus::Approved => "Approved",
            InvoiceStatus::Rejected => "Rejected",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Unknown(raw) => raw,
        }
    }

    /// Parse a wire label by exact match. Anything else, including the
    /// empty string, parses to `Unknown` carrying the raw value.
    pub fn from_string(s: &str) -> Self {
        match s {
            "Draft" => InvoiceStatus::Draft,
            "Tax Generated" => InvoiceStatus::TaxGenerated,
            "Submitted" => InvoiceStatus::Submitted,
            "Approved" => InvoiceStatus::Approved,
            "Rejected" => InvoiceStatus::Rejected,
            "Paid" => InvoiceStatus::Paid,
            other => InvoiceStatus::Unknown(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, InvoiceStatus::Unknown(_))
    }

    /// Paid is the only terminal status: no permission unlocks any action.
    pub fn is_terminal(&self) -> bool {
        matches!(self, InvoiceStatus::Paid)
    }

    /// Badge metadata for rendering this status. Unrecognized statuses get
    /// their raw label on a gray badge.
    pub fn badge(&self) -> StatusBadge {
        let (label, color) = match self {
            InvoiceStatus::Draft => ("Draft", StatusColor::Gray),
            InvoiceStatus::TaxGenerated => ("Tax Generated", StatusColor::Blue),
            InvoiceStatus::Submitted => ("Submitted", StatusColor::Yellow),
            InvoiceStatus::Approved => ("Approved", StatusColor::Green),
            InvoiceStatus::Rejected => ("Rejected", StatusColor::Red),
            InvoiceStatus::Paid => ("Paid", StatusColor::Teal),
            InvoiceStatus::Unknown(raw) => (raw.as_str(), StatusColor::Gray),
        };
        StatusBadge {
            label: label.to_string(),
            color,
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(s: String) -> Self {
        InvoiceStatus::from_string(&s)
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> String {
        match status {
            InvoiceStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color tag for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Gray,
    Blue,
    Yellow,
    Green,
    Red,
    Teal,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Gray => "gray",
            StatusColor::Blue => "blue",
            StatusColor::Yellow => "yellow",
            StatusColor::Green => "green",
            StatusColor::Red => "red",
            StatusColor::Teal => "teal",
        }
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: String,
    pub color: StatusColor,
}

/// Invoice representation as returned by the remote invoicing API.
///
/// Only `status` participates in authorization; the remaining fields are
/// passed through for display. Every field tolerates absence so a partial
/// payload still deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default)]
    pub invoice_id: Option<Uuid>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub vendor_name: Option<String>,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Invoice {
    /// Resolve the raw status field. A missing or null status resolves to
    /// `Unknown` so downstream resolution fails closed.
    pub fn status_enum(&self) -> InvoiceStatus {
        match self.status.as_deref() {
            Some(s) => InvoiceStatus::from_string(s),
            None => InvoiceStatus::Unknown(String::new()),
        }
    }
}
