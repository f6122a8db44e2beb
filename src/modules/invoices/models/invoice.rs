// Invoice model
//
// An invoice belongs to one customer and one merchant and may reference at
// most one coupon. The coupon reference is weak: deleting a coupon leaves
// the invoice in place with the reference cleared. Items and transactions
// are owned by the invoice and go with it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Invoice fulfilment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Shipped,
    Packaged,
    Returned,
    /// Not yet fulfilled; blocks deactivation of the attached coupon
    Pending,
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Shipped => write!(f, "shipped"),
            InvoiceStatus::Packaged => write!(f, "packaged"),
            InvoiceStatus::Returned => write!(f, "returned"),
            InvoiceStatus::Pending => write!(f, "pending"),
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "shipped" => Ok(InvoiceStatus::Shipped),
            "packaged" => Ok(InvoiceStatus::Packaged),
            "returned" => Ok(InvoiceStatus::Returned),
            "pending" => Ok(InvoiceStatus::Pending),
            _ => Err(format!("Invalid invoice status: {}", s)),
        }
    }
}

/// A customer's order record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub merchant_id: Uuid,
    /// Weak reference; at most one coupon per invoice
    pub coupon_id: Option<Uuid>,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(
        customer_id: Uuid,
        merchant_id: Uuid,
        coupon_id: Option<Uuid>,
        status: InvoiceStatus,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            customer_id,
            merchant_id,
            coupon_id,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == InvoiceStatus::Pending
    }
}
