use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// A line on an invoice: a purchased item and its quantity.
///
/// The unit price is not stored here; it is resolved from the item at
/// calculation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub item_id: Uuid,
    /// Zero is allowed and contributes nothing to the total
    pub quantity: u32,
}

impl InvoiceItem {
    pub fn new(invoice_id: Uuid, item_id: Uuid, quantity: i64) -> Result<Self> {
        let quantity = u32::try_from(quantity).map_err(|_| {
            AppError::invalid_field("quantity", format!("must be >= 0, got {}", quantity))
        })?;

        Ok(Self {
            id: Uuid::new_v4(),
            invoice_id,
            item_id,
            quantity,
        })
    }
}
