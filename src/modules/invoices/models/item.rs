use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{money, AppError, Result};

/// A merchant's catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub merchant_id: Uuid,
    pub name: String,
    /// Non-negative, at most two decimal places
    pub unit_price: Decimal,
}

impl Item {
    pub fn new(merchant_id: Uuid, name: String, unit_price: Decimal) -> Result<Self> {
        money::validate_amount(unit_price)
            .map_err(|msg| AppError::invalid_field("unit_price", msg))?;

        Ok(Self {
            id: Uuid::new_v4(),
            merchant_id,
            name,
            unit_price,
        })
    }
}
