// Coupon model with field-level validation
//
// A coupon is a discount rule owned by exactly one merchant, applied to the
// merchant's share of an invoice. Codes are unique per merchant and matched
// case-sensitively. Deleting a coupon never cascades to invoices; they keep
// a nullable reference.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// How a coupon's discount_value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Flat amount off the merchant-scoped subtotal
    Dollar,

    /// Percentage off the merchant-scoped subtotal, value in (0, 100]
    Percent,
}

impl std::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountType::Dollar => write!(f, "dollar"),
            DiscountType::Percent => write!(f, "percent"),
        }
    }
}

impl std::str::FromStr for DiscountType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dollar" => Ok(DiscountType::Dollar),
            "percent" => Ok(DiscountType::Percent),
            _ => Err(format!("Invalid discount type: {}", s)),
        }
    }
}

/// A persisted merchant coupon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub id: Uuid,
    pub merchant_id: Uuid,
    pub name: String,
    /// Unique within the owning merchant's coupon set, case-sensitive
    pub code: String,
    pub discount_value: Decimal,
    pub discount_type: DiscountType,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a coupon; all fields required
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCoupon {
    pub name: String,
    pub code: String,
    pub discount_value: Decimal,
    pub discount_type: DiscountType,
    pub active: bool,
}

/// Payload for a partial coupon update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouponUpdate {
    pub name: Option<String>,
    pub code: Option<String>,
    pub discount_value: Option<Decimal>,
    pub discount_type: Option<DiscountType>,
    pub active: Option<bool>,
}

impl CouponUpdate {
    /// The discount type that would be in effect after applying this update
    pub fn effective_discount_type(&self, existing: &Coupon) -> DiscountType {
        self.discount_type.unwrap_or(existing.discount_type)
    }

    /// The discount value that would be in effect after applying this update
    pub fn effective_discount_value(&self, existing: &Coupon) -> Decimal {
        self.discount_value.unwrap_or(existing.discount_value)
    }
}

/// Listing filter for a merchant's coupons: anything other than
/// active/inactive returns the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponStatusFilter {
    Active,
    Inactive,
    All,
}

impl From<Option<&str>> for CouponStatusFilter {
    fn from(s: Option<&str>) -> Self {
        match s {
            Some("active") => CouponStatusFilter::Active,
            Some("inactive") => CouponStatusFilter::Inactive,
            _ => CouponStatusFilter::All,
        }
    }
}

impl Coupon {
    /// Build a coupon from a validated creation payload.
    ///
    /// Field checks only; the cross-record rules (duplicate code, active
    /// cap) live in the eligibility validator.
    pub fn from_new(merchant_id: Uuid, payload: NewCoupon) -> Result<Self> {
        validate_name(&payload.name)?;
        validate_code(&payload.code)?;
        validate_discount(payload.discount_type, payload.discount_value)?;

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            merchant_id,
            name: payload.name,
            code: payload.code,
            discount_value: payload.discount_value,
            discount_type: payload.discount_type,
            active: payload.active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update in place. The caller must have run the
    /// eligibility validator first.
    pub fn apply_update(&mut self, changes: CouponUpdate) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(code) = changes.code {
            self.code = code;
        }
        if let Some(value) = changes.discount_value {
            self.discount_value = value;
        }
        if let Some(discount_type) = changes.discount_type {
            self.discount_type = discount_type;
        }
        if let Some(active) = changes.active {
            self.active = active;
        }
        self.updated_at = Utc::now();
    }

    pub fn matches_filter(&self, filter: CouponStatusFilter) -> bool {
        match filter {
            CouponStatusFilter::Active => self.active,
            CouponStatusFilter::Inactive => !self.active,
            CouponStatusFilter::All => true,
        }
    }
}

// Field validation, shared by create and update paths

pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_field("name", "cannot be empty"));
    }

    Ok(())
}

pub(crate) fn validate_code(code: &str) -> Result<()> {
    if code.trim().is_empty() {
        return Err(AppError::invalid_field("code", "cannot be empty"));
    }

    Ok(())
}

pub(crate) fn validate_discount(discount_type: DiscountType, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(AppError::invalid_field(
            "discount_value",
            format!("must be greater than 0, got {}", value),
        ));
    }

    // Percent coupons above 100% would produce negative totals; rejected
    // here rather than clamped silently at calculation time.
    if discount_type == DiscountType::Percent && value > Decimal::ONE_HUNDRED {
        return Err(AppError::invalid_field(
            "discount_value",
            format!("percent discount cannot exceed 100, got {}", value),
        ));
    }

    Ok(())
}
