// Merchant-scoped invoice totals and coupon discount application
//
// All math is Decimal; percent results are rounded half-even to the cent.
// The calculator never fails: out-of-range inputs are clamped, dangling
// item references contribute zero.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::money;
use crate::modules::coupons::models::{Coupon, DiscountType};
use crate::modules::invoices::models::Item;

/// An invoice line with its item reference resolved.
///
/// `item` is None when the referenced catalog item no longer exists; the
/// line then contributes nothing instead of failing the calculation.
#[derive(Debug, Clone)]
pub struct ResolvedLine {
    pub item: Option<Item>,
    pub quantity: u32,
}

/// DiscountCalculator computes merchant-scoped subtotals and applies an
/// optional coupon's discount
pub struct DiscountCalculator;

impl DiscountCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Sum of quantity × unit_price over the lines whose item belongs to
    /// the merchant. An invoice may span several merchants; only the given
    /// merchant's share is counted.
    pub fn subtotal_for_merchant(&self, lines: &[ResolvedLine], merchant_id: Uuid) -> Decimal {
        let subtotal = lines
            .iter()
            .filter_map(|line| line.item.as_ref().map(|item| (item, line.quantity)))
            .filter(|(item, _)| item.merchant_id == merchant_id)
            .map(|(item, quantity)| Decimal::from(quantity) * item.unit_price)
            .sum();

        money::round(subtotal)
    }

    /// Apply a coupon's discount to a merchant-scoped subtotal.
    ///
    /// Non-positive subtotals clamp to zero. A coupon owned by a different
    /// merchant leaves the subtotal untouched, even when it is attached to
    /// the invoice for another merchant's lines. Dollar discounts clamp at
    /// zero; percent results are rounded to the cent and likewise never go
    /// negative (validation rejects percent values over 100, the clamp
    /// covers data persisted before that rule).
    ///
    /// The result is a final total: re-applying a coupon to an already
    /// discounted value is a caller error, not something this function
    /// detects.
    pub fn apply_discount(
        &self,
        subtotal: Decimal,
        coupon: Option<&Coupon>,
        merchant_id: Uuid,
    ) -> Decimal {
        if subtotal <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let coupon = match coupon {
            Some(coupon) if coupon.merchant_id == merchant_id => coupon,
            _ => return subtotal,
        };

        match coupon.discount_type {
            DiscountType::Dollar => {
                if coupon.discount_value >= subtotal {
                    Decimal::ZERO
                } else {
                    subtotal - coupon.discount_value
                }
            }
            DiscountType::Percent => {
                let factor = Decimal::ONE - coupon.discount_value / Decimal::ONE_HUNDRED;
                money::round(subtotal * factor).max(Decimal::ZERO)
            }
        }
    }

    /// Merchant-scoped total after the invoice's coupon, if any
    pub fn total_for_merchant(
        &self,
        lines: &[ResolvedLine],
        coupon: Option<&Coupon>,
        merchant_id: Uuid,
    ) -> Decimal {
        let subtotal = self.subtotal_for_merchant(lines, merchant_id);
        self.apply_discount(subtotal, coupon, merchant_id)
    }

    /// True iff every item belongs to the coupon's merchant; vacuously
    /// true for an empty slice
    pub fn is_applicable_to(&self, coupon: &Coupon, items: &[Item]) -> bool {
        items.iter().all(|item| item.merchant_id == coupon.merchant_id)
    }
}

impl Default for DiscountCalculator {
    fn default() -> Self {
        Self::new()
    }
}
