use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::coupons::models::Coupon;
use crate::modules::coupons::repositories::CouponRepository;
use crate::modules::invoices::repositories::{InvoiceRepository, ItemRepository};
use crate::modules::invoices::services::discount_calculator::{DiscountCalculator, ResolvedLine};

/// Service for invoice totals
///
/// Loads an invoice's lines and attached coupon through the ports and
/// delegates the math to the pure calculator.
pub struct InvoiceService {
    invoice_repo: Arc<dyn InvoiceRepository>,
    item_repo: Arc<dyn ItemRepository>,
    coupon_repo: Arc<dyn CouponRepository>,
    calculator: DiscountCalculator,
}

impl InvoiceService {
    pub fn new(
        invoice_repo: Arc<dyn InvoiceRepository>,
        item_repo: Arc<dyn ItemRepository>,
        coupon_repo: Arc<dyn CouponRepository>,
    ) -> Self {
        Self {
            invoice_repo,
            item_repo,
            coupon_repo,
            calculator: DiscountCalculator::new(),
        }
    }

    /// The merchant's share of the invoice before any discount
    pub async fn subtotal_for_merchant(
        &self,
        invoice_id: Uuid,
        merchant_id: Uuid,
    ) -> Result<Decimal> {
        self.invoice_repo
            .find_by_id(invoice_id)
            .await?
            .ok_or_else(|| AppError::not_found("Invoice"))?;

        let lines = self.resolved_lines(invoice_id).await?;
        Ok(self.calculator.subtotal_for_merchant(&lines, merchant_id))
    }

    /// The merchant's share of the invoice after the attached coupon
    pub async fn total_for_merchant(
        &self,
        invoice_id: Uuid,
        merchant_id: Uuid,
    ) -> Result<Decimal> {
        let invoice = self
            .invoice_repo
            .find_by_id(invoice_id)
            .await?
            .ok_or_else(|| AppError::not_found("Invoice"))?;

        let coupon = self.attached_coupon(&invoice.coupon_id).await?;
        let lines = self.resolved_lines(invoice_id).await?;

        let total = self
            .calculator
            .total_for_merchant(&lines, coupon.as_ref(), merchant_id);

        debug!(%invoice_id, %merchant_id, %total, "computed invoice total");

        Ok(total)
    }

    async fn resolved_lines(&self, invoice_id: Uuid) -> Result<Vec<ResolvedLine>> {
        let line_items = self.invoice_repo.line_items(invoice_id).await?;

        let mut lines = Vec::with_capacity(line_items.len());
        for line_item in line_items {
            lines.push(ResolvedLine {
                item: self.item_repo.resolve(line_item.item_id).await?,
                quantity: line_item.quantity,
            });
        }

        Ok(lines)
    }

    /// A dangling coupon reference is treated like no coupon at all, same
    /// as a dangling item reference contributes zero.
    async fn attached_coupon(&self, coupon_id: &Option<Uuid>) -> Result<Option<Coupon>> {
        match coupon_id {
            Some(id) => self.coupon_repo.find_by_id(*id).await,
            None => Ok(None),
        }
    }
}
