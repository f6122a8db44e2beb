use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PolicyConfig;
use crate::core::{AppError, Result};
use crate::modules::coupons::models::{Coupon, CouponStatusFilter, CouponUpdate, NewCoupon};
use crate::modules::coupons::repositories::CouponRepository;
use crate::modules::coupons::services::eligibility::{
    CouponEligibility, CreateContext, UpdateContext,
};
use crate::modules::invoices::repositories::InvoiceRepository;

/// Service for coupon business logic
///
/// Gathers the persisted facts the eligibility rules need, runs the pure
/// validator, and performs the write. The repository contract requires the
/// count-then-write sequence to be serialized per merchant.
pub struct CouponService {
    coupon_repo: Arc<dyn CouponRepository>,
    invoice_repo: Arc<dyn InvoiceRepository>,
    eligibility: CouponEligibility,
}

impl CouponService {
    pub fn new(
        coupon_repo: Arc<dyn CouponRepository>,
        invoice_repo: Arc<dyn InvoiceRepository>,
        policy: PolicyConfig,
    ) -> Self {
        Self {
            coupon_repo,
            invoice_repo,
            eligibility: CouponEligibility::new(policy.max_active_coupons),
        }
    }

    /// Create a coupon for a merchant
    pub async fn create_coupon(&self, merchant_id: Uuid, payload: NewCoupon) -> Result<Coupon> {
        let ctx = CreateContext {
            active_count: self.coupon_repo.active_count(merchant_id).await?,
            code_taken: self
                .coupon_repo
                .exists_with_code(merchant_id, &payload.code, None)
                .await?,
        };

        if let Err(err) = self.eligibility.validate_for_create(&payload, ctx) {
            warn!(%merchant_id, code = %payload.code, %err, "coupon creation rejected");
            return Err(err);
        }

        let coupon = Coupon::from_new(merchant_id, payload)?;
        let created = self.coupon_repo.insert(coupon).await?;

        info!(%merchant_id, coupon_id = %created.id, code = %created.code, "coupon created");

        Ok(created)
    }

    /// Apply a partial update to an existing coupon
    pub async fn update_coupon(&self, coupon_id: Uuid, changes: CouponUpdate) -> Result<Coupon> {
        let mut coupon = self
            .coupon_repo
            .find_by_id(coupon_id)
            .await?
            .ok_or_else(|| AppError::not_found("Coupon"))?;

        let code_taken = match &changes.code {
            Some(code) => {
                self.coupon_repo
                    .exists_with_code(coupon.merchant_id, code, Some(coupon.id))
                    .await?
            }
            None => false,
        };

        // the deactivation lock only matters when active flips off
        let has_pending_invoices = if changes.active == Some(false) && coupon.active {
            self.invoice_repo.pending_exists_for_coupon(coupon.id).await?
        } else {
            false
        };

        // exclude the coupon's own prior state from the cap count
        let mut active_count = self.coupon_repo.active_count(coupon.merchant_id).await?;
        if coupon.active {
            active_count = active_count.saturating_sub(1);
        }

        let ctx = UpdateContext {
            active_count,
            code_taken,
            has_pending_invoices,
        };

        if let Err(err) = self.eligibility.validate_for_update(&coupon, &changes, ctx) {
            warn!(%coupon_id, %err, "coupon update rejected");
            return Err(err);
        }

        coupon.apply_update(changes);
        let updated = self.coupon_repo.update(coupon).await?;

        info!(coupon_id = %updated.id, active = updated.active, "coupon updated");

        Ok(updated)
    }

    /// Get a coupon by ID
    pub async fn get_coupon(&self, coupon_id: Uuid) -> Result<Coupon> {
        self.coupon_repo
            .find_by_id(coupon_id)
            .await?
            .ok_or_else(|| AppError::not_found("Coupon"))
    }

    /// List a merchant's coupons, optionally narrowed to active/inactive
    pub async fn list_coupons(
        &self,
        merchant_id: Uuid,
        filter: CouponStatusFilter,
    ) -> Result<Vec<Coupon>> {
        self.coupon_repo.list_for_merchant(merchant_id, filter).await
    }

    /// Number of invoices referencing the coupon, in any status
    pub async fn usage_count(&self, coupon_id: Uuid) -> Result<u64> {
        // existence check keeps a missing coupon distinguishable from an
        // unused one
        self.get_coupon(coupon_id).await?;
        self.coupon_repo.usage_count(coupon_id).await
    }
}
