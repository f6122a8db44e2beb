// Coupon eligibility rules
//
// Pure decision logic: every persisted fact the rules depend on (active
// coupon count, code collisions, pending invoices) arrives in a context
// struct queried by the caller. The validator itself never touches
// storage, which keeps the rules unit-testable and leaves transactional
// placement of the count-then-write sequence to the service layer.

use crate::core::{AppError, Result};
use crate::modules::coupons::models::coupon::{validate_code, validate_discount, validate_name};
use crate::modules::coupons::models::{Coupon, CouponUpdate, NewCoupon};

/// Persisted facts needed to judge a coupon creation
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateContext {
    /// Active coupons the merchant currently owns (candidate excluded)
    pub active_count: u32,
    /// Another coupon of this merchant already uses the candidate's code
    pub code_taken: bool,
}

/// Persisted facts needed to judge a coupon update
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateContext {
    /// Active coupons the merchant owns, excluding the coupon being
    /// updated; makes re-saving an already-active coupon idempotent
    pub active_count: u32,
    /// The proposed code collides with a sibling coupon's code
    pub code_taken: bool,
    /// At least one invoice referencing this coupon has status pending
    pub has_pending_invoices: bool,
}

/// Gates coupon creation and the active→inactive transition
#[derive(Debug, Clone, Copy)]
pub struct CouponEligibility {
    max_active: u32,
}

impl CouponEligibility {
    pub fn new(max_active: u32) -> Self {
        Self { max_active }
    }

    /// Judge a creation candidate against field rules and merchant state.
    ///
    /// The active cap counts persisted coupons only; the candidate itself
    /// is not part of `ctx.active_count`.
    pub fn validate_for_create(&self, candidate: &NewCoupon, ctx: CreateContext) -> Result<()> {
        validate_name(&candidate.name)?;
        validate_code(&candidate.code)?;
        validate_discount(candidate.discount_type, candidate.discount_value)?;

        if ctx.code_taken {
            return Err(AppError::duplicate_code(candidate.code.clone()));
        }

        if candidate.active && ctx.active_count >= self.max_active {
            return Err(AppError::ActiveLimitExceeded {
                limit: self.max_active,
            });
        }

        Ok(())
    }

    /// Judge a partial update against field rules, the active cap, and the
    /// pending-invoice deactivation lock.
    pub fn validate_for_update(
        &self,
        existing: &Coupon,
        changes: &CouponUpdate,
        ctx: UpdateContext,
    ) -> Result<()> {
        if let Some(name) = &changes.name {
            validate_name(name)?;
        }
        if let Some(code) = &changes.code {
            validate_code(code)?;
        }
        if changes.discount_value.is_some() || changes.discount_type.is_some() {
            validate_discount(
                changes.effective_discount_type(existing),
                changes.effective_discount_value(existing),
            )?;
        }

        if let Some(code) = &changes.code {
            if ctx.code_taken {
                return Err(AppError::duplicate_code(code.clone()));
            }
        }

        match changes.active {
            // turning active on is what can breach the cap
            Some(true) if !existing.active && ctx.active_count >= self.max_active => {
                Err(AppError::ActiveLimitExceeded {
                    limit: self.max_active,
                })
            }
            // deactivation is locked while pending invoices reference us
            Some(false) if existing.active && ctx.has_pending_invoices => {
                Err(AppError::PendingInvoiceBlocksDeactivation)
            }
            _ => Ok(()),
        }
    }
}

impl Default for CouponEligibility {
    fn default() -> Self {
        Self::new(crate::config::PolicyConfig::default().max_active_coupons)
    }
}
