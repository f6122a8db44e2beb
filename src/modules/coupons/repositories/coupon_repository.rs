use async_trait::async_trait;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::coupons::models::{Coupon, CouponStatusFilter};

/// Persistence port for coupons.
///
/// Implementations must serialize the active-count read and the subsequent
/// insert/update per merchant (row lock or serializable transaction over
/// the merchant's coupon set); two concurrent creates may otherwise both
/// observe four active coupons and break the active cap.
#[async_trait]
pub trait CouponRepository: Send + Sync {
    async fn insert(&self, coupon: Coupon) -> Result<Coupon>;

    async fn update(&self, coupon: Coupon) -> Result<Coupon>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Coupon>>;

    /// All coupons owned by the merchant, narrowed by the status filter
    async fn list_for_merchant(
        &self,
        merchant_id: Uuid,
        filter: CouponStatusFilter,
    ) -> Result<Vec<Coupon>>;

    /// Number of coupons with active=true owned by the merchant
    async fn active_count(&self, merchant_id: Uuid) -> Result<u32>;

    /// Case-sensitive code lookup within one merchant's coupon set,
    /// optionally excluding one coupon (the record being updated)
    async fn exists_with_code(
        &self,
        merchant_id: Uuid,
        code: &str,
        excluding: Option<Uuid>,
    ) -> Result<bool>;

    /// Count of all invoices referencing the coupon, regardless of status
    async fn usage_count(&self, coupon_id: Uuid) -> Result<u64>;
}
