pub mod coupon_service;
pub mod eligibility;

pub use coupon_service::CouponService;
pub use eligibility::{CouponEligibility, CreateContext, UpdateContext};
