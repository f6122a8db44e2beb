// Coupons module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Coupon, CouponStatusFilter, CouponUpdate, DiscountType, NewCoupon};
pub use repositories::CouponRepository;
pub use services::{CouponEligibility, CouponService};
