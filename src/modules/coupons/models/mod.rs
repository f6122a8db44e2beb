pub(crate) mod coupon;

pub use coupon::{Coupon, CouponStatusFilter, CouponUpdate, DiscountType, NewCoupon};
