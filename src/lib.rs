//! Couponly merchant coupon engine
//!
//! This library provides coupon eligibility validation and invoice discount
//! calculation for a multi-merchant storefront. Persistence and HTTP are
//! consumed through the repository ports in each module.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::coupons;
pub use modules::invoices;
