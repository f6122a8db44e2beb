pub mod coupons;
pub mod invoices;
pub mod memory;
