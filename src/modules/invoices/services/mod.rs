pub mod discount_calculator;
pub mod invoice_service;

pub use discount_calculator::{DiscountCalculator, ResolvedLine};
pub use invoice_service::InvoiceService;
