// Invoices module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Invoice, InvoiceItem, InvoiceStatus, Item};
pub use repositories::{InvoiceRepository, ItemRepository};
pub use services::{DiscountCalculator, InvoiceService};
