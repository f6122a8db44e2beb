mod invoice;
mod invoice_item;
mod item;

pub use invoice::{Invoice, InvoiceStatus};
pub use invoice_item::InvoiceItem;
pub use item::Item;
