use async_trait::async_trait;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::invoices::models::{Invoice, InvoiceItem, Item};

/// Persistence port for invoices and their lines
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>>;

    /// All lines of an invoice, in insertion order
    async fn line_items(&self, invoice_id: Uuid) -> Result<Vec<InvoiceItem>>;

    /// True when any invoice with status pending references the coupon
    async fn pending_exists_for_coupon(&self, coupon_id: Uuid) -> Result<bool>;
}

/// Item catalog lookup port
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Resolve an item by id; a dangling reference resolves to None and
    /// the caller treats its contribution as zero
    async fn resolve(&self, item_id: Uuid) -> Result<Option<Item>>;
}
