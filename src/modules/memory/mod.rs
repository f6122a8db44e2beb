// In-memory persistence adapter
//
// Backs the integration tests and any wiring that does not need a real
// database. One store implements all three ports so usage counts and the
// pending-invoice lock can see the invoices that reference a coupon.
//
// The store serializes every operation behind a single mutex, which also
// satisfies the CouponRepository contract: a count-then-write sequence
// from the service layer can race here only between calls, and the tests
// drive the service sequentially.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::coupons::models::{Coupon, CouponStatusFilter};
use crate::modules::coupons::repositories::CouponRepository;
use crate::modules::invoices::models::{Invoice, InvoiceItem, Item};
use crate::modules::invoices::repositories::{InvoiceRepository, ItemRepository};

#[derive(Debug, Default)]
struct Inner {
    coupons: Vec<Coupon>,
    invoices: Vec<Invoice>,
    invoice_items: Vec<InvoiceItem>,
    items: HashMap<Uuid, Item>,
}

/// Shared in-memory store implementing every persistence port
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Fixture helpers for invoice-side data; coupons go through the
    // CouponRepository port.

    pub fn add_item(&self, item: Item) {
        self.inner.lock().unwrap().items.insert(item.id, item);
    }

    pub fn add_invoice(&self, invoice: Invoice) {
        self.inner.lock().unwrap().invoices.push(invoice);
    }

    pub fn add_invoice_item(&self, line: InvoiceItem) {
        self.inner.lock().unwrap().invoice_items.push(line);
    }

    pub fn remove_item(&self, item_id: Uuid) {
        self.inner.lock().unwrap().items.remove(&item_id);
    }
}

#[async_trait]
impl CouponRepository for MemoryStore {
    async fn insert(&self, coupon: Coupon) -> Result<Coupon> {
        let mut inner = self.inner.lock().unwrap();
        inner.coupons.push(coupon.clone());
        Ok(coupon)
    }

    async fn update(&self, coupon: Coupon) -> Result<Coupon> {
        let mut inner = self.inner.lock().unwrap();
        let slot = inner
            .coupons
            .iter_mut()
            .find(|c| c.id == coupon.id)
            .ok_or_else(|| AppError::not_found("Coupon"))?;
        *slot = coupon.clone();
        Ok(coupon)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Coupon>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.coupons.iter().find(|c| c.id == id).cloned())
    }

    async fn list_for_merchant(
        &self,
        merchant_id: Uuid,
        filter: CouponStatusFilter,
    ) -> Result<Vec<Coupon>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .coupons
            .iter()
            .filter(|c| c.merchant_id == merchant_id && c.matches_filter(filter))
            .cloned()
            .collect())
    }

    async fn active_count(&self, merchant_id: Uuid) -> Result<u32> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .coupons
            .iter()
            .filter(|c| c.merchant_id == merchant_id && c.active)
            .count() as u32)
    }

    async fn exists_with_code(
        &self,
        merchant_id: Uuid,
        code: &str,
        excluding: Option<Uuid>,
    ) -> Result<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.coupons.iter().any(|c| {
            c.merchant_id == merchant_id && c.code == code && Some(c.id) != excluding
        }))
    }

    async fn usage_count(&self, coupon_id: Uuid) -> Result<u64> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .invoices
            .iter()
            .filter(|i| i.coupon_id == Some(coupon_id))
            .count() as u64)
    }
}

#[async_trait]
impl InvoiceRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.invoices.iter().find(|i| i.id == id).cloned())
    }

    async fn line_items(&self, invoice_id: Uuid) -> Result<Vec<InvoiceItem>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .invoice_items
            .iter()
            .filter(|line| line.invoice_id == invoice_id)
            .cloned()
            .collect())
    }

    async fn pending_exists_for_coupon(&self, coupon_id: Uuid) -> Result<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .invoices
            .iter()
            .any(|i| i.coupon_id == Some(coupon_id) && i.is_pending()))
    }
}

#[async_trait]
impl ItemRepository for MemoryStore {
    async fn resolve(&self, item_id: Uuid) -> Result<Option<Item>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.items.get(&item_id).cloned())
    }
}
