// Invoice total flows over the in-memory store
//
// Covers the marketplace case: one invoice spanning two merchants' items,
// with a coupon that only ever discounts its own merchant's share.

use std::sync::Arc;

use couponly::config::PolicyConfig;
use couponly::coupons::models::{DiscountType, NewCoupon};
use couponly::coupons::services::CouponService;
use couponly::invoices::models::{Invoice, InvoiceItem, InvoiceStatus, Item};
use couponly::invoices::services::InvoiceService;
use couponly::modules::memory::MemoryStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

struct Fixture {
    store: Arc<MemoryStore>,
    coupons: CouponService,
    invoices: InvoiceService,
}

fn fixture() -> Fixture {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let store = Arc::new(MemoryStore::new());
    Fixture {
        coupons: CouponService::new(store.clone(), store.clone(), PolicyConfig::default()),
        invoices: InvoiceService::new(store.clone(), store.clone(), store.clone()),
        store,
    }
}

fn add_line(store: &MemoryStore, invoice_id: Uuid, merchant_id: Uuid, price: Decimal, quantity: i64) -> Item {
    let item = Item::new(merchant_id, "Item".to_string(), price).unwrap();
    store.add_item(item.clone());
    store.add_invoice_item(InvoiceItem::new(invoice_id, item.id, quantity).unwrap());
    item
}

#[tokio::test]
async fn coupon_discounts_only_its_merchants_share() {
    let fx = fixture();
    let merchant = Uuid::new_v4();
    let other = Uuid::new_v4();

    let coupon = fx
        .coupons
        .create_coupon(
            merchant,
            NewCoupon {
                name: "Twenty Off".to_string(),
                code: "TWENTY".to_string(),
                discount_value: dec!(20),
                discount_type: DiscountType::Percent,
                active: true,
            },
        )
        .await
        .unwrap();

    let invoice = Invoice::new(
        Uuid::new_v4(),
        merchant,
        Some(coupon.id),
        InvoiceStatus::Pending,
    );
    let invoice_id = invoice.id;
    fx.store.add_invoice(invoice);

    // 100×2 + 50×3 = 350 for the coupon's merchant
    add_line(&fx.store, invoice_id, merchant, dec!(100), 2);
    add_line(&fx.store, invoice_id, merchant, dec!(50), 3);
    // another merchant's 80×1 rides on the same invoice
    add_line(&fx.store, invoice_id, other, dec!(80), 1);

    assert_eq!(
        fx.invoices
            .subtotal_for_merchant(invoice_id, merchant)
            .await
            .unwrap(),
        dec!(350)
    );

    // 350 at 20% off
    assert_eq!(
        fx.invoices
            .total_for_merchant(invoice_id, merchant)
            .await
            .unwrap(),
        dec!(280)
    );

    // the other merchant's share is untouched by the coupon
    assert_eq!(
        fx.invoices
            .total_for_merchant(invoice_id, other)
            .await
            .unwrap(),
        dec!(80)
    );
}

#[tokio::test]
async fn dollar_coupon_clamps_the_merchant_total() {
    let fx = fixture();
    let merchant = Uuid::new_v4();

    let coupon = fx
        .coupons
        .create_coupon(
            merchant,
            NewCoupon {
                name: "Big Dollar".to_string(),
                code: "BIGDOLLAR".to_string(),
                discount_value: dec!(150),
                discount_type: DiscountType::Dollar,
                active: true,
            },
        )
        .await
        .unwrap();

    let invoice = Invoice::new(
        Uuid::new_v4(),
        merchant,
        Some(coupon.id),
        InvoiceStatus::Packaged,
    );
    let invoice_id = invoice.id;
    fx.store.add_invoice(invoice);

    add_line(&fx.store, invoice_id, merchant, dec!(100), 1);

    // 150 off a 100 subtotal clamps to zero
    assert_eq!(
        fx.invoices
            .total_for_merchant(invoice_id, merchant)
            .await
            .unwrap(),
        Decimal::ZERO
    );
}

#[tokio::test]
async fn dangling_item_reference_contributes_nothing() {
    let fx = fixture();
    let merchant = Uuid::new_v4();

    let invoice = Invoice::new(Uuid::new_v4(), merchant, None, InvoiceStatus::Shipped);
    let invoice_id = invoice.id;
    fx.store.add_invoice(invoice);

    add_line(&fx.store, invoice_id, merchant, dec!(40), 2);
    let removed = add_line(&fx.store, invoice_id, merchant, dec!(500), 3);
    fx.store.remove_item(removed.id);

    // the deleted item's lines resolve to nothing instead of failing
    assert_eq!(
        fx.invoices
            .total_for_merchant(invoice_id, merchant)
            .await
            .unwrap(),
        dec!(80)
    );
}

#[tokio::test]
async fn dangling_coupon_reference_means_no_discount() {
    let fx = fixture();
    let merchant = Uuid::new_v4();

    // coupon id that was never persisted (e.g. the coupon was deleted;
    // invoices keep their weak reference)
    let invoice = Invoice::new(
        Uuid::new_v4(),
        merchant,
        Some(Uuid::new_v4()),
        InvoiceStatus::Shipped,
    );
    let invoice_id = invoice.id;
    fx.store.add_invoice(invoice);

    add_line(&fx.store, invoice_id, merchant, dec!(60), 1);

    assert_eq!(
        fx.invoices
            .total_for_merchant(invoice_id, merchant)
            .await
            .unwrap(),
        dec!(60)
    );
}

#[tokio::test]
async fn missing_invoice_is_a_not_found() {
    let fx = fixture();

    let result = fx
        .invoices
        .total_for_merchant(Uuid::new_v4(), Uuid::new_v4())
        .await;

    assert!(result.is_err());
}
