use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Guest contact details snapshotted onto the booking at creation time.
/// Deliberately immutable afterwards, even if the user profile changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub first_name: String,
    pub email: String,
    pub phone: String,
}

/// Line-item snapshot (room type, nightly rate, night count) captured at
/// creation for reuse by the gateway payload and the invoice job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetails {
    pub id: Uuid,
    pub price: BigDecimal,
    pub quantity: i64,
    pub name: String,
}

/// What the orchestrator hands to the payment gateway.
#[derive(Debug, Clone, Serialize)]
pub struct ChargeRequest {
    pub order_id: Uuid,
    pub gross_amount: BigDecimal,
    pub customer_details: CustomerDetails,
    pub item_details: Vec<ItemDetails>,
}

/// At-least-once payment notification delivered by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentNotification {
    pub order_id: Uuid,
    pub transaction_status: String,
    pub fraud_status: Option<String>,
    pub status_code: String,
    pub gross_amount: String,
    pub signature_key: String,
}

/// Fire-and-forget job consumed by the invoice worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceJob {
    pub booking_id: Uuid,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub room_type: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_guests: i32,
    pub number_of_rooms: i32,
    pub price_per_night: BigDecimal,
    pub total_nights: i64,
    pub total_price: BigDecimal,
}
