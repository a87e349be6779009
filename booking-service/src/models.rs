use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::{BookingStatus, CustomerDetails, ItemDetails, PaymentStatus, Result};

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::rooms)]
pub struct Room {
    pub id: Uuid,
    pub room_type: String,
    pub price_per_night: BigDecimal,
    pub total_rooms: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
    pub contact_number: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::room_availability)]
pub struct AvailabilityDay {
    pub id: Uuid,
    pub room_id: Uuid,
    pub date: NaiveDate,
    pub available_rooms: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::room_availability)]
pub struct NewAvailabilityDay {
    pub id: Uuid,
    pub room_id: Uuid,
    pub date: NaiveDate,
    pub available_rooms: i32,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::bookings)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub guest_name: String,
    pub total_guests: i32,
    pub number_of_rooms: i32,
    pub special_request: Option<String>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: BigDecimal,
    pub status: String,
    pub snap_token: Option<String>,
    pub customer_details: serde_json::Value,
    pub item_details: serde_json::Value,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub fn status(&self) -> Result<BookingStatus> {
        BookingStatus::parse(&self.status)
    }

    pub fn customer_details(&self) -> Result<CustomerDetails> {
        Ok(serde_json::from_value(self.customer_details.clone())?)
    }

    pub fn item_details(&self) -> Result<ItemDetails> {
        Ok(serde_json::from_value(self.item_details.clone())?)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBooking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub guest_name: String,
    pub total_guests: i32,
    pub number_of_rooms: i32,
    pub special_request: Option<String>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: BigDecimal,
    pub status: String,
    pub customer_details: serde_json::Value,
    pub item_details: serde_json::Value,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::transactions_records)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub transaction_code: String,
    pub amount: BigDecimal,
    pub payment_status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::transactions_records)]
pub struct NewTransactionRecord {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub transaction_code: String,
    pub amount: BigDecimal,
    pub payment_status: String,
}

impl NewTransactionRecord {
    /// Fresh record for a booking that just received a payment token.
    pub fn unpaid(booking_id: Uuid, amount: BigDecimal) -> Self {
        let suffix: u32 = rand::random::<u32>() % 1_000_000;
        let transaction_code = format!(
            "TRX-{}-{:06}",
            Utc::now().format("%Y%m%d-%H%M%S"),
            suffix
        );
        Self {
            id: Uuid::new_v4(),
            booking_id,
            transaction_code,
            amount,
            payment_status: PaymentStatus::Unpaid.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::active_logs)]
pub struct NewActivityLog {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub target_table: String,
    pub target_id: Uuid,
    pub performed_at: DateTime<Utc>,
}

impl NewActivityLog {
    pub fn new(user_id: Option<Uuid>, action: &str, target_table: &str, target_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            action: action.to_string(),
            target_table: target_table.to_string(),
            target_id,
            performed_at: Utc::now(),
        }
    }
}
