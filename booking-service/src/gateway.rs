//! Payment gateway collaborator. The orchestrator only ever sees the
//! `PaymentGateway` trait; the Snap-style HTTP client below is the
//! production implementation. Every call is a remote round-trip that may
//! fail or time out, and a timeout is treated exactly like a failure.

use std::time::Duration;

use async_trait::async_trait;
use num_traits::ToPrimitive;
use serde::Deserialize;
use sha2::{Digest, Sha512};
use tracing::warn;

use shared::{BookingError, ChargeRequest, PaymentNotification, Result};

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a gateway transaction for the booking and return the opaque
    /// payment token the client uses to complete payment.
    async fn create_transaction(&self, request: &ChargeRequest) -> Result<String>;

    /// Check the signature of an incoming payment notification.
    fn verify_callback_signature(&self, notification: &PaymentNotification) -> bool;
}

pub struct SnapGateway {
    client: reqwest::Client,
    base_url: String,
    server_key: String,
}

#[derive(Debug, Deserialize)]
struct SnapResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct SnapErrorBody {
    message: Option<String>,
}

impl SnapGateway {
    pub fn new(base_url: String, server_key: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(BookingError::gateway)?;
        Ok(Self {
            client,
            base_url,
            server_key,
        })
    }

    /// sha512(order_id + status_code + gross_amount + server_key), hex.
    fn expected_signature(&self, notification: &PaymentNotification) -> String {
        let mut hasher = Sha512::new();
        hasher.update(notification.order_id.to_string());
        hasher.update(&notification.status_code);
        hasher.update(&notification.gross_amount);
        hasher.update(&self.server_key);
        hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }
}

/// Snap charge payload. All monetary fields cross the wire as f64, and a
/// value that does not survive the conversion fails the charge instead of
/// being sent as something else.
fn charge_payload(request: &ChargeRequest) -> Result<serde_json::Value> {
    let gross_amount = request
        .gross_amount
        .to_f64()
        .ok_or_else(|| BookingError::gateway("gross amount is not representable"))?;

    let item_details = request
        .item_details
        .iter()
        .map(|item| {
            let price = item
                .price
                .to_f64()
                .ok_or_else(|| BookingError::gateway("item price is not representable"))?;
            Ok(serde_json::json!({
                "id": item.id,
                "price": price,
                "quantity": item.quantity,
                "name": item.name,
            }))
        })
        .collect::<Result<Vec<serde_json::Value>>>()?;

    Ok(serde_json::json!({
        "transaction_details": {
            "order_id": request.order_id,
            "gross_amount": gross_amount,
        },
        "item_details": item_details,
        "customer_details": {
            "first_name": request.customer_details.first_name,
            "email": request.customer_details.email,
            "phone": request.customer_details.phone,
        },
    }))
}

#[async_trait]
impl PaymentGateway for SnapGateway {
    async fn create_transaction(&self, request: &ChargeRequest) -> Result<String> {
        let payload = charge_payload(request)?;

        let response = self
            .client
            .post(&self.base_url)
            .basic_auth(&self.server_key, Some(""))
            .json(&payload)
            .send()
            .await
            .map_err(BookingError::gateway)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<SnapErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "no error detail".to_string());
            return Err(BookingError::Gateway(format!(
                "gateway returned {status}: {message}"
            )));
        }

        let body: SnapResponse = response.json().await.map_err(BookingError::gateway)?;
        Ok(body.token)
    }

    fn verify_callback_signature(&self, notification: &PaymentNotification) -> bool {
        let expected = self.expected_signature(notification);
        let ok = expected.eq_ignore_ascii_case(&notification.signature_key);
        if !ok {
            warn!(order_id = %notification.order_id, "payment callback signature mismatch");
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn gateway() -> SnapGateway {
        SnapGateway::new(
            "https://app.sandbox.example/snap/v1/transactions".into(),
            "server-key".into(),
            Duration::from_secs(10),
        )
        .unwrap()
    }

    fn notification(order_id: Uuid, signature_key: String) -> PaymentNotification {
        PaymentNotification {
            order_id,
            transaction_status: "settlement".into(),
            fraud_status: None,
            status_code: "200".into(),
            gross_amount: "200.00".into(),
            signature_key,
        }
    }

    #[test]
    fn accepts_correctly_signed_callback() {
        let gw = gateway();
        let order_id = Uuid::new_v4();
        let mut hasher = Sha512::new();
        hasher.update(order_id.to_string());
        hasher.update("200");
        hasher.update("200.00");
        hasher.update("server-key");
        let signature: String = hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02X}"))
            .collect();

        // uppercase hex from the gateway still verifies
        assert!(gw.verify_callback_signature(&notification(order_id, signature)));
    }

    #[test]
    fn charge_payload_carries_exact_item_price() {
        use bigdecimal::BigDecimal;
        use shared::{CustomerDetails, ItemDetails};
        use std::str::FromStr;

        let room_id = Uuid::new_v4();
        let request = ChargeRequest {
            order_id: Uuid::new_v4(),
            gross_amount: BigDecimal::from_str("501.0").unwrap(),
            customer_details: CustomerDetails {
                first_name: "Ayu".into(),
                email: "ayu@example.com".into(),
                phone: "0812".into(),
            },
            item_details: vec![ItemDetails {
                id: room_id,
                price: BigDecimal::from_str("250.5").unwrap(),
                quantity: 2,
                name: "Deluxe".into(),
            }],
        };

        let payload = charge_payload(&request).unwrap();
        assert_eq!(
            payload["transaction_details"]["gross_amount"],
            serde_json::json!(501.0)
        );
        assert_eq!(payload["item_details"][0]["price"], serde_json::json!(250.5));
        assert_eq!(payload["item_details"][0]["quantity"], serde_json::json!(2));
    }

    #[test]
    fn rejects_tampered_callback() {
        let gw = gateway();
        let order_id = Uuid::new_v4();
        let signature = gw.expected_signature(&notification(order_id, String::new()));

        let mut tampered = notification(order_id, signature);
        tampered.gross_amount = "999999.00".into();
        assert!(!gw.verify_callback_signature(&tampered));
    }
}
