//! Invoice job producer. Fire-and-forget with at-least-once delivery; a
//! separate worker renders and stores the PDF. Enqueue failures are
//! surfaced to the caller, which logs them without failing the booking.

use std::time::Duration;

use rdkafka::producer::{FutureProducer, FutureRecord};
use tracing::info;

use shared::{BookingError, InvoiceJob, Result};

pub struct InvoiceQueue {
    producer: FutureProducer,
    topic: String,
}

impl InvoiceQueue {
    pub fn new(producer: FutureProducer, topic: String) -> Self {
        Self { producer, topic }
    }

    pub async fn enqueue(&self, job: &InvoiceJob) -> Result<()> {
        let json = serde_json::to_string(job)?;
        let key = job.booking_id.to_string();
        let record = FutureRecord::to(&self.topic).payload(&json).key(&key);

        self.producer
            .send(record, Duration::from_secs(5))
            .await
            .map_err(|(e, _)| BookingError::Queue(e.to_string()))?;

        info!(booking_id = %job.booking_id, "invoice job enqueued");
        Ok(())
    }
}
