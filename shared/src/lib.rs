//! Domain vocabulary shared between the booking engine and its consumers:
//! status enums, the error taxonomy, the pure quote calculator, stay-date
//! helpers and the wire payloads exchanged with the payment gateway and
//! the invoice queue.

mod dates;
mod error;
mod payloads;
mod pricing;
mod status;

pub use dates::{nights_between, stay_dates};
pub use error::{BookingError, Result};
pub use payloads::{ChargeRequest, CustomerDetails, InvoiceJob, ItemDetails, PaymentNotification};
pub use pricing::{quote, Quote};
pub use status::{BookingStatus, PaymentStatus};
