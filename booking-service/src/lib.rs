//! Hotel booking transaction engine.
//!
//! The orchestrator is the public entry point for creating, cancelling
//! and progressing bookings; the reconciler is the scheduled counterpart
//! run by the binary in `main.rs`. HTTP routing, authentication and the
//! CRUD surfaces around rooms, users and reviews live outside this crate
//! and call in through `orchestrator::BookingOrchestrator`.

pub mod activity;
pub mod availability;
pub mod directory;
pub mod gateway;
pub mod invoice;
pub mod models;
pub mod orchestrator;
pub mod reconcile;
pub mod schema;
