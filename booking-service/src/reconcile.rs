//! Scheduled reconciliation: the no-show sweep and periodic calendar
//! generation, each running on its own tokio interval.

use std::time::Duration;

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use tokio::time;
use tracing::{error, info, warn};
use uuid::Uuid;

use shared::{BookingError, BookingStatus, Result};

use crate::activity;
use crate::availability;
use crate::models::Booking;
use crate::orchestrator::DbPool;
use crate::schema::bookings;

#[derive(Debug, Default)]
pub struct SweepReport {
    pub marked: usize,
    pub skipped: usize,
}

pub struct Reconciler {
    pool: DbPool,
    sweep_interval: Duration,
    calendar_interval: Duration,
    months_ahead: u32,
}

impl Reconciler {
    pub fn new(
        pool: DbPool,
        sweep_interval: Duration,
        calendar_interval: Duration,
        months_ahead: u32,
    ) -> Self {
        Self {
            pool,
            sweep_interval,
            calendar_interval,
            months_ahead,
        }
    }

    pub async fn run_no_show_sweep(&self) {
        let mut interval = time::interval(self.sweep_interval);
        loop {
            interval.tick().await;
            if let Err(e) = self.mark_no_shows().await {
                error!("no-show sweep failed: {e}");
            }
        }
    }

    pub async fn run_calendar(&self) {
        let mut interval = time::interval(self.calendar_interval);
        loop {
            interval.tick().await;
            if let Err(e) = self.generate_calendar().await {
                error!("calendar generation failed: {e}");
            }
        }
    }

    /// Flip every booking whose check-in date has passed and which never
    /// left `pending_payment` to `no-show`. Each booking gets its own
    /// transaction so one bad row cannot abort the rest of the sweep.
    pub async fn mark_no_shows(&self) -> Result<SweepReport> {
        let mut conn = self.pool.get().await.map_err(BookingError::pool)?;
        let today = Utc::now().date_naive();

        let stale: Vec<Booking> = bookings::table
            .filter(bookings::check_in_date.lt(today))
            .filter(bookings::status.eq(BookingStatus::PendingPayment.as_str()))
            .load(&mut conn)
            .await?;

        let mut report = SweepReport::default();
        for booking in stale {
            match Self::mark_one(&mut conn, booking.id).await {
                Ok(true) => report.marked += 1,
                // resolved by a payment callback or cancellation since the scan
                Ok(false) => {}
                Err(e) => {
                    warn!(booking_id = %booking.id, "skipping no-show candidate: {e}");
                    report.skipped += 1;
                }
            }
        }

        info!(
            marked = report.marked,
            skipped = report.skipped,
            "no-show sweep finished"
        );
        Ok(report)
    }

    async fn mark_one(conn: &mut AsyncPgConnection, booking_id: Uuid) -> Result<bool> {
        conn.transaction::<_, BookingError, _>(|conn| {
            Box::pin(async move {
                let booking: Option<Booking> = bookings::table
                    .filter(bookings::id.eq(booking_id))
                    .for_update()
                    .first(conn)
                    .await
                    .optional()?;
                let Some(booking) = booking else {
                    return Ok(false);
                };

                let current = booking.status()?;
                if current != BookingStatus::PendingPayment {
                    return Ok(false);
                }

                let next = current.transition(BookingStatus::NoShow, "mark no-show")?;
                diesel::update(bookings::table.filter(bookings::id.eq(booking_id)))
                    .set((
                        bookings::status.eq(next.as_str()),
                        bookings::updated_at.eq(Utc::now()),
                    ))
                    .execute(conn)
                    .await?;
                activity::record(conn, None, "auto mark no-show", "bookings", booking_id).await?;
                Ok(true)
            })
        })
        .await
    }

    pub async fn generate_calendar(&self) -> Result<usize> {
        let mut conn = self.pool.get().await.map_err(BookingError::pool)?;
        availability::generate_calendar(&mut conn, self.months_ahead).await
    }
}
