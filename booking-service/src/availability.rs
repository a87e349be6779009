//! Availability Ledger: per-room, per-date remaining-inventory counters.
//!
//! All mutation happens on an explicitly passed connection inside the
//! caller's transaction. `lock_and_quote` takes row locks in ascending
//! date order so that two overlapping bookings of the same room always
//! acquire locks in the same order and cannot deadlock each other.

use chrono::{Months, NaiveDate, Utc};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::info;
use uuid::Uuid;

use shared::{nights_between, quote, stay_dates, BookingError, Quote, Result};

use crate::activity;
use crate::models::{AvailabilityDay, NewAvailabilityDay, Room};
use crate::schema::{room_availability, rooms};

/// Lock every availability row covering `[check_in, check_out)` and return
/// the quote for the stay.
///
/// Fails with `NotFound` when the room does not exist or the calendar has
/// not been generated that far out, and with `Invariant` when any locked
/// day has fewer than `room_count` rooms left.
pub async fn lock_and_quote(
    conn: &mut AsyncPgConnection,
    room_id: Uuid,
    check_in: NaiveDate,
    check_out: NaiveDate,
    room_count: i32,
) -> Result<Quote> {
    let nights = nights_between(check_in, check_out)?;

    let room: Room = rooms::table
        .filter(rooms::id.eq(room_id))
        .first(conn)
        .await
        .optional()?
        .ok_or_else(|| BookingError::not_found(format!("room {room_id}")))?;

    let days: Vec<AvailabilityDay> = room_availability::table
        .filter(room_availability::room_id.eq(room_id))
        .filter(room_availability::date.ge(check_in))
        .filter(room_availability::date.lt(check_out))
        .order(room_availability::date.asc())
        .for_update()
        .load(conn)
        .await?;

    if (days.len() as i64) < nights {
        return Err(BookingError::not_found(format!(
            "availability for room {room_id} between {check_in} and {check_out}"
        )));
    }

    if let Some(day) = days.iter().find(|day| day.available_rooms < room_count) {
        return Err(BookingError::invariant(format!(
            "room unavailable on {}",
            day.date
        )));
    }

    quote(&room.price_per_night, nights, room_count)
}

/// Subtract `room_count` from every date of the stay, guarded so the
/// counter can never go below zero. The first date that cannot satisfy the
/// guard aborts the call; the caller's transaction rollback discards any
/// partial decrement already applied.
pub async fn decrement(
    conn: &mut AsyncPgConnection,
    room_id: Uuid,
    user_id: Option<Uuid>,
    check_in: NaiveDate,
    check_out: NaiveDate,
    room_count: i32,
) -> Result<()> {
    let now = Utc::now();
    for date in stay_dates(check_in, check_out) {
        let day_id: Option<Uuid> = diesel::update(
            room_availability::table
                .filter(room_availability::room_id.eq(room_id))
                .filter(room_availability::date.eq(date))
                .filter(room_availability::available_rooms.ge(room_count)),
        )
        .set((
            room_availability::available_rooms
                .eq(room_availability::available_rooms - room_count),
            room_availability::updated_at.eq(now),
        ))
        .returning(room_availability::id)
        .get_result(conn)
        .await
        .optional()?;

        let day_id = day_id
            .ok_or_else(|| BookingError::invariant(format!("room unavailable on {date}")))?;
        activity::record(conn, user_id, "reduce availability", "room_availability", day_id)
            .await?;
    }
    Ok(())
}

/// Unconditional add-back over the stay, used by cancellation and by the
/// compensating transaction after a gateway failure.
pub async fn increment(
    conn: &mut AsyncPgConnection,
    room_id: Uuid,
    user_id: Option<Uuid>,
    check_in: NaiveDate,
    check_out: NaiveDate,
    room_count: i32,
) -> Result<()> {
    let now = Utc::now();
    for date in stay_dates(check_in, check_out) {
        let day_id: Option<Uuid> = diesel::update(
            room_availability::table
                .filter(room_availability::room_id.eq(room_id))
                .filter(room_availability::date.eq(date)),
        )
        .set((
            room_availability::available_rooms
                .eq(room_availability::available_rooms + room_count),
            room_availability::updated_at.eq(now),
        ))
        .returning(room_availability::id)
        .get_result(conn)
        .await
        .optional()?;

        let day_id = day_id.ok_or_else(|| {
            BookingError::not_found(format!("availability row for room {room_id} on {date}"))
        })?;
        activity::record(conn, user_id, "increase availability", "room_availability", day_id)
            .await?;
    }
    Ok(())
}

/// Extend the calendar window: for every active room and every date in
/// `[today, today + months_ahead]`, insert a row at full capacity unless
/// one already exists. Existing rows carry live decrements and are never
/// overwritten, so the job can run repeatedly.
pub async fn generate_calendar(conn: &mut AsyncPgConnection, months_ahead: u32) -> Result<usize> {
    let today = Utc::now().date_naive();
    let end = today
        .checked_add_months(Months::new(months_ahead))
        .ok_or_else(|| BookingError::invariant("calendar window overflows the date type"))?;

    let active_rooms: Vec<Room> = rooms::table
        .filter(rooms::is_active.eq(true))
        .load(conn)
        .await?;

    let mut inserted = 0;
    for room in &active_rooms {
        let rows: Vec<NewAvailabilityDay> = today
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| NewAvailabilityDay {
                id: Uuid::new_v4(),
                room_id: room.id,
                date,
                available_rooms: room.total_rooms,
            })
            .collect();

        inserted += diesel::insert_into(room_availability::table)
            .values(&rows)
            .on_conflict_do_nothing()
            .execute(conn)
            .await?;
    }

    info!(
        rooms = active_rooms.len(),
        inserted, "availability calendar generated until {end}"
    );
    Ok(inserted)
}
