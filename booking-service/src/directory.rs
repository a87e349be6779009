//! Read-only lookups against the user and room catalogs. Both are owned
//! by external CRUD surfaces; the engine only reads the fields it
//! snapshots onto a booking.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use shared::{BookingError, Result};

use crate::models::{Room, User};
use crate::schema::{rooms, users};

pub async fn user_by_id(conn: &mut AsyncPgConnection, user_id: Uuid) -> Result<User> {
    users::table
        .filter(users::id.eq(user_id))
        .first(conn)
        .await
        .optional()?
        .ok_or_else(|| BookingError::not_found(format!("user {user_id}")))
}

pub async fn room_by_id(conn: &mut AsyncPgConnection, room_id: Uuid) -> Result<Room> {
    rooms::table
        .filter(rooms::id.eq(room_id))
        .first(conn)
        .await
        .optional()?
        .ok_or_else(|| BookingError::not_found(format!("room {room_id}")))
}
