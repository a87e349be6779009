diesel::table! {
    rooms (id) {
        id -> Uuid,
        room_type -> Varchar,
        price_per_night -> Numeric,
        total_rooms -> Int4,
        is_active -> Bool,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    users (id) {
        id -> Uuid,
        fullname -> Varchar,
        email -> Varchar,
        contact_number -> Varchar,
        created_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    room_availability (id) {
        id -> Uuid,
        room_id -> Uuid,
        date -> Date,
        available_rooms -> Int4,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    bookings (id) {
        id -> Uuid,
        user_id -> Uuid,
        room_id -> Uuid,
        guest_name -> Varchar,
        total_guests -> Int4,
        number_of_rooms -> Int4,
        special_request -> Nullable<Text>,
        check_in_date -> Date,
        check_out_date -> Date,
        total_price -> Numeric,
        status -> Varchar,
        snap_token -> Nullable<Varchar>,
        customer_details -> Jsonb,
        item_details -> Jsonb,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    transactions_records (id) {
        id -> Uuid,
        booking_id -> Uuid,
        transaction_code -> Varchar,
        amount -> Numeric,
        payment_status -> Varchar,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    active_logs (id) {
        id -> Uuid,
        user_id -> Nullable<Uuid>,
        action -> Varchar,
        target_table -> Varchar,
        target_id -> Uuid,
        performed_at -> Timestamptz,
    }
}

diesel::joinable!(room_availability -> rooms (room_id));
diesel::joinable!(bookings -> rooms (room_id));
diesel::joinable!(bookings -> users (user_id));
diesel::joinable!(transactions_records -> bookings (booking_id));

diesel::allow_tables_to_appear_in_same_query!(
    rooms,
    users,
    room_availability,
    bookings,
    transactions_records,
    active_logs,
);
