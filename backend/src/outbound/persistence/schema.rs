//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Trailer assets.
    ///
    /// `unit_number` and `vin` carry unique indexes; categorical columns hold
    /// the wire form of the matching domain enum.
    trailers (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Fleet-facing identifier such as `TR1234`.
        unit_number -> Text,
        trailer_type -> Text,
        status -> Text,
        ownership_type -> Text,
        /// Normalized 17-character VIN.
        vin -> Nullable<Text>,
        year -> Nullable<Int4>,
        color -> Nullable<Text>,
        /// Feet.
        length -> Nullable<Float8>,
        /// Inches.
        width -> Nullable<Float8>,
        /// Inches.
        height -> Nullable<Float8>,
        /// Pounds.
        capacity -> Nullable<Int4>,
        axle_count -> Nullable<Int2>,
        purchase_date -> Nullable<Date>,
        lease_end_date -> Nullable<Date>,
        purchase_price -> Nullable<Float8>,
        license_plate -> Nullable<Text>,
        issuing_state -> Nullable<Text>,
        registration_expiry -> Nullable<Date>,
        insurance_policy -> Nullable<Text>,
        insurance_expiry -> Nullable<Date>,
        jurisdiction -> Nullable<Text>,
        gvwr -> Nullable<Int4>,
        assigned_yard -> Nullable<Text>,
        current_location -> Nullable<Text>,
        attached_truck_id -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
