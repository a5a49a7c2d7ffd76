//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations exactly; Diesel
//! uses them for compile-time query validation and type-safe SQL.

diesel::table! {
    /// User accounts table.
    users (id) {
        /// Primary key, assigned by SQLite.
        id -> Integer,
        /// Unique login name.
        username -> Text,
        /// Salted password hash (PHC string).
        password -> Text,
    }
}

diesel::table! {
    /// Catalog items table.
    items (id) {
        /// Primary key, assigned by SQLite.
        id -> Integer,
        name -> Text,
        price -> Double,
        size -> Text,
        weight -> Double,
        color -> Text,
    }
}
