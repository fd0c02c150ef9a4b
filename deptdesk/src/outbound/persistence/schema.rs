//! Diesel table definitions for the SQLite store.
//!
//! These must match `migrations/` exactly. A pre-existing store file may
//! leave every `departments` column except `id` unset, so they are all
//! nullable here and the repository decides how to read `NULL`.

diesel::table! {
    /// Login accounts, compared verbatim. The application never writes here.
    users (uname) {
        /// Username, case-sensitive.
        uname -> Text,
        /// Plaintext password.
        pwd -> Text,
    }
}

diesel::table! {
    /// Department records shown in the list view.
    departments (id) {
        /// Primary key; SQLite assigns it when an insert omits it. Read as
        /// 64-bit because SQLite rowids are, and narrowed by the repository.
        id -> BigInt,
        /// Owning school id.
        sch_id -> Nullable<Integer>,
        /// Department code within the school.
        dept_code -> Nullable<Integer>,
        /// Display name.
        dept_name -> Nullable<Text>,
        /// Optional location.
        dept_location -> Nullable<Text>,
        /// Optional contact email.
        dept_email -> Nullable<Text>,
    }
}
