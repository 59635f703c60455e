//! Diesel schema for garden persistence.

diesel::table! {
    /// Garden state, one row per user.
    garden_states (user_id) {
        /// Owning user identifier.
        user_id -> Uuid,
        /// Number of blocks grown.
        block_count -> Int4,
        /// Death flag, cleared only by replanting.
        is_dead -> Bool,
        /// Date of the latest lifecycle update.
        last_activity -> Date,
        /// Date of the latest block award.
        last_block_award_date -> Nullable<Date>,
    }
}

diesel::table! {
    /// Daily task records.
    task_records (user_id, task_date, name) {
        /// Owning user identifier.
        user_id -> Uuid,
        /// Day the task belongs to.
        task_date -> Date,
        /// Task name, unique per user and day.
        #[max_length = 255]
        name -> Varchar,
        /// Completion count.
        completed -> Int4,
        /// Accumulated focus time in seconds.
        focus_seconds -> Nullable<Int8>,
    }
}
