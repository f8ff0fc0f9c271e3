pub mod activity_record;
pub mod listing_row;
