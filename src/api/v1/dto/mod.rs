pub mod time_ranges;
pub mod users;
