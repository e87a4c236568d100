pub mod health;
pub mod me;
pub mod time_ranges;
