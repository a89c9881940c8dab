//! Small parsing helpers shared by domain types and configuration.

pub mod time_of_day;
