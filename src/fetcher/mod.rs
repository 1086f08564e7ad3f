pub mod error;
pub mod open_weather;
pub mod source;
