pub mod current_payload;
pub mod error;
pub mod forecast_payload;
