pub mod clock_frame;
pub mod current_conditions;
pub mod forecast_record;
pub mod projections;
