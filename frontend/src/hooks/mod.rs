pub mod use_week_schedule;
