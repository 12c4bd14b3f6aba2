pub mod colouring;
pub mod escape_time;
pub mod recurrence;
