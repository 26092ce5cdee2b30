pub mod aggregate;
pub mod exec;
pub mod extract;

pub use aggregate::{format_duration, total_duration};
pub use exec::exec;
pub use extract::extract_intervals;
