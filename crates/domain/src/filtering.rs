pub mod filters;
pub mod interval;
pub mod period;

pub use filters::Filters;
pub use interval::Interval;
pub use period::{Period, bounds};
