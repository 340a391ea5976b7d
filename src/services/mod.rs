pub mod metrics;
pub mod records;

pub use records::*;
