pub mod metrics;
pub mod sanitize;
pub mod wrap;
