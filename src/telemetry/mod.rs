pub mod feed;
pub mod simulator;
pub mod ticker;

pub use ticker::use_telemetry;
