pub mod seed;
pub mod types;
