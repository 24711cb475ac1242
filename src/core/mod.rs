pub mod engine;
pub mod hash;
pub mod modes;
pub mod types;
