// src/lib.rs

pub mod cli;
pub mod core;
pub mod words;

pub use crate::core::engine::NameEngine;
