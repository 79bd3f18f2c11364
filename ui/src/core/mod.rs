//! Platform-agnostic building blocks shared by every page behavior.

pub mod config;
pub mod error;
pub mod page;
pub mod platform;
pub mod schedule;
pub mod timing;
