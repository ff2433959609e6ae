//! Browser services

pub mod provider;
pub mod timer;
