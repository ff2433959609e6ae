//! Reactive page state

pub mod connection;
