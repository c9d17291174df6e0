//! HTTP request handlers

pub mod assets;
pub mod health;
pub mod snapshot;
pub mod tax;
pub mod weather;
