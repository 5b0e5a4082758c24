//! # Plexdi commission lifecycle
//!
//! Orchestrates the store and the notification dispatcher:
//! - validation happens before any persistence
//! - the store result alone decides the caller-visible outcome
//! - notification work is spawned afterwards and never awaited by the caller

mod controller;
mod error;
mod notices;

pub use controller::*;
pub use error::*;
