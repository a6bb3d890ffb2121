// Copyright © 2026 the analog-relay authors

//! Core of the analog I/O relay

/// Enums
pub mod enums;
/// Error handling
pub mod error;
/// `Message` and `Response`
pub mod message_types;
/// Traits
pub mod traits;
/// Utilities
pub mod utils;

// flatten
pub use error::Result;
