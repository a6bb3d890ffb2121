// Copyright © 2026 the analog-relay authors

//! relay-com implements the communication capabilities over zenoh.
//!

/// the communicator
pub mod communicator;
/// Modules errors
pub mod error;
/// the fire-and-forget querier
pub mod querier;
/// the subscriber
pub mod subscriber;

// flatten
pub use communicator::Communicator;
pub use querier::{wait_for_endpoint, Querier};
pub use subscriber::Subscriber;
