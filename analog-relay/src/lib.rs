// Copyright © 2026 the analog-relay authors

//! analog-relay - a node where standard analog out 0 is sent to standard
//! analog out 1.
//!
//! The node subscribes to the controllers analog I/O status topic and
//! forwards the reading of the source channel to a different output channel
//! via the set-output endpoint, one command per inbound state.

/// The analog I/O vocabulary
pub mod msg;
/// The relay core
pub mod relay;
