// Copyright © 2026 the analog-relay authors

//! relay - a minimal node runtime bridging a publish/subscribe status stream
//! to a request/response command endpoint.
//!
//! A [`node::Node`] owns a zenoh session, an inbound subscriber and one or
//! more fire-and-forget queriers. The messaging substrate (transport,
//! discovery, delivery policy) is supplied by zenoh and only consumed here.

/// Builders
pub mod builder;
/// Context
pub mod context;
/// Node
pub mod node;
/// Most commonly used interface
pub mod prelude;
