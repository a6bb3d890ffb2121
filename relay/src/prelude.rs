// Copyright © 2026 the analog-relay authors

//! Most commonly used interface of the relay runtime.
//!

// region:    --- modules
pub use crate::node::Node;
pub use relay_com::{Querier, Subscriber};
pub use relay_config::Config;
pub use relay_core::enums::NodeState;
pub use relay_core::error::{RelayError, Result};
pub use relay_core::message_types::{Message, Response};
pub use relay_core::traits::{Capability, Context, ContextAbstraction};
pub use relay_core::utils::init_tracing;
// endregion:  --- modules
