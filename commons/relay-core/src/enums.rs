// Copyright © 2026 the analog-relay authors

//! Core enums of the relay
//!

// region:		--- modules
use std::fmt::{Debug, Display};
// endregion:	--- modules

// region:		--- NodeState
/// The states a relay node passes through.
///
/// Transitions are one way only:
/// `Created` → `AwaitingEndpoint` → `Running` → `Stopped`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum NodeState {
	/// Node is constructed but not started
	#[default]
	Created,
	/// Node is blocked until the command endpoint becomes reachable
	AwaitingEndpoint,
	/// Node is relaying
	Running,
	/// Node has shut down
	Stopped,
}

impl Display for NodeState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Created => write!(f, "Created"),
			Self::AwaitingEndpoint => write!(f, "AwaitingEndpoint"),
			Self::Running => write!(f, "Running"),
			Self::Stopped => write!(f, "Stopped"),
		}
	}
}
// endregion:	--- NodeState

// region:		--- TaskSignal
/// Internal signals, used by panic hooks to inform the node that something has happened.
#[derive(Debug, Clone)]
pub enum TaskSignal {
	/// Restart a certain subscriber, identified by its selector
	RestartSubscriber(String),
}
// endregion:	--- TaskSignal

#[cfg(test)]
mod tests {
	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync + Unpin>() {}

	#[test]
	const fn normal_types() {
		is_normal::<NodeState>();
		is_normal::<TaskSignal>();
	}

	#[test]
	fn state_display() {
		assert_eq!(NodeState::default().to_string(), "Created");
		assert_eq!(NodeState::AwaitingEndpoint.to_string(), "AwaitingEndpoint");
		assert_eq!(NodeState::Running.to_string(), "Running");
		assert_eq!(NodeState::Stopped.to_string(), "Stopped");
	}
}
