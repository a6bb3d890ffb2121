// Copyright © 2026 the analog-relay authors

//! Core traits of the relay
//!

// region:		--- modules
use crate::{
	enums::{NodeState, TaskSignal},
	error::Result,
	message_types::Message,
};
use std::{
	fmt::Debug,
	sync::{Arc, RwLockReadGuard, RwLockWriteGuard},
};
use tokio::sync::mpsc::Sender;
use zenoh::Session;
// endregion:	--- modules

// region:		--- Context
/// Typedef for simplified usage
pub type Context<P> = Arc<dyn ContextAbstraction<P>>;

/// Commonalities for the context handed into callbacks.
///
/// Next to the accessors it provides [`submit`](ContextAbstraction::submit),
/// the fire-and-forget seam towards the command endpoint. The inbound seam is
/// the subscriber capability delivering [`Message`]s into the callbacks.
pub trait ContextAbstraction<P>: Debug + Send + Sync {
	/// Get the uuid of the node
	#[must_use]
	fn uuid(&self) -> String;

	/// Get the scope under which all selectors of the node are resolved
	#[must_use]
	fn scope(&self) -> Option<&String>;

	/// Get the zenoh session reference
	#[must_use]
	fn session(&self) -> Arc<Session>;

	/// Get the task signal sender reference
	#[must_use]
	fn sender(&self) -> &Sender<TaskSignal>;

	/// Gives read access to the properties
	///
	/// # Errors
	fn read(&self) -> Result<RwLockReadGuard<'_, P>>;

	/// Gives write access to the properties
	///
	/// # Errors
	fn write(&self) -> Result<RwLockWriteGuard<'_, P>>;

	/// Submit a request to the command endpoint registered for `topic`.
	/// The `topic` will be enhanced with the nodes scope.
	///
	/// The call returns as soon as the request is handed to the middleware,
	/// neither completion nor failure of the remote call is awaited.
	///
	/// # Errors
	fn submit(&self, topic: &str, message: Option<Message>) -> Result<()>;
}
// endregion:	--- Context

// region:		--- Capability
/// Commonalities for capability components
pub trait Capability: Debug {
	/// Checks whether state of capability component is appropriate for the given [`NodeState`].
	/// If not, implementation has to adjust the components state to needs.
	/// # Errors
	fn manage_node_state(&mut self, state: &NodeState) -> Result<()>;
}
// endregion:	--- Capability
