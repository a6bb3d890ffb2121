// Copyright © 2026 the analog-relay authors

//! Module `context` provides the nodes [`ContextStruct`], accessible in
//! callbacks via the [`Context`] trait object.

// region:		--- modules
use relay_com::{Communicator, Querier};
use relay_core::{
	enums::TaskSignal,
	error::{RelayError, Result},
	message_types::Message,
	traits::ContextAbstraction,
	utils::selector_from,
};
use std::{
	collections::HashMap,
	fmt::Debug,
	sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use tokio::sync::mpsc::Sender;
use zenoh::Session;
// endregion:	--- modules

// region:		--- ContextStruct
/// [`ContextStruct`] makes all relevant data of the node accessible via
/// accessor methods.
pub struct ContextStruct<P>
where
	P: Send + Sync + 'static,
{
	/// The communicator owning the zenoh session
	communicator: Arc<Communicator>,
	/// Scope under which all selectors of the node are resolved
	scope: Option<String>,
	/// The nodes properties
	props: Arc<RwLock<P>>,
	/// Sender for internal task signals
	sender: Sender<TaskSignal>,
	/// Registered queriers, stored by their selector
	pub(crate) queriers: Arc<RwLock<HashMap<String, Querier<P>>>>,
}

impl<P> Debug for ContextStruct<P>
where
	P: Send + Sync + 'static,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ContextStruct")
			.field("scope", &self.scope)
			.finish_non_exhaustive()
	}
}

impl<P> ContextStruct<P>
where
	P: Send + Sync + 'static,
{
	/// Constructor
	pub(crate) fn new(
		communicator: Arc<Communicator>,
		scope: Option<String>,
		properties: P,
		sender: Sender<TaskSignal>,
	) -> Self {
		Self {
			communicator,
			scope,
			props: Arc::new(RwLock::new(properties)),
			sender,
			queriers: Arc::new(RwLock::new(HashMap::new())),
		}
	}
}

impl<P> ContextAbstraction<P> for ContextStruct<P>
where
	P: Send + Sync + 'static,
{
	fn uuid(&self) -> String {
		self.communicator.uuid()
	}

	fn scope(&self) -> Option<&String> {
		self.scope.as_ref()
	}

	fn session(&self) -> Arc<Session> {
		self.communicator.session()
	}

	fn sender(&self) -> &Sender<TaskSignal> {
		&self.sender
	}

	fn read(&self) -> Result<RwLockReadGuard<'_, P>> {
		self.props.read().map_err(|_| RelayError::ReadProperties.into())
	}

	fn write(&self) -> Result<RwLockWriteGuard<'_, P>> {
		self.props
			.write()
			.map_err(|_| RelayError::WriteProperties.into())
	}

	fn submit(&self, topic: &str, message: Option<Message>) -> Result<()> {
		let selector = selector_from(topic, self.scope());
		self.queriers
			.read()
			.map_err(|_| RelayError::ReadProperties)?
			.get(&selector)
			.ok_or_else(|| RelayError::NoQuerier(selector.clone()))?
			.get(message)
	}
}
// endregion:	--- ContextStruct

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct Props {}

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<ContextStruct<Props>>();
	}
}
