// Copyright © 2026 the analog-relay authors

//! Module `builder` provides the builders to register communication
//! capabilities with a [`Node`].

// region:		--- modules
use crate::node::Node;
use core::time::Duration;
use relay_com::{
	querier::{ArcGetCallback, GetCallback},
	subscriber::{ArcPutCallback, PutCallback},
	Querier, Subscriber,
};
use relay_core::{
	enums::NodeState,
	error::{RelayError, Result},
	message_types::{Message, Response},
	traits::{Context, ContextAbstraction},
	utils::selector_from,
};
use std::{future::Future, sync::Arc};
use tokio::sync::Mutex;
// endregion:	--- modules

// region:		--- SubscriberBuilder
/// The builder for a [`Subscriber`]
pub struct SubscriberBuilder<'a, P>
where
	P: Send + Sync + 'static,
{
	pub(crate) node: &'a mut Node<P>,
	pub(crate) topic: Option<String>,
	pub(crate) put_callback: Option<ArcPutCallback<P>>,
}

impl<P> SubscriberBuilder<'_, P>
where
	P: Send + Sync + 'static,
{
	/// Set only the message qualifying part of the selector.
	/// Will be prefixed with the nodes scope.
	#[must_use]
	pub fn topic(mut self, topic: &str) -> Self {
		self.topic.replace(topic.into());
		self
	}

	/// Set subscribers callback for incoming messages
	#[must_use]
	pub fn put_callback<C, F>(mut self, mut callback: C) -> Self
	where
		C: FnMut(Context<P>, Message) -> F + Send + Sync + 'static,
		F: Future<Output = Result<()>> + Send + 'static,
	{
		let callback: PutCallback<P> = Box::new(move |ctx, msg| Box::pin(callback(ctx, msg)));
		self.put_callback.replace(Arc::new(Mutex::new(callback)));
		self
	}

	/// Build the [`Subscriber`] and add it to the node
	/// # Errors
	pub fn add(self) -> Result<()> {
		let topic = self.topic.ok_or(RelayError::NoTopic)?;
		let put_callback = self.put_callback.ok_or(RelayError::NoCallback)?;
		let context = self.node.context();
		let selector = selector_from(&topic, context.scope());
		let subscriber = Subscriber::new(
			selector.clone(),
			context,
			NodeState::Running,
			put_callback,
		);
		self.node.subscribers.insert(selector, subscriber);
		Ok(())
	}
}
// endregion:	--- SubscriberBuilder

// region:		--- QuerierBuilder
/// The builder for a [`Querier`]
pub struct QuerierBuilder<'a, P>
where
	P: Send + Sync + 'static,
{
	pub(crate) node: &'a mut Node<P>,
	pub(crate) topic: Option<String>,
	pub(crate) callback: Option<ArcGetCallback<P>>,
	pub(crate) timeout: Duration,
	pub(crate) probe_interval: Duration,
}

impl<P> QuerierBuilder<'_, P>
where
	P: Send + Sync + 'static,
{
	/// Set only the message qualifying part of the selector.
	/// Will be prefixed with the nodes scope.
	#[must_use]
	pub fn topic(mut self, topic: &str) -> Self {
		self.topic.replace(topic.into());
		self
	}

	/// Set queriers callback for response messages.
	/// Without a callback responses are dropped after the failure logging.
	#[must_use]
	pub fn callback<C, F>(mut self, mut callback: C) -> Self
	where
		C: FnMut(Context<P>, Response) -> F + Send + Sync + 'static,
		F: Future<Output = Result<()>> + Send + 'static,
	{
		let callback: GetCallback<P> = Box::new(move |ctx, rsp| Box::pin(callback(ctx, rsp)));
		self.callback.replace(Arc::new(Mutex::new(callback)));
		self
	}

	/// Set a timeout for the [`Querier`].
	/// Default is 1000ms
	#[must_use]
	pub const fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Set the interval of the reachability probes before startup.
	/// Default is 1000ms
	#[must_use]
	pub const fn probe_interval(mut self, interval: Duration) -> Self {
		self.probe_interval = interval;
		self
	}

	/// Build the [`Querier`] and add it to the node
	/// # Errors
	pub fn add(self) -> Result<()> {
		let topic = self.topic.ok_or(RelayError::NoTopic)?;
		let context = self.node.context();
		let selector = selector_from(&topic, context.scope());
		let querier = Querier::new(
			selector.clone(),
			context,
			self.callback,
			self.timeout,
			self.probe_interval,
		);
		self.node
			.context
			.queriers
			.write()
			.map_err(|_| RelayError::WriteProperties)?
			.insert(selector, querier);
		Ok(())
	}
}
// endregion:	--- QuerierBuilder

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct Props {}

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<SubscriberBuilder<Props>>();
		is_normal::<QuerierBuilder<Props>>();
	}
}
