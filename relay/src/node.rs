// Copyright © 2026 the analog-relay authors

//! Module `node` provides the [`Node`], the runtime bridging one status
//! topic to one command endpoint.

// region:		--- modules
use crate::builder::{QuerierBuilder, SubscriberBuilder};
use crate::context::ContextStruct;
use core::time::Duration;
use relay_com::{wait_for_endpoint, Communicator, Subscriber};
use relay_config::Config;
use relay_core::{
	enums::{NodeState, TaskSignal},
	error::{RelayError, Result},
	traits::{Capability, Context, ContextAbstraction},
};
use std::{collections::HashMap, fmt::Debug, sync::Arc};
use tokio::{
	select, signal,
	sync::mpsc::{self, Receiver},
};
use tracing::{error, info, instrument};
// endregion:	--- modules

// region:		--- Node
/// Node
pub struct Node<P>
where
	P: Send + Sync + 'static,
{
	/// The nodes context structure
	pub(crate) context: Arc<ContextStruct<P>>,
	/// Current lifecycle state
	state: NodeState,
	/// Registered subscribers, stored by their selector
	pub(crate) subscribers: HashMap<String, Subscriber<P>>,
	/// Receiver for internal task signals, consumed by [`Node::start`]
	rx: Option<Receiver<TaskSignal>>,
}

impl<P> Debug for Node<P>
where
	P: Send + Sync + 'static,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Node")
			.field("id", &self.context.uuid())
			.field("scope", &self.context.scope())
			.field("state", &self.state)
			.finish_non_exhaustive()
	}
}

impl<P> Node<P>
where
	P: Send + Sync + 'static,
{
	/// Create an instance of a node.
	///
	/// # Errors
	pub fn new(config: Config, properties: P) -> Result<Self> {
		Self::create(config, properties, None)
	}

	/// Create an instance of a node with a scope for the topics.
	/// All instances sharing a scope resolve the same topic and endpoint names.
	///
	/// # Errors
	pub fn new_with_scope(config: Config, properties: P, scope: &str) -> Result<Self> {
		Self::create(config, properties, Some(scope.into()))
	}

	fn create(config: Config, properties: P, scope: Option<String>) -> Result<Self> {
		let communicator = Arc::new(Communicator::new(&config.zenoh_config())?);
		let (tx, rx) = mpsc::channel(8);
		let context = Arc::new(ContextStruct::new(communicator, scope, properties, tx));
		Ok(Self {
			context,
			state: NodeState::Created,
			subscribers: HashMap::new(),
			rx: Some(rx),
		})
	}

	/// Get the nodes uuid
	#[must_use]
	pub fn uuid(&self) -> String {
		self.context.uuid()
	}

	/// Get the nodes current [`NodeState`]
	#[must_use]
	pub const fn state(&self) -> NodeState {
		self.state
	}

	/// Get a [`Context`] of the node
	#[must_use]
	pub fn context(&self) -> Context<P> {
		self.context.clone()
	}

	/// Get a builder for a [`Subscriber`]
	#[must_use]
	pub fn subscriber(&mut self) -> SubscriberBuilder<'_, P> {
		SubscriberBuilder {
			node: self,
			topic: None,
			put_callback: None,
		}
	}

	/// Get a builder for a [`relay_com::Querier`]
	#[must_use]
	pub fn querier(&mut self) -> QuerierBuilder<'_, P> {
		QuerierBuilder {
			node: self,
			topic: None,
			callback: None,
			timeout: Duration::from_millis(1000),
			probe_interval: Duration::from_millis(1000),
		}
	}

	/// Wait until every registered command endpoint is reachable.
	///
	/// Blocks, probing each endpoint on its probe interval with one
	/// diagnostic per missed probe. Cancellable only by process
	/// termination.
	///
	/// # Errors
	pub async fn wait_for_endpoints(&self) -> Result<()> {
		let pending: Vec<(String, Duration)> = {
			let queriers = self
				.context
				.queriers
				.read()
				.map_err(|_| RelayError::ReadProperties)?;
			queriers
				.values()
				.map(|querier| (querier.selector().to_string(), querier.probe_interval()))
				.collect()
		};

		let session = self.context.session();
		for (selector, interval) in pending {
			wait_for_endpoint(&session, &selector, interval).await?;
		}
		Ok(())
	}

	/// Start the node.
	///
	/// Blocks until the registered command endpoints are reachable, then
	/// starts the subscribers and runs until an interrupt signal arrives.
	///
	/// # Errors
	#[instrument(skip_all)]
	pub async fn start(&mut self) -> Result<()> {
		let mut rx = self.rx.take().ok_or(RelayError::ShouldNotHappen)?;

		// queriers first, the startup gate needs them initialized
		self.state = NodeState::AwaitingEndpoint;
		self.manage_queriers(&NodeState::AwaitingEndpoint)?;
		self.wait_for_endpoints().await?;

		self.state = NodeState::Running;
		for subscriber in self.subscribers.values_mut() {
			subscriber.manage_node_state(&NodeState::Running)?;
		}
		info!("node '{}' is up", self.context.uuid());

		loop {
			// different possibilities that can happen
			select! {
				// Commands
				command = rx.recv() => {
					match command {
						Some(TaskSignal::RestartSubscriber(selector)) => {
							self.subscribers
								.get_mut(&selector)
								.ok_or(RelayError::ShouldNotHappen)?
								.start()?;
						},
						None => {
							self.stop()?;
							return Err(RelayError::ShouldNotHappen.into());
						},
					};
				}

				// shutdown signal "ctrl-c"
				signal = signal::ctrl_c() => {
					match signal {
						Ok(()) => {
							info!("shutdown due to 'Ctrl-C'");
							self.stop()?;
							return Ok(());
						}
						Err(err) => {
							error!("unable to listen for 'Ctrl-C': {err}");
							// we also try to shut down the node properly
							self.stop()?;
							return Err(RelayError::ShouldNotHappen.into());
						}
					}
				}
			}
		}
	}

	/// Stop the node.
	///
	/// Reverse order of start: subscribers first, so that after return no
	/// further callback fires, then the queriers release their endpoint
	/// handles.
	///
	/// # Errors
	#[instrument(skip_all)]
	pub fn stop(&mut self) -> Result<()> {
		self.state = NodeState::Stopped;
		for subscriber in self.subscribers.values_mut() {
			subscriber.manage_node_state(&NodeState::Stopped)?;
		}
		self.manage_queriers(&NodeState::Stopped)
	}

	fn manage_queriers(&self, state: &NodeState) -> Result<()> {
		self.context
			.queriers
			.write()
			.map_err(|_| RelayError::WriteProperties)?
			.values_mut()
			.try_for_each(|querier| querier.manage_node_state(state))
	}
}
// endregion:	--- Node

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct Props {}

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<Node<Props>>();
	}

	#[tokio::test(flavor = "multi_thread")]
	async fn node_create() -> Result<()> {
		let node = Node::new(Config::local()?, Props {})?;
		assert_eq!(node.state(), NodeState::Created);
		let node = Node::new_with_scope(Config::local()?, Props {}, "test")?;
		assert_eq!(node.context().scope(), Some(&String::from("test")));
		Ok(())
	}

	#[tokio::test(flavor = "multi_thread")]
	async fn endpoint_gate() -> Result<()> {
		let mut node = Node::new_with_scope(Config::local()?, Props {}, "gate")?;
		node.querier()
			.topic("set_output")
			.probe_interval(Duration::from_millis(100))
			.add()?;

		// endpoint not announced: the gate must not complete
		let blocked =
			tokio::time::timeout(Duration::from_millis(350), node.wait_for_endpoints()).await;
		assert!(blocked.is_err());

		// endpoint announced: the gate must complete
		let _token = node
			.context()
			.session()
			.liveliness()
			.declare_token("gate/set_output")
			.await?;
		tokio::time::timeout(Duration::from_secs(10), node.wait_for_endpoints()).await??;
		Ok(())
	}

	#[tokio::test(flavor = "multi_thread")]
	async fn submit_without_querier_fails() -> Result<()> {
		let node = Node::new(Config::local()?, Props {})?;
		assert!(node.context().submit("set_output", None).is_err());
		Ok(())
	}

	#[tokio::test(flavor = "multi_thread")]
	async fn builder_misses_parts() -> Result<()> {
		let mut node = Node::new(Config::local()?, Props {})?;
		assert!(node.subscriber().add().is_err());
		assert!(node.subscriber().topic("status").add().is_err());
		assert!(node.querier().add().is_err());
		Ok(())
	}

	#[derive(Debug)]
	struct Counter {
		received: u32,
	}

	#[tokio::test(flavor = "multi_thread")]
	async fn no_callback_after_stop() -> Result<()> {
		let mut node = Node::new_with_scope(Config::local()?, Counter { received: 0 }, "stopper")?;
		node.subscriber()
			.topic("status")
			.put_callback(|ctx, _message| async move {
				ctx.write()?.received += 1;
				Ok(())
			})
			.add()?;
		for subscriber in node.subscribers.values_mut() {
			subscriber.manage_node_state(&NodeState::Running)?;
		}

		// give the subscriber task time to declare itself
		tokio::time::sleep(Duration::from_millis(250)).await;
		let session = node.context().session();
		session.put("stopper/status", vec![0u8; 4]).await?;
		tokio::time::sleep(Duration::from_millis(250)).await;
		assert_eq!(node.context().read()?.received, 1);

		// after stop queued states must not reach the callback anymore
		node.stop()?;
		session.put("stopper/status", vec![0u8; 4]).await?;
		tokio::time::sleep(Duration::from_millis(250)).await;
		assert_eq!(node.context().read()?.received, 1);
		Ok(())
	}
}
