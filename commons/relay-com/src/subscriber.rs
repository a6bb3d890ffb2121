// Copyright © 2026 the analog-relay authors

//! Module `subscriber` provides a message [`Subscriber`] listening on the status topic.
//!
//! The subscriber keeps only the most recent message: if further messages
//! arrive while the callback still runs, all but the latest are dropped.

// region:		--- modules
use crate::error::Error;
use futures::future::BoxFuture;
use relay_core::{
	enums::{NodeState, TaskSignal},
	error::{RelayError, Result},
	message_types::Message,
	traits::{Capability, Context},
};
use std::sync::Arc;
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{error, info, instrument, Level};
use zenoh::{handlers::RingChannel, sample::SampleKind};
// endregion:	--- modules

// region:    	--- types
/// type definition for a subscribers `put` callback
pub type PutCallback<P> =
	Box<dyn FnMut(Context<P>, Message) -> BoxFuture<'static, Result<()>> + Send + Sync>;
/// type definition for a subscribers atomic reference counted `put` callback
pub type ArcPutCallback<P> = Arc<Mutex<PutCallback<P>>>;
// endregion: 	--- types

// region:		--- Subscriber
/// Subscriber
pub struct Subscriber<P>
where
	P: Send + Sync + 'static,
{
	/// The subscribers key expression
	selector: String,
	/// Context for the Subscriber
	context: Context<P>,
	/// [`NodeState`] on which this subscriber is started
	activation_state: NodeState,
	put_callback: ArcPutCallback<P>,
	handle: Option<JoinHandle<()>>,
}

impl<P> core::fmt::Debug for Subscriber<P>
where
	P: Send + Sync + 'static,
{
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Subscriber")
			.field("selector", &self.selector)
			.finish_non_exhaustive()
	}
}

impl<P> Capability for Subscriber<P>
where
	P: Send + Sync + 'static,
{
	fn manage_node_state(&mut self, state: &NodeState) -> Result<()> {
		if state == &self.activation_state && self.handle.is_none() {
			return self.start();
		}
		if state == &NodeState::Stopped {
			self.stop();
		}
		Ok(())
	}
}

impl<P> Subscriber<P>
where
	P: Send + Sync + 'static,
{
	/// Constructor for a [`Subscriber`].
	#[must_use]
	pub fn new(
		selector: String,
		context: Context<P>,
		activation_state: NodeState,
		put_callback: ArcPutCallback<P>,
	) -> Self {
		Self {
			selector,
			context,
			activation_state,
			put_callback,
			handle: None,
		}
	}

	/// Get `selector`
	#[must_use]
	pub fn selector(&self) -> &str {
		&self.selector
	}

	/// Start or restart the subscriber.
	/// An already running subscriber will be stopped.
	///
	/// # Errors
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn start(&mut self) -> Result<()> {
		self.stop();

		let selector = self.selector.clone();
		let p_cb = self.put_callback.clone();
		let ctx1 = self.context.clone();
		let ctx2 = self.context.clone();

		self.handle
			.replace(tokio::task::spawn(async move {
				let key = selector.clone();
				std::panic::set_hook(Box::new(move |reason| {
					error!("subscriber panic: {}", reason);
					if let Err(reason) = ctx1
						.sender()
						.try_send(TaskSignal::RestartSubscriber(key.clone()))
					{
						error!("could not restart subscriber: {}", reason);
					} else {
						info!("restarting subscriber!");
					};
				}));
				if let Err(error) = run_subscriber(selector, p_cb, ctx2).await {
					error!("spawning subscriber failed with {error}");
				};
			}));
		Ok(())
	}

	/// Stop a running Subscriber.
	/// After return no further callback is invoked.
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn stop(&mut self) {
		if let Some(handle) = self.handle.take() {
			handle.abort();
		}
	}
}

#[instrument(name = "subscriber", level = Level::ERROR, skip_all)]
async fn run_subscriber<P>(selector: String, p_cb: ArcPutCallback<P>, ctx: Context<P>) -> Result<()>
where
	P: Send + Sync + 'static,
{
	let session = ctx.session();
	// depth 1: only the latest status matters when several arrive while the callback runs
	let subscriber = session
		.declare_subscriber(&selector)
		.with(RingChannel::new(1))
		.await
		.map_err(|source| Error::SubscriberCreation { source })?;

	loop {
		let sample = subscriber
			.recv_async()
			.await
			.map_err(|_| RelayError::ShouldNotHappen)?;

		match sample.kind() {
			SampleKind::Put => {
				let content: Vec<u8> = sample.payload().to_bytes().into_owned();
				let msg = Message::new(content);
				let ctx = ctx.clone();
				let mut lock = p_cb.lock().await;
				if let Err(error) = lock(ctx, msg).await {
					error!("subscriber callback failed with {error}");
				}
			}
			SampleKind::Delete => {
				// a status topic carries no deletes
			}
		}
	}
}
// endregion:	--- Subscriber

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct Props {}

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<Subscriber<Props>>();
	}
}
