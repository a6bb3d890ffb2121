// Copyright © 2026 the analog-relay authors

//! Module `querier` provides a fire-and-forget requestor [`Querier`] towards a command endpoint.
//!
//! A request is handed to the middleware and the callers thread returns
//! immediately. Replies are drained on a detached task: failures are logged,
//! an optional response callback gets each answer.

// region:		--- modules
use crate::error::Error;
use core::time::Duration;
use futures::future::BoxFuture;
use relay_core::{
	enums::NodeState,
	error::Result,
	message_types::{Message, Response},
	traits::{Capability, Context},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument, warn, Level};
use zenoh::{
	key_expr::KeyExpr,
	query::{ConsolidationMode, QueryTarget},
	sample::SampleKind,
	Session, Wait,
};
// endregion:	--- modules

// region:    	--- types
/// type definition for a queriers `response` callback
pub type GetCallback<P> =
	Box<dyn FnMut(Context<P>, Response) -> BoxFuture<'static, Result<()>> + Send + Sync>;
/// type definition for a queriers atomic reference counted `response` callback
pub type ArcGetCallback<P> = Arc<Mutex<GetCallback<P>>>;
// endregion: 	--- types

// region:		--- functions
/// Block until a remote endpoint announces itself on `selector` via a
/// liveliness token.
///
/// Probes once per `interval` and emits one diagnostic per missed probe.
/// This is a startup gate: once the endpoint was seen, no further probes
/// happen.
///
/// # Errors
pub async fn wait_for_endpoint(session: &Session, selector: &str, interval: Duration) -> Result<()> {
	loop {
		let replies = session
			.liveliness()
			.get(selector)
			.timeout(interval)
			.await
			.map_err(|source| Error::LivelinessQuery { source })?;
		while let Ok(reply) = replies.recv_async().await {
			if reply.result().is_ok() {
				info!("using command endpoint '{selector}'");
				return Ok(());
			}
		}
		info!("command endpoint '{selector}' not accessible, waiting again...");
	}
}
// endregion:	--- functions

// region:		--- Querier
/// Querier
pub struct Querier<P>
where
	P: Send + Sync + 'static,
{
	selector: String,
	/// Context for the Querier
	context: Context<P>,
	callback: Option<ArcGetCallback<P>>,
	timeout: Duration,
	/// interval of the reachability probes before startup
	probe_interval: Duration,
	key_expr: Option<KeyExpr<'static>>,
}

impl<P> core::fmt::Debug for Querier<P>
where
	P: Send + Sync + 'static,
{
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Querier")
			.field("selector", &self.selector)
			.finish_non_exhaustive()
	}
}

impl<P> Capability for Querier<P>
where
	P: Send + Sync + 'static,
{
	fn manage_node_state(&mut self, state: &NodeState) -> Result<()> {
		match state {
			NodeState::AwaitingEndpoint => self.init(),
			NodeState::Stopped => self.de_init(),
			NodeState::Created | NodeState::Running => Ok(()),
		}
	}
}

impl<P> Querier<P>
where
	P: Send + Sync + 'static,
{
	/// Constructor for a [`Querier`]
	#[must_use]
	pub fn new(
		selector: String,
		context: Context<P>,
		callback: Option<ArcGetCallback<P>>,
		timeout: Duration,
		probe_interval: Duration,
	) -> Self {
		Self {
			selector,
			context,
			callback,
			timeout,
			probe_interval,
			key_expr: None,
		}
	}

	/// Get `selector`
	#[must_use]
	pub fn selector(&self) -> &str {
		&self.selector
	}

	/// Get the interval of the reachability probes
	#[must_use]
	pub const fn probe_interval(&self) -> Duration {
		self.probe_interval
	}

	/// Initialize
	/// # Errors
	fn init(&mut self) -> Result<()> {
		let key_expr = self
			.context
			.session()
			.declare_keyexpr(self.selector.clone())
			.wait()?;
		self.key_expr.replace(key_expr);
		Ok(())
	}

	/// De-Initialize, releases the endpoint handle
	/// # Errors
	#[allow(clippy::unnecessary_wraps)]
	fn de_init(&mut self) -> Result<()> {
		self.key_expr.take();
		Ok(())
	}

	/// Run the Querier with an optional [`Message`].
	///
	/// Returns as soon as the request is handed to the middleware. Replies
	/// are drained on a detached task, reply errors and missing responses
	/// are logged only.
	///
	/// # Errors
	#[instrument(name = "querier", level = Level::ERROR, skip_all)]
	pub fn get(&self, message: Option<Message>) -> Result<()> {
		let session = self.context.session();
		let key_expr = self
			.key_expr
			.clone()
			.ok_or_else(|| Error::NotInitialized {
				selector: self.selector.clone(),
			})?;

		let builder = message
			.map_or_else(
				|| session.get(&key_expr),
				|msg| session.get(&key_expr).payload(msg.0),
			)
			.target(QueryTarget::All)
			.consolidation(ConsolidationMode::None)
			.timeout(self.timeout);

		let replies = builder
			.wait()
			.map_err(|source| Error::QueryCreation { source })?;

		let cb = self.callback.clone();
		let ctx = self.context.clone();
		let selector = self.selector.clone();
		tokio::task::spawn(async move {
			let mut answered = false;
			while let Ok(reply) = replies.recv_async().await {
				match reply.result() {
					Ok(sample) => match sample.kind() {
						SampleKind::Put => {
							answered = true;
							if let Some(cb) = cb.clone() {
								let content: Vec<u8> =
									sample.payload().to_bytes().into_owned();
								let msg = Response::new(content);
								let ctx = ctx.clone();
								let mut lock = cb.lock().await;
								if let Err(error) = lock(ctx, msg).await {
									error!("querier callback failed with {error}");
								}
							}
						}
						SampleKind::Delete => {
							error!("unexpected delete from '{selector}'");
						}
					},
					Err(err) => error!("'{selector}' answered with error: {:?}", err),
				}
			}
			if !answered {
				warn!("no response from '{selector}' within timeout");
			}
		});

		Ok(())
	}
}
// endregion:	--- Querier

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct Props {}

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<Querier<Props>>();
	}
}
