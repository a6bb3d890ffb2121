// Copyright © 2026 the analog-relay authors

//! Implements the zenoh session handling.
//!

// region:		--- modules
use crate::error::Error;
use relay_core::error::Result;
use std::sync::Arc;
use zenoh::{Session, Wait};
// endregion:	--- modules

// region:		--- Communicator
/// [`Communicator`] owns the zenoh session all capabilities of a node share.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug)]
pub struct Communicator {
	/// The zenoh session
	session: Arc<Session>,
}

impl Communicator {
	/// Constructor
	/// # Errors
	pub fn new(config: &zenoh::Config) -> Result<Self> {
		let session = Arc::new(
			zenoh::open(config.to_owned())
				.wait()
				.map_err(|source| Error::CreateCommunicator { source })?,
		);
		Ok(Self { session })
	}

	/// Get globally unique ID
	#[must_use]
	pub fn uuid(&self) -> String {
		self.session.zid().to_string()
	}

	/// Get session reference
	#[must_use]
	pub fn session(&self) -> Arc<Session> {
		self.session.clone()
	}
}
// endregion:	--- Communicator

#[cfg(test)]
mod tests {
	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<Communicator>();
	}

	#[tokio::test(flavor = "multi_thread")]
	async fn communicator_create() -> Result<()> {
		let cfg = relay_config::Config::local()?;
		let peer = Communicator::new(&cfg.zenoh_config())?;
		assert!(!peer.uuid().is_empty());
		Ok(())
	}
}
