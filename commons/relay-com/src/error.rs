// Copyright © 2026 the analog-relay authors

//! Errors from com
//!

// region:		--- modules
#[cfg(doc)]
use super::{Communicator, Querier, Subscriber};
// endregion:	--- modules

// region:		--- Error
/// Com error type.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// Creation of the [`Communicator`] was not possible
	#[error("creation of zenoh session failed: reason {source}")]
	CreateCommunicator {
		/// the original zenoh error
		source: Box<dyn std::error::Error + Send + Sync>,
	},
	/// Creation of a query failed
	#[error("creation of a query failed: reason {source}")]
	QueryCreation {
		/// the original zenoh error
		source: Box<dyn std::error::Error + Send + Sync>,
	},
	/// Creation of a [`Subscriber`] failed
	#[error("creation of a subscriber failed: reason {source}")]
	SubscriberCreation {
		/// the original zenoh error
		source: Box<dyn std::error::Error + Send + Sync>,
	},
	/// Querying the liveliness of an endpoint failed
	#[error("liveliness query failed: reason {source}")]
	LivelinessQuery {
		/// the original zenoh error
		source: Box<dyn std::error::Error + Send + Sync>,
	},
	/// The [`Querier`] is not initialized
	#[error("querier '{selector}' is not initialized")]
	NotInitialized {
		/// query selector
		selector: String,
	},
}
// endregion:	--- Error

#[cfg(test)]
mod tests {
	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<Error>();
	}
}
