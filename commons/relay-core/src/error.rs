// Copyright © 2026 the analog-relay authors

//! The relay specific error enum `RelayError` together with a type alias for [`std::result::Result`] to write only `Result<T>`.
//!

// region:		--- types
/// Type alias for `std::result::Result` to ease up implementation
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync + 'static>>;
// endregion:	--- types

// region:		--- RelayError
/// Relay error type
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum RelayError {
	/// this error should never happen
	#[error("should not happen")]
	ShouldNotHappen,
	/// Decoding of message failed
	#[error("message decoding failed")]
	Decoding,
	/// Read access to properties failed
	#[error("read of properties failed")]
	ReadProperties,
	/// Write access to properties failed
	#[error("write of properties failed")]
	WriteProperties,
	/// No querier is stored for the wanted topic
	#[error("no querier stored for '{0}'")]
	NoQuerier(String),
	/// A builder is missing the topic
	#[error("no topic given")]
	NoTopic,
	/// A builder is missing the callback
	#[error("no callback given")]
	NoCallback,

	// should be last line
	/// auto conversion for boxed `std::error::Error`
	#[error(transparent)]
	StdError(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
} // endregion:	--- RelayError

#[cfg(test)]
mod tests {
	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync + Unpin>() {}

	#[test]
	const fn normal_types() {
		is_normal::<RelayError>();
	}
}
