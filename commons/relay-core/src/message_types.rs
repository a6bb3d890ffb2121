// Copyright © 2026 the analog-relay authors

//! Module `message_types` provides the types of messages used in callbacks.

// region:		--- modules
use crate::error::RelayError;
use bitcode::{decode, encode, Decode, Encode};
use std::ops::Deref;
// endregion:	--- modules

// region:		--- Message
/// Implementation of a [`Message`], the encoded payload of the status topic
/// respectively of a request to the command endpoint.
#[derive(Debug)]
pub struct Message(pub Vec<u8>);

impl Deref for Message {
	type Target = Vec<u8>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Message {
	/// Constructor from already encoded content
	#[must_use]
	pub const fn new(content: Vec<u8>) -> Self {
		Self(content)
	}

	/// encode message
	pub fn encode<T>(message: &T) -> Self
	where
		T: Encode,
	{
		let content = encode(message);
		Self(content)
	}

	/// decode message
	///
	/// # Errors
	pub fn decode<T>(self) -> crate::error::Result<T>
	where
		T: for<'a> Decode<'a>,
	{
		let value: Vec<u8> = self.0;
		decode::<T>(value.as_slice()).map_err(|_| RelayError::Decoding.into())
	}

	/// access the encoded content
	#[must_use]
	pub const fn value(&self) -> &Vec<u8> {
		&self.0
	}
}
// endregion:	--- Message

// region:		--- Response
/// Implementation of a [`Response`], the encoded reply of the command endpoint.
#[derive(Debug)]
pub struct Response(pub Vec<u8>);

impl Deref for Response {
	type Target = Vec<u8>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Response {
	/// Constructor from already encoded content
	#[must_use]
	pub const fn new(content: Vec<u8>) -> Self {
		Self(content)
	}

	/// encode response
	pub fn encode<T>(response: &T) -> Self
	where
		T: Encode,
	{
		let content = encode(response);
		Self(content)
	}

	/// decode response
	///
	/// # Errors
	pub fn decode<T>(self) -> crate::error::Result<T>
	where
		T: for<'a> Decode<'a>,
	{
		let value: Vec<u8> = self.0;
		decode::<T>(value.as_slice()).map_err(|_| RelayError::Decoding.into())
	}
}
// endregion:	--- Response

#[cfg(test)]
mod tests {
	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync + Unpin>() {}

	#[test]
	const fn normal_types() {
		is_normal::<Message>();
		is_normal::<Response>();
	}

	#[test]
	fn message_coding() -> crate::error::Result<()> {
		let message = Message::encode(&String::from("relay"));
		let decoded: String = message.decode()?;
		assert_eq!(decoded, "relay");
		Ok(())
	}

	#[test]
	fn message_decode_fails() {
		let message = Message::new(vec![0xFF]);
		let decoded: crate::error::Result<String> = message.decode();
		assert!(decoded.is_err());
	}
}
