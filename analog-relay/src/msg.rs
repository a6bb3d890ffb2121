// Copyright © 2026 the analog-relay authors

//! Message vocabulary of the controllers analog I/O interface.
//!

// region:		--- modules
use bitcode::{Decode, Encode};
// endregion:	--- modules

// region:		--- constants
/// Channel the relay reads from
pub const SOURCE_CHANNEL: u8 = 0;
/// Channel the relay writes to
pub const DEST_CHANNEL: u8 = 1;
/// Topic reporting the controllers analog I/O state
pub const STATUS_TOPIC: &str = "control_box_analog_io";
/// Endpoint setting the standard analog outputs
pub const SET_OUTPUT_SERVICE: &str = "set_standard_analog_output";
// endregion:	--- constants

// region:		--- messages
/// Electrical mode of an analog channel.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Encode, Decode)]
pub enum SignalMode {
	/// current controlled
	#[default]
	Current,
	/// voltage controlled
	Voltage,
}

/// State respectively setpoint of a single analog channel.
#[derive(Debug, Clone, Copy, PartialEq, Encode, Decode)]
pub struct AnalogSample {
	/// channel id
	pub channel: u8,
	/// electrical mode
	pub mode: SignalMode,
	/// reading respectively setpoint
	pub value: f32,
}

/// Snapshot of the analog outputs, published on [`STATUS_TOPIC`].
#[derive(Debug, Clone, Default, Encode, Decode)]
pub struct AnalogIoState {
	/// one sample per reported channel
	pub outputs: Vec<AnalogSample>,
}

/// Request of the [`SET_OUTPUT_SERVICE`] endpoint.
#[derive(Debug, Clone, Encode, Decode)]
pub struct SetAnalogOutputRequest {
	/// samples to apply
	pub data: Vec<AnalogSample>,
}

/// Response of the [`SET_OUTPUT_SERVICE`] endpoint.
#[derive(Debug, Clone, Copy, Encode, Decode)]
pub struct SetAnalogOutputResponse {
	/// whether the controller accepted the request
	pub success: bool,
}
// endregion:	--- messages

#[cfg(test)]
mod tests {
	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync + Unpin>() {}

	#[test]
	const fn normal_types() {
		is_normal::<SignalMode>();
		is_normal::<AnalogSample>();
		is_normal::<AnalogIoState>();
		is_normal::<SetAnalogOutputRequest>();
		is_normal::<SetAnalogOutputResponse>();
	}

	#[test]
	fn state_coding() -> relay_core::Result<()> {
		let state = AnalogIoState {
			outputs: vec![AnalogSample {
				channel: SOURCE_CHANNEL,
				mode: SignalMode::Voltage,
				value: 5.0,
			}],
		};
		let message = relay_core::message_types::Message::encode(&state);
		let decoded: AnalogIoState = message.decode()?;
		assert_eq!(decoded.outputs, state.outputs);
		Ok(())
	}
}
