// Copyright © 2026 the analog-relay authors

//! The relay core: copy one channels reading onto another channels command.
//!

// region:		--- modules
use crate::msg::{
	AnalogIoState, AnalogSample, SetAnalogOutputRequest, SignalMode, DEST_CHANNEL, SOURCE_CHANNEL,
};
// endregion:	--- modules

// region:		--- functions
/// Pick the sample to forward out of an inbound state.
///
/// Scans for [`SOURCE_CHANNEL`]; is the channel reported more than once the
/// last entry wins. A state without the source channel degrades to the
/// default `(Current, 0.0)`, absent is not distinguished from zero.
#[must_use]
pub fn forward_sample(state: &AnalogIoState) -> AnalogSample {
	let mut mode = SignalMode::default();
	let mut value = 0.0;

	// find the values for the source channel
	for sample in &state.outputs {
		if sample.channel == SOURCE_CHANNEL {
			mode = sample.mode;
			value = sample.value;
		}
	}

	AnalogSample {
		channel: DEST_CHANNEL,
		mode,
		value,
	}
}

/// Build the set-output request for an inbound state.
///
/// Exactly one single-element request per state, whether or not the source
/// channel was found.
#[must_use]
pub fn set_output_request(state: &AnalogIoState) -> SetAnalogOutputRequest {
	SetAnalogOutputRequest {
		data: vec![forward_sample(state)],
	}
}
// endregion:	--- functions

#[cfg(test)]
mod tests {
	use super::*;

	const fn sample(channel: u8, mode: SignalMode, value: f32) -> AnalogSample {
		AnalogSample {
			channel,
			mode,
			value,
		}
	}

	#[test]
	fn forwards_source_channel() {
		let state = AnalogIoState {
			outputs: vec![
				sample(0, SignalMode::Voltage, 5.0),
				sample(2, SignalMode::Current, 1.0),
			],
		};
		assert_eq!(
			forward_sample(&state),
			sample(1, SignalMode::Voltage, 5.0)
		);
	}

	#[test]
	fn missing_source_degrades_to_default() {
		let state = AnalogIoState {
			outputs: vec![sample(3, SignalMode::Current, 2.0)],
		};
		assert_eq!(
			forward_sample(&state),
			sample(1, SignalMode::Current, 0.0)
		);
	}

	#[test]
	fn empty_state_degrades_to_default() {
		let state = AnalogIoState::default();
		assert_eq!(
			forward_sample(&state),
			sample(1, SignalMode::Current, 0.0)
		);
	}

	#[test]
	fn duplicate_source_last_wins() {
		let state = AnalogIoState {
			outputs: vec![
				sample(0, SignalMode::Current, 1.5),
				sample(0, SignalMode::Voltage, 7.5),
			],
		};
		assert_eq!(
			forward_sample(&state),
			sample(1, SignalMode::Voltage, 7.5)
		);
	}

	#[test]
	fn one_command_per_state() {
		let request = set_output_request(&AnalogIoState::default());
		assert_eq!(request.data.len(), 1);

		let state = AnalogIoState {
			outputs: vec![
				sample(0, SignalMode::Voltage, 5.0),
				sample(0, SignalMode::Voltage, 6.0),
				sample(2, SignalMode::Current, 1.0),
			],
		};
		let request = set_output_request(&state);
		assert_eq!(request.data.len(), 1);
	}
}
