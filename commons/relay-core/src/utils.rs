// Copyright © 2026 the analog-relay authors

//! Helper functions
//!

// region:		--- functions
/// Create the selector for a `topic` within an optional `scope`.
///
/// All instances sharing a scope resolve the same topic and endpoint names.
#[must_use]
pub fn selector_from(topic: &str, scope: Option<&String>) -> String {
	scope.map_or_else(|| topic.into(), |scope| format!("{scope}/{topic}"))
}
// endregion:	--- functions

// region:		--- Tracing
/// Initialize tracing
pub fn init_tracing() {
	let subscriber = tracing_subscriber::fmt()
		.with_thread_ids(true)
		.with_thread_names(true)
		.with_level(true)
		.with_target(true);

	let subscriber = subscriber.finish();
	let _ = tracing::subscriber::set_global_default(subscriber);
}
// endregion:	--- Tracing

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selector_with_scope() {
		let scope = String::from("cell7");
		assert_eq!(
			selector_from("control_box_analog_io", Some(&scope)),
			"cell7/control_box_analog_io"
		);
	}

	#[test]
	fn selector_without_scope() {
		assert_eq!(
			selector_from("control_box_analog_io", None),
			"control_box_analog_io"
		);
	}
}
