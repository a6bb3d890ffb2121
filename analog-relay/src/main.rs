// Copyright © 2026 the analog-relay authors

//! Node that forwards standard analog output 0 to standard analog output 1.
//!

// region:		--- modules
use analog_relay::msg::{AnalogIoState, SetAnalogOutputResponse, SET_OUTPUT_SERVICE, STATUS_TOPIC};
use analog_relay::relay::set_output_request;
use clap::{builder::NonEmptyStringValueParser, Parser};
use relay::prelude::*;
use tracing::{info, warn};
// endregion:	--- modules

// region:		--- Clap
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// scope of the robot controller, must not be empty
	#[arg(short, long, value_parser = NonEmptyStringValueParser::new(), default_value_t = String::from("robot"))]
	scope: String,
}
// endregion:	--- Clap

#[derive(Debug)]
struct RelayProps {}

async fn on_status(ctx: Context<RelayProps>, message: Message) -> Result<()> {
	let state: AnalogIoState = message.decode()?;
	info!("incoming state with {} analog outputs", state.outputs.len());

	let request = set_output_request(&state);
	ctx.submit(SET_OUTPUT_SERVICE, Some(Message::encode(&request)))
}

async fn on_response(_ctx: Context<RelayProps>, response: Response) -> Result<()> {
	let response: SetAnalogOutputResponse = response.decode()?;
	if !response.success {
		warn!("controller rejected set-output request");
	}
	Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
	// a tracing subscriber writing logs
	init_tracing();

	// parse arguments
	let args = Args::parse();

	// create the node within the controllers scope
	let mut node = Node::new_with_scope(Config::default(), RelayProps {}, &args.scope)?;

	// endpoint setting the analog outputs
	node.querier()
		.topic(SET_OUTPUT_SERVICE)
		.callback(on_response)
		.add()?;

	// listen for analog I/O states
	node.subscriber()
		.topic(STATUS_TOPIC)
		.put_callback(on_status)
		.add()?;

	info!("analog relay, standard analog out 0 is sent to standard analog out 1");
	node.start().await
}
