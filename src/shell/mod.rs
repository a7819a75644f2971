// Composition root for the attendance bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers and expose them over HTTP.

pub mod config;
pub mod http;
pub mod state;
