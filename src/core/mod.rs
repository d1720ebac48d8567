//! core
//!
//! Domain types and pure logic.
//!
//! # Modules
//!
//! - [`action`] - The closed set of actions adapman can perform
//! - [`validator`] - Structural validation of raw arguments
//! - [`command_line`] - Parsing raw arguments into a [`ParsedCommand`]
//! - [`config`] - Configuration schema and loading
//! - [`strings`] - String helpers
//!
//! Nothing here touches the network or prints output.

pub mod action;
pub mod command_line;
pub mod config;
pub mod strings;
pub mod validator;

pub use action::Action;
pub use command_line::ParsedCommand;
pub use validator::is_valid;
