//! adapman - toggle network adapters and connect or disconnect WiFi
//!
//! adapman is a small command-line tool that enables or disables every
//! network adapter on a machine, and connects or disconnects its WiFi
//! interface to a named network.
//!
//! # Architecture
//!
//! - [`core`] - Actions, argument validation and parsing, configuration
//! - [`adapter`] - Network adapter model and management
//! - [`wifi`] - WiFi connection management and WLAN profiles
//! - [`runner`] - Execution of the external tools behind both managers
//! - [`cli`] - Process surface: options, usage, dispatch
//! - [`ui`] - Console output
//!
//! # Invariants
//!
//! 1. A command line is validated and mapped by one shape table, so a
//!    validated list always yields exactly one action
//! 2. Parsing is pure: no output, no exit, no shared state
//! 3. Network keys never appear in output or error messages

pub mod adapter;
pub mod cli;
pub mod core;
pub mod runner;
pub mod ui;
pub mod wifi;
