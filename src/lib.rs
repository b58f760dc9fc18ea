//! donut-term library crate.
//!
//! Renders a rotating, shaded ASCII torus onto the terminal. The binary is a
//! thin shell over [`session::run_session`]; everything is exposed here for
//! integration testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod overlay;
pub mod pacer;
pub mod render;
pub mod scene;
pub mod session;
pub mod signal;
pub mod terminal;
