//! Provisioning engine for the trading-agents development environment.
//!
//! The CLI crate (`tradekit`) drives these modules in sequence: resolve the
//! system interpreter, build the virtual environment, install the declared
//! dependencies, and scaffold the files and directories the application
//! expects on disk. Everything here operates on a [`layout::ProjectLayout`]
//! computed once from the project root.

pub mod installer;
pub mod interpreter;
pub mod layout;
pub mod manifest;
pub mod platform;
pub mod scaffold;
pub mod venv;
