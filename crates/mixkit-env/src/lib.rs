//! Runtime environment detection for mixkit.
//!
//! An [`Environment`] says whether code runs inside a browser (a wasm32 web
//! target) or on a host runtime, and gates registration hooks on that:
//! [`Environment::browser`] and [`Environment::node_js`] run their callback
//! once when the environment matches and do nothing otherwise.

pub mod environment;
pub mod error;

pub use environment::{Environment, EnvironmentKind};
pub use error::{EnvError, Result};
