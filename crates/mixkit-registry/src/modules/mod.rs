//! Built-in modules.

pub mod environment;
pub mod merge;
pub mod types;

pub use environment::EnvironmentModule;
pub use merge::MergeModule;
pub use types::{TypesModule, PREDICATES};
