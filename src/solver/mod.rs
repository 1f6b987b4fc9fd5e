pub mod constants;
mod core;
mod errors;
mod registry;

pub use self::core::{SynthesisConfig, Synthesizer};
pub use errors::SolverError;
pub use registry::{Answer, Registry};
