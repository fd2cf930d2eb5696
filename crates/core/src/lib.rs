#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod markup;
pub mod model;
pub mod random;
pub mod time;

pub use error::Error;
pub use generator::ProblemGenerator;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use time::Clock;
