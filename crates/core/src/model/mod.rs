mod concept;
mod problem;
mod settings;
mod shape;
mod tier;
mod visual;

pub use concept::{Concept, ParseConceptError};
pub use problem::{Operator, Problem, ProblemDetail, Progression, ShapeQuestion, Unit};
pub use settings::{QuizSettings, SettingsError};
pub use shape::Shape;
pub use tier::{DifficultyTier, NumberRange, ParseTierError};
pub use visual::{Icon, SHAPE_SIZE_GROUP, SHAPE_SIZE_SINGLE, VisualAid};
