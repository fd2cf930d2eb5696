use serde::{Deserialize, Serialize};
use std::fmt;

/// Plane shapes known to the geometry generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Triangle,
    Square,
    Rectangle,
    Circle,
    Pentagon,
    Hexagon,
}

impl Shape {
    /// Catalogue order used when drawing a shape by index.
    pub const CATALOGUE: [Shape; 6] = [
        Self::Triangle,
        Self::Square,
        Self::Rectangle,
        Self::Circle,
        Self::Pentagon,
        Self::Hexagon,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::Square => "square",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
        }
    }

    /// Number of straight sides; a circle has none.
    #[must_use]
    pub fn sides(self) -> u32 {
        match self {
            Self::Circle => 0,
            Self::Triangle => 3,
            Self::Square | Self::Rectangle => 4,
            Self::Pentagon => 5,
            Self::Hexagon => 6,
        }
    }

    /// Number of corners. Equal to `sides` for every polygon in the catalogue.
    #[must_use]
    pub fn vertices(self) -> u32 {
        self.sides()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
