use serde::{Deserialize, Serialize};

use crate::markup;
use crate::model::{Operator, Shape};

/// Countable objects used by counting problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Apple,
    Banana,
    Grapes,
    Strawberry,
    Orange,
    Star,
    BlueCircle,
    OrangeDiamond,
    Heart,
    GreenCircle,
}

impl Icon {
    pub const ALL: [Icon; 10] = [
        Self::Apple,
        Self::Banana,
        Self::Grapes,
        Self::Strawberry,
        Self::Orange,
        Self::Star,
        Self::BlueCircle,
        Self::OrangeDiamond,
        Self::Heart,
        Self::GreenCircle,
    ];

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Apple => "🍎",
            Self::Banana => "🍌",
            Self::Grapes => "🍇",
            Self::Strawberry => "🍓",
            Self::Orange => "🍊",
            Self::Star => "⭐",
            Self::BlueCircle => "🔵",
            Self::OrangeDiamond => "🔸",
            Self::Heart => "❤️",
            Self::GreenCircle => "🟢",
        }
    }
}

/// Shape size used when several shapes are shown for counting.
pub const SHAPE_SIZE_GROUP: u32 = 60;
/// Shape size used when a single shape is shown.
pub const SHAPE_SIZE_SINGLE: u32 = 120;

/// Abstract visual aid accompanying a problem.
///
/// The descriptor carries only what a presentation layer needs to draw the aid;
/// `to_markup` and `to_text` provide ready-made renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualAid {
    /// Integer number line covering `start..=end`.
    NumberLine {
        start: i64,
        end: i64,
        operator: Operator,
    },
    /// `count` copies of the same icon.
    IconGroup { icon: Icon, count: u32 },
    /// `count` renderings of `shape`, each `size` pixels square.
    Shapes { shape: Shape, count: u32, size: u32 },
}

impl VisualAid {
    /// Number of discrete objects the learner is shown, if the aid is countable.
    #[must_use]
    pub fn instance_count(&self) -> Option<u32> {
        match self {
            Self::NumberLine { .. } => None,
            Self::IconGroup { count, .. } | Self::Shapes { count, .. } => Some(*count),
        }
    }

    /// SVG/HTML markup for browser shells.
    #[must_use]
    pub fn to_markup(&self) -> String {
        match *self {
            Self::NumberLine { start, end, .. } => markup::number_line_svg(start, end, None),
            Self::IconGroup { icon, count } => markup::icon_group_html(icon, count),
            Self::Shapes { shape, count, size } => markup::shape_group_html(shape, count, size),
        }
    }

    /// Plain-text rendering for terminal shells.
    #[must_use]
    pub fn to_text(&self) -> String {
        match *self {
            Self::NumberLine { start, end, .. } => markup::number_line_text(start, end),
            Self::IconGroup { icon, count } => {
                vec![icon.glyph(); count as usize].join(" ")
            }
            Self::Shapes { shape, count, .. } => {
                vec![format!("[{}]", shape.name()); count as usize].join(" ")
            }
        }
    }
}
