//! Error types for deployment planning and command parsing.

use crate::rover::{Position, RoverId};
use thiserror::Error as ThisError;

///
/// DeploymentError
///
/// Any of these aborts the whole run; no partial plan is produced.
///

#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum DeploymentError {
    #[error("Rover {rover_id} will go out of bounds at position {position}.")]
    OutOfBounds {
        rover_id: RoverId,
        position: Position,
    },

    #[error(
        "Collision detected when generating deployment plan. \
         Rover {rover_id} at position {position} will collide with \
         Rover {obstructing_rover_id} at position {obstructing_position}."
    )]
    Collision {
        rover_id: RoverId,
        position: Position,
        obstructing_rover_id: RoverId,
        obstructing_position: Position,
    },
}

impl DeploymentError {
    /// The rover whose move triggered the error.
    pub const fn rover_id(&self) -> RoverId {
        match self {
            Self::OutOfBounds { rover_id, .. } | Self::Collision { rover_id, .. } => *rover_id,
        }
    }
}

///
/// ParseError
///

#[derive(Debug, ThisError)]
#[error("Unable to parse text '{line}'. Line number {line_number}.")]
pub struct ParseError {
    /// The offending line, trimmed.
    pub line: String,
    /// 1-based.
    pub line_number: usize,
    #[source]
    pub kind: ParseErrorKind,
}

#[derive(Debug, ThisError)]
pub enum ParseErrorKind {
    #[error("Expected exactly 2 tokens when splitting line by delimiter '|'.")]
    LineTokenCount,

    #[error("Expected exactly 3 tokens when splitting position string by delimiter ' '.")]
    PositionTokenCount,

    #[error("Unable to parse given X coordinate '{0}' to integer.")]
    XCoordinate(String),

    #[error("Unable to parse given Y coordinate '{0}' to integer.")]
    YCoordinate(String),

    #[error("Unable to parse given orientation '{0}'.")]
    Orientation(String),

    #[error("Unable to parse given instruction '{0}'.")]
    Instruction(char),

    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}
