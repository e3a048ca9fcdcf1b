//! Rover pose and the instruction transition function.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a rover within a single deployment run.
/// Assigned by the parser from the 1-based line number of the command.
pub type RoverId = u32;

/// Compass direction a rover is facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// The direction after a quarter turn counter-clockwise.
    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The direction after a quarter turn clockwise.
    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step taken by a forward move. `+Y` is North, `+X` is East.
    pub const fn heading(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        };
        f.write_str(name)
    }
}

/// A single movement instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Rotate 90 degrees counter-clockwise in place (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise in place (`R`).
    TurnRight,
    /// Advance one cell in the facing direction (`M`).
    MoveForward,
}

/// A rover's pose: grid cell plus facing.
///
/// Poses are values. Every transition returns a new `Position`, so poses already
/// recorded in a journey are never disturbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

impl Position {
    pub const fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    /// The occupied cell, ignoring orientation.
    pub const fn cell(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Returns the pose reached by executing `instruction` from this pose.
    pub fn apply(self, instruction: Instruction) -> Self {
        match instruction {
            Instruction::TurnLeft => self.turn_left(),
            Instruction::TurnRight => self.turn_right(),
            Instruction::MoveForward => self.move_forward(),
        }
    }

    pub const fn turn_left(self) -> Self {
        Self {
            orientation: self.orientation.left(),
            ..self
        }
    }

    pub const fn turn_right(self) -> Self {
        Self {
            orientation: self.orientation.right(),
            ..self
        }
    }

    /// Steps one cell along the heading. Wraps on `i32` overflow so the bound
    /// check rejects the result rather than the arithmetic panicking.
    pub fn move_forward(self) -> Self {
        let next = self.cell().wrapping_add(self.orientation.heading());
        Self {
            x: next.x,
            y: next.y,
            ..self
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X: {}, Y: {}, Orientation: {}",
            self.x, self.y, self.orientation
        )
    }
}

/// A rover: its identity plus its current pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rover {
    pub id: RoverId,
    pub position: Position,
}

impl Rover {
    pub const fn new(id: RoverId, position: Position) -> Self {
        Self { id, position }
    }

    /// The same rover relocated to `position`.
    pub const fn with_position(self, position: Position) -> Self {
        Self { position, ..self }
    }
}
