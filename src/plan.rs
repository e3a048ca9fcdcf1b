use crate::rover::{Instruction, Position, Rover, RoverId};
use serde::{Deserialize, Serialize};

/// The rectangular plateau rovers are deployed onto.
///
/// Valid cells satisfy `0 <= x <= width` and `0 <= y <= height`; both upper
/// bounds are inclusive, so the plateau holds `(width + 1) * (height + 1)` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plateau {
    pub width: u32,
    pub height: u32,
}

impl Plateau {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if `position` lies on the plateau.
    pub fn contains(&self, position: &Position) -> bool {
        let within = |v: i32, max: u32| u32::try_from(v).is_ok_and(|v| v <= max);
        within(position.x, self.width) && within(position.y, self.height)
    }
}

/// A rover's starting pose and the instructions it should execute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverDeploymentCommand {
    pub rover: Rover,
    pub instructions: Vec<Instruction>,
}

impl RoverDeploymentCommand {
    pub fn new(rover: Rover, instructions: Vec<Instruction>) -> Self {
        Self {
            rover,
            instructions,
        }
    }
}

/// Everything needed to generate a [`DeploymentPlan`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentInfo {
    pub plateau: Plateau,
    /// Commands in execution order.
    pub rover_deployment_commands: Vec<RoverDeploymentCommand>,
}

impl DeploymentInfo {
    pub fn new(plateau: Plateau, rover_deployment_commands: Vec<RoverDeploymentCommand>) -> Self {
        Self {
            plateau,
            rover_deployment_commands,
        }
    }
}

/// The poses one rover passes through, starting pose first.
///
/// Holds exactly one more pose than the command had instructions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoverJourney {
    pub rover_id: RoverId,
    pub positions: Vec<Position>,
}

impl RoverJourney {
    /// Where the rover ends up.
    pub fn final_position(&self) -> Option<&Position> {
        self.positions.last()
    }
}

/// One journey per deployment command, in command order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentPlan {
    pub rover_journeys: Vec<RoverJourney>,
}

impl DeploymentPlan {
    pub fn new(rover_journeys: Vec<RoverJourney>) -> Self {
        Self { rover_journeys }
    }
}
