//! Drives rover deployment commands into a [`DeploymentPlan`].
//!
//! The entry point is [`RoverControlSystem::generate_deployment_plan`]. Rovers are
//! deployed one at a time, in command order. A rover only becomes an obstacle for
//! later rovers once its whole command has executed; until then it is simply not
//! on the plateau.

use crate::error::DeploymentError;
use crate::plan::{DeploymentInfo, DeploymentPlan, Plateau, RoverDeploymentCommand, RoverJourney};
use crate::rover::Rover;
use crate::validation::validate_position;
use tracing::{debug, trace, warn};

/// Generates deployment plans. Holds no state between runs, so one instance
/// can serve any number of concurrent callers.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoverControlSystem;

impl RoverControlSystem {
    pub fn new() -> Self {
        Self
    }

    /// Executes every command in `info` and returns one journey per command.
    ///
    /// # Placement
    ///
    /// Every pose a rover occupies, including its starting pose, must:
    /// 1. lie on the plateau (inclusive upper bounds), and
    /// 2. not share a cell with any rover stationed by an earlier command.
    ///
    /// A rover may cross its own earlier path. The first violation aborts the
    /// whole run with a [`DeploymentError`]; no partial plan is returned.
    pub fn generate_deployment_plan(
        &self,
        info: &DeploymentInfo,
    ) -> Result<DeploymentPlan, DeploymentError> {
        generate_deployment_plan(&info.plateau, &info.rover_deployment_commands)
    }
}

/// Free-function form of [`RoverControlSystem::generate_deployment_plan`].
pub fn generate_deployment_plan(
    plateau: &Plateau,
    commands: &[RoverDeploymentCommand],
) -> Result<DeploymentPlan, DeploymentError> {
    let mut journeys = Vec::with_capacity(commands.len());
    let mut stationed: Vec<Rover> = Vec::with_capacity(commands.len());

    for command in commands {
        let journey = deploy(command, &stationed, plateau).inspect_err(|err| {
            warn!(rover_id = command.rover.id, %err, "deployment aborted");
        })?;

        // Only a finished journey stations the rover.
        if let Some(&last) = journey.final_position() {
            debug!(rover_id = command.rover.id, position = %last, "rover stationed");
            stationed.push(command.rover.with_position(last));
        }
        journeys.push(journey);
    }

    Ok(DeploymentPlan::new(journeys))
}

/// Runs one command against the currently stationed rovers.
fn deploy(
    command: &RoverDeploymentCommand,
    stationed: &[Rover],
    plateau: &Plateau,
) -> Result<RoverJourney, DeploymentError> {
    let rover = &command.rover;
    debug!(
        rover_id = rover.id,
        instructions = command.instructions.len(),
        position = %rover.position,
        "deploying rover"
    );

    let mut current = rover.position;
    validate_position(rover.id, &current, stationed, plateau)?;

    let mut positions = Vec::with_capacity(command.instructions.len() + 1);
    positions.push(current);

    for &instruction in &command.instructions {
        current = current.apply(instruction);
        trace!(rover_id = rover.id, ?instruction, position = %current, "step");
        validate_position(rover.id, &current, stationed, plateau)?;
        positions.push(current);
    }

    Ok(RoverJourney {
        rover_id: rover.id,
        positions,
    })
}
