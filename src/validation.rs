//! Placement checks run on every pose a rover occupies.

use crate::error::DeploymentError;
use crate::plan::Plateau;
use crate::rover::{Position, Rover, RoverId};

/// Checks `position` against the plateau and every stationed rover.
///
/// Bounds are checked first, so a pose that is both off the plateau and
/// (impossibly) on a stationed rover reports `OutOfBounds`.
pub fn validate_position(
    rover_id: RoverId,
    position: &Position,
    stationed: &[Rover],
    plateau: &Plateau,
) -> Result<(), DeploymentError> {
    check_within_bounds(rover_id, position, plateau)?;
    check_available(rover_id, position, stationed)
}

pub fn check_within_bounds(
    rover_id: RoverId,
    position: &Position,
    plateau: &Plateau,
) -> Result<(), DeploymentError> {
    if plateau.contains(position) {
        Ok(())
    } else {
        Err(DeploymentError::OutOfBounds {
            rover_id,
            position: *position,
        })
    }
}

/// Fails if a stationed rover occupies the cell of `position`. Orientation is
/// ignored. The first obstructing rover in `stationed` order is reported.
pub fn check_available(
    rover_id: RoverId,
    position: &Position,
    stationed: &[Rover],
) -> Result<(), DeploymentError> {
    let cell = position.cell();
    match stationed.iter().find(|r| r.position.cell() == cell) {
        None => Ok(()),
        Some(obstruction) => Err(DeploymentError::Collision {
            rover_id,
            position: *position,
            obstructing_rover_id: obstruction.id,
            obstructing_position: obstruction.position,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rover::Orientation;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y, Orientation::North)
    }

    #[test]
    fn upper_bounds_are_inclusive() {
        let plateau = Plateau::new(2, 1);
        assert!(check_within_bounds(1, &pos(2, 1), &plateau).is_ok());
        assert!(check_within_bounds(1, &pos(0, 0), &plateau).is_ok());
    }

    #[test]
    fn rejects_each_edge() {
        let plateau = Plateau::new(2, 1);
        for p in [pos(-1, 0), pos(0, -1), pos(3, 0), pos(0, 2)] {
            assert_eq!(
                check_within_bounds(7, &p, &plateau),
                Err(DeploymentError::OutOfBounds {
                    rover_id: 7,
                    position: p
                })
            );
        }
    }

    #[test]
    fn zero_sized_plateau_has_one_cell() {
        let plateau = Plateau::new(0, 0);
        assert!(check_within_bounds(1, &pos(0, 0), &plateau).is_ok());
        assert!(check_within_bounds(1, &pos(1, 0), &plateau).is_err());
    }

    #[test]
    fn collision_ignores_orientation_and_reports_first_match() {
        let stationed = [
            Rover::new(1, Position::new(2, 2, Orientation::East)),
            Rover::new(2, Position::new(2, 2, Orientation::South)),
        ];
        let candidate = Position::new(2, 2, Orientation::West);

        let err = check_available(3, &candidate, &stationed).unwrap_err();
        assert_eq!(
            err,
            DeploymentError::Collision {
                rover_id: 3,
                position: candidate,
                obstructing_rover_id: 1,
                obstructing_position: Position::new(2, 2, Orientation::East),
            }
        );
    }

    #[test]
    fn free_cell_is_available() {
        let stationed = [Rover::new(1, pos(1, 1))];
        assert!(validate_position(2, &pos(1, 2), &stationed, &Plateau::new(5, 5)).is_ok());
    }
}
