//! # rover-deploy
//!
//! Deterministic deployment planning for a squad of rovers on a rectangular plateau.
//!
//! Each rover starts from a pose and executes a list of turn/move instructions. Rovers
//! are deployed strictly one after another; a rover that has finished its command stays
//! where it stopped and becomes an obstacle for every rover deployed after it. The
//! result is a `DeploymentPlan` listing each rover's journey pose by pose, or a
//! `DeploymentError` naming the first rover that would leave the plateau or collide.

pub mod control;
pub mod error;
pub mod logging;
pub mod parser;
pub mod plan;
pub mod rover;
pub mod validation;

pub use control::*;
pub use error::*;
pub use parser::*;
pub use plan::*;
pub use rover::*;
pub use validation::*;
