//! Text format for deployment commands.
//!
//! One command per line: `<x> <y> <orientation>|<instructions>`, e.g.
//! `1 2 N|LMLMLMLMM`. Orientation is one of `N`, `E`, `S`, `W`; instructions are
//! `L` (turn left), `R` (turn right) and `M` (move forward). Each rover is given
//! the 1-based number of the line it was declared on as its id.

use crate::error::{ParseError, ParseErrorKind};
use crate::plan::RoverDeploymentCommand;
use crate::rover::{Instruction, Orientation, Position, Rover, RoverId};
use std::io::BufRead;

const LINE_DELIMITER: char = '|';
const POSITION_DELIMITER: char = ' ';

/// Parses the line-oriented command format.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoverParser;

impl RoverParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses every line of `input`. Stops at the first malformed line.
    pub fn parse(&self, input: &str) -> Result<Vec<RoverDeploymentCommand>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(idx, line)| parse_numbered_line(idx + 1, line))
            .collect()
    }

    /// Like [`parse`](Self::parse) but reads lines from `reader`.
    pub fn parse_reader<R: BufRead>(
        &self,
        reader: R,
    ) -> Result<Vec<RoverDeploymentCommand>, ParseError> {
        let mut commands = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_number = idx + 1;
            let line = line.map_err(|err| ParseError {
                line: String::new(),
                line_number,
                kind: err.into(),
            })?;
            commands.push(parse_numbered_line(line_number, &line)?);
        }
        Ok(commands)
    }
}

fn parse_numbered_line(
    line_number: usize,
    raw: &str,
) -> Result<RoverDeploymentCommand, ParseError> {
    let line = raw.trim();
    parse_line(line_number, line).map_err(|kind| ParseError {
        line: line.to_owned(),
        line_number,
        kind,
    })
}

fn parse_line(line_number: usize, line: &str) -> Result<RoverDeploymentCommand, ParseErrorKind> {
    let [position, instructions] =
        split_exact::<2>(line, LINE_DELIMITER).ok_or(ParseErrorKind::LineTokenCount)?;

    let position = parse_position(position)?;
    let instructions = parse_instructions(instructions)?;

    // Line numbers beyond u32 are not a realistic input size.
    let id = RoverId::try_from(line_number).unwrap_or(RoverId::MAX);
    Ok(RoverDeploymentCommand::new(Rover::new(id, position), instructions))
}

/// Splits on `delimiter`, drops empty pieces and requires exactly `N` remain.
fn split_exact<const N: usize>(s: &str, delimiter: char) -> Option<[&str; N]> {
    let pieces: Vec<&str> = s.split(delimiter).filter(|p| !p.is_empty()).collect();
    pieces.try_into().ok()
}

fn parse_position(s: &str) -> Result<Position, ParseErrorKind> {
    let [x, y, orientation] =
        split_exact::<3>(s, POSITION_DELIMITER).ok_or(ParseErrorKind::PositionTokenCount)?;

    let x = x
        .parse()
        .map_err(|_| ParseErrorKind::XCoordinate(x.to_owned()))?;
    let y = y
        .parse()
        .map_err(|_| ParseErrorKind::YCoordinate(y.to_owned()))?;

    Ok(Position::new(x, y, parse_orientation(orientation)?))
}

fn parse_orientation(s: &str) -> Result<Orientation, ParseErrorKind> {
    match s {
        "N" => Ok(Orientation::North),
        "E" => Ok(Orientation::East),
        "S" => Ok(Orientation::South),
        "W" => Ok(Orientation::West),
        _ => Err(ParseErrorKind::Orientation(s.to_owned())),
    }
}

fn parse_instructions(s: &str) -> Result<Vec<Instruction>, ParseErrorKind> {
    s.chars()
        .map(|c| match c {
            'L' => Ok(Instruction::TurnLeft),
            'R' => Ok(Instruction::TurnRight),
            'M' => Ok(Instruction::MoveForward),
            other => Err(ParseErrorKind::Instruction(other)),
        })
        .collect()
}
