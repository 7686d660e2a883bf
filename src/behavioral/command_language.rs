//! Behavioral pattern: Interpreter (second example)
//! Example: a tiny robot command language
//!
//! Text lines such as `MOVE FORWARD 10` or `TURN LEFT` are parsed into
//! `Instruction`s, then interpreted one by one against a `Robot` context.

use std::fmt;

use crate::console::Console;
use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    const CLOCKWISE: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    pub fn right(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    pub fn left(self) -> Self {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    /// Unit step `(dx, dy)` when moving forward; north is +y.
    fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        };
        f.write_str(name)
    }
}

/// The interpretation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pub x: i64,
    pub y: i64,
    pub heading: Heading,
}

impl Default for Robot {
    fn default() -> Self {
        Robot {
            x: 0,
            y: 0,
            heading: Heading::North,
        }
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position: ({}, {}), Heading: {}",
            self.x, self.y, self.heading
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Move { step: Step, distance: i64 },
    Turn(Side),
}

impl Instruction {
    pub fn interpret(&self, robot: &mut Robot) {
        match *self {
            Instruction::Move { step, distance } => {
                let (dx, dy) = robot.heading.delta();
                let sign = match step {
                    Step::Forward => 1,
                    Step::Backward => -1,
                };
                // Wraps on overflow; huge distances never panic.
                let distance = distance.wrapping_mul(sign);
                robot.x = robot.x.wrapping_add(dx.wrapping_mul(distance));
                robot.y = robot.y.wrapping_add(dy.wrapping_mul(distance));
            }
            Instruction::Turn(Side::Left) => robot.heading = robot.heading.left(),
            Instruction::Turn(Side::Right) => robot.heading = robot.heading.right(),
        }
    }

    /// Parses one line.
    ///
    /// Returns `Ok(None)` for lines that are not instructions at all (unknown
    /// verb or wrong word count), which the program parser skips. Malformed
    /// arguments to a known verb are errors.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [verb, direction, distance] if verb.eq_ignore_ascii_case("MOVE") => {
                let step = if direction.eq_ignore_ascii_case("FORWARD") {
                    Step::Forward
                } else if direction.eq_ignore_ascii_case("BACKWARD") {
                    Step::Backward
                } else {
                    return Err(PatternError::invalid_instruction(
                        line,
                        format!("unknown direction '{direction}'"),
                    ));
                };
                let distance = distance.parse().map_err(|_| {
                    PatternError::invalid_instruction(line, format!("'{distance}' is not a distance"))
                })?;
                Ok(Some(Instruction::Move { step, distance }))
            }
            [verb, side] if verb.eq_ignore_ascii_case("TURN") => {
                if side.eq_ignore_ascii_case("LEFT") {
                    Ok(Some(Instruction::Turn(Side::Left)))
                } else if side.eq_ignore_ascii_case("RIGHT") {
                    Ok(Some(Instruction::Turn(Side::Right)))
                } else {
                    Err(PatternError::invalid_instruction(
                        line,
                        format!("unknown side '{side}'"),
                    ))
                }
            }
            _ => Ok(None),
        }
    }
}

pub fn parse_program<'a, I>(lines: I) -> Result<Vec<Instruction>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut program = Vec::new();
    for line in lines {
        match Instruction::parse(line)? {
            Some(instruction) => program.push(instruction),
            None => tracing::debug!(line, "skipping unrecognised line"),
        }
    }
    Ok(program)
}

pub const SAMPLE_PROGRAM: [&str; 5] = [
    "MOVE FORWARD 10",
    "TURN RIGHT",
    "MOVE FORWARD 5",
    "TURN LEFT",
    "MOVE BACKWARD 3",
];

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let program = parse_program(SAMPLE_PROGRAM)?;
    let mut robot = Robot::default();

    console.line("Executing commands...")?;
    for instruction in &program {
        instruction.interpret(&mut robot);
        console.line(robot)?;
    }
    Ok(())
}
