use std::io;
use thiserror::Error;

/// Everything an example can fail with.
///
/// Most variants illustrate misuse of a pattern (a calculator with no strategy,
/// a remote with no command). `Io` covers the console sink.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("division by zero is not allowed")]
    DivisionByZero,

    #[error("no strategy has been selected")]
    NoStrategy,

    #[error("no command has been assigned")]
    NoCommand,

    #[error("vehicle is missing its {0}")]
    MissingPart(&'static str),

    #[error("participant #{0} is not registered with the mediator")]
    UnknownParticipant(usize),

    #[error("invalid instruction '{line}': {reason}")]
    InvalidInstruction { line: String, reason: String },

    #[error("failed to write to the console: {0}")]
    Io(#[from] io::Error),
}

impl PatternError {
    pub fn invalid_instruction(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInstruction {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PatternError::DivisionByZero.to_string(),
            "division by zero is not allowed"
        );
        assert_eq!(
            PatternError::MissingPart("engine").to_string(),
            "vehicle is missing its engine"
        );
        assert_eq!(
            PatternError::invalid_instruction("MOVE UP 3", "unknown direction 'UP'").to_string(),
            "invalid instruction 'MOVE UP 3': unknown direction 'UP'"
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: PatternError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, PatternError::Io(_)));
    }
}
