//! Text notation for the move commands a user can trigger.
//!
//! Each command is a face letter followed by an optional suffix:
//!
//! | text    | meaning                                 |
//! |---------|-----------------------------------------|
//! | `F`     | clockwise quarter turn                  |
//! | `F'`    | counterclockwise quarter turn           |
//! | `F''`   | half turn in a random direction         |
//! | `F2`    | clockwise half turn                     |
//! | `F2'`   | counterclockwise half turn              |
//! | `F?`    | quarter turn in a random direction      |

use std::fmt;
use std::str::FromStr;

use strum::VariantArray;
use thiserror::Error;

use crate::Face;

/// Error produced when parsing a move command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Empty string
    #[error("empty move")]
    Empty,
    /// Unknown face letter
    #[error("unknown face {0:?}")]
    UnknownFace(String),
    /// Unknown suffix after the face letter
    #[error("invalid suffix {suffix:?} on move {face}")]
    InvalidSuffix {
        /// Face that was parsed.
        face: Face,
        /// Text after the face letter.
        suffix: String,
    },
}

/// Direction of a face turn, as seen from outside the face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, VariantArray)]
pub enum TurnDirection {
    /// Clockwise.
    Clockwise,
    /// Counterclockwise.
    CounterClockwise,
}
impl TurnDirection {
    /// Returns `1` for clockwise and `-1` for counterclockwise.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }
    /// Returns the direction with the sign of `n`, or `None` if `n` is zero.
    pub const fn from_signum(n: i32) -> Option<Self> {
        match n.signum() {
            1 => Some(Self::Clockwise),
            -1 => Some(Self::CounterClockwise),
            _ => None,
        }
    }
}

/// Request to turn a face, as delivered by a move trigger.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveCommand {
    /// Face to turn.
    pub face: Face,
    /// Direction to turn, or `None` to pick one at random when the move
    /// starts.
    pub direction: Option<TurnDirection>,
    /// Number of quarter turns.
    pub amount: u8,
}
impl MoveCommand {
    /// The three commands offered for each face: clockwise, counterclockwise,
    /// and a half turn in a random direction.
    pub const ALL: [Self; 18] = {
        let mut ret = [Self::cw(Face::Front); 18];
        let mut i = 0;
        while i < 6 {
            let face = Face::VARIANTS[i];
            ret[i * 3] = Self::cw(face);
            ret[i * 3 + 1] = Self::ccw(face);
            ret[i * 3 + 2] = Self::half(face);
            i += 1;
        }
        ret
    };

    /// Returns a clockwise quarter turn.
    pub const fn cw(face: Face) -> Self {
        Self {
            face,
            direction: Some(TurnDirection::Clockwise),
            amount: 1,
        }
    }
    /// Returns a counterclockwise quarter turn.
    pub const fn ccw(face: Face) -> Self {
        Self {
            face,
            direction: Some(TurnDirection::CounterClockwise),
            amount: 1,
        }
    }
    /// Returns a half turn in a random direction.
    pub const fn half(face: Face) -> Self {
        Self {
            face,
            direction: None,
            amount: 2,
        }
    }

    /// Returns the direction as `+1`, `-1`, or `0` for random.
    pub fn direction_sign(self) -> i32 {
        self.direction.map_or(0, TurnDirection::sign)
    }

    /// Returns the signed number of quarter turns once the direction is
    /// known, using `fallback` if the command leaves it unspecified.
    pub fn signed_amount(self, fallback: TurnDirection) -> i32 {
        self.amount as i32 * self.direction.unwrap_or(fallback).sign()
    }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        match (self.amount, self.direction) {
            (1, Some(TurnDirection::Clockwise)) => Ok(()),
            (1, Some(TurnDirection::CounterClockwise)) => write!(f, "'"),
            (1, None) => write!(f, "?"),
            (2, None) => write!(f, "''"),
            (n, Some(TurnDirection::Clockwise)) => write!(f, "{n}"),
            (n, Some(TurnDirection::CounterClockwise)) => write!(f, "{n}'"),
            (n, None) => write!(f, "{n}?"),
        }
    }
}

impl FromStr for MoveCommand {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseMoveError::Empty)?;
        let suffix = chars.as_str();
        let face: Face = s[..letter.len_utf8()]
            .parse()
            .map_err(|_| ParseMoveError::UnknownFace(letter.to_string()))?;

        let invalid = || ParseMoveError::InvalidSuffix {
            face,
            suffix: suffix.to_owned(),
        };
        let digits_len = suffix
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(suffix.len());
        let (digits, rest) = suffix.split_at(digits_len);
        let amount = match digits {
            "" => None,
            _ => Some(digits.parse::<u8>().map_err(|_| invalid())?),
        };
        let (amount, direction) = match (amount, rest) {
            (None, "") => (1, Some(TurnDirection::Clockwise)),
            (None, "'") => (1, Some(TurnDirection::CounterClockwise)),
            (None, "''") => (2, None),
            (None, "?") => (1, None),
            (Some(n), "") => (n, Some(TurnDirection::Clockwise)),
            (Some(n), "'") => (n, Some(TurnDirection::CounterClockwise)),
            (Some(n), "?") => (n, None),
            _ => return Err(invalid()),
        };
        if amount == 0 {
            return Err(invalid());
        }
        Ok(Self {
            face,
            direction,
            amount,
        })
    }
}

/// Parses a whitespace-separated sequence of move commands.
pub fn parse_sequence(s: &str) -> Result<Vec<MoveCommand>, ParseMoveError> {
    s.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_suffixes() {
        let parse = |s: &str| s.parse::<MoveCommand>();
        assert_eq!(parse("F"), Ok(MoveCommand::cw(Face::Front)));
        assert_eq!(parse("U'"), Ok(MoveCommand::ccw(Face::Up)));
        assert_eq!(parse("R''"), Ok(MoveCommand::half(Face::Right)));
        let d2 = parse("D2'").unwrap();
        assert_eq!(d2.signed_amount(TurnDirection::Clockwise), -2);
        assert_eq!(parse("L?").unwrap().direction, None);
    }

    #[test]
    fn test_parse_errors() {
        let parse = |s: &str| s.parse::<MoveCommand>();
        assert_eq!(parse(""), Err(ParseMoveError::Empty));
        assert_eq!(parse("X"), Err(ParseMoveError::UnknownFace("X".to_owned())));
        assert!(matches!(parse("F0"), Err(ParseMoveError::InvalidSuffix { .. })));
        assert!(matches!(parse("F'''"), Err(ParseMoveError::InvalidSuffix { .. })));
        assert!(matches!(parse("Fx"), Err(ParseMoveError::InvalidSuffix { .. })));
    }

    #[test]
    fn test_all_commands_roundtrip() {
        let text = MoveCommand::ALL.map(|m| m.to_string()).join(" ");
        assert_eq!(
            text,
            "F F' F'' B B' B'' U U' U'' D D' D'' L L' L'' R R' R''",
        );
        assert_eq!(parse_sequence(&text).unwrap(), MoveCommand::ALL.to_vec());
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(MoveCommand::cw(Face::Back).direction_sign(), 1);
        assert_eq!(MoveCommand::ccw(Face::Back).direction_sign(), -1);
        assert_eq!(MoveCommand::half(Face::Back).direction_sign(), 0);
        assert_eq!(TurnDirection::from_signum(-5), Some(TurnDirection::CounterClockwise));
        assert_eq!(TurnDirection::from_signum(0), None);
    }
}
