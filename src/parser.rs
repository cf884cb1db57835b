//! Line grammar for the command language.
//!
//! ```text
//! PLACE <x>,<y>,<ORIENTATION>
//! MOVE | LEFT | RIGHT | REPORT
//! ```
//!
//! Matching is case-insensitive and ignores whitespace around the line.
//! Inside the `PLACE` argument list no whitespace is allowed.

use crate::command::Command;
use crate::error::RobotError;
use std::str::FromStr;

const PLACE_KEYWORD: &str = "PLACE ";

/// Parses one line into a [`Command`], or `None` if it is not recognized.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim().to_uppercase();
    if line.is_empty() {
        return None;
    }

    if let Some(args) = line.strip_prefix(PLACE_KEYWORD) {
        return parse_place_args(args.trim_start());
    }

    match line.as_str() {
        "MOVE" => Some(Command::Move),
        "LEFT" => Some(Command::Left),
        "RIGHT" => Some(Command::Right),
        "REPORT" => Some(Command::Report),
        _ => None,
    }
}

/// Parses `<x>,<y>,<ORIENTATION>` from an already upper-cased string.
fn parse_place_args(args: &str) -> Option<Command> {
    let mut fields = args.split(',');
    let (x, y, name) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }

    let x = parse_coordinate(x)?;
    let y = parse_coordinate(y)?;
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    let orientation = name.parse().ok()?;

    Some(Command::Place { x, y, orientation })
}

fn parse_coordinate(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only overflow can fail here; saturate so the placement is rejected as off the table.
    Some(field.parse().unwrap_or(u64::MAX))
}

impl FromStr for Command {
    type Err = RobotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_command(s).ok_or_else(|| RobotError::unrecognized(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::Orientation;

    fn place(x: u64, y: u64, orientation: Orientation) -> Option<Command> {
        Some(Command::Place { x, y, orientation })
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command("MOVE"), Some(Command::Move));
        assert_eq!(parse_command("LEFT"), Some(Command::Left));
        assert_eq!(parse_command("RIGHT"), Some(Command::Right));
        assert_eq!(parse_command("REPORT"), Some(Command::Report));
    }

    #[test]
    fn case_and_surrounding_whitespace_are_ignored() {
        assert_eq!(parse_command("  move \t"), Some(Command::Move));
        assert_eq!(parse_command("Report"), Some(Command::Report));
        assert_eq!(
            parse_command("place 1,1,north"),
            place(1, 1, Orientation::North)
        );
        assert_eq!(
            parse_command("  PLACE  1,1,NORTH  "),
            place(1, 1, Orientation::North)
        );
    }

    #[test]
    fn empty_lines_are_not_commands() {
        for line in ["", "   ", "\t", "\n"] {
            assert_eq!(parse_command(line), None, "{line:?}");
        }
    }

    #[test]
    fn malformed_place_is_not_a_command() {
        for line in [
            "PLACE",
            "PLACE ",
            "PLACE 1",
            "PLACE 1,2",
            "PLACE 1,2,3,4",
            "PLACE 1,2,NORTH,",
            "PLACE a,b,NORTH",
            "PLACE -1,0,NORTH",
            "PLACE 1.5,0,NORTH",
            "PLACE 1, 2,NORTH",
            "PLACE 1 ,2,NORTH",
            "PLACE 1,2, NORTH",
            "PLACE 1,2,UP",
            "PLACE 1,2,",
            "PLACE ,2,NORTH",
            "PLACE1,2,NORTH",
        ] {
            assert_eq!(parse_command(line), None, "{line:?}");
        }
    }

    #[test]
    fn unknown_words_are_not_commands() {
        for line in ["INVALID_COMMAND", "MOVE NOW", "MOVEX", "JUMP", "EXIT"] {
            assert_eq!(parse_command(line), None, "{line:?}");
        }
    }

    #[test]
    fn place_accepts_coordinates_of_any_size() {
        assert_eq!(
            parse_command("PLACE 4294967295,0,SOUTH"),
            place(u64::from(u32::MAX), 0, Orientation::South)
        );
        assert_eq!(
            parse_command("PLACE 99999999999,0,NORTH"),
            place(99_999_999_999, 0, Orientation::North)
        );
        assert_eq!(
            parse_command("PLACE 0,123456789012345678901234567890,EAST"),
            place(0, u64::MAX, Orientation::East)
        );
    }

    #[test]
    fn from_str_reports_the_trimmed_line() {
        let err = "  jump ".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid command: jump");
        assert_eq!("left".parse::<Command>().unwrap(), Command::Left);
    }
}
