//! Headless driver: runs line-oriented command scripts against a registry.
//!
//! ```text
//! # comment
//! add 101 covered ev
//! park ev
//! remove 101
//! list
//! ```

use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::command::{Command, StatusMessage};
use crate::registry::{yes_no, Slot, SlotRegistry};

pub const EMPTY_LISTING: &str = "No parking slots added yet.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine {
    Run(Command),
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unexpected argument '{arg}' for '{command}'")]
    UnexpectedArgument { command: &'static str, arg: String },
}

/// Counts reported after a script finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub succeeded: usize,
    pub rejected: usize,
    pub malformed: usize,
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ScriptLine>, ScriptError> {
    let line = line.split('#').next().unwrap_or("").trim();
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let parsed = match verb.to_ascii_lowercase().as_str() {
        "add" => {
            let (slot_no, flags) = match rest.split_first() {
                Some((slot_no, flags)) => (*slot_no, flags),
                None => ("", &[][..]),
            };
            let (covered, ev) = parse_flags("add", flags)?;
            ScriptLine::Run(Command::AddSlot {
                slot_no: slot_no.to_string(),
                covered,
                ev,
            })
        }
        "park" => {
            let (needs_covered, needs_ev) = parse_flags("park", &rest)?;
            ScriptLine::Run(Command::Allocate {
                needs_covered,
                needs_ev,
            })
        }
        "remove" => {
            if let Some(extra) = rest.get(1) {
                return Err(ScriptError::UnexpectedArgument {
                    command: "remove",
                    arg: extra.to_string(),
                });
            }
            ScriptLine::Run(Command::Release {
                slot_no: rest.first().copied().unwrap_or("").to_string(),
            })
        }
        "list" => {
            if let Some(extra) = rest.first() {
                return Err(ScriptError::UnexpectedArgument {
                    command: "list",
                    arg: extra.to_string(),
                });
            }
            ScriptLine::List
        }
        _ => return Err(ScriptError::UnknownCommand(verb.to_string())),
    };
    Ok(Some(parsed))
}

fn parse_flags(command: &'static str, flags: &[&str]) -> Result<(bool, bool), ScriptError> {
    let mut covered = false;
    let mut ev = false;
    for flag in flags {
        match flag.to_ascii_lowercase().as_str() {
            "covered" => covered = true,
            "ev" => ev = true,
            _ => {
                return Err(ScriptError::UnexpectedArgument {
                    command,
                    arg: flag.to_string(),
                })
            }
        }
    }
    Ok((covered, ev))
}

/// Runs every line of `input`, writing one result per command to `out`.
///
/// Rejected commands and malformed lines are reported and skipped; only
/// I/O failures stop the script.
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    registry: &mut SlotRegistry,
    format: ListFormat,
) -> io::Result<ScriptReport> {
    let mut report = ScriptReport::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ScriptLine::List)) => write_listing(out, &registry.list(), format)?,
            Ok(Some(ScriptLine::Run(command))) => {
                let result = command.apply(registry);
                let message = StatusMessage::from(&result);
                if message.is_error() {
                    report.rejected += 1;
                } else {
                    report.succeeded += 1;
                }
                writeln!(out, "{}", message.text)?;
            }
            Err(err) => {
                report.malformed += 1;
                tracing::warn!(line = index + 1, error = %err, "Skipping malformed script line");
                writeln!(out, "Line {}: {}", index + 1, err)?;
            }
        }
    }

    tracing::info!(
        succeeded = report.succeeded,
        rejected = report.rejected,
        malformed = report.malformed,
        "Script finished"
    );
    Ok(report)
}

/// Writes the slot listing as an aligned table or a JSON array.
pub fn write_listing<W: Write>(out: &mut W, slots: &[Slot], format: ListFormat) -> io::Result<()> {
    match format {
        ListFormat::Json => {
            let json = serde_json::to_string(slots).map_err(io::Error::other)?;
            writeln!(out, "{}", json)
        }
        ListFormat::Table if slots.is_empty() => writeln!(out, "{}", EMPTY_LISTING),
        ListFormat::Table => {
            writeln!(
                out,
                "{:<8} {:<8} {:<12} {}",
                "Slot No", "Covered", "EV Charging", "Occupied"
            )?;
            for slot in slots {
                writeln!(
                    out,
                    "{:<8} {:<8} {:<12} {}",
                    slot.slot_no,
                    yes_no(slot.covered),
                    yes_no(slot.ev_charging),
                    slot.status_label()
                )?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   # just a note"), Ok(None));
    }

    #[test]
    fn add_flags_in_any_order() {
        assert_eq!(
            parse_line("add 7 ev covered"),
            Ok(Some(ScriptLine::Run(Command::AddSlot {
                slot_no: "7".to_string(),
                covered: true,
                ev: true,
            })))
        );
    }

    #[test]
    fn add_without_number_reaches_registry_validation() {
        let mut registry = SlotRegistry::new();
        let mut out = Vec::new();
        run_script("add\n".as_bytes(), &mut out, &mut registry, ListFormat::Table).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Please enter a valid positive slot number.\n"
        );
    }

    #[test]
    fn remove_of_out_of_range_number_is_not_found() {
        let mut registry = SlotRegistry::new();
        let mut out = Vec::new();
        let report = run_script(
            "remove 99999999999999999999\nremove 12abc\n".as_bytes(),
            &mut out,
            &mut registry,
            ListFormat::Table,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: Slot 99999999999999999999 does not exist.\nPlease enter a valid slot number.\n"
        );
        assert_eq!(report.rejected, 2);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert_eq!(
            parse_line("park roof"),
            Err(ScriptError::UnexpectedArgument {
                command: "park",
                arg: "roof".to_string(),
            })
        );
    }

    #[test]
    fn unknown_verb_is_reported_with_line_number() {
        let mut registry = SlotRegistry::new();
        let mut out = Vec::new();
        let report = run_script(
            "list\nfly 3\n".as_bytes(),
            &mut out,
            &mut registry,
            ListFormat::Table,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(EMPTY_LISTING));
        assert!(text.contains("Line 2: unknown command 'fly'"));
        assert_eq!(report.malformed, 1);
    }

    #[test]
    fn json_listing_uses_field_names() {
        let mut out = Vec::new();
        write_listing(&mut out, &[Slot::new(3, true, false)], ListFormat::Json).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[{\"slot_no\":3,\"covered\":true,\"ev_charging\":false,\"occupied\":false}]\n"
        );
    }
}
