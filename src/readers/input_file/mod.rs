//! Reader for the line-oriented input script.
//!
//! One command per line, followed by its arguments. Everything after a `#` is a comment and
//! blank lines are ignored. Later commands override earlier ones.
pub mod commands;

use std::io::BufRead;

use log::debug;

use crate::{
    errors::{MdError, Result},
    readers::run_settings::RunSettings,
};

use self::commands::Command;

/// Parses a script into [`RunSettings`], starting from the defaults. `path` only labels errors.
pub fn parse_script<R: BufRead>(reader: R, path: &str) -> Result<RunSettings> {
    let mut settings = RunSettings::default();

    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line.map_err(|e| MdError::DataFileError {
            path: path.to_string(),
            line: line_num,
            source: e,
        })?;

        // Considering only the part of the line that is before the commented part.
        let uncommented = line
            .split_once('#')
            .map(|(before, _)| before)
            .unwrap_or(line.as_str())
            .trim();
        if uncommented.is_empty() {
            continue;
        }

        let line_split: Vec<&str> = uncommented.split_whitespace().collect();
        let command = line_split[0];
        let args = &line_split[1..];

        match Command::from_str(command) {
            Some(cmd) => {
                debug!("line {}: {} {:?}", line_num, command, args);
                cmd.run(args, line_num, &mut settings)?
            }
            None => {
                return Err(MdError::UnknownCommand {
                    command: command.to_string(),
                    line: line_num,
                })
            }
        }
    }
    Ok(settings)
}
