//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("simulator {0:?} is not supported{1}")]
    UnknownSimulator(String, Hint),
    #[error("output directory {0:?} does not exist{1}")]
    PathNotFound(PathBuf, Hint),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to serialize {0}: {1}")]
    Serialize(String, LastError),
    #[error("invalid blueprint record on line {0}: {1}")]
    BadBlueprint(usize, LastError),
    #[error("invalid vunit export: {0}")]
    BadVunitExport(LastError),
    #[error("failed to load configuration {0:?}: {1}")]
    ConfigNotLoaded(PathBuf, LastError),
    #[error("no compile order source was provided{0}")]
    MissingInput(Hint),
    #[error("options \"--blueprint\" and \"--vunit\" cannot be used together")]
    ConflictingInputs,
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

impl Error {
    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    SimulatorList,
    OutputDir,
    InputSource,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::SimulatorList => "supported simulators are msim, xvhdl, ghdl, and fallback",
            Self::OutputDir => {
                "create the directory first or pass an existing directory to \"--output\""
            }
            Self::InputSource => {
                "use \"--blueprint\" or \"--vunit\" to name the file holding the compile order"
            }
        };
        write!(
            f,
            "\n\n{}: {}",
            "hint".green(),
            Error::lowerize(message.to_string())
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowerize_messages() {
        assert_eq!(
            Error::lowerize(String::from("No such file or directory")),
            "no such file or directory"
        );
        // all-caps acronyms stay intact
        assert_eq!(
            Error::lowerize(String::from("TOML parse error")),
            "TOML parse error"
        );
        assert_eq!(Error::lowerize(String::new()), "");
    }

    #[test]
    fn last_error_is_lowered() {
        let e = Error::BadVunitExport(LastError(String::from("Missing field `files`")));
        assert_eq!(e.to_string(), "invalid vunit export: missing field `files`");
    }
}
