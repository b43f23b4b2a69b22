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
use std::cell::RefCell;
use std::fmt::Display;

/// A sink for diagnostic messages.
///
/// Messages are advisory; writing one never fails.
pub trait Log {
    fn info(&self, msg: &str);

    fn warning(&self, msg: &str);
}

/// Writes diagnostics to the standard output with a colored prefix.
#[derive(Debug, Default, PartialEq)]
pub struct Console;

impl Log for Console {
    fn info(&self, msg: &str) {
        println!("info: {}", msg);
    }

    fn warning(&self, msg: &str) {
        println!("{}: {}", "warning".yellow(), msg);
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Level {
    Info,
    Warning,
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Info => "info",
                Self::Warning => "warning",
            }
        )
    }
}

/// Keeps every diagnostic in memory in the order it was written.
#[derive(Debug, Default)]
pub struct Record(RefCell<Vec<(Level, String)>>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded messages.
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.0.borrow().clone()
    }

    /// Counts the recorded messages at the given `level`.
    pub fn count(&self, level: Level) -> usize {
        self.0.borrow().iter().filter(|(l, _)| l == &level).count()
    }
}

impl Log for Record {
    fn info(&self, msg: &str) {
        self.0.borrow_mut().push((Level::Info, msg.to_string()));
    }

    fn warning(&self, msg: &str) {
        self.0.borrow_mut().push((Level::Warning, msg.to_string()));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn record_keeps_order() {
        let log = Record::new();
        log.warning("experimental support for ghdl-ls");
        log.info("created: hdl-prj.json @ /tmp/hdl-prj.json");
        assert_eq!(
            log.entries(),
            vec![
                (
                    Level::Warning,
                    String::from("experimental support for ghdl-ls")
                ),
                (
                    Level::Info,
                    String::from("created: hdl-prj.json @ /tmp/hdl-prj.json")
                ),
            ]
        );
        assert_eq!(log.count(Level::Info), 1);
        assert_eq!(log.count(Level::Warning), 1);
        assert_eq!(Level::Warning.to_string(), "warning");
    }
}
