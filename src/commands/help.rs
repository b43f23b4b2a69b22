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

use crate::commands::helps::help::HELP;
use crate::commands::manuals;
use crate::util::anyerror::AnyError;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Help {
    list: bool,
    topic: Option<Topic>,
}

impl Subcommand<()> for Help {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(cliproc::Help::with(HELP))?;
        Ok(Help {
            list: cli.check(Arg::flag("list"))?,
            topic: cli.get(Arg::positional("topic"))?,
        })
    }

    fn execute(self, _: &()) -> proc::Result {
        self.run();
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Topic {
    HdlChecker,
    VhdlLs,
    GhdlLs,
    All,
    Config,
}

impl Topic {
    const LIST: [&'static str; 5] = ["hdl-checker", "vhdl-ls", "ghdl-ls", "all", "config"];

    fn list_all() -> String {
        Self::LIST.into_iter().fold(String::new(), |mut acc, x| {
            acc.push_str(&format!("{}\n", x));
            acc
        })
    }

    /// Transforms the variant to its corresponding manual page.
    fn as_manual(&self) -> &str {
        use Topic::*;
        match &self {
            HdlChecker => manuals::hdl_checker::MANUAL,
            VhdlLs => manuals::vhdl_ls::MANUAL,
            GhdlLs => manuals::ghdl_ls::MANUAL,
            All => manuals::all::MANUAL,
            Config => manuals::config::MANUAL,
        }
    }
}

impl std::str::FromStr for Topic {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "hdl-checker" => Self::HdlChecker,
            "vhdl-ls" => Self::VhdlLs,
            "ghdl-ls" => Self::GhdlLs,
            "all" => Self::All,
            "config" => Self::Config,
            _ => return Err(AnyError(format!("topic {:?} not found", s))),
        })
    }
}

impl Help {
    fn run(&self) {
        if self.list == true {
            println!("{}", Topic::list_all());
        } else {
            let contents = match &self.topic {
                Some(t) => t.as_manual(),
                None => manuals::hdlconf::MANUAL,
            };
            println!("{}", contents);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn every_listed_topic_parses() {
        for name in Topic::LIST {
            assert!(Topic::from_str(name).is_ok());
        }
        assert_eq!(Topic::list_all().lines().count(), Topic::LIST.len());
    }

    #[test]
    fn unknown_topic() {
        assert_eq!(
            Topic::from_str("build"),
            Err(AnyError(String::from("topic \"build\" not found")))
        );
    }

    #[test]
    fn manual_names_command() {
        assert!(Topic::VhdlLs.as_manual().contains("vhdl_ls.toml"));
        assert!(Topic::GhdlLs.as_manual().contains("hdl-prj.json"));
        assert!(Topic::Config.as_manual().contains("hdlconf.toml"));
    }
}
