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

use crate::commands::helps::hdlconf;
use crate::core::context::Context;
use crate::util::anyerror::AnyError;
use std::path::PathBuf;
use std::str::FromStr;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help, Subcommand};

use crate::commands::all::All;
use crate::commands::ghdl_ls::GhdlLs;
use crate::commands::hdl_checker::HdlChecker;
use crate::commands::help::Help as HelpCommand;
use crate::commands::vhdl_ls::VhdlLs;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, PartialEq)]
pub struct Hdlconf {
    version: bool,
    config: Option<PathBuf>,
    command: Option<HdlconfSubcommand>,
}

impl Command for Hdlconf {
    fn interpret(cli: &mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(hdlconf::HELP))?;
        // need to set this coloring mode ASAP
        match cli
            .get(Arg::option("color").value("when"))?
            .unwrap_or(ColorMode::Auto)
        {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => (),
        }
        Ok(Hdlconf {
            version: cli.check(Arg::flag("version"))?,
            config: cli.get(Arg::option("config").value("file"))?,
            command: cli.nest(Arg::subcommand("command"))?,
        })
    }

    fn execute(self) -> proc::Result {
        // prioritize version information
        if self.version == true {
            println!("hdlconf {}", VERSION);
            Ok(())
        // run the specified command
        } else if let Some(c) = self.command {
            let context = match c.bypass_check() {
                true => Context::new(),
                false => Context::new().settings(self.config.as_ref())?,
            };
            c.execute(&context)
        // if no command is given then print default help
        } else {
            println!("{}", hdlconf::HELP);
            Ok(())
        }
    }
}

#[derive(Debug, PartialEq)]
enum HdlconfSubcommand {
    HdlChecker(HdlChecker),
    VhdlLs(VhdlLs),
    GhdlLs(GhdlLs),
    All(All),
    Help(HelpCommand),
}

impl Subcommand<Context> for HdlconfSubcommand {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        match cli
            .select(&["hdl-checker", "vhdl-ls", "ghdl-ls", "all", "help"])?
            .as_ref()
        {
            "hdl-checker" => Ok(Self::HdlChecker(HdlChecker::interpret(cli)?)),
            "vhdl-ls" => Ok(Self::VhdlLs(VhdlLs::interpret(cli)?)),
            "ghdl-ls" => Ok(Self::GhdlLs(GhdlLs::interpret(cli)?)),
            "all" => Ok(Self::All(All::interpret(cli)?)),
            "help" => Ok(Self::Help(HelpCommand::interpret(cli)?)),
            _ => panic!("an unimplemented command was passed through!"),
        }
    }

    fn execute(self, context: &Context) -> proc::Result {
        match self {
            Self::HdlChecker(c) => c.execute(context),
            Self::VhdlLs(c) => c.execute(context),
            Self::GhdlLs(c) => c.execute(context),
            Self::All(c) => c.execute(context),
            Self::Help(c) => c.execute(&()),
        }
    }
}

impl HdlconfSubcommand {
    /// Commands that do not read the configuration file.
    fn bypass_check(&self) -> bool {
        match self {
            Self::Help(_) => true,
            _ => false,
        }
    }
}

#[derive(Debug, PartialEq)]
enum ColorMode {
    Always,
    Never,
    Auto,
}

impl FromStr for ColorMode {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            _ => Err(AnyError(format!(
                "unknown color mode {:?}: expected auto, always, or never",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::ghdlls::GHDL_LS_FILE;
    use crate::core::hdlchecker;
    use crate::core::vhdlls::VHDL_LS_FILE;
    use crate::error::Error;
    use cliproc::cli::ErrorKind;
    use cliproc::ExitCode;
    use std::path::Path;

    fn args(a: &[&str]) -> impl Iterator<Item = String> {
        std::iter::once(String::from("hdlconf"))
            .chain(a.iter().map(|s| s.to_string()))
            .collect::<Vec<String>>()
            .into_iter()
    }

    fn interpret(a: &[&str]) -> cli::Result<Hdlconf> {
        let mut cli = Cli::default().parse(args(a)).save();
        let program = Hdlconf::interpret(&mut cli)?;
        cli.empty()?;
        Ok(program)
    }

    /// Creates a blueprint with a single VHDL unit in `dir`.
    fn blueprint(dir: &Path) -> String {
        let path = dir.join("blueprint.tsv");
        std::fs::write(&path, "VHDL\twork\ta.vhd\n").unwrap();
        path.display().to_string()
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn color_mode_from_str() {
        assert_eq!(ColorMode::from_str("always"), Ok(ColorMode::Always));
        assert_eq!(ColorMode::from_str("never"), Ok(ColorMode::Never));
        assert_eq!(ColorMode::from_str("auto"), Ok(ColorMode::Auto));
        assert!(ColorMode::from_str("sometimes").is_err());
    }

    #[test]
    fn writes_into_output_dir() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let bp = blueprint(src.path());
        let out_str = out.path().display().to_string();

        interpret(&["vhdl-ls", "--blueprint", &bp, "--output", &out_str])
            .unwrap()
            .execute()
            .unwrap();
        assert_eq!(listing(out.path()), vec![VHDL_LS_FILE]);
        // nothing is written beside the input
        assert_eq!(listing(src.path()), vec!["blueprint.tsv"]);
    }

    #[test]
    fn all_writes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let bp = blueprint(dir.path());
        let out = dir.path().display().to_string();

        interpret(&["all", "--blueprint", &bp, "--output", &out, "--simulator", "ghdl"])
            .unwrap()
            .execute()
            .unwrap();
        let mut expected = vec![
            String::from("blueprint.tsv"),
            String::from(GHDL_LS_FILE),
            String::from(VHDL_LS_FILE),
            String::from(hdlchecker::file_name()),
        ];
        expected.sort();
        assert_eq!(listing(dir.path()), expected);
    }

    #[test]
    fn reject_unknown_simulator_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let bp = blueprint(dir.path());
        let out = dir.path().display().to_string();

        match interpret(&[
            "hdl-checker",
            "--simulator",
            "bogus",
            "--blueprint",
            &bp,
            "--output",
            &out,
        ]) {
            Err(e) => assert_eq!(e.kind(), ErrorKind::BadType),
            Ok(r) => panic!("expected a bad value, got {:?}", r),
        }
        assert_eq!(listing(dir.path()), vec!["blueprint.tsv"]);
    }

    #[test]
    fn reject_blueprint_with_vunit() {
        let dir = tempfile::tempdir().unwrap();
        let bp = blueprint(dir.path());
        let export = dir.path().join("export.json").display().to_string();
        let out = dir.path().display().to_string();

        let err = interpret(&["ghdl-ls", "--blueprint", &bp, "--vunit", &export, "--output", &out])
            .unwrap()
            .execute()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ConflictingInputs)
        ));
        assert_eq!(listing(dir.path()), vec!["blueprint.tsv"]);
    }

    #[test]
    fn reject_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let bp = blueprint(dir.path());
        let missing = dir.path().join("build");
        let out = missing.display().to_string();

        let err = interpret(&["vhdl-ls", "--blueprint", &bp, "--output", &out])
            .unwrap()
            .execute()
            .unwrap_err();
        match err.downcast_ref::<Error>() {
            Some(Error::PathNotFound(p, _)) => assert_eq!(p, &missing),
            r => panic!("expected path not found, got {:?}", r),
        }
        assert_eq!(missing.exists(), false);
    }

    #[test]
    fn failure_exits_nonzero() {
        let dir = tempfile::tempdir().unwrap();
        let bp = blueprint(dir.path());
        let out = dir.path().join("build").display().to_string();

        // error while executing
        let code = Cli::default()
            .parse(args(&["vhdl-ls", "--blueprint", &bp, "--output", &out]))
            .go::<Hdlconf>();
        assert_ne!(code, ExitCode::SUCCESS);
        // error while interpreting
        let code = Cli::default()
            .parse(args(&["hdl-checker", "--simulator", "bogus", "--blueprint", &bp]))
            .go::<Hdlconf>();
        assert_ne!(code, ExitCode::SUCCESS);
        // success for comparison
        let here = dir.path().display().to_string();
        let code = Cli::default()
            .parse(args(&["vhdl-ls", "--blueprint", &bp, "--output", &here]))
            .go::<Hdlconf>();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn error_message_names_the_problem() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("build").display().to_string();
        let bp = blueprint(dir.path());

        let err = interpret(&["vhdl-ls", "--blueprint", &bp, "--output", &out])
            .unwrap()
            .execute()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("does not exist"));
        assert!(msg.contains("build"));
    }
}
