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

use super::blueprint::Blueprint;
use super::config::{Config, CONFIG_FILE};
use super::emitter::Emitter;
use super::simulator::Simulator;
use super::unit::{CompileOrderProvider, DEFAULT_VHDL_STANDARD};
use super::vunit::VunitExport;
use crate::error::{Error, Hint};
use crate::util::log::Console;
use std::path::{Path, PathBuf};

/// Where the compile order is read from.
#[derive(Debug, PartialEq, Clone)]
pub enum Source {
    Blueprint(PathBuf),
    Vunit(PathBuf),
}

/// Settings shared by every command, merged from the configuration file and
/// built-in defaults. Command-line values passed to the `select_*` functions
/// take precedence over both.
#[derive(Debug, PartialEq)]
pub struct Context {
    config: Config,
}

impl Context {
    pub fn new() -> Context {
        Context {
            config: Config::new(),
        }
    }

    /// Loads the configuration file.
    ///
    /// An explicit `path` must exist. Otherwise the file is searched for in the
    /// current working directory and is skipped when missing.
    pub fn settings(mut self, path: Option<&PathBuf>) -> Result<Context, Error> {
        self.config = match path {
            Some(p) => Config::from_file(p)?,
            None => {
                let p = Path::new(CONFIG_FILE);
                match p.exists() {
                    true => Config::from_file(p)?,
                    false => Config::new(),
                }
            }
        };
        Ok(self)
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn select_source(
        &self,
        blueprint: &Option<PathBuf>,
        vunit: &Option<PathBuf>,
    ) -> Result<Source, Error> {
        match (blueprint, vunit) {
            (Some(_), Some(_)) => Err(Error::ConflictingInputs),
            (Some(b), None) => Ok(Source::Blueprint(b.clone())),
            (None, Some(v)) => Ok(Source::Vunit(v.clone())),
            (None, None) => match (self.config.get_blueprint(), self.config.get_vunit()) {
                (Some(_), Some(_)) => Err(Error::ConflictingInputs),
                (Some(b), None) => Ok(Source::Blueprint(b.clone())),
                (None, Some(v)) => Ok(Source::Vunit(v.clone())),
                (None, None) => Err(Error::MissingInput(Hint::InputSource)),
            },
        }
    }

    pub fn select_standard(&self, standard: &Option<String>) -> String {
        standard
            .as_ref()
            .or(self.config.get_standard())
            .map(|s| s.to_string())
            .unwrap_or(String::from(DEFAULT_VHDL_STANDARD))
    }

    pub fn select_output(&self, output: &Option<PathBuf>) -> PathBuf {
        output
            .as_ref()
            .or(self.config.get_output())
            .cloned()
            .unwrap_or(PathBuf::from("."))
    }

    pub fn select_simulator(&self, simulator: &Option<Simulator>) -> Simulator {
        simulator
            .or(self.config.get_simulator().copied())
            .unwrap_or_default()
    }

    /// Reads the compile order from the selected source.
    pub fn load_project(
        &self,
        source: &Source,
        standard: &str,
    ) -> Result<Box<dyn CompileOrderProvider>, Error> {
        let project: Box<dyn CompileOrderProvider> = match source {
            Source::Blueprint(p) => Box::new(Blueprint::from_path(p, standard)?),
            Source::Vunit(p) => Box::new(VunitExport::from_path(p, standard)?),
        };
        Ok(project)
    }

    /// Creates an emitter that reports to the console.
    pub fn emitter(&self) -> Emitter<Console> {
        let emitter = Emitter::new(Console);
        match self.config.get_analysis() {
            Some(opts) => emitter.analysis(opts.clone()),
            None => emitter,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn with_config(contents: &str) -> (tempfile::TempDir, Context) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, contents).unwrap();
        let ctx = Context::new().settings(Some(&path)).unwrap();
        (dir, ctx)
    }

    #[test]
    fn defaults_without_config() {
        let ctx = Context::new();
        assert_eq!(ctx.select_standard(&None), "2008");
        assert_eq!(ctx.select_output(&None), PathBuf::from("."));
        assert_eq!(ctx.select_simulator(&None), Simulator::Fallback);
        assert!(matches!(
            ctx.select_source(&None, &None),
            Err(Error::MissingInput(_))
        ));
    }

    #[test]
    fn command_line_over_config() {
        let (_dir, ctx) = with_config(
            "[input]\nvunit = \"export.json\"\nstandard = \"93\"\n[hdl-checker]\nsimulator = \"msim\"\n",
        );
        assert_eq!(ctx.select_standard(&None), "93");
        assert_eq!(ctx.select_standard(&Some(String::from("2019"))), "2019");
        assert_eq!(ctx.select_simulator(&None), Simulator::Msim);
        assert_eq!(
            ctx.select_simulator(&Some(Simulator::Xvhdl)),
            Simulator::Xvhdl
        );
        assert_eq!(
            ctx.select_source(&None, &None).unwrap(),
            Source::Vunit(_dir.path().join("export.json"))
        );
        assert_eq!(
            ctx.select_source(&Some(PathBuf::from("blueprint.tsv")), &None)
                .unwrap(),
            Source::Blueprint(PathBuf::from("blueprint.tsv"))
        );
    }

    #[test]
    fn conflicting_sources() {
        let ctx = Context::new();
        assert!(matches!(
            ctx.select_source(&Some(PathBuf::from("a")), &Some(PathBuf::from("b"))),
            Err(Error::ConflictingInputs)
        ));
    }

    #[test]
    fn missing_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        assert!(matches!(
            Context::new().settings(Some(&path)),
            Err(Error::ConfigNotLoaded(..))
        ));
    }

    #[test]
    fn load_blueprint_project() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blueprint.tsv");
        std::fs::write(&path, "VHDL\twork\ta.vhd\nVHDL\twork\tb.vhd\n").unwrap();

        let ctx = Context::new();
        let project = ctx
            .load_project(&Source::Blueprint(path), &ctx.select_standard(&None))
            .unwrap();
        assert_eq!(project.get_compile_order().len(), 2);
        assert_eq!(project.get_compile_order()[1].get_vhdl_standard(), "2008");
    }

    #[test]
    fn emitter_uses_configured_analysis() {
        let (dir, ctx) = with_config("[ghdl-ls]\nanalysis = [\"--std=08\"]\n");
        let project = crate::core::unit::CompileOrder::new();
        let path = ctx.emitter().emit_ghdl_ls(&project, dir.path()).unwrap();
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("--std=08"));
        assert_eq!(contents.contains("-fexplicit"), false);
    }
}
