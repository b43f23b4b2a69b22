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

use super::simulator::Simulator;
use crate::error::{Error, LastError};
use crate::util::filesystem;
use serde_derive::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE: &str = "hdlconf.toml";

#[derive(Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    input: Option<Input>,
    output: Option<Output>,
    #[serde(rename = "hdl-checker")]
    hdl_checker: Option<HdlChecker>,
    #[serde(rename = "ghdl-ls")]
    ghdl_ls: Option<GhdlLs>,
}

#[derive(Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Input {
    blueprint: Option<PathBuf>,
    vunit: Option<PathBuf>,
    standard: Option<String>,
}

#[derive(Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Output {
    directory: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HdlChecker {
    simulator: Option<Simulator>,
}

#[derive(Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GhdlLs {
    analysis: Option<Vec<String>>,
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the configuration stored at `path`.
    ///
    /// Relative paths written inside the file are resolved against the file's
    /// directory.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        // open file
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigNotLoaded(path.to_path_buf(), LastError(e.to_string())))?;
        // parse toml syntax
        let cfg = Self::from_str(&contents)
            .map_err(|e| Error::ConfigNotLoaded(path.to_path_buf(), LastError(e.to_string())))?;
        match path.parent() {
            Some(root) => Ok(cfg.relative_to(root)),
            None => Ok(cfg),
        }
    }

    fn relative_to(mut self, root: &Path) -> Self {
        if let Some(input) = &mut self.input {
            input.blueprint = input
                .blueprint
                .as_ref()
                .map(|p| filesystem::resolve_rel_path(root, p));
            input.vunit = input
                .vunit
                .as_ref()
                .map(|p| filesystem::resolve_rel_path(root, p));
        }
        if let Some(output) = &mut self.output {
            output.directory = output
                .directory
                .as_ref()
                .map(|p| filesystem::resolve_rel_path(root, p));
        }
        self
    }

    pub fn get_blueprint(&self) -> Option<&PathBuf> {
        self.input.as_ref()?.blueprint.as_ref()
    }

    pub fn get_vunit(&self) -> Option<&PathBuf> {
        self.input.as_ref()?.vunit.as_ref()
    }

    pub fn get_standard(&self) -> Option<&String> {
        self.input.as_ref()?.standard.as_ref()
    }

    pub fn get_output(&self) -> Option<&PathBuf> {
        self.output.as_ref()?.directory.as_ref()
    }

    pub fn get_simulator(&self) -> Option<&Simulator> {
        self.hdl_checker.as_ref()?.simulator.as_ref()
    }

    pub fn get_analysis(&self) -> Option<&Vec<String>> {
        self.ghdl_ls.as_ref()?.analysis.as_ref()
    }
}
