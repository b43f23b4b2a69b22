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

use super::ghdlls::{self, GhdlLsConfig, GHDL_LS_FILE};
use super::hdlchecker::{self, HdlCheckerConfig};
use super::simulator::Simulator;
use super::unit::CompileOrderProvider;
use super::vhdlls::{VhdlLsConfig, VHDL_LS_FILE};
use crate::error::{Error, LastError};
use crate::util::filesystem;
use crate::util::log::Log;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Writes language-server configuration files from a compile order.
///
/// Each emit operation reads the compile order once, writes exactly one file
/// into an existing output directory, and returns the absolute path to that
/// file. Existing files are overwritten.
pub struct Emitter<L: Log> {
    log: L,
    analysis: Vec<String>,
}

impl<L: Log> Emitter<L> {
    pub fn new(log: L) -> Self {
        Self {
            log,
            analysis: ghdlls::default_analysis(),
        }
    }

    /// Sets the ghdl analysis options written to the ghdl-ls config.
    pub fn analysis(mut self, opts: Vec<String>) -> Self {
        self.analysis = opts;
        self
    }

    pub fn get_log(&self) -> &L {
        &self.log
    }

    pub fn emit_hdl_checker<P: CompileOrderProvider + ?Sized>(
        &self,
        project: &P,
        output: &Path,
        simulator: Simulator,
    ) -> Result<PathBuf, Error> {
        self.log.warning("experimental support for hdl-checker");
        let dir = filesystem::resolve_dir(output)?;

        let file_name = hdlchecker::file_name();
        let cfg = HdlCheckerConfig::from_order(project.get_compile_order(), simulator);
        let contents = to_pretty_json(&cfg, file_name)?;
        self.write(&dir, file_name, &contents)
    }

    pub fn emit_vhdl_ls<P: CompileOrderProvider + ?Sized>(
        &self,
        project: &P,
        output: &Path,
    ) -> Result<PathBuf, Error> {
        let dir = filesystem::resolve_dir(output)?;

        let cfg = VhdlLsConfig::from_order(project.get_compile_order());
        self.write(&dir, VHDL_LS_FILE, &cfg.to_toml().to_string())
    }

    pub fn emit_ghdl_ls<P: CompileOrderProvider + ?Sized>(
        &self,
        project: &P,
        output: &Path,
    ) -> Result<PathBuf, Error> {
        self.log.warning("experimental support for ghdl-ls");
        let dir = filesystem::resolve_dir(output)?;

        let cfg = GhdlLsConfig::from_order(project.get_compile_order(), &self.analysis);
        let contents = to_pretty_json(&cfg, GHDL_LS_FILE)?;
        self.write(&dir, GHDL_LS_FILE, &contents)
    }

    /// Runs every emitter in turn, stopping at the first error.
    pub fn emit_all<P: CompileOrderProvider + ?Sized>(
        &self,
        project: &P,
        output: &Path,
        simulator: Simulator,
    ) -> Result<Vec<PathBuf>, Error> {
        Ok(vec![
            self.emit_hdl_checker(project, output, simulator)?,
            self.emit_vhdl_ls(project, output)?,
            self.emit_ghdl_ls(project, output)?,
        ])
    }

    fn write(&self, dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, Error> {
        let path = dir.join(file_name);
        std::fs::write(&path, contents)?;
        self.log.info(&format!(
            "created: {} @ {}",
            file_name,
            filesystem::into_std_str(path.clone())
        ));
        Ok(path)
    }
}

/// Serializes `value` as json indented by 4 spaces.
fn to_pretty_json<T: Serialize>(value: &T, file_name: &str) -> Result<String, Error> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    value
        .serialize(&mut ser)
        .map_err(|e| Error::Serialize(file_name.to_string(), LastError(e.to_string())))?;
    String::from_utf8(buf)
        .map_err(|e| Error::Serialize(file_name.to_string(), LastError(e.to_string())))
}
