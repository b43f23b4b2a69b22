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

use super::unit::CompileUnit;
use serde_derive::{Deserialize, Serialize};

pub const GHDL_LS_FILE: &str = "hdl-prj.json";

/// Analysis options passed to ghdl when none are configured.
pub const GHDL_ANALYSIS: [&str; 3] = ["--workdir=work", "--ieee=synopsys", "-fexplicit"];

const LANGUAGE: &str = "vhdl";

pub fn default_analysis() -> Vec<String> {
    GHDL_ANALYSIS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct GhdlLsConfig {
    options: Options,
    files: Vec<FileEntry>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Options {
    ghdl_analysis: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    file: String,
    language: String,
}

impl GhdlLsConfig {
    /// Lists every unit as a vhdl file; `analysis` does not depend on the order.
    pub fn from_order(order: &[CompileUnit], analysis: &[String]) -> Self {
        Self {
            options: Options {
                ghdl_analysis: analysis.to_vec(),
            },
            files: order
                .iter()
                .map(|unit| FileEntry {
                    file: unit.get_name().to_string(),
                    language: LANGUAGE.to_string(),
                })
                .collect(),
        }
    }

    pub fn get_files(&self) -> &Vec<FileEntry> {
        &self.files
    }

    pub fn get_analysis(&self) -> &Vec<String> {
        &self.options.ghdl_analysis
    }
}

impl FileEntry {
    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_language(&self) -> &str {
        &self.language
    }
}
