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

use super::unit::{CompileOrderProvider, CompileUnit};
use crate::error::{Error, LastError};
use serde_derive::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Export {
    files: Vec<ExportFile>,
}

#[derive(Debug, Deserialize)]
struct ExportFile {
    file_name: String,
    library_name: String,
}

/// A compile order read from the json file written by VUnit's `--export-json`.
///
/// Files are taken in the order they appear in the export.
#[derive(Debug, PartialEq)]
pub struct VunitExport {
    units: Vec<CompileUnit>,
}

impl VunitExport {
    pub fn from_path(path: &Path, standard: &str) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents, standard)
    }

    pub fn parse(contents: &str, standard: &str) -> Result<Self, Error> {
        let export: Export = serde_json::from_str(contents)
            .map_err(|e| Error::BadVunitExport(LastError(e.to_string())))?;
        Ok(Self {
            units: export
                .files
                .into_iter()
                .map(|f| CompileUnit::new(&f.file_name, &f.library_name, standard))
                .collect(),
        })
    }
}

impl CompileOrderProvider for VunitExport {
    fn get_compile_order(&self) -> &[CompileUnit] {
        &self.units
    }
}
