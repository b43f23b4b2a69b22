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

/// The VHDL standard assigned to units whose source does not name one.
pub const DEFAULT_VHDL_STANDARD: &str = "2008";

/// Anything that can report the units of a design in compilation order.
///
/// A unit never precedes a unit it depends on. Duplicates and cycles are the
/// provider's concern.
pub trait CompileOrderProvider {
    fn get_compile_order(&self) -> &[CompileUnit];
}

#[derive(Debug, PartialEq, Clone)]
pub struct Library {
    name: String,
}

impl Library {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

/// A single source file to analyze, along with where and how to analyze it.
#[derive(Debug, PartialEq, Clone)]
pub struct CompileUnit {
    name: String,
    library: Library,
    vhdl_standard: String,
}

impl CompileUnit {
    pub fn new(name: &str, library: &str, vhdl_standard: &str) -> Self {
        Self {
            name: name.to_string(),
            library: Library::new(library),
            vhdl_standard: vhdl_standard.to_string(),
        }
    }

    /// Access the source file path.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_library(&self) -> &Library {
        &self.library
    }

    pub fn get_vhdl_standard(&self) -> &str {
        &self.vhdl_standard
    }
}

/// An in-memory list of units already in dependency order.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct CompileOrder(Vec<CompileUnit>);

impl CompileOrder {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `unit` to the end of the order.
    pub fn push(&mut self, unit: CompileUnit) {
        self.0.push(unit);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<CompileUnit>> for CompileOrder {
    fn from(value: Vec<CompileUnit>) -> Self {
        Self(value)
    }
}

impl FromIterator<CompileUnit> for CompileOrder {
    fn from_iter<T: IntoIterator<Item = CompileUnit>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl CompileOrderProvider for CompileOrder {
    fn get_compile_order(&self) -> &[CompileUnit] {
        &self.0
    }
}
