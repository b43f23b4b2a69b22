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
use crate::util::strcmp;
use std::path::Path;

pub const BLUEPRINT_FILE: &str = "blueprint.tsv";
pub const BLUEPRINT_DELIMITER: char = '\t';

const VHDL_FILESET: &str = "VHDL";

/// A compile order read from a planned blueprint file.
///
/// Every record is written as FILESET\tLIBRARY\tFILE_PATH, already in
/// dependency order.
#[derive(Debug, PartialEq)]
pub struct Blueprint {
    units: Vec<CompileUnit>,
}

impl Blueprint {
    /// Reads the blueprint stored at `path`.
    ///
    /// Every VHDL record is assigned the `standard` since blueprints do not
    /// carry one.
    pub fn from_path(path: &Path, standard: &str) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents, standard)
    }

    /// Collects the VHDL records from the blueprint `contents`.
    ///
    /// Records for other filesets are skipped.
    pub fn parse(contents: &str, standard: &str) -> Result<Self, Error> {
        let mut units = Vec::new();
        for (i, line) in contents.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() == true {
                continue;
            }
            let mut fields = line.splitn(3, BLUEPRINT_DELIMITER);
            let (fileset, library, file) = match (fields.next(), fields.next(), fields.next()) {
                (Some(f), Some(l), Some(p)) => (f, l, p),
                _ => {
                    return Err(Error::BadBlueprint(
                        i + 1,
                        LastError(String::from("expected 3 tab-separated fields")),
                    ))
                }
            };
            if strcmp::cmp_ascii_ignore_case(fileset, VHDL_FILESET) == false {
                continue;
            }
            if library.is_empty() == true {
                return Err(Error::BadBlueprint(
                    i + 1,
                    LastError(String::from("missing library name")),
                ));
            }
            if file.is_empty() == true {
                return Err(Error::BadBlueprint(
                    i + 1,
                    LastError(String::from("missing file path")),
                ));
            }
            units.push(CompileUnit::new(file, library, standard));
        }
        Ok(Self { units })
    }
}

impl CompileOrderProvider for Blueprint {
    fn get_compile_order(&self) -> &[CompileUnit] {
        &self.units
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const BP_0: &str = "\
VHDL\tgates\t/home/chase/gates/rtl/and_gate.vhd
VHDL\tgates\t/home/chase/gates/rtl/or_gate.vhd
VLOG\twork\t/home/chase/adder/rtl/adder.v
PIN-PLAN\twork\t/home/chase/adder/board.pin
VHDL\twork\t/home/chase/adder/rtl/adder.vhd
vhdl\twork\t/home/chase/adder/sim/adder_tb.vhd
";

    #[test]
    fn parse_keeps_vhdl_records_in_order() {
        let bp = Blueprint::parse(BP_0, "2008").unwrap();
        let units = bp.get_compile_order();
        assert_eq!(units.len(), 4);
        assert_eq!(units[0], CompileUnit::new("/home/chase/gates/rtl/and_gate.vhd", "gates", "2008"));
        assert_eq!(units[1].get_name(), "/home/chase/gates/rtl/or_gate.vhd");
        assert_eq!(units[2].get_library().get_name(), "work");
        assert_eq!(units[3].get_name(), "/home/chase/adder/sim/adder_tb.vhd");
    }

    #[test]
    fn parse_skips_blank_lines() {
        let bp = Blueprint::parse("\nVHDL\twork\ta.vhd\r\n\n", "93").unwrap();
        assert_eq!(
            bp.get_compile_order(),
            &[CompileUnit::new("a.vhd", "work", "93")]
        );
        assert_eq!(Blueprint::parse("", "2008").unwrap().get_compile_order().len(), 0);
    }

    #[test]
    fn parse_reports_bad_line() {
        let contents = "VHDL\twork\ta.vhd\nVHDL\tb.vhd\n";
        match Blueprint::parse(contents, "2008") {
            Err(Error::BadBlueprint(line, _)) => assert_eq!(line, 2),
            r => panic!("expected bad blueprint, got {:?}", r),
        }
        // empty fields on a vhdl record
        assert!(matches!(
            Blueprint::parse("VHDL\t\ta.vhd", "2008"),
            Err(Error::BadBlueprint(1, _))
        ));
        assert!(matches!(
            Blueprint::parse("VHDL\twork\t", "2008"),
            Err(Error::BadBlueprint(1, _))
        ));
    }

    #[test]
    fn read_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BLUEPRINT_FILE);
        std::fs::write(&path, BP_0).unwrap();
        let bp = Blueprint::from_path(&path, "2008").unwrap();
        assert_eq!(bp.get_compile_order().len(), 4);

        let missing = dir.path().join("missing.tsv");
        assert!(matches!(
            Blueprint::from_path(&missing, "2008"),
            Err(Error::Io(_))
        ));
    }
}
