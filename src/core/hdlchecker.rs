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
use super::unit::CompileUnit;
use serde_derive::{Deserialize, Serialize};

/// Returns the config file name hdl-checker searches for on this platform.
pub fn file_name() -> &'static str {
    match cfg!(windows) {
        true => "_hdl_checker.config",
        false => ".hdl_checker.config",
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct HdlCheckerConfig {
    sources: Vec<Source>,
    builder: Simulator,
}

/// Written as a two-element array: `[path, {library, flags}]`.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Source(String, SourceOptions);

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceOptions {
    library: String,
    flags: Vec<String>,
}

impl HdlCheckerConfig {
    pub fn from_order(order: &[CompileUnit], builder: Simulator) -> Self {
        Self {
            sources: order
                .iter()
                .map(|unit| {
                    Source(
                        unit.get_name().to_string(),
                        SourceOptions {
                            library: unit.get_library().get_name().to_string(),
                            // TODO: flag syntax differs between simulators (msim takes "-2008", ghdl takes "--std=08")
                            flags: vec![format!("-{}", unit.get_vhdl_standard())],
                        },
                    )
                })
                .collect(),
            builder,
        }
    }

    pub fn get_sources(&self) -> &Vec<Source> {
        &self.sources
    }

    pub fn get_builder(&self) -> &Simulator {
        &self.builder
    }
}

impl Source {
    pub fn get_path(&self) -> &str {
        &self.0
    }

    pub fn get_library(&self) -> &str {
        &self.1.library
    }

    pub fn get_flags(&self) -> &Vec<String> {
        &self.1.flags
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_order() {
        let order = vec![
            CompileUnit::new("rtl/fifo.vhd", "memory", "2008"),
            CompileUnit::new("rtl/top.vhd", "work", "93"),
        ];
        let cfg = HdlCheckerConfig::from_order(&order, Simulator::Ghdl);
        assert_eq!(cfg.get_builder(), &Simulator::Ghdl);
        assert_eq!(cfg.get_sources().len(), 2);
        assert_eq!(cfg.get_sources()[0].get_path(), "rtl/fifo.vhd");
        assert_eq!(cfg.get_sources()[0].get_library(), "memory");
        assert_eq!(cfg.get_sources()[1].get_flags(), &vec![String::from("-93")]);
    }

    #[test]
    fn json_shape() {
        let order = vec![CompileUnit::new("a.vhd", "work", "2008")];
        let cfg = HdlCheckerConfig::from_order(&order, Simulator::Fallback);
        let value = serde_json::to_value(&cfg).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "sources": [["a.vhd", {"library": "work", "flags": ["-2008"]}]],
                "builder": "fallback",
            })
        );
    }

    #[test]
    fn platform_file_name() {
        #[cfg(windows)]
        assert_eq!(file_name(), "_hdl_checker.config");
        #[cfg(not(windows))]
        assert_eq!(file_name(), ".hdl_checker.config");
    }
}
