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
use toml_edit::{Array, Document, Item, Table, Value};

pub const VHDL_LS_FILE: &str = "vhdl_ls.toml";

/// Source files grouped by library, in the order each library was first seen.
#[derive(Debug, PartialEq)]
pub struct VhdlLsConfig {
    libraries: Vec<(String, Vec<String>)>,
}

impl VhdlLsConfig {
    pub fn from_order(order: &[CompileUnit]) -> Self {
        let mut libraries: Vec<(String, Vec<String>)> = Vec::new();
        for unit in order {
            let key = Self::to_key(unit.get_library().get_name());
            match libraries.iter_mut().find(|(k, _)| k == &key) {
                Some((_, files)) => files.push(unit.get_name().to_string()),
                None => libraries.push((key, vec![unit.get_name().to_string()])),
            }
        }
        Self { libraries }
    }

    /// Formats the table key vhdl_ls expects for a library's file list.
    fn to_key(library: &str) -> String {
        format!("{}.files", library)
    }

    pub fn get_libraries(&self) -> &Vec<(String, Vec<String>)> {
        &self.libraries
    }

    /// Builds the toml document, keeping the library order.
    pub fn to_toml(&self) -> Document {
        let mut libraries = Table::new();
        for (key, files) in &self.libraries {
            let arr: Array = files.iter().map(|f| f.as_str()).collect();
            libraries.insert(key, Item::Value(Value::Array(arr)));
        }
        let mut doc = Document::new();
        doc.as_table_mut()
            .insert("libraries", Item::Table(libraries));
        doc
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn group_by_first_seen_library() {
        let order = vec![
            CompileUnit::new("c.vhd", "util", "2008"),
            CompileUnit::new("a.vhd", "work", "2008"),
            CompileUnit::new("d.vhd", "util", "2008"),
            CompileUnit::new("b.vhd", "work", "2008"),
        ];
        let cfg = VhdlLsConfig::from_order(&order);
        assert_eq!(
            cfg.get_libraries(),
            &vec![
                (
                    String::from("util.files"),
                    vec![String::from("c.vhd"), String::from("d.vhd")]
                ),
                (
                    String::from("work.files"),
                    vec![String::from("a.vhd"), String::from("b.vhd")]
                ),
            ]
        );
    }

    #[test]
    fn toml_keeps_order() {
        let order = vec![
            CompileUnit::new("z.vhd", "zeta", "2008"),
            CompileUnit::new("a.vhd", "alpha", "2008"),
        ];
        let text = VhdlLsConfig::from_order(&order).to_toml().to_string();
        let doc = text.parse::<Document>().unwrap();
        let keys: Vec<&str> = doc["libraries"]
            .as_table()
            .unwrap()
            .iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["zeta.files", "alpha.files"]);
    }

    #[test]
    fn toml_single_library() {
        let order = vec![
            CompileUnit::new("a.vhd", "work", "2008"),
            CompileUnit::new("b.vhd", "work", "2008"),
        ];
        let text = VhdlLsConfig::from_order(&order).to_toml().to_string();
        assert!(text.contains("[libraries]"));
        assert!(text.contains("\"work.files\""));

        let value: toml::Value = toml::from_str(&text).unwrap();
        let files: Vec<&str> = value["libraries"]["work.files"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(files, vec!["a.vhd", "b.vhd"]);
    }

    #[test]
    fn toml_empty_order() {
        let text = VhdlLsConfig::from_order(&[]).to_toml().to_string();
        let value: toml::Value = toml::from_str(&text).unwrap();
        assert_eq!(value["libraries"].as_table().unwrap().len(), 0);
    }
}
