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

pub const MANUAL: &str = r#"NAME
    config - hdlconf configuration file

DESCRIPTION
    Hdlconf reads hdlconf.toml from the current directory when it exists, or
    the file given with "--config". Every table and key is optional. Relative
    paths are resolved against the directory holding the configuration file.

    [input]
    blueprint = "target/ghdl/blueprint.tsv"   # or: vunit = "export.json"
    standard = "2008"

    [output]
    directory = "."

    [hdl-checker]
    simulator = "ghdl"

    [ghdl-ls]
    analysis = ["--workdir=work", "--ieee=synopsys", "-fexplicit"]

    Unknown tables or keys are rejected.
"#;
