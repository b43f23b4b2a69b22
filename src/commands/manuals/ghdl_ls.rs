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
    ghdl-ls - write the ghdl-ls project file

SYNOPSIS
    hdlconf ghdl-ls [options]

DESCRIPTION
    This command writes hdl-prj.json. Every unit is listed as a vhdl file in
    compile order. The ghdl analysis options default to "--workdir=work",
    "--ieee=synopsys", and "-fexplicit" and can be replaced with the
    "analysis" key of the [ghdl-ls] table in the configuration file.

    Support for ghdl-ls is experimental.

INPUT
    The compile order is read from exactly one source. An orbit blueprint lists
    one record per line as FILESET<tab>LIBRARY<tab>PATH and only VHDL records are
    kept. A vunit export is the json file written by "--export-json" and every
    entry of its "files" list is kept. Neither source records a vhdl standard,
    so every unit receives the one given by "--std", the configuration file, or
    2008 when both are absent.

OPTIONS
    --blueprint <file>
        Read the compile order from an orbit blueprint file

    --vunit <file>
        Read the compile order from a vunit json export

    --std <version>
        Vhdl standard assigned to every unit, such as 93 or 2008

    --output <dir>
        Existing directory to write the file into

EXAMPLES
    hdlconf ghdl-ls --vunit export.json
"#;
