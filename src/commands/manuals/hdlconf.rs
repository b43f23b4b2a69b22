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
    hdlconf - generate hdl language-server configurations

SYNOPSIS
    hdlconf [options] [command]

DESCRIPTION
    Hdlconf reads the compile order of a vhdl design and writes the
    configuration files consumed by hdl language tooling: hdl-checker, vhdl_ls,
    and ghdl-ls. Each command writes exactly one file into an existing output
    directory and overwrites any file already there.

    Settings can be stored in a configuration file named hdlconf.toml in the
    current directory, or given with "--config". Command-line options take
    precedence over the configuration file. See 'hdlconf help config'.

OPTIONS
    --config <file>
        Read settings from the given configuration file

    --version
        Print version information and exit

    --color <when>
        Coloring: auto, always, never

    --help, -h
        Print help information

EXAMPLES
    hdlconf vhdl-ls --blueprint target/ghdl/blueprint.tsv
    hdlconf all --vunit export.json --simulator ghdl --output .
"#;
