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

pub const HELP: &str = r#"Hdlconf generates hdl language-server configurations.

Usage:
    hdlconf [options] [command]

Commands:
    hdl-checker           write the hdl-checker config file
    vhdl-ls               write the vhdl_ls config file
    ghdl-ls               write the ghdl-ls project file
    all                   write every config file
    help                  read in-depth documentation on a topic

Options:
    --config <file>       read settings from a configuration file
    --version             print version information and exit
    --color <when>        coloring: auto, always, never
    --help, -h            print help information

Use 'hdlconf help <command>' for more information about a command."#;
