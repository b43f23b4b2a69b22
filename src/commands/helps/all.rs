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

pub const HELP: &str = r#"Write every config file.

Usage:
    hdlconf all [options]

Options:
    --blueprint <file>    read the compile order from an orbit blueprint
    --vunit <file>        read the compile order from a vunit json export
    --std <version>       vhdl standard for units without one (default: 2008)
    --output <dir>        existing directory to write into (default: .)
    --simulator <name>    builder for hdl-checker linting

Use 'hdlconf help all' to read more about the command.
"#;
