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

//! Generate hdl language-server configurations from a vhdl compile order.
//!
//! A compile order comes from any [core::unit::CompileOrderProvider]. An
//! [core::emitter::Emitter] reshapes it into the files read by hdl-checker,
//! vhdl_ls, and ghdl-ls.

mod commands;
pub mod core;
pub mod error;
pub mod util;

pub use crate::commands::hdlconf::Hdlconf;
