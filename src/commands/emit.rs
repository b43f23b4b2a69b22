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

use crate::core::context::Context;
use crate::core::unit::CompileOrderProvider;
use std::path::PathBuf;

use cliproc::{cli, stage::*};
use cliproc::{Arg, Cli};

/// Options every emitting command accepts.
#[derive(Debug, PartialEq)]
pub struct EmitArgs {
    blueprint: Option<PathBuf>,
    vunit: Option<PathBuf>,
    standard: Option<String>,
    output: Option<PathBuf>,
}

impl EmitArgs {
    pub fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        Ok(Self {
            blueprint: cli.get(Arg::option("blueprint").value("file"))?,
            vunit: cli.get(Arg::option("vunit").value("file"))?,
            standard: cli.get(Arg::option("std").value("version"))?,
            output: cli.get(Arg::option("output").value("dir"))?,
        })
    }

    /// Reads the compile order from the source selected by the command line
    /// or the configuration.
    pub fn load_project(
        &self,
        c: &Context,
    ) -> Result<Box<dyn CompileOrderProvider>, crate::error::Error> {
        let source = c.select_source(&self.blueprint, &self.vunit)?;
        c.load_project(&source, &c.select_standard(&self.standard))
    }

    pub fn select_output(&self, c: &Context) -> PathBuf {
        c.select_output(&self.output)
    }
}
