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

use super::emit::EmitArgs;
use crate::commands::helps::all;
use crate::core::context::Context;
use crate::core::simulator::Simulator;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct All {
    simulator: Option<Simulator>,
    args: EmitArgs,
}

impl Subcommand<Context> for All {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(all::HELP))?;
        Ok(All {
            simulator: cli.get(Arg::option("simulator").value("name"))?,
            args: EmitArgs::interpret(cli)?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let simulator = c.select_simulator(&self.simulator);
        // read once and share across every emitter
        let project = self.args.load_project(c)?;
        c.emitter()
            .emit_all(project.as_ref(), &self.args.select_output(c), simulator)?;
        Ok(())
    }
}
