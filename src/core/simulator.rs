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

use crate::error::{Error, Hint};
use serde_derive::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The backend hdl-checker uses for linting.
#[derive(Debug, PartialEq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Simulator {
    Msim,
    Xvhdl,
    Ghdl,
    #[default]
    Fallback,
}

impl Simulator {
    pub const ALL: [Simulator; 4] = [Self::Msim, Self::Xvhdl, Self::Ghdl, Self::Fallback];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Msim => "msim",
            Self::Xvhdl => "xvhdl",
            Self::Ghdl => "ghdl",
            Self::Fallback => "fallback",
        }
    }
}

impl FromStr for Simulator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sim| sim.as_str() == s)
            .ok_or_else(|| Error::UnknownSimulator(s.to_string(), Hint::SimulatorList))
    }
}

impl Display for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_str_accepts_tokens() {
        assert_eq!(Simulator::from_str("msim").unwrap(), Simulator::Msim);
        assert_eq!(Simulator::from_str("xvhdl").unwrap(), Simulator::Xvhdl);
        assert_eq!(Simulator::from_str("ghdl").unwrap(), Simulator::Ghdl);
        assert_eq!(Simulator::from_str("fallback").unwrap(), Simulator::Fallback);
        assert_eq!(Simulator::default(), Simulator::Fallback);
    }

    #[test]
    fn from_str_rejects_unknown() {
        match Simulator::from_str("bogus") {
            Err(Error::UnknownSimulator(s, Hint::SimulatorList)) => assert_eq!(s, "bogus"),
            r => panic!("expected unknown simulator, got {:?}", r),
        }
        // tokens are exact
        assert!(Simulator::from_str("GHDL").is_err());
        assert!(Simulator::from_str("").is_err());
    }

    #[test]
    fn serializes_as_token() {
        assert_eq!(
            serde_json::to_string(&Simulator::Xvhdl).unwrap(),
            "\"xvhdl\""
        );
        for sim in Simulator::ALL {
            assert_eq!(Simulator::from_str(&sim.to_string()).unwrap(), sim);
        }
    }
}
