use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The granularity of a catalog request.
///
/// Levels are ordered from the root of the hierarchy downwards, so
/// `Server < Well < Wellbore`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryLevel {
    /// List the wells known to the server.
    Server,
    /// List the wellbores of one well.
    Well,
    /// List objects of the requested types under one wellbore.
    Wellbore,
}

impl QueryLevel {
    /// Lowercase name, used in log fields and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Well => "well",
            Self::Wellbore => "wellbore",
        }
    }

    /// Kind tag given to the children listed at this level, if the level
    /// lists a single kind.
    pub fn child_kind(&self) -> Option<&'static str> {
        match self {
            Self::Server => Some("well"),
            Self::Well => Some("wellbore"),
            Self::Wellbore => None,
        }
    }
}

impl fmt::Display for QueryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryLevel {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "server" => Ok(Self::Server),
            "well" => Ok(Self::Well),
            "wellbore" => Ok(Self::Wellbore),
            _ => Err(TypeError::UnknownLevel(s.to_string())),
        }
    }
}
