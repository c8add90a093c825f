//! The fixed table of object types that can be listed under a wellbore.
//!
//! Callers request types by an uppercase token (`"MUDLOG"`); resolved
//! identifiers are tagged with the canonical camelCase name (`"mudLog"`).
//! Downstream consumers match on the exact tag, so the table is the single
//! source of truth for both spellings. Adding a type is one row in
//! [`ObjectType::ALL`] plus its two `match` arms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// A wellbore child object type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectType {
    Attachment,
    BhaRun,
    CementJob,
    ChangeLog,
    ConvCore,
    DrillReport,
    FluidsReport,
    FormationMarker,
    Log,
    Message,
    MudLog,
    ObjectGroup,
    OpsReport,
    Rig,
    Risk,
    SidewallCore,
    StimJob,
    SurveyProgram,
    Target,
    Trajectory,
    Tubular,
    WbGeometry,
}

impl ObjectType {
    /// Every supported type, in table order.
    pub const ALL: [ObjectType; 22] = [
        Self::Attachment,
        Self::BhaRun,
        Self::CementJob,
        Self::ChangeLog,
        Self::ConvCore,
        Self::DrillReport,
        Self::FluidsReport,
        Self::FormationMarker,
        Self::Log,
        Self::Message,
        Self::MudLog,
        Self::ObjectGroup,
        Self::OpsReport,
        Self::Rig,
        Self::Risk,
        Self::SidewallCore,
        Self::StimJob,
        Self::SurveyProgram,
        Self::Target,
        Self::Trajectory,
        Self::Tubular,
        Self::WbGeometry,
    ];

    /// The uppercase request token.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Attachment => "ATTACHMENT",
            Self::BhaRun => "BHARUN",
            Self::CementJob => "CEMENTJOB",
            Self::ChangeLog => "CHANGELOG",
            Self::ConvCore => "CONVCORE",
            Self::DrillReport => "DRILLREPORT",
            Self::FluidsReport => "FLUIDREPORT",
            Self::FormationMarker => "FORMATIONMARKER",
            Self::Log => "LOG",
            Self::Message => "MESSAGE",
            Self::MudLog => "MUDLOG",
            Self::ObjectGroup => "OBJECTGROUP",
            Self::OpsReport => "OPSREPORT",
            Self::Rig => "RIG",
            Self::Risk => "RISK",
            Self::SidewallCore => "SIDEWALLCORE",
            Self::StimJob => "STIMJOB",
            Self::SurveyProgram => "SURVEYPROGRAM",
            Self::Target => "TARGET",
            Self::Trajectory => "TRAJECTORY",
            Self::Tubular => "TUBULAR",
            Self::WbGeometry => "WBGEOMETRY",
        }
    }

    /// The canonical camelCase tag placed on resolved identifiers.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Attachment => "attachment",
            Self::BhaRun => "bhaRun",
            Self::CementJob => "cementJob",
            Self::ChangeLog => "changeLog",
            Self::ConvCore => "convCore",
            Self::DrillReport => "drillReport",
            Self::FluidsReport => "fluidsReport",
            Self::FormationMarker => "formationMarker",
            Self::Log => "log",
            Self::Message => "message",
            Self::MudLog => "mudLog",
            Self::ObjectGroup => "objectGroup",
            Self::OpsReport => "opsReport",
            Self::Rig => "rig",
            Self::Risk => "risk",
            Self::SidewallCore => "sidewallCore",
            Self::StimJob => "stimJob",
            Self::SurveyProgram => "surveyProgram",
            Self::Target => "target",
            Self::Trajectory => "trajectory",
            Self::Tubular => "tubular",
            Self::WbGeometry => "wbGeometry",
        }
    }

    /// Look up a request token, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use witsml_types::ObjectType;
    ///
    /// assert_eq!(ObjectType::from_token("mudlog"), Some(ObjectType::MudLog));
    /// assert_eq!(ObjectType::from_token("NOTAREALTYPE"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|ty| ty.token().eq_ignore_ascii_case(token))
    }

    /// Look up a canonical tag (exact match).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.tag() == tag)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ObjectType {
    type Err = TypeError;

    /// Accepts either a request token (any case) or a canonical tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
            .or_else(|| Self::from_tag(s))
            .ok_or_else(|| TypeError::UnknownObjectType(s.to_string()))
    }
}

impl Serialize for ObjectType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for ObjectType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
