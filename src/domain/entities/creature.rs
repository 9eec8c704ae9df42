//! Creature entity - A user-owned, randomly featured unicorn, llama or cat

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{CatFeatures, LlamaFeatures, UnicornFeatures};
use crate::domain::value_objects::{CreatureId, UserId, Vec3};

/// Accessory pool entry that collapses to "no accessory"
pub const NONE: &str = "none";

pub const MIN_SIZE: f64 = 0.8;
pub const MAX_SIZE: f64 = 1.2;

/// The three kinds of creature a user can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatureKind {
    Unicorn,
    Llama,
    Cat,
}

impl CreatureKind {
    pub const ALL: [CreatureKind; 3] = [Self::Unicorn, Self::Llama, Self::Cat];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unicorn => "unicorn",
            Self::Llama => "llama",
            Self::Cat => "cat",
        }
    }

    /// Plural form, used as table name and URL segment
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Unicorn => "unicorns",
            Self::Llama => "llamas",
            Self::Cat => "cats",
        }
    }
}

impl fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown creature kind: {0}")]
pub struct UnknownCreatureKind(pub String);

impl FromStr for CreatureKind {
    type Err = UnknownCreatureKind;

    /// Accepts singular or plural, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| lower == kind.name() || lower == kind.plural())
            .ok_or_else(|| UnknownCreatureKind(s.to_string()))
    }
}

/// Why a feature bundle was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
    #[error("{field} value {value:?} is not allowed")]
    NotInPool { field: &'static str, value: String },

    #[error("size {0} is outside [0.8, 1.2]")]
    SizeOutOfRange(f64),

    #[error("malformed {kind} features: {message}")]
    Malformed { kind: CreatureKind, message: String },
}

pub(crate) fn check_pool(
    field: &'static str,
    value: &str,
    pool: &[&str],
) -> Result<(), FeatureError> {
    if pool.contains(&value) && value != NONE {
        Ok(())
    } else {
        Err(FeatureError::NotInPool {
            field,
            value: value.to_string(),
        })
    }
}

pub(crate) fn check_accessory(
    field: &'static str,
    value: Option<&str>,
    pool: &[&str],
) -> Result<(), FeatureError> {
    match value {
        Some(value) => check_pool(field, value, pool),
        None => Ok(()),
    }
}

pub(crate) fn check_size(size: f64) -> Result<(), FeatureError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(FeatureError::SizeOutOfRange(size))
    }
}

/// Randomized visual description of a creature.
///
/// Serializes as the bare per-kind object; the kind travels out of band
/// (table name, URL segment), so deserialization goes through [`parse`].
///
/// [`parse`]: CreatureFeatures::parse
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CreatureFeatures {
    Unicorn(UnicornFeatures),
    Llama(LlamaFeatures),
    Cat(CatFeatures),
}

impl CreatureFeatures {
    pub fn kind(&self) -> CreatureKind {
        match self {
            Self::Unicorn(_) => CreatureKind::Unicorn,
            Self::Llama(_) => CreatureKind::Llama,
            Self::Cat(_) => CreatureKind::Cat,
        }
    }

    pub fn size(&self) -> f64 {
        match self {
            Self::Unicorn(f) => f.size,
            Self::Llama(f) => f.size,
            Self::Cat(f) => f.size,
        }
    }

    /// Check every field against its pool and the size range
    pub fn validate(&self) -> Result<(), FeatureError> {
        match self {
            Self::Unicorn(f) => f.validate(),
            Self::Llama(f) => f.validate(),
            Self::Cat(f) => f.validate(),
        }
    }

    /// Decode the shape of `kind`'s features without checking pools
    pub fn parse(kind: CreatureKind, value: serde_json::Value) -> Result<Self, FeatureError> {
        let malformed = |e: serde_json::Error| FeatureError::Malformed {
            kind,
            message: e.to_string(),
        };
        Ok(match kind {
            CreatureKind::Unicorn => Self::Unicorn(serde_json::from_value(value).map_err(malformed)?),
            CreatureKind::Llama => Self::Llama(serde_json::from_value(value).map_err(malformed)?),
            CreatureKind::Cat => Self::Cat(serde_json::from_value(value).map_err(malformed)?),
        })
    }

    /// Decode and validate stored features
    pub fn from_json_str(kind: CreatureKind, json: &str) -> Result<Self, FeatureError> {
        let value = serde_json::from_str(json).map_err(|e| FeatureError::Malformed {
            kind,
            message: e.to_string(),
        })?;
        let features = Self::parse(kind, value)?;
        features.validate()?;
        Ok(features)
    }
}

/// Input for persisting a new creature
#[derive(Debug, Clone)]
pub struct NewCreature {
    pub user_id: UserId,
    pub features: CreatureFeatures,
    pub position: Vec3,
    pub velocity: Vec3,
}

/// A persisted creature. Never updated after insert.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatureRecord {
    pub id: CreatureId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub features: CreatureFeatures,
    pub position: Vec3,
    pub velocity: Vec3,
}

impl CreatureRecord {
    pub fn kind(&self) -> CreatureKind {
        self.features.kind()
    }
}
