//! Validation error taxonomy
//!
//! Every check in the pipeline is fail-fast: the first `ValidationError`
//! aborts the run and is reported as a single diagnostic line.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used by all validation steps
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Kind of record an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    World,
    Confederation,
    Country,
    Region,
    City,
    Stadium,
    Team,
    Competition,
    Schedule,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::World => "world",
            EntityKind::Confederation => "confederation",
            EntityKind::Country => "country",
            EntityKind::Region => "region",
            EntityKind::City => "city",
            EntityKind::Stadium => "stadium",
            EntityKind::Team => "team",
            EntityKind::Competition => "competition",
            EntityKind::Schedule => "schedule",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record a diagnostic is about
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
}

impl EntityRef {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn world() -> Self {
        Self::new(EntityKind::World, "")
    }

    pub fn schedule() -> Self {
        Self::new(EntityKind::Schedule, "")
    }

    pub fn team(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Team, id)
    }

    pub fn competition(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Competition, id)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} '{}'", self.kind, self.id)
        }
    }
}

/// Which cardinality of a mechanics profile did not match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechanicsDimension {
    Teams,
    Dates,
}

impl fmt::Display for MechanicsDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MechanicsDimension::Teams => write!(f, "teams"),
            MechanicsDimension::Dates => write!(f, "dates"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{entity}: the identifier is invalid")]
    InvalidIdentifier { entity: EntityRef },

    #[error("{entity}: {} is missing", path.display())]
    MissingFile { entity: EntityRef, path: PathBuf },

    #[error("{entity}: error parsing record: {reason}")]
    MalformedRecord { entity: EntityRef, reason: String },

    #[error("{entity}: the {field} is missing")]
    MissingField { entity: EntityRef, field: String },

    #[error("{entity}: the {field} is empty")]
    EmptyField { entity: EntityRef, field: String },

    #[error("{entity}: unknown language '{language}' on {field}")]
    UnsupportedLanguage {
        entity: EntityRef,
        field: String,
        language: String,
    },

    #[error("{entity}: the {axis} {value} is invalid")]
    InvalidCoordinate {
        entity: EntityRef,
        axis: &'static str,
        value: f64,
    },

    #[error("{entity}: the capacity {value} is invalid")]
    InvalidCapacity { entity: EntityRef, value: String },

    #[error("{entity}: the acronym '{value}' ({language}) is not all caps")]
    InvalidAcronym {
        entity: EntityRef,
        language: String,
        value: String,
    },

    #[error("{entity}: not declared in the child list of {parent}")]
    UndeclaredChild { entity: EntityRef, parent: EntityRef },

    #[error("{entity}: the {image} image is missing")]
    MissingImage { entity: EntityRef, image: String },

    #[error("{entity}: the {field} '{target}' does not exist")]
    DanglingReference {
        entity: EntityRef,
        field: String,
        target: String,
    },

    #[error("competition cycle in teamsSource: {}", cycle.join(" -> "))]
    CyclicReference { cycle: Vec<String> },

    #[error("{competition}: the number of {dimension} is invalid (expected {expected}, found {actual})")]
    MechanicsMismatch {
        competition: EntityRef,
        dimension: MechanicsDimension,
        expected: usize,
        actual: usize,
    },

    #[error("{team}: the team is not in any competition")]
    TeamWithoutCompetition { team: EntityRef },
}

impl ValidationError {
    pub fn missing_field(entity: &EntityRef, field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            entity: entity.clone(),
            field: field.into(),
        }
    }

    pub fn empty_field(entity: &EntityRef, field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            entity: entity.clone(),
            field: field.into(),
        }
    }

    pub fn dangling(entity: &EntityRef, field: impl Into<String>, target: impl Into<String>) -> Self {
        ValidationError::DanglingReference {
            entity: entity.clone(),
            field: field.into(),
            target: target.into(),
        }
    }

    /// Short machine-friendly name of the violated rule
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidIdentifier { .. } => "InvalidIdentifier",
            ValidationError::MissingFile { .. } => "MissingFile",
            ValidationError::MalformedRecord { .. } => "MalformedRecord",
            ValidationError::MissingField { .. } => "MissingField",
            ValidationError::EmptyField { .. } => "EmptyField",
            ValidationError::UnsupportedLanguage { .. } => "UnsupportedLanguage",
            ValidationError::InvalidCoordinate { .. } => "InvalidCoordinate",
            ValidationError::InvalidCapacity { .. } => "InvalidCapacity",
            ValidationError::InvalidAcronym { .. } => "InvalidAcronym",
            ValidationError::UndeclaredChild { .. } => "UndeclaredChild",
            ValidationError::MissingImage { .. } => "MissingImage",
            ValidationError::DanglingReference { .. } => "DanglingReference",
            ValidationError::CyclicReference { .. } => "CyclicReference",
            ValidationError::MechanicsMismatch { .. } => "MechanicsMismatch",
            ValidationError::TeamWithoutCompetition { .. } => "TeamWithoutCompetition",
        }
    }

    /// Single line printed by the binary before exiting
    pub fn error_line(&self) -> String {
        format!("Error [{}]: {}", self.code(), self)
    }
}
