//! Field-level validation rules shared by every record kind

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Number;
use std::collections::BTreeMap;

use crate::error::{EntityRef, Result, ValidationError};
use crate::schema::{Coordinate, LocalizedText, LANGUAGES};

use super::record::RawCoord;

/// Lower-case letter followed by anything that may not appear in a slug
static MALFORMED_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][^a-z0-9\-]").expect("slug pattern compiles"));

/// Check a directory slug against the identifier rule
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty() && !MALFORMED_SLUG.is_match(name)
}

pub fn check_identifier(entity: &EntityRef) -> Result<()> {
    if is_valid_identifier(&entity.id) {
        Ok(())
    } else {
        Err(ValidationError::InvalidIdentifier {
            entity: entity.clone(),
        })
    }
}

/// Unwrap a required field
pub fn require<T>(value: Option<T>, entity: &EntityRef, field: &str) -> Result<T> {
    value.ok_or_else(|| ValidationError::missing_field(entity, field))
}

/// Validate a language -> text mapping
pub fn localized_text(
    raw: &BTreeMap<String, String>,
    entity: &EntityRef,
    field: &str,
) -> Result<LocalizedText> {
    if raw.is_empty() {
        return Err(ValidationError::empty_field(entity, field));
    }

    for (language, value) in raw {
        if !LANGUAGES.contains(&language.as_str()) {
            return Err(ValidationError::UnsupportedLanguage {
                entity: entity.clone(),
                field: field.to_string(),
                language: language.clone(),
            });
        }
        if value.is_empty() {
            return Err(ValidationError::empty_field(entity, format!("{} ({})", field, language)));
        }
    }

    Ok(LocalizedText::new_unchecked(raw.clone()))
}

/// Required localized field
pub fn required_text(
    raw: Option<&BTreeMap<String, String>>,
    entity: &EntityRef,
    field: &str,
) -> Result<LocalizedText> {
    localized_text(require(raw, entity, field)?, entity, field)
}

/// Localized acronym; every value must already be upper-case
pub fn acronym(raw: Option<&BTreeMap<String, String>>, entity: &EntityRef) -> Result<LocalizedText> {
    let text = required_text(raw, entity, "acronym")?;

    for language in text.languages() {
        let value = text.get(language).unwrap_or_default();
        if value.to_uppercase() != value {
            return Err(ValidationError::InvalidAcronym {
                entity: entity.clone(),
                language: language.to_string(),
                value: value.to_string(),
            });
        }
    }

    Ok(text)
}

/// Validate one axis: finite, inside [-90, 90], non-zero
pub fn check_axis(entity: &EntityRef, axis: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || !(-90.0..=90.0).contains(&value) || value == 0.0 {
        return Err(ValidationError::InvalidCoordinate {
            entity: entity.clone(),
            axis,
            value,
        });
    }
    Ok(value)
}

pub fn coordinate(raw: Option<&RawCoord>, entity: &EntityRef) -> Result<Coordinate> {
    let coord = require(raw, entity, "coord")?;
    let lat = require(coord.lat, entity, "lat")?;
    let lon = require(coord.lon, entity, "lon")?;

    // Longitude is bounded to [-90, 90] like latitude.
    Ok(Coordinate {
        lat: check_axis(entity, "lat", lat)?,
        lon: check_axis(entity, "lon", lon)?,
    })
}

/// Positive integer capacity
pub fn capacity(raw: Option<&Number>, entity: &EntityRef) -> Result<u64> {
    let number = require(raw, entity, "capacity")?;
    number
        .as_u64()
        .filter(|capacity| *capacity > 0)
        .ok_or_else(|| ValidationError::InvalidCapacity {
            entity: entity.clone(),
            value: number.to_string(),
        })
}

/// Required, non-empty key referencing another record
pub fn reference(raw: Option<&String>, entity: &EntityRef, field: &str) -> Result<String> {
    let value = require(raw, entity, field)?;
    if value.is_empty() {
        return Err(ValidationError::empty_field(entity, field));
    }
    Ok(value.clone())
}
