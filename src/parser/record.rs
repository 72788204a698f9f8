use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Number;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use crate::error::{EntityRef, Result, ValidationError};
use crate::source::{DataSource, RECORD_FILE};

/// Localized text as authored, before validation
pub type RawLocalized = BTreeMap<String, String>;

// Every field is optional here; absence is reported as `MissingField` by the
// field validators.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCoord {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawWorld {
    pub name: Option<RawLocalized>,
    pub nickname: Option<RawLocalized>,
    pub confederations: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawConfederation {
    pub name: Option<RawLocalized>,
    pub nickname: Option<RawLocalized>,
    pub countries: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCountry {
    pub name: Option<RawLocalized>,
    pub regions: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawRegion {
    pub name: Option<RawLocalized>,
    pub cities: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCity {
    pub name: Option<RawLocalized>,
    pub coord: Option<RawCoord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawStadium {
    pub name: Option<RawLocalized>,
    pub nickname: Option<RawLocalized>,
    pub capacity: Option<Number>,
    pub coord: Option<RawCoord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLocation {
    pub continent: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTeam {
    pub name: Option<RawLocalized>,
    pub nickname: Option<RawLocalized>,
    pub acronym: Option<RawLocalized>,
    pub stadium: Option<String>,
    #[serde(alias = "location")]
    pub world: Option<RawLocation>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCompetition {
    pub name: Option<RawLocalized>,
    pub nickname: Option<RawLocalized>,
    pub mechanics: Option<String>,
    pub relegation: Option<String>,
    pub promotion: Option<String>,
    pub teams: Option<Vec<String>>,
    #[serde(rename = "teamsSource", alias = "teams_source")]
    pub teams_source: Option<Vec<String>>,
}

/// Schedule file: date -> competitions played on that date
pub type RawSchedule = BTreeMap<String, Vec<String>>;

/// Decode a JSON record for the given entity
pub fn parse_record<T: DeserializeOwned>(json: &str, entity: &EntityRef) -> Result<T> {
    serde_json::from_str(json).map_err(|e| ValidationError::MalformedRecord {
        entity: entity.clone(),
        reason: e.to_string(),
    })
}

/// Read and decode `dir/data.json`
pub fn read_record<T: DeserializeOwned>(
    source: &impl DataSource,
    dir: &Path,
    entity: &EntityRef,
) -> Result<T> {
    let path = dir.join(RECORD_FILE);
    let json = source.read_to_string(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ValidationError::MissingFile {
            entity: entity.clone(),
            path: path.clone(),
        },
        _ => ValidationError::MalformedRecord {
            entity: entity.clone(),
            reason: e.to_string(),
        },
    })?;

    parse_record(&json, entity)
}
