use std::collections::BTreeMap;
use std::path::Path;

use super::{list_children, require_image};
use crate::error::{EntityKind, EntityRef, Result, ValidationError};
use crate::parser::{
    acronym, check_identifier, read_record, reference, require, required_text, RawLocation, RawTeam,
};
use crate::schema::{Location, Stadium, Team, World};
use crate::source::DataSource;
use crate::ui::Ui;

pub const TEAMS_DIR: &str = "teams";

/// Load every team under `teams/<slug>/`, resolving stadium and home city
pub fn load_teams(
    source: &impl DataSource,
    stadiums: &BTreeMap<String, Stadium>,
    world: &World,
    ui: &mut impl Ui,
) -> Result<BTreeMap<String, Team>> {
    let root = Path::new(TEAMS_DIR);
    let owner = EntityRef::new(EntityKind::Team, "");
    let mut teams = BTreeMap::new();

    for id in list_children(source, root, &owner)? {
        let entity = EntityRef::team(id.as_str());
        let dir = root.join(&id);
        check_identifier(&entity)?;
        require_image(source, &dir, &entity, "shield")?;

        let raw: RawTeam = read_record(source, &dir, &entity)?;
        let name = required_text(raw.name.as_ref(), &entity, "name")?;
        let nickname = required_text(raw.nickname.as_ref(), &entity, "nickname")?;
        let acronym = acronym(raw.acronym.as_ref(), &entity)?;

        let stadium = reference(raw.stadium.as_ref(), &entity, "stadium")?;
        if !stadiums.contains_key(&stadium) {
            return Err(ValidationError::dangling(&entity, "stadium", stadium));
        }

        let location = location(require(raw.world.as_ref(), &entity, "world")?, &entity)?;
        resolve_location(world, &location, &entity)?;

        ui.set_info(format!("team {}", id));
        teams.insert(
            id,
            Team {
                name,
                nickname,
                acronym,
                stadium,
                location,
            },
        );
    }

    tracing::debug!(count = teams.len(), "teams loaded");
    Ok(teams)
}

fn location(raw: &RawLocation, entity: &EntityRef) -> Result<Location> {
    Ok(Location {
        confederation: reference(raw.continent.as_ref(), entity, "continent")?,
        country: reference(raw.country.as_ref(), entity, "country")?,
        region: reference(raw.region.as_ref(), entity, "region")?,
        city: reference(raw.city.as_ref(), entity, "city")?,
    })
}

/// Walk the location down the tree, naming the first level that does not resolve
pub fn resolve_location(world: &World, location: &Location, entity: &EntityRef) -> Result<()> {
    let confederation = world
        .confederations
        .get(&location.confederation)
        .ok_or_else(|| ValidationError::dangling(entity, "continent", &location.confederation))?;
    let country = confederation
        .countries
        .get(&location.country)
        .ok_or_else(|| ValidationError::dangling(entity, "country", &location.country))?;
    let region = country
        .regions
        .get(&location.region)
        .ok_or_else(|| ValidationError::dangling(entity, "region", &location.region))?;
    region
        .cities
        .get(&location.city)
        .ok_or_else(|| ValidationError::dangling(entity, "city", &location.city))?;
    Ok(())
}
