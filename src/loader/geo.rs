//! Four-level geography tree: world -> confederation -> country -> region -> city
//!
//! Each level lists the directories present under its parent, checks them
//! against the child list declared in the parent's record, requires the
//! level's logo/flag image, then descends into the child's own record.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{list_children, require_declared, require_image};
use crate::error::{EntityKind, EntityRef, Result};
use crate::parser::{
    check_identifier, coordinate, read_record, require, required_text, RawCity, RawConfederation,
    RawCountry, RawRegion, RawWorld,
};
use crate::schema::{City, Confederation, Country, Region, World};
use crate::source::DataSource;
use crate::ui::Ui;

pub const WORLD_DIR: &str = "world";

/// Child directory of a geography level that passed the entry checks
struct GeoEntry {
    id: String,
    dir: PathBuf,
    entity: EntityRef,
}

pub struct GeoHierarchyValidator<'a, S: DataSource> {
    source: &'a S,
}

impl<'a, S: DataSource> GeoHierarchyValidator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Validate the whole tree under `world/`
    pub fn validate(&self, ui: &mut impl Ui) -> Result<World> {
        let dir = Path::new(WORLD_DIR);
        let entity = EntityRef::world();

        require_image(self.source, dir, &entity, "logo")?;
        let raw: RawWorld = read_record(self.source, dir, &entity)?;
        let name = required_text(raw.name.as_ref(), &entity, "name")?;
        let nickname = required_text(raw.nickname.as_ref(), &entity, "nickname")?;
        let declared = require(raw.confederations.as_deref(), &entity, "confederations")?;

        let mut confederations = BTreeMap::new();
        for entry in self.entries(dir, &entity, EntityKind::Confederation, declared, "logo")? {
            ui.set_info(format!("confederation {}", entry.id));
            let confederation = self.confederation(&entry, ui)?;
            confederations.insert(entry.id, confederation);
        }

        Ok(World {
            name,
            nickname,
            confederations,
        })
    }

    fn confederation(&self, entry: &GeoEntry, ui: &mut impl Ui) -> Result<Confederation> {
        let raw: RawConfederation = read_record(self.source, &entry.dir, &entry.entity)?;
        let name = required_text(raw.name.as_ref(), &entry.entity, "name")?;
        let nickname = required_text(raw.nickname.as_ref(), &entry.entity, "nickname")?;
        let declared = require(raw.countries.as_deref(), &entry.entity, "countries")?;

        let mut countries = BTreeMap::new();
        for child in self.entries(&entry.dir, &entry.entity, EntityKind::Country, declared, "flag")? {
            ui.set_info(format!("country {} in {}", child.id, entry.id));
            let country = self.country(&child, ui)?;
            countries.insert(child.id, country);
        }

        Ok(Confederation {
            name,
            nickname,
            countries,
        })
    }

    fn country(&self, entry: &GeoEntry, ui: &mut impl Ui) -> Result<Country> {
        let raw: RawCountry = read_record(self.source, &entry.dir, &entry.entity)?;
        let name = required_text(raw.name.as_ref(), &entry.entity, "name")?;
        let declared = require(raw.regions.as_deref(), &entry.entity, "regions")?;

        let mut regions = BTreeMap::new();
        for child in self.entries(&entry.dir, &entry.entity, EntityKind::Region, declared, "flag")? {
            ui.set_info(format!("region {} in {}", child.id, entry.id));
            let region = self.region(&child)?;
            regions.insert(child.id, region);
        }

        Ok(Country { name, regions })
    }

    fn region(&self, entry: &GeoEntry) -> Result<Region> {
        let raw: RawRegion = read_record(self.source, &entry.dir, &entry.entity)?;
        let name = required_text(raw.name.as_ref(), &entry.entity, "name")?;
        let declared = require(raw.cities.as_deref(), &entry.entity, "cities")?;

        let mut cities = BTreeMap::new();
        for child in self.entries(&entry.dir, &entry.entity, EntityKind::City, declared, "flag")? {
            let city = self.city(&child)?;
            cities.insert(child.id, city);
        }

        Ok(Region { name, cities })
    }

    fn city(&self, entry: &GeoEntry) -> Result<City> {
        let raw: RawCity = read_record(self.source, &entry.dir, &entry.entity)?;
        Ok(City {
            name: required_text(raw.name.as_ref(), &entry.entity, "name")?,
            coord: coordinate(raw.coord.as_ref(), &entry.entity)?,
        })
    }

    /// Child directories of `dir`, each checked against the identifier rule,
    /// the parent's declared list and the required image
    fn entries(
        &self,
        dir: &Path,
        parent: &EntityRef,
        kind: EntityKind,
        declared: &[String],
        image: &str,
    ) -> Result<Vec<GeoEntry>> {
        let mut entries = Vec::new();

        for id in list_children(self.source, dir, parent)? {
            let entity = EntityRef::new(kind, id.as_str());
            let child_dir = dir.join(&id);

            check_identifier(&entity)?;
            require_declared(&entity, parent, declared.contains(&id))?;
            require_image(self.source, &child_dir, &entity, image)?;

            tracing::debug!(%entity, "geography entry accepted");
            entries.push(GeoEntry {
                id,
                dir: child_dir,
                entity,
            });
        }

        Ok(entries)
    }
}
