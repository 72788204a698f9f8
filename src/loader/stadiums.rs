use std::collections::BTreeMap;
use std::path::Path;

use super::list_children;
use crate::error::{EntityKind, EntityRef, Result};
use crate::parser::{capacity, check_identifier, coordinate, read_record, required_text, RawStadium};
use crate::schema::Stadium;
use crate::source::DataSource;
use crate::ui::Ui;

pub const STADIUM_DIR: &str = "stadium";

/// Load every stadium under `stadium/<slug>/`
pub fn load_stadiums(source: &impl DataSource, ui: &mut impl Ui) -> Result<BTreeMap<String, Stadium>> {
    let root = Path::new(STADIUM_DIR);
    let owner = EntityRef::new(EntityKind::Stadium, "");
    let mut stadiums = BTreeMap::new();

    for id in list_children(source, root, &owner)? {
        let entity = EntityRef::new(EntityKind::Stadium, id.as_str());
        check_identifier(&entity)?;

        let raw: RawStadium = read_record(source, &root.join(&id), &entity)?;
        let stadium = Stadium {
            name: required_text(raw.name.as_ref(), &entity, "name")?,
            nickname: required_text(raw.nickname.as_ref(), &entity, "nickname")?,
            capacity: capacity(raw.capacity.as_ref(), &entity)?,
            coord: coordinate(raw.coord.as_ref(), &entity)?,
        };

        ui.set_info(format!("stadium {}", id));
        stadiums.insert(id, stadium);
    }

    tracing::debug!(count = stadiums.len(), "stadiums loaded");
    Ok(stadiums)
}
