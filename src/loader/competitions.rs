use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::{list_children, require_declared, require_image};
use crate::config::VerifyConfig;
use crate::error::{EntityRef, Result, ValidationError};
use crate::parser::{
    check_identifier, read_record, reference, required_text, RawCompetition, RawSchedule,
};
use crate::schema::{
    get_mechanics, Competition, CompetitionTeamResolver, RosterSpec, ScheduleIndex, Team,
};
use crate::source::DataSource;
use crate::ui::Ui;

pub const COMPETITIONS_DIR: &str = "competitions";

/// Loaded competitions together with their schedule
#[derive(Debug, Clone, Default)]
pub struct CompetitionRegistry {
    pub competitions: BTreeMap<String, Competition>,
    pub schedule: ScheduleIndex,
}

impl CompetitionRegistry {
    /// Competition keys known from either a record or the schedule
    pub fn keys(&self) -> BTreeSet<&str> {
        self.competitions
            .keys()
            .chain(self.schedule.keys())
            .map(String::as_str)
            .collect()
    }

    pub fn is_known(&self, key: &str) -> bool {
        self.competitions.contains_key(key) || self.schedule.contains_key(key)
    }

    /// Dates a competition is scheduled on
    pub fn dates(&self, key: &str) -> &[String] {
        self.schedule.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn resolver(&self) -> CompetitionTeamResolver<'_> {
        CompetitionTeamResolver::new(&self.competitions)
    }
}

/// Invert the date -> competitions schedule into competition -> dates.
///
/// Dates come out in lexical order rather than file order; only their count
/// is checked.
pub fn index_schedule(raw: &RawSchedule) -> ScheduleIndex {
    let mut index = ScheduleIndex::new();
    for (date, competitions) in raw {
        for competition in competitions {
            index.entry(competition.clone()).or_default().push(date.clone());
        }
    }
    index
}

pub fn load_schedule(source: &impl DataSource) -> Result<ScheduleIndex> {
    let raw: RawSchedule = read_record(source, Path::new(COMPETITIONS_DIR), &EntityRef::schedule())?;
    Ok(index_schedule(&raw))
}

/// Load the schedule and every competition under `competitions/<slug>/`,
/// then check all references between them
pub fn load_competitions(
    source: &impl DataSource,
    teams: &BTreeMap<String, Team>,
    config: &VerifyConfig,
    ui: &mut impl Ui,
) -> Result<CompetitionRegistry> {
    let root = Path::new(COMPETITIONS_DIR);
    let schedule_entity = EntityRef::schedule();
    let schedule = load_schedule(source)?;

    let mut competitions = BTreeMap::new();
    for id in list_children(source, root, &schedule_entity)? {
        let entity = EntityRef::competition(id.as_str());
        let dir = root.join(&id);
        check_identifier(&entity)?;
        require_declared(&entity, &schedule_entity, schedule.contains_key(&id))?;
        require_image(source, &dir, &entity, "logo")?;

        let raw: RawCompetition = read_record(source, &dir, &entity)?;
        let competition = competition(raw, &entity, teams)?;

        ui.set_info(format!("competition {}", id));
        competitions.insert(id, competition);
    }

    let registry = CompetitionRegistry {
        competitions,
        schedule,
    };
    check_references(&registry, config)?;
    registry.resolver().check_acyclic()?;

    tracing::debug!(
        competitions = registry.competitions.len(),
        scheduled = registry.schedule.len(),
        "competitions loaded"
    );
    Ok(registry)
}

fn competition(raw: RawCompetition, entity: &EntityRef, teams: &BTreeMap<String, Team>) -> Result<Competition> {
    let name = required_text(raw.name.as_ref(), entity, "name")?;
    let nickname = required_text(raw.nickname.as_ref(), entity, "nickname")?;

    let mechanics = reference(raw.mechanics.as_ref(), entity, "mechanics")?;
    if get_mechanics(&mechanics).is_none() {
        return Err(ValidationError::dangling(entity, "mechanics", mechanics));
    }

    // An empty teamsSource does not override teams.
    let roster = match (raw.teams_source.filter(|sources| !sources.is_empty()), raw.teams) {
        (Some(sources), teams_listed) => {
            if teams_listed.is_some_and(|t| !t.is_empty()) {
                tracing::debug!(%entity, "teams ignored in favour of teamsSource");
            }
            RosterSpec::Sourced(sources)
        }
        (None, Some(listed)) => {
            if let Some(missing) = listed.iter().find(|team| !teams.contains_key(*team)) {
                return Err(ValidationError::dangling(entity, "teams", missing));
            }
            RosterSpec::Teams(listed)
        }
        (None, None) => RosterSpec::Unspecified,
    };

    Ok(Competition {
        name,
        nickname,
        mechanics,
        relegation: raw.relegation,
        promotion: raw.promotion,
        roster,
    })
}

/// Relegation, promotion and teamsSource targets must be known competitions;
/// a scheduled competition without a record must be exempt
fn check_references(registry: &CompetitionRegistry, config: &VerifyConfig) -> Result<()> {
    for (id, competition) in &registry.competitions {
        let entity = EntityRef::competition(id.as_str());

        let links = [
            ("relegation", competition.relegation.as_ref()),
            ("promotion", competition.promotion.as_ref()),
        ];
        for (field, target) in links {
            if let Some(target) = target {
                if !registry.is_known(target) {
                    return Err(ValidationError::dangling(&entity, field, target));
                }
            }
        }

        if let RosterSpec::Sourced(sources) = &competition.roster {
            if let Some(missing) = sources.iter().find(|s| !registry.is_known(s)) {
                return Err(ValidationError::dangling(&entity, "teamsSource", missing));
            }
        }
    }

    for key in registry.schedule.keys() {
        if !registry.competitions.contains_key(key) && !config.is_exempt(key) {
            return Err(ValidationError::dangling(&EntityRef::schedule(), "competition", key));
        }
    }

    Ok(())
}
