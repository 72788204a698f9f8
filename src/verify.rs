//! Full validation pass in dependency order:
//! stadiums and geography, then teams, then competitions, then the
//! cross-cutting membership, mechanics and quota checks.

use std::collections::BTreeMap;

use crate::checks::{
    check_mechanics, check_quotas, check_team_memberships, Memberships, QuotaWarning,
};
use crate::config::VerifyConfig;
use crate::error::Result;
use crate::loader::{
    load_competitions, load_stadiums, load_teams, CompetitionRegistry, GeoHierarchyValidator,
};
use crate::report::Report;
use crate::schema::{Stadium, Team, World};
use crate::source::DataSource;
use crate::ui::{Phase, Ui};

/// Every registry, fully validated
#[derive(Debug, Clone)]
pub struct Dataset {
    pub stadiums: BTreeMap<String, Stadium>,
    pub world: World,
    pub teams: BTreeMap<String, Team>,
    pub competitions: CompetitionRegistry,
}

/// Load all registries and check every reference between them
pub fn load_dataset(
    source: &impl DataSource,
    config: &VerifyConfig,
    ui: &mut impl Ui,
) -> Result<Dataset> {
    ui.set_phase(Phase::Stadiums);
    let stadiums = load_stadiums(source, ui)?;

    ui.set_phase(Phase::Locations);
    let world = GeoHierarchyValidator::new(source).validate(ui)?;

    ui.set_phase(Phase::Teams);
    let teams = load_teams(source, &stadiums, &world, ui)?;

    ui.set_phase(Phase::Competitions);
    let competitions = load_competitions(source, &teams, config, ui)?;

    Ok(Dataset {
        stadiums,
        world,
        teams,
        competitions,
    })
}

/// Run the whole gate. The first error aborts; quota mismatches are only reported.
pub fn verify(source: &impl DataSource, config: &VerifyConfig, ui: &mut impl Ui) -> Result<Report> {
    let dataset = load_dataset(source, config, ui)?;
    check_dataset(&dataset, config, ui)
}

/// Membership, mechanics and quota checks over an already loaded dataset
pub fn check_dataset(dataset: &Dataset, config: &VerifyConfig, ui: &mut impl Ui) -> Result<Report> {
    ui.set_phase(Phase::Memberships);
    let memberships = Memberships::compute(&dataset.competitions, config)?;
    check_team_memberships(&dataset.teams, &memberships)?;
    ui.log(format!("teams in a competition: {}", dataset.teams.len()));

    ui.set_phase(Phase::Mechanics);
    let checked = check_mechanics(&dataset.competitions, config, ui)?;
    ui.log(format!("competitions matching their mechanics: {}", checked));

    let quota_warnings = if config.quotas.is_empty() {
        Vec::new()
    } else {
        ui.set_phase(Phase::Quotas);
        check_quotas(&dataset.teams, &memberships, &config.quotas, ui)
    };

    ui.set_phase(Phase::Complete);
    Ok(report(dataset, config, quota_warnings))
}

fn report(dataset: &Dataset, config: &VerifyConfig, quota_warnings: Vec<QuotaWarning>) -> Report {
    let competitions = dataset
        .competitions
        .keys()
        .into_iter()
        .filter(|key| !config.is_placeholder(key))
        .count();

    Report {
        continents: dataset.world.confederations.len(),
        countries: dataset.world.country_count(),
        regions: dataset.world.region_count(),
        cities: dataset.world.city_count(),
        teams: dataset.teams.len(),
        competitions,
        quota_warnings,
    }
}
