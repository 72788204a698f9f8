use std::collections::BTreeMap;

use crate::config::VerifyConfig;
use crate::error::{EntityRef, Result, ValidationError};
use crate::loader::CompetitionRegistry;
use crate::schema::Team;

/// How often each team appears in the resolved rosters of non-exempt
/// competitions. Duplicate occurrences count as separate hits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memberships {
    counts: BTreeMap<String, usize>,
}

impl Memberships {
    pub fn compute(registry: &CompetitionRegistry, config: &VerifyConfig) -> Result<Self> {
        let resolver = registry.resolver();
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();

        for key in registry.competitions.keys() {
            if config.is_exempt(key) {
                continue;
            }
            for team in resolver.resolve(key)? {
                *counts.entry(team).or_default() += 1;
            }
        }

        Ok(Self { counts })
    }

    pub fn count(&self, team: &str) -> usize {
        self.counts.get(team).copied().unwrap_or(0)
    }
}

/// Every team must play in at least one non-exempt competition
pub fn check_team_memberships(teams: &BTreeMap<String, Team>, memberships: &Memberships) -> Result<()> {
    match teams.keys().find(|team| memberships.count(team) == 0) {
        Some(team) => Err(ValidationError::TeamWithoutCompetition {
            team: EntityRef::team(team.as_str()),
        }),
        None => Ok(()),
    }
}
