use std::collections::BTreeMap;

use super::types::{Competition, RosterSpec};
use crate::error::{Result, ValidationError};

/// Resolves the effective team roster of competitions through `teamsSource` chains
pub struct CompetitionTeamResolver<'a> {
    competitions: &'a BTreeMap<String, Competition>,
}

impl<'a> CompetitionTeamResolver<'a> {
    pub fn new(competitions: &'a BTreeMap<String, Competition>) -> Self {
        Self { competitions }
    }

    /// Ordered roster of a competition, duplicates preserved.
    ///
    /// A key without a record (schedule-only placeholder) resolves to an
    /// empty roster.
    pub fn resolve(&self, key: &str) -> Result<Vec<String>> {
        let mut roster = Vec::new();
        let mut path = Vec::new();
        self.visit(key, &mut path, &mut roster)?;
        Ok(roster)
    }

    /// Resolve every competition once so that cycles surface up front
    pub fn check_acyclic(&self) -> Result<()> {
        for key in self.competitions.keys() {
            self.resolve(key)?;
        }
        Ok(())
    }

    fn visit(&self, key: &str, path: &mut Vec<String>, roster: &mut Vec<String>) -> Result<()> {
        if let Some(start) = path.iter().position(|p| p == key) {
            let mut cycle = path[start..].to_vec();
            cycle.push(key.to_string());
            return Err(ValidationError::CyclicReference { cycle });
        }

        let Some(competition) = self.competitions.get(key) else {
            tracing::debug!(competition = key, "no record, empty roster");
            return Ok(());
        };

        match &competition.roster {
            RosterSpec::Teams(teams) => roster.extend(teams.iter().cloned()),
            RosterSpec::Sourced(sources) => {
                path.push(key.to_string());
                for source in sources {
                    self.visit(source, path, roster)?;
                }
                path.pop();
            }
            RosterSpec::Unspecified => {}
        }

        Ok(())
    }
}
