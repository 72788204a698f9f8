//! Advisory regional quota check. Never fails the run.

use std::collections::BTreeMap;
use std::fmt;

use super::Memberships;
use crate::config::QuotaRule;
use crate::schema::{Location, Team};
use crate::ui::Ui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaWarning {
    pub team: String,
    pub region: String,
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for QuotaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "team '{}' ({}) is in {} competitions, expected {}",
            self.team, self.region, self.actual, self.expected
        )
    }
}

/// Region slugs are only unique within a country. A rule key is either a bare
/// slug, matching that region in every country, or `country/region`.
fn rule_matches(rule: &QuotaRule, location: &Location) -> bool {
    rule.regions.contains(&location.region)
        || rule
            .regions
            .contains(&format!("{}/{}", location.country, location.region))
}

/// Teams homed in the rule's regions whose membership count differs from the expectation
pub fn check_quota(
    teams: &BTreeMap<String, Team>,
    memberships: &Memberships,
    rule: &QuotaRule,
) -> Vec<QuotaWarning> {
    teams
        .iter()
        .filter(|(_, team)| rule_matches(rule, &team.location))
        .filter_map(|(id, team)| {
            let actual = memberships.count(id);
            (actual != rule.expected).then(|| QuotaWarning {
                team: id.clone(),
                region: team.location.region.clone(),
                expected: rule.expected,
                actual,
            })
        })
        .collect()
}

/// Run every configured rule, reporting mismatches as warnings
pub fn check_quotas(
    teams: &BTreeMap<String, Team>,
    memberships: &Memberships,
    rules: &[QuotaRule],
    ui: &mut impl Ui,
) -> Vec<QuotaWarning> {
    let mut warnings = Vec::new();

    for rule in rules {
        for warning in check_quota(teams, memberships, rule) {
            tracing::warn!(
                team = %warning.team,
                region = %warning.region,
                expected = warning.expected,
                actual = warning.actual,
                "regional quota mismatch"
            );
            ui.warn(warning.to_string());
            warnings.push(warning);
        }
    }

    warnings
}
