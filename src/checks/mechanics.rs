use crate::config::VerifyConfig;
use crate::error::{EntityRef, MechanicsDimension, Result, ValidationError};
use crate::loader::CompetitionRegistry;
use crate::schema::{get_mechanics, MechanicsProfile};
use crate::ui::Ui;

/// Compare resolved roster and schedule sizes with a profile.
///
/// Both dimensions are always evaluated; the team count comes first.
pub fn compare_mechanics(
    competition: &EntityRef,
    profile: &MechanicsProfile,
    team_count: usize,
    date_count: usize,
) -> Vec<ValidationError> {
    let dimensions = [
        (MechanicsDimension::Teams, profile.required_team_count, team_count),
        (MechanicsDimension::Dates, profile.required_date_count, date_count),
    ];

    dimensions
        .into_iter()
        .filter(|(_, expected, actual)| expected != actual)
        .map(|(dimension, expected, actual)| ValidationError::MechanicsMismatch {
            competition: competition.clone(),
            dimension,
            expected,
            actual,
        })
        .collect()
}

/// Check every non-exempt competition against its mechanics profile.
/// Returns the number of competitions checked.
pub fn check_mechanics(
    registry: &CompetitionRegistry,
    config: &VerifyConfig,
    ui: &mut impl Ui,
) -> Result<usize> {
    let resolver = registry.resolver();
    let mut checked = 0;

    for (key, competition) in &registry.competitions {
        if config.is_exempt(key) {
            tracing::debug!(competition = %key, "exempt, skipping mechanics");
            continue;
        }

        let entity = EntityRef::competition(key.as_str());
        let profile = get_mechanics(&competition.mechanics)
            .ok_or_else(|| ValidationError::dangling(&entity, "mechanics", &competition.mechanics))?;

        let team_count = resolver.resolve(key)?.len();
        let date_count = registry.dates(key).len();
        ui.set_info(format!(
            "{}: {} teams, {} dates ({})",
            key, team_count, date_count, profile.name
        ));

        let mut mismatches = compare_mechanics(&entity, profile, team_count, date_count).into_iter();
        if let Some(first) = mismatches.next() {
            for other in mismatches {
                tracing::debug!(%other, "additional mechanics mismatch");
            }
            return Err(first);
        }

        checked += 1;
    }

    Ok(checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Competition, LocalizedText, RosterSpec, REGIONAL_A};
    use crate::ui::SilentUi;
    use std::collections::BTreeMap;

    fn text() -> LocalizedText {
        LocalizedText::new_unchecked(BTreeMap::from([("en".to_string(), "x".to_string())]))
    }

    fn registry(team_count: usize, date_count: usize) -> CompetitionRegistry {
        let teams = (0..team_count).map(|i| format!("team-{}", i)).collect();
        let dates = (0..date_count).map(|i| format!("2024-{:03}", i)).collect();
        CompetitionRegistry {
            competitions: BTreeMap::from([(
                "carioca".to_string(),
                Competition {
                    name: text(),
                    nickname: text(),
                    mechanics: "regional-a".into(),
                    relegation: None,
                    promotion: None,
                    roster: RosterSpec::Teams(teams),
                },
            )]),
            schedule: BTreeMap::from([("carioca".to_string(), dates)]),
        }
    }

    fn check(registry: &CompetitionRegistry) -> Result<usize> {
        check_mechanics(registry, &VerifyConfig::default(), &mut SilentUi::new())
    }

    #[test]
    fn test_matching_profile_passes() {
        assert_eq!(check(&registry(16, 18)).unwrap(), 1);
    }

    #[test]
    fn test_any_other_pair_is_rejected() {
        for (teams, dates) in [(15, 18), (16, 17), (17, 19), (0, 0)] {
            assert!(
                matches!(check(&registry(teams, dates)), Err(ValidationError::MechanicsMismatch { .. })),
                "{} teams / {} dates accepted",
                teams,
                dates
            );
        }
    }

    #[test]
    fn test_team_count_reported_first() {
        match check(&registry(15, 17)) {
            Err(ValidationError::MechanicsMismatch {
                dimension,
                expected,
                actual,
                ..
            }) => {
                assert_eq!(dimension, MechanicsDimension::Teams);
                assert_eq!((expected, actual), (16, 15));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_compare_evaluates_both_dimensions() {
        let mismatches = compare_mechanics(&EntityRef::competition("carioca"), &REGIONAL_A, 15, 17);
        assert_eq!(mismatches.len(), 2);
        assert!(compare_mechanics(&EntityRef::competition("carioca"), &REGIONAL_A, 16, 18).is_empty());
    }

    #[test]
    fn test_exempt_competition_skipped() {
        let config = VerifyConfig {
            placeholder: "carioca".into(),
            ..VerifyConfig::default()
        };
        assert_eq!(
            check_mechanics(&registry(1, 1), &config, &mut SilentUi::new()).unwrap(),
            0
        );
    }
}
