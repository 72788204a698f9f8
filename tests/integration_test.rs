//! End-to-end tests that write a dataset tree to a temporary directory and
//! run the full validation pipeline against it through `FsSource`.

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use sports_data_verify::schema::REGIONAL_A;
use sports_data_verify::ui::RecordingUi;
use sports_data_verify::{
    check_dataset, load_dataset, verify, EntityKind, FsSource, Phase, SilentUi, ValidationError,
    VerifyConfig,
};

// =============================================================================
// Dataset Builder
// =============================================================================

struct TestDataset {
    dir: TempDir,
}

impl TestDataset {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    fn write_record(&self, dir: &str, value: &Value) {
        let dir = self.path(dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("data.json"), serde_json::to_string_pretty(value).unwrap()).unwrap();
    }

    fn write_image(&self, dir: &str, basename: &str) {
        let dir = self.path(dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{}.png", basename)), [0x89, b'P', b'N', b'G']).unwrap();
    }

    fn source(&self) -> FsSource {
        FsSource::new(self.root())
    }

    /// One confederation/country/region/city, one stadium, `team_count` teams
    /// all playing the `carioca` competition on `date_count` dates
    fn minimal(team_count: usize, date_count: usize) -> Self {
        let dataset = Self::new();

        dataset.write_record(
            "stadium/maracana",
            &json!({
                "name": {"en": "Maracana", "pt": "Maracanã"},
                "nickname": {"pt": "Maraca"},
                "capacity": 78838,
                "coord": {"lat": -22.912, "lon": -43.230}
            }),
        );

        dataset.write_image("world", "logo");
        dataset.write_record(
            "world",
            &json!({
                "name": {"en": "World", "pt": "Mundo"},
                "nickname": {"en": "Earth"},
                "confederations": ["conmebol"]
            }),
        );
        dataset.write_image("world/conmebol", "logo");
        dataset.write_record(
            "world/conmebol",
            &json!({
                "name": {"en": "CONMEBOL"},
                "nickname": {"es": "Sudamérica"},
                "countries": ["brazil"]
            }),
        );
        dataset.write_image("world/conmebol/brazil", "flag");
        dataset.write_record(
            "world/conmebol/brazil",
            &json!({"name": {"en": "Brazil", "pt": "Brasil"}, "regions": ["rj"]}),
        );
        dataset.write_image("world/conmebol/brazil/rj", "flag");
        dataset.write_record(
            "world/conmebol/brazil/rj",
            &json!({"name": {"en": "Rio de Janeiro"}, "cities": ["rio"]}),
        );
        dataset.write_image("world/conmebol/brazil/rj/rio", "flag");
        dataset.write_record(
            "world/conmebol/brazil/rj/rio",
            &json!({"name": {"en": "Rio"}, "coord": {"lat": -22.9, "lon": -43.2}}),
        );

        let teams: Vec<String> = (1..=team_count).map(|i| format!("team-{}", i)).collect();
        for team in &teams {
            dataset.write_team(team, json!("maracana"));
        }

        dataset.write_competition("carioca", json!({"teams": teams}));
        dataset.write_schedule(&[("carioca", date_count), ("vacation", 1)]);
        dataset
    }

    fn write_team(&self, id: &str, stadium: Value) {
        let dir = format!("teams/{}", id);
        self.write_image(&dir, "shield");
        let mut record = json!({
            "name": {"en": id},
            "nickname": {"en": id},
            "acronym": {"en": id.to_uppercase()},
            "world": {"continent": "conmebol", "country": "brazil", "region": "rj", "city": "rio"}
        });
        if !stadium.is_null() {
            record["stadium"] = stadium;
        }
        self.write_record(&dir, &record);
    }

    /// `roster` is merged into a record that already has name, nickname and mechanics
    fn write_competition(&self, id: &str, roster: Value) {
        let dir = format!("competitions/{}", id);
        self.write_image(&dir, "logo");
        let mut record = json!({
            "name": {"en": id},
            "nickname": {"en": id},
            "mechanics": "regional-a"
        });
        if let (Some(target), Some(extra)) = (record.as_object_mut(), roster.as_object()) {
            for (key, value) in extra {
                target.insert(key.clone(), value.clone());
            }
        }
        self.write_record(&dir, &record);
    }

    /// Schedule each competition on `n` consecutive dates
    fn write_schedule(&self, entries: &[(&str, usize)]) {
        let mut schedule = serde_json::Map::new();
        for (competition, n) in entries {
            for day in 1..=*n {
                let date = format!("2024-{:03}", day);
                let slot = schedule.entry(date).or_insert_with(|| json!([]));
                if let Some(list) = slot.as_array_mut() {
                    list.push(json!(competition));
                }
            }
        }
        self.write_record("competitions", &Value::Object(schedule));
    }
}

fn run(dataset: &TestDataset) -> Result<sports_data_verify::Report, ValidationError> {
    verify(&dataset.source(), &VerifyConfig::default(), &mut SilentUi::new())
}

// =============================================================================
// End-to-end Scenarios
// =============================================================================

#[test]
fn test_minimal_valid_dataset() {
    let dataset = TestDataset::minimal(REGIONAL_A.required_team_count, REGIONAL_A.required_date_count);
    let mut ui = RecordingUi::default();

    let report = verify(&dataset.source(), &VerifyConfig::default(), &mut ui).unwrap();

    assert_eq!(
        report.summary_lines().join(", "),
        "1 continent, 1 country, 1 region, 1 city, 16 teams, 1 competition"
    );
    assert!(report.quota_warnings.is_empty());
    assert_eq!(
        ui.phases,
        vec![
            Phase::Stadiums,
            Phase::Locations,
            Phase::Teams,
            Phase::Competitions,
            Phase::Memberships,
            Phase::Mechanics,
            Phase::Complete,
        ]
    );
    assert_eq!(
        ui.logs,
        vec![
            "teams in a competition: 16",
            "competitions matching their mechanics: 1",
        ]
    );
}

#[test]
fn test_team_missing_stadium_field() {
    let dataset = TestDataset::minimal(16, 18);
    dataset.write_team("team-3", Value::Null);

    match run(&dataset).unwrap_err() {
        ValidationError::MissingField { entity, field } => {
            assert_eq!(entity.kind, EntityKind::Team);
            assert_eq!(entity.id, "team-3");
            assert_eq!(field, "stadium");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_teams_source_cycle_aborts() {
    let dataset = TestDataset::minimal(16, 18);
    dataset.write_competition("cup-a", json!({"teamsSource": ["cup-b"]}));
    dataset.write_competition("cup-b", json!({"teamsSource": ["cup-a"]}));
    dataset.write_schedule(&[("carioca", 18), ("cup-a", 1), ("cup-b", 1)]);

    let err = run(&dataset).unwrap_err();
    match &err {
        ValidationError::CyclicReference { cycle } => {
            assert_eq!(cycle, &vec!["cup-a", "cup-b", "cup-a"]);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(err.to_string().contains("cup-a -> cup-b -> cup-a"));
}

// =============================================================================
// Cross-reference and Mechanics Failures
// =============================================================================

#[test]
fn test_date_count_mismatch() {
    let dataset = TestDataset::minimal(16, 17);

    assert!(matches!(
        run(&dataset),
        Err(ValidationError::MechanicsMismatch { expected: 18, actual: 17, .. })
    ));
}

#[test]
fn test_team_without_competition() {
    let dataset = TestDataset::minimal(16, 18);
    dataset.write_team("bangu", json!("maracana"));

    assert!(matches!(
        run(&dataset),
        Err(ValidationError::TeamWithoutCompetition { ref team }) if team.id == "bangu"
    ));
}

#[test]
fn test_sourced_competition_counts_resolved_roster() {
    let dataset = TestDataset::minimal(16, 18);
    dataset.write_competition("super-carioca", json!({"teamsSource": ["carioca"]}));
    dataset.write_schedule(&[("carioca", 18), ("super-carioca", 18)]);

    let report = run(&dataset).unwrap();
    assert_eq!(report.competitions, 2);
}

#[test]
fn test_exempt_competition_skips_mechanics() {
    let dataset = TestDataset::minimal(16, 18);
    dataset.write_competition("copa-rio", json!({"teams": ["team-1"]}));
    dataset.write_schedule(&[("carioca", 18), ("copa-rio", 2)]);

    assert!(matches!(run(&dataset), Err(ValidationError::MechanicsMismatch { .. })));

    let mut config = VerifyConfig::default();
    config.exempt.insert("copa-rio".to_string());
    assert!(verify(&dataset.source(), &config, &mut SilentUi::new()).is_ok());
}

#[test]
fn test_undeclared_region_directory() {
    let dataset = TestDataset::minimal(16, 18);
    dataset.write_image("world/conmebol/brazil/sp", "flag");
    dataset.write_record(
        "world/conmebol/brazil/sp",
        &json!({"name": {"en": "Sao Paulo"}, "cities": []}),
    );

    assert!(matches!(
        run(&dataset),
        Err(ValidationError::UndeclaredChild { ref entity, .. }) if entity.id == "sp"
    ));
}

#[test]
fn test_malformed_json() {
    let dataset = TestDataset::minimal(16, 18);
    fs::write(dataset.path("stadium/maracana/data.json"), "{ not json").unwrap();

    assert!(matches!(
        run(&dataset),
        Err(ValidationError::MalformedRecord { ref entity, .. }) if entity.id == "maracana"
    ));
}

#[test]
fn test_quota_warnings_do_not_abort() {
    let dataset = TestDataset::minimal(16, 18);
    let config = VerifyConfig::from_toml_str(
        r#"
        [[quota]]
        regions = ["rj"]
        expected = 2
        "#,
    )
    .unwrap();
    let mut ui = RecordingUi::default();

    let report = verify(&dataset.source(), &config, &mut ui).unwrap();
    assert_eq!(report.quota_warnings.len(), 16);
    assert_eq!(ui.warnings.len(), 16);
    assert!(ui.phases.contains(&Phase::Quotas));
}

#[test]
fn test_load_dataset_resolves_rosters() {
    let dataset = TestDataset::minimal(16, 18);
    dataset.write_competition("cup", json!({"teamsSource": ["carioca", "carioca"]}));
    dataset.write_schedule(&[("carioca", 18), ("cup", 1)]);

    let loaded = load_dataset(&dataset.source(), &VerifyConfig::default(), &mut SilentUi::new()).unwrap();
    let roster = loaded.competitions.resolver().resolve("cup").unwrap();
    assert_eq!(roster.len(), 32);
    assert_eq!(roster[0], "team-1");
    assert_eq!(roster[16], "team-1");
}

#[test]
fn test_checks_run_on_loaded_dataset() {
    let dataset = TestDataset::minimal(16, 17);
    let config = VerifyConfig::default();

    let loaded = load_dataset(&dataset.source(), &config, &mut SilentUi::new()).unwrap();
    assert_eq!(loaded.competitions.resolver().resolve("carioca").unwrap().len(), 16);
    assert!(matches!(
        check_dataset(&loaded, &config, &mut SilentUi::new()),
        Err(ValidationError::MechanicsMismatch { expected: 18, actual: 17, .. })
    ));
}
