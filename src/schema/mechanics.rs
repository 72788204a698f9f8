//! Fixed table of competition format profiles

/// Expected cardinalities for a competition format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MechanicsProfile {
    pub name: &'static str,
    pub required_team_count: usize,
    pub required_date_count: usize,
}

impl MechanicsProfile {
    pub const fn new(name: &'static str, teams: usize, dates: usize) -> Self {
        Self {
            name,
            required_team_count: teams,
            required_date_count: dates,
        }
    }
}

pub static REGIONAL_A: MechanicsProfile = MechanicsProfile::new("regional-a", 16, 18);

pub static REGIONAL_B: MechanicsProfile = MechanicsProfile::new("regional-b", 36, 18);

pub static NATIONAL_A: MechanicsProfile = MechanicsProfile::new("national-a", 20, 38);

/// All supported profiles
pub static ALL_MECHANICS: &[&MechanicsProfile] = &[&REGIONAL_A, &REGIONAL_B, &NATIONAL_A];

/// Get a mechanics profile by name
pub fn get_mechanics(name: &str) -> Option<&'static MechanicsProfile> {
    ALL_MECHANICS.iter().find(|m| m.name == name).copied()
}
