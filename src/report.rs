use std::fmt;

use crate::checks::QuotaWarning;

/// Aggregate counts printed after a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub continents: usize,
    pub countries: usize,
    pub regions: usize,
    pub cities: usize,
    pub teams: usize,
    /// Distinct competitions, placeholder excluded
    pub competitions: usize,
    pub quota_warnings: Vec<QuotaWarning>,
}

impl Report {
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            count(self.continents, "continent", "continents"),
            count(self.countries, "country", "countries"),
            count(self.regions, "region", "regions"),
            count(self.cities, "city", "cities"),
            count(self.teams, "team", "teams"),
            count(self.competitions, "competition", "competitions"),
        ]
    }
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report:")?;
        for line in self.summary_lines() {
            writeln!(f, "{}", line)?;
        }
        if !self.quota_warnings.is_empty() {
            writeln!(f, "{} regional quota warning(s)", self.quota_warnings.len())?;
        }
        Ok(())
    }
}
