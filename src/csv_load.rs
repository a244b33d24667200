use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::de::DeserializeOwned;

use crate::tables::{
    CountryRow, LeagueRow, MatchRow, PlayerAttributesRow, PlayerRow, TeamAttributesRow, TeamRow,
};

/// The seven tables of the 2008-2016 European football export, loaded in
/// full and held in memory for the session.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub countries: Vec<CountryRow>,
    pub leagues: Vec<LeagueRow>,
    pub players: Vec<PlayerRow>,
    pub teams: Vec<TeamRow>,
    pub team_attributes: Vec<TeamAttributesRow>,
    pub player_attributes: Vec<PlayerAttributesRow>,
    pub matches: Vec<MatchRow>,
}

impl Dataset {
    pub fn table_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("Country", self.countries.len()),
            ("League", self.leagues.len()),
            ("Player", self.players.len()),
            ("Team", self.teams.len()),
            ("Team_Attributes", self.team_attributes.len()),
            ("Player_Attributes", self.player_attributes.len()),
            ("Match", self.matches.len()),
        ]
    }

    pub fn league_name(&self, league_id: i64) -> Option<&str> {
        self.leagues
            .iter()
            .find(|l| l.id == league_id)
            .map(|l| l.name.as_str())
    }

    pub fn country_name(&self, country_id: i64) -> Option<&str> {
        self.countries
            .iter()
            .find(|c| c.id == country_id)
            .map(|c| c.name.as_str())
    }
}

pub fn default_data_dir() -> PathBuf {
    match std::env::var("EURO_DATA_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir.trim()),
        _ => PathBuf::from("data"),
    }
}

pub fn load_dataset(dir: &Path) -> Result<Dataset> {
    if !dir.is_dir() {
        return Err(anyhow!("data directory {} does not exist", dir.display()));
    }

    Ok(Dataset {
        countries: load_table(dir, "Country")?,
        leagues: load_table(dir, "League")?,
        players: load_table(dir, "Player")?,
        teams: load_table(dir, "Team")?,
        team_attributes: load_table(dir, "Team_Attributes")?,
        player_attributes: load_table(dir, "Player_Attributes")?,
        matches: load_table(dir, "Match")?,
    })
}

fn load_table<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>> {
    let path = dir.join(format!("{name}.csv"));
    let mut reader = csv::Reader::from_path(&path)
        .with_context(|| format!("open csv table {}", path.display()))?;

    let mut out = Vec::new();
    for (idx, record) in reader.deserialize::<T>().enumerate() {
        let row = record.with_context(|| format!("decode {name} row {}", idx + 2))?;
        out.push(row);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::default_data_dir;
    use std::path::PathBuf;

    #[test]
    fn default_data_dir_falls_back_to_relative_data() {
        // Only meaningful when the env override is absent, as in CI.
        if std::env::var("EURO_DATA_DIR").is_err() {
            assert_eq!(default_data_dir(), PathBuf::from("data"));
        }
    }
}
