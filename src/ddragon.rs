//! Static game data from the Data Dragon CDN.
//!
//! The champion table is fetched once during startup and stays immutable for
//! the process lifetime; a failed fetch aborts boot instead of surfacing
//! mid-command.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct ChampionFile {
    data: HashMap<String, ChampionEntry>,
}

#[derive(Debug, Deserialize)]
struct ChampionEntry {
    /// Numeric champion ID, serialized as a string upstream.
    key: String,
    name: String,
}

/// Immutable champion ID → display name table plus asset version.
#[derive(Debug)]
pub struct ChampionIndex {
    version: String,
    champions: HashMap<u32, String>,
}

impl ChampionIndex {
    pub async fn load(version: &str) -> Result<Self, AppError> {
        let url =
            format!("https://ddragon.leagueoflegends.com/cdn/{version}/data/en_US/champion.json");
        let file: ChampionFile = reqwest::get(&url)
            .await?
            .error_for_status()?
            .json()
            .await?;
        Self::build(version, file)
    }

    fn build(version: &str, file: ChampionFile) -> Result<Self, AppError> {
        let mut champions = HashMap::with_capacity(file.data.len());
        for entry in file.data.into_values() {
            let id: u32 = entry
                .key
                .parse()
                .map_err(|_| AppError::Ddragon(format!("bad champion key '{}'", entry.key)))?;
            champions.insert(id, entry.name);
        }
        Ok(Self {
            version: version.to_owned(),
            champions,
        })
    }

    pub fn champion_name(&self, champion_id: u32) -> Option<&str> {
        self.champions.get(&champion_id).map(String::as_str)
    }

    pub fn profile_icon_url(&self, icon_id: i32) -> String {
        format!(
            "https://ddragon.leagueoflegends.com/cdn/{}/img/profileicon/{}.png",
            self.version, icon_id
        )
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_id_to_name_table() {
        let file: ChampionFile = serde_json::from_value(serde_json::json!({
            "data": {
                "MissFortune": { "key": "21", "name": "Miss Fortune" },
                "Ahri": { "key": "103", "name": "Ahri" }
            }
        }))
        .unwrap();

        let index = ChampionIndex::build("14.3.1", file).unwrap();
        assert_eq!(index.champion_name(21), Some("Miss Fortune"));
        assert_eq!(index.champion_name(1), None);
        assert_eq!(
            index.profile_icon_url(512),
            "https://ddragon.leagueoflegends.com/cdn/14.3.1/img/profileicon/512.png"
        );
    }

    #[test]
    fn rejects_non_numeric_champion_key() {
        let file: ChampionFile = serde_json::from_value(serde_json::json!({
            "data": { "Broken": { "key": "not-a-number", "name": "Broken" } }
        }))
        .unwrap();

        assert!(ChampionIndex::build("14.3.1", file).is_err());
    }
}
