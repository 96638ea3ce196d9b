use crate::riot::client::{ApiResult, RiotClient};
use crate::riot::region::Platform;
use crate::riot::types::LeagueEntryDto;

impl RiotClient {
    /// Get league entries (ranked info) for a player by PUUID.
    /// Uses platform routing (eun1, na1, kr, ...).
    pub async fn get_league_entries_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> ApiResult<Vec<LeagueEntryDto>> {
        let url = self.platform_url(platform, &format!("/lol/league/v4/entries/by-puuid/{puuid}"));

        self.get(&url, &[]).await
    }
}
