use crate::riot::client::{ApiResult, RiotClient};
use crate::riot::region::Platform;
use crate::riot::types::ChampionMasteryDto;

impl RiotClient {
    /// Get all champion masteries for a player, upstream-ordered by points.
    /// Uses platform routing (eun1, na1, kr, ...).
    pub async fn get_champion_masteries_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> ApiResult<Vec<ChampionMasteryDto>> {
        let url = self.platform_url(
            platform,
            &format!("/lol/champion-mastery/v4/champion-masteries/by-puuid/{puuid}"),
        );

        self.get(&url, &[]).await
    }
}
