use crate::riot::client::{ApiResult, RiotClient};
use crate::riot::region::Platform;
use crate::riot::types::SummonerDto;

impl RiotClient {
    /// Get summoner by PUUID (level and profile icon).
    /// Uses platform routing (eun1, na1, kr, ...).
    pub async fn get_summoner_by_puuid(
        &self,
        platform: Platform,
        puuid: &str,
    ) -> ApiResult<SummonerDto> {
        let url = self.platform_url(
            platform,
            &format!("/lol/summoner/v4/summoners/by-puuid/{puuid}"),
        );

        self.get(&url, &[]).await
    }
}
