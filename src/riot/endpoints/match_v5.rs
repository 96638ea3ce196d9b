use crate::riot::client::{ApiResult, RiotClient};
use crate::riot::region::Region;
use crate::riot::types::MatchDto;

impl RiotClient {
    /// Get a window of match IDs by PUUID, most recent first.
    /// Uses regional routing (americas, europe, asia, sea).
    pub async fn get_match_ids(
        &self,
        region: Region,
        puuid: &str,
        count: u32,
        start: u32,
    ) -> ApiResult<Vec<String>> {
        let url = self.region_url(region, &format!("/lol/match/v5/matches/by-puuid/{puuid}/ids"));

        self.get(&url, &[("count", count.to_string()), ("start", start.to_string())])
            .await
    }

    /// Get full match details by match ID.
    /// Uses regional routing (americas, europe, asia, sea).
    pub async fn get_match(&self, region: Region, match_id: &str) -> ApiResult<MatchDto> {
        let url = self.region_url(region, &format!("/lol/match/v5/matches/{match_id}"));

        self.get(&url, &[]).await
    }
}
