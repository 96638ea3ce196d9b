use crate::riot::client::{ApiResult, RiotClient};
use crate::riot::region::Region;
use crate::riot::types::AccountDto;

impl RiotClient {
    /// Get account by Riot ID (game name + tag line).
    /// Uses regional routing (americas, europe, asia, sea).
    pub async fn get_account_by_riot_id(
        &self,
        region: Region,
        game_name: &str,
        tag_line: &str,
    ) -> ApiResult<AccountDto> {
        let url = self.region_url(
            region,
            &format!(
                "/riot/account/v1/accounts/by-riot-id/{}/{}",
                urlencoding::encode(game_name),
                urlencoding::encode(tag_line)
            ),
        );

        self.get(&url, &[]).await
    }

    /// Reverse lookup: current Riot ID for a PUUID.
    pub async fn get_account_by_puuid(
        &self,
        region: Region,
        puuid: &str,
    ) -> ApiResult<AccountDto> {
        let url = self.region_url(region, &format!("/riot/account/v1/accounts/by-puuid/{puuid}"));

        self.get(&url, &[]).await
    }
}
