//! Riot API access: request executor, per-endpoint caches and the resolution
//! chain turning a Riot ID into match or profile data.

use std::time::Duration;

use tracing::debug;

use crate::cache::TtlCache;
use crate::game_info::{
    max_division, ChampionMastery, GameInfo, NameTag, PlayerInfo, RankedEntry, Team, UserInfo,
    UNRANKED,
};

pub mod client;
pub mod endpoints;
pub mod metrics;
pub mod region;
pub mod types;

pub use client::{ApiResult, RiotApiError, RiotClient};
pub use region::{Platform, Region};

use types::{MatchDto, SummonerDto};

const HOUR: Duration = Duration::from_secs(3600);
const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Convert an upstream status failure into a typed absence as close to the
/// source as possible; transport failures keep propagating.
fn absent_on_status<T>(result: ApiResult<T>) -> ApiResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(RiotApiError::Status { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// High level client combining the raw endpoints with memoization and
/// normalization into the domain model.
pub struct RiotApi {
    client: RiotClient,
    account_cache: TtlCache<(String, String, Region), Option<String>>,
    nametag_cache: TtlCache<(String, Region), Option<NameTag>>,
    summoner_cache: TtlCache<(String, Platform), Option<SummonerDto>>,
    match_ids_cache: TtlCache<(String, Region, u32, u32), Vec<String>>,
    match_cache: TtlCache<(String, Region), Option<MatchDto>>,
    ranked_cache: TtlCache<(String, Platform), Vec<RankedEntry>>,
    mastery_cache: TtlCache<(String, Platform), Vec<ChampionMastery>>,
}

impl RiotApi {
    pub fn new(client: RiotClient) -> Self {
        Self {
            client,
            account_cache: TtlCache::new("account", Some(24 * HOUR), 1024),
            nametag_cache: TtlCache::new("nametag", Some(24 * HOUR), 1024),
            summoner_cache: TtlCache::new("summoner", Some(24 * HOUR), 1024),
            match_ids_cache: TtlCache::new("match_ids", Some(DEFAULT_TTL), 128),
            match_cache: TtlCache::new("match", Some(24 * HOUR), 128),
            ranked_cache: TtlCache::new("ranked", Some(DEFAULT_TTL), 128),
            mastery_cache: TtlCache::new("mastery", Some(DEFAULT_TTL), 128),
        }
    }

    /// Resolve a Riot ID to its PUUID. `None` when no such account exists.
    pub async fn account_puuid(
        &self,
        game_name: &str,
        tag_line: &str,
        region: Region,
    ) -> ApiResult<Option<String>> {
        let key = (game_name.to_owned(), tag_line.to_owned(), region);
        self.account_cache
            .get_or_compute(key, || async move {
                debug!("fetching PUUID for {}#{} in {}", game_name, tag_line, region);
                let account = absent_on_status(
                    self.client
                        .get_account_by_riot_id(region, game_name, tag_line)
                        .await,
                )?;
                Ok(account.map(|a| a.puuid))
            })
            .await
    }

    /// Reverse lookup of the current `name#tag` pair for a PUUID.
    pub async fn nametag_by_puuid(
        &self,
        puuid: &str,
        region: Region,
    ) -> ApiResult<Option<NameTag>> {
        self.nametag_cache
            .get_or_compute((puuid.to_owned(), region), || async move {
                debug!("fetching name tag for {} in {}", puuid, region);
                let account =
                    absent_on_status(self.client.get_account_by_puuid(region, puuid).await)?;
                Ok(account.and_then(|a| match (a.game_name, a.tag_line) {
                    (Some(name), Some(tag)) => Some(NameTag::new(name, tag)),
                    _ => None,
                }))
            })
            .await
    }

    pub async fn summoner_by_puuid(
        &self,
        puuid: &str,
        platform: Platform,
    ) -> ApiResult<Option<SummonerDto>> {
        self.summoner_cache
            .get_or_compute((puuid.to_owned(), platform), || async move {
                debug!("fetching summoner for {} on {}", puuid, platform);
                absent_on_status(self.client.get_summoner_by_puuid(platform, puuid).await)
            })
            .await
    }

    /// Match IDs for a PUUID, most recent first. Empty on upstream failure.
    pub async fn match_ids_by_puuid(
        &self,
        puuid: &str,
        region: Region,
        count: u32,
        start: u32,
    ) -> ApiResult<Vec<String>> {
        let key = (puuid.to_owned(), region, count, start);
        self.match_ids_cache
            .get_or_compute(key, || async move {
                debug!("fetching {} match ids for {} in {}", count, puuid, region);
                let ids = absent_on_status(
                    self.client.get_match_ids(region, puuid, count, start).await,
                )?;
                Ok(ids.unwrap_or_default())
            })
            .await
    }

    async fn raw_match_by_id(
        &self,
        match_id: &str,
        region: Region,
    ) -> ApiResult<Option<MatchDto>> {
        self.match_cache
            .get_or_compute((match_id.to_owned(), region), || async move {
                debug!("fetching raw match {} in {}", match_id, region);
                absent_on_status(self.client.get_match(region, match_id).await)
            })
            .await
    }

    /// Ranked standings per queue; rows without a division are skipped and
    /// upstream failures yield an empty list.
    pub async fn ranked_info(
        &self,
        puuid: &str,
        platform: Platform,
    ) -> ApiResult<Vec<RankedEntry>> {
        self.ranked_cache
            .get_or_compute((puuid.to_owned(), platform), || async move {
                debug!("fetching ranked info for {} on {}", puuid, platform);
                let entries = absent_on_status(
                    self.client.get_league_entries_by_puuid(platform, puuid).await,
                )?;
                Ok(entries
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|entry| {
                        let division = entry.rank?;
                        Some(RankedEntry {
                            queue: entry.queue_type,
                            tier: entry.tier,
                            division,
                            lp: entry.league_points,
                            wins: entry.wins,
                            losses: entry.losses,
                        })
                    })
                    .collect())
            })
            .await
    }

    /// Champion masteries in upstream order. Empty on upstream failure.
    pub async fn mastery_info(
        &self,
        puuid: &str,
        platform: Platform,
    ) -> ApiResult<Vec<ChampionMastery>> {
        self.mastery_cache
            .get_or_compute((puuid.to_owned(), platform), || async move {
                debug!("fetching mastery info for {} on {}", puuid, platform);
                let masteries = absent_on_status(
                    self.client
                        .get_champion_masteries_by_puuid(platform, puuid)
                        .await,
                )?;
                Ok(masteries
                    .unwrap_or_default()
                    .into_iter()
                    .map(|m| ChampionMastery {
                        champion_id: m.champion_id,
                        level: m.champion_level,
                        points: m.champion_points,
                        last_play_time: m.last_play_time,
                    })
                    .collect())
            })
            .await
    }

    /// Resolve the summoner, then its recent match IDs. `None` when the
    /// summoner does not exist on the given platform.
    pub async fn recent_matches_ids(
        &self,
        puuid: &str,
        platform: Platform,
        count: u32,
    ) -> ApiResult<Option<(Vec<String>, SummonerDto)>> {
        let Some(summoner) = self.summoner_by_puuid(puuid, platform).await? else {
            return Ok(None);
        };
        let ids = self
            .match_ids_by_puuid(&summoner.puuid, platform.to_region(), count, 0)
            .await?;
        Ok(Some((ids, summoner)))
    }

    /// Build one [`GameInfo`] from a raw match. Name tags cost one extra
    /// round-trip per participant and are only resolved on demand; bulk views
    /// skip them.
    pub async fn match_info_by_id(
        &self,
        match_id: &str,
        region: Region,
        load_name_tags: bool,
    ) -> ApiResult<Option<GameInfo>> {
        let Some(raw) = self.raw_match_by_id(match_id, region).await? else {
            return Ok(None);
        };

        let mut name_tags = Vec::with_capacity(raw.info.participants.len());
        for participant in &raw.info.participants {
            let tag = if load_name_tags {
                self.nametag_by_puuid(&participant.puuid, region).await?
            } else {
                None
            };
            name_tags.push(tag);
        }

        Ok(Some(game_from_raw(match_id, raw, name_tags)))
    }

    /// Detail of the `index`-th most recent match (0-based), with name tags.
    /// `None` when the summoner is unknown or has fewer matches.
    pub async fn recent_match_info(
        &self,
        puuid: &str,
        platform: Platform,
        index: usize,
    ) -> ApiResult<Option<GameInfo>> {
        let Some((ids, _)) = self
            .recent_matches_ids(puuid, platform, index as u32 + 1)
            .await?
        else {
            return Ok(None);
        };
        let Some(match_id) = ids.get(index) else {
            return Ok(None);
        };
        self.match_info_by_id(match_id, platform.to_region(), true)
            .await
    }

    /// Up to `count` recent matches without name tags, skipping any that fail
    /// to resolve, paired with the summoner record.
    pub async fn recent_matches_infos(
        &self,
        puuid: &str,
        platform: Platform,
        count: u32,
    ) -> ApiResult<Option<(Vec<GameInfo>, SummonerDto)>> {
        let Some((ids, summoner)) = self.recent_matches_ids(puuid, platform, count).await? else {
            return Ok(None);
        };
        let mut infos = Vec::with_capacity(ids.len());
        for match_id in &ids {
            if let Some(info) = self
                .match_info_by_id(match_id, platform.to_region(), false)
                .await?
            {
                infos.push(info);
            }
        }
        Ok(Some((infos, summoner)))
    }

    /// Full profile snapshot. `None` when the summoner does not exist; a
    /// failed ranked or mastery branch degrades to its empty default without
    /// aborting the other.
    pub async fn profile_info(
        &self,
        puuid: &str,
        platform: Platform,
    ) -> ApiResult<Option<UserInfo>> {
        let Some(summoner) = self.summoner_by_puuid(puuid, platform).await? else {
            return Ok(None);
        };

        let name_tag = self
            .nametag_by_puuid(&summoner.puuid, platform.to_region())
            .await?;
        let ranks = self.ranked_info(&summoner.puuid, platform).await?;

        let mut rank_solo = UNRANKED.to_string();
        let mut rank_flex = UNRANKED.to_string();
        let (mut lp_solo, mut lp_flex) = (0, 0);
        let (mut wins_solo, mut losses_solo) = (0, 0);
        let (mut wins_flex, mut losses_flex) = (0, 0);
        for rank in &ranks {
            match rank.queue.as_str() {
                "RANKED_SOLO_5x5" => {
                    rank_solo = format!("{} {}", rank.tier, rank.division);
                    lp_solo = rank.lp;
                    wins_solo = rank.wins;
                    losses_solo = rank.losses;
                }
                "RANKED_FLEX_SR" => {
                    rank_flex = format!("{} {}", rank.tier, rank.division);
                    lp_flex = rank.lp;
                    wins_flex = rank.wins;
                    losses_flex = rank.losses;
                }
                _ => {}
            }
        }

        let masteries = self.mastery_info(&summoner.puuid, platform).await?;
        let top_champs = masteries.iter().take(3).cloned().collect();
        let total_mastery = masteries.iter().map(|m| m.level as u64).sum();
        let total_points = masteries.iter().map(|m| m.points as u64).sum();

        Ok(Some(UserInfo {
            puuid: summoner.puuid.clone(),
            name_tag,
            level: summoner.summoner_level,
            icon: summoner.profile_icon_id,
            rank_solo,
            rank_flex,
            lp_solo,
            lp_flex,
            wins_solo,
            losses_solo,
            wins_flex,
            losses_flex,
            max_division: max_division(&ranks),
            top_champs,
            total_points,
            total_mastery,
        }))
    }
}

/// Normalize one raw match document into the domain model. `name_tags` must
/// be aligned with the raw participant order.
fn game_from_raw(match_id: &str, raw: MatchDto, name_tags: Vec<Option<NameTag>>) -> GameInfo {
    let info = raw.info;
    let mut winner = Team::Blue;
    let mut participants = Vec::with_capacity(info.participants.len());

    for (dto, name_tag) in info.participants.into_iter().zip(name_tags) {
        let team = if dto.team_id == 100 {
            Team::Blue
        } else {
            Team::Red
        };
        if dto.win && team == Team::Red {
            winner = Team::Red;
        }
        participants.push(PlayerInfo {
            puuid: dto.puuid,
            name_tag,
            kills: dto.kills,
            deaths: dto.deaths,
            assists: dto.assists,
            champion_name: dto.champion_name,
            champion_id: dto.champion_id,
            gold: dto.gold_earned,
            damage: dto.total_damage_dealt_to_champions,
            creep_score: dto.total_minions_killed + dto.neutral_minions_killed,
            vision_score: dto.vision_score,
            team,
            multikills: [
                dto.double_kills,
                dto.triple_kills,
                dto.quadra_kills,
                dto.penta_kills,
            ],
            position: dto.individual_position,
        });
    }

    GameInfo {
        id: match_id.to_owned(),
        start_time: info.game_start_timestamp,
        duration: info.game_duration,
        winner,
        participants,
        queue_type: info.queue_id.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::types::{InfoDto, ParticipantDto};
    use super::*;
    use crate::game_info::QueueType;

    fn participant(puuid: &str, team_id: u16, win: bool) -> ParticipantDto {
        ParticipantDto {
            puuid: puuid.to_string(),
            kills: 5,
            deaths: 2,
            assists: 7,
            champion_name: "MissFortune".to_string(),
            champion_id: 21,
            gold_earned: 11_000,
            total_damage_dealt_to_champions: 18_000,
            total_minions_killed: 150,
            neutral_minions_killed: 12,
            vision_score: 22,
            team_id,
            win,
            double_kills: 1,
            triple_kills: 0,
            quadra_kills: 0,
            penta_kills: 0,
            individual_position: "BOTTOM".to_string(),
        }
    }

    fn raw_match(participants: Vec<ParticipantDto>) -> MatchDto {
        MatchDto {
            info: InfoDto {
                game_start_timestamp: 1_700_000_000_000,
                game_duration: 1860,
                queue_id: 420,
                participants,
            },
        }
    }

    #[test]
    fn winner_is_red_when_a_red_participant_won() {
        let raw = raw_match(vec![
            participant("blue1", 100, false),
            participant("red1", 200, true),
        ]);
        let game = game_from_raw("EUN1_42", raw, vec![None, None]);

        assert_eq!(game.winner, Team::Red);
        assert_eq!(game.participants[0].team, Team::Blue);
        assert_eq!(game.participants[1].team, Team::Red);
    }

    #[test]
    fn winner_defaults_to_blue() {
        let raw = raw_match(vec![
            participant("blue1", 100, true),
            participant("red1", 200, false),
        ]);
        let game = game_from_raw("EUN1_42", raw, vec![None, None]);

        assert_eq!(game.winner, Team::Blue);
    }

    #[test]
    fn normalization_derives_domain_fields() {
        let raw = raw_match(vec![participant("p1", 100, true)]);
        let tag = NameTag::new("Player".to_string(), "EUNE".to_string());
        let game = game_from_raw("EUN1_42", raw, vec![Some(tag.clone())]);

        assert_eq!(game.id, "EUN1_42");
        assert_eq!(game.queue_type, QueueType::SoloDuo);
        assert_eq!(game.duration, 1860);

        let player = &game.participants[0];
        assert_eq!(player.name_tag.as_ref(), Some(&tag));
        assert_eq!(player.creep_score, 162);
        assert_eq!(player.multikills, [1, 0, 0, 0]);
        assert_eq!(player.position, "BOTTOM");
    }
}
