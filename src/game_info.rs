//! Normalized domain model assembled from raw Riot match and profile data,
//! plus the derived statistics the renderer displays.

use std::fmt;

pub const UNRANKED: &str = "UNRANKED";

/// Games shorter than this are administratively voided upstream.
const REMAKE_MAX_SECS: u64 = 300;

/// The user-facing `name#tag` identity pair, resolved from a PUUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTag {
    pub name: String,
    pub tag: String,
}

impl NameTag {
    pub fn new(name: String, tag: String) -> Self {
        Self { name, tag }
    }
}

impl fmt::Display for NameTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Blue => "Blue",
            Team::Red => "Red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueType {
    Draft,
    SoloDuo,
    Blind,
    Flex,
    Aram,
    Clash,
    Other,
}

impl From<u16> for QueueType {
    fn from(queue_id: u16) -> Self {
        match queue_id {
            400 => Self::Draft,
            420 => Self::SoloDuo,
            430 => Self::Blind,
            440 => Self::Flex,
            450 => Self::Aram,
            700 => Self::Clash,
            _ => Self::Other,
        }
    }
}

impl QueueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueType::Draft => "Draft",
            QueueType::SoloDuo => "Solo/Duo",
            QueueType::Blind => "Blind",
            QueueType::Flex => "Flex",
            QueueType::Aram => "ARAM",
            QueueType::Clash => "Clash",
            QueueType::Other => "Other",
        }
    }
}

/// One participant of a completed match.
#[derive(Debug, Clone)]
pub struct PlayerInfo {
    pub puuid: String,
    /// Resolved lazily; `None` when the reverse lookup was skipped or failed.
    pub name_tag: Option<NameTag>,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub champion_name: String,
    pub champion_id: u32,
    pub gold: u32,
    pub damage: u32,
    /// Minion plus neutral-minion kills.
    pub creep_score: u32,
    pub vision_score: u32,
    pub team: Team,
    /// Double/triple/quadra/penta kill counts.
    pub multikills: [u32; 4],
    pub position: String,
}

impl PlayerInfo {
    pub fn kda(&self) -> String {
        if self.deaths == 0 {
            return "Perfect".to_string();
        }
        format_rounded((self.kills + self.assists) as f64 / self.deaths as f64)
    }

    /// Undefined for zero-length games.
    pub fn cs_per_minute(&self, duration_secs: u64) -> Option<f64> {
        if duration_secs == 0 {
            return None;
        }
        Some(self.creep_score as f64 / (duration_secs as f64 / 60.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Victory,
    Defeat,
    Remake,
}

/// One completed match.
#[derive(Debug, Clone)]
pub struct GameInfo {
    pub id: String,
    /// Epoch milliseconds.
    pub start_time: i64,
    /// Seconds.
    pub duration: u64,
    pub winner: Team,
    pub participants: Vec<PlayerInfo>,
    pub queue_type: QueueType,
}

impl GameInfo {
    pub fn participant(&self, puuid: &str) -> Option<&PlayerInfo> {
        self.participants.iter().find(|p| p.puuid == puuid)
    }

    pub fn team_kills(&self, team: Team) -> u32 {
        self.participants
            .iter()
            .filter(|p| p.team == team)
            .map(|p| p.kills)
            .sum()
    }

    pub fn is_remake(&self) -> bool {
        self.duration < REMAKE_MAX_SECS
    }

    /// Match result from the perspective of `puuid`. A participant missing
    /// from the match counts as a defeat.
    pub fn outcome_for(&self, puuid: &str) -> MatchOutcome {
        if self.is_remake() {
            return MatchOutcome::Remake;
        }
        match self.participant(puuid) {
            Some(p) if p.team == self.winner => MatchOutcome::Victory,
            _ => MatchOutcome::Defeat,
        }
    }

    /// Highest multikill tier (0 = double .. 3 = penta) anyone reached.
    pub fn max_multikill_tier(&self) -> Option<usize> {
        let mut max_tier = None;
        for player in &self.participants {
            for (tier, &count) in player.multikills.iter().enumerate() {
                if count > 0 {
                    max_tier = Some(max_tier.map_or(tier, |t: usize| t.max(tier)));
                }
            }
        }
        max_tier
    }

    /// Highest damage dealt by any participant. A forward scan with a strict
    /// comparison keeps the first occurrence on ties.
    pub fn top_damage(&self) -> u32 {
        let mut top = 0;
        for player in &self.participants {
            if player.damage > top {
                top = player.damage;
            }
        }
        top
    }

    pub fn formatted_duration(&self) -> String {
        let minutes = self.duration / 60;
        let seconds = self.duration % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// One row of ranked standings for a single queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub queue: String,
    pub tier: String,
    pub division: String,
    pub lp: i32,
    pub wins: u32,
    pub losses: u32,
}

/// One champion-mastery row, upstream-ordered (highest points first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionMastery {
    pub champion_id: u32,
    pub level: u32,
    pub points: u32,
    pub last_play_time: i64,
}

/// Profile snapshot assembled fresh per request; only its network inputs are
/// cached.
#[derive(Debug, Clone)]
pub struct UserInfo {
    pub puuid: String,
    pub name_tag: Option<NameTag>,
    pub level: u32,
    pub icon: i32,
    pub rank_solo: String,
    pub rank_flex: String,
    pub lp_solo: i32,
    pub lp_flex: i32,
    pub wins_solo: u32,
    pub losses_solo: u32,
    pub wins_flex: u32,
    pub losses_flex: u32,
    pub max_division: String,
    pub top_champs: Vec<ChampionMastery>,
    pub total_points: u64,
    pub total_mastery: u64,
}

/// Ordinal weight of a ranked tier; unknown tiers weigh the same as UNRANKED.
pub fn tier_weight(tier: &str) -> i32 {
    match tier.to_ascii_uppercase().as_str() {
        "IRON" => 0,
        "BRONZE" => 1,
        "SILVER" => 2,
        "GOLD" => 3,
        "PLATINUM" => 4,
        "EMERALD" => 5,
        "DIAMOND" => 6,
        "MASTER" => 7,
        "GRANDMASTER" => 8,
        "CHALLENGER" => 9,
        _ => -1,
    }
}

/// Highest-weighted tier across all ranked queues; ties keep the first-seen
/// tier at that weight.
pub fn max_division(ranks: &[RankedEntry]) -> String {
    let mut best = UNRANKED.to_string();
    for rank in ranks {
        if tier_weight(&best) < tier_weight(&rank.tier) {
            best = rank.tier.to_ascii_uppercase();
        }
    }
    best
}

/// `None` when no games were played, so the field can be omitted entirely.
pub fn win_rate(wins: u32, losses: u32) -> Option<f64> {
    let games = wins + losses;
    if games == 0 {
        return None;
    }
    Some(wins as f64 / games as f64 * 100.0)
}

/// Round to two decimals and render with the shortest decimal form, keeping
/// at least one fractional digit: `4.0`, `4.5`, `4.25`.
pub fn format_rounded(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let mut s = format!("{:.2}", rounded);
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(puuid: &str, team: Team, kills: u32) -> PlayerInfo {
        PlayerInfo {
            puuid: puuid.to_string(),
            name_tag: None,
            kills,
            deaths: 2,
            assists: 5,
            champion_name: "Ahri".to_string(),
            champion_id: 103,
            gold: 10_000,
            damage: 15_000,
            creep_score: 180,
            vision_score: 20,
            team,
            multikills: [0, 0, 0, 0],
            position: "MIDDLE".to_string(),
        }
    }

    fn game(duration: u64, winner: Team, participants: Vec<PlayerInfo>) -> GameInfo {
        GameInfo {
            id: "EUN1_1".to_string(),
            start_time: 1_700_000_000_000,
            duration,
            winner,
            participants,
            queue_type: QueueType::SoloDuo,
        }
    }

    #[test]
    fn kda_is_perfect_without_deaths() {
        let mut p = player("a", Team::Blue, 3);
        p.deaths = 0;
        assert_eq!(p.kda(), "Perfect");
    }

    #[test]
    fn kda_rounds_to_two_decimals() {
        let mut p = player("a", Team::Blue, 3);
        p.assists = 5;
        p.deaths = 2;
        assert_eq!(p.kda(), "4.0");

        p.kills = 10;
        p.assists = 3;
        p.deaths = 3;
        assert_eq!(p.kda(), "4.33");
    }

    #[test]
    fn cs_per_minute_is_undefined_for_zero_duration() {
        let p = player("a", Team::Blue, 3);
        assert_eq!(p.cs_per_minute(0), None);
        assert_eq!(p.cs_per_minute(1800), Some(6.0));
    }

    #[test]
    fn short_game_is_a_remake_regardless_of_winner() {
        let g = game(250, Team::Blue, vec![player("a", Team::Blue, 20)]);
        assert_eq!(g.outcome_for("a"), MatchOutcome::Remake);
    }

    #[test]
    fn five_minute_game_is_scored_normally() {
        let g = game(
            300,
            Team::Blue,
            vec![player("a", Team::Blue, 1), player("b", Team::Red, 1)],
        );
        assert_eq!(g.outcome_for("a"), MatchOutcome::Victory);
        assert_eq!(g.outcome_for("b"), MatchOutcome::Defeat);
    }

    #[test]
    fn team_kills_are_summed_per_team() {
        let g = game(
            1800,
            Team::Blue,
            vec![
                player("a", Team::Blue, 4),
                player("b", Team::Blue, 6),
                player("c", Team::Red, 3),
            ],
        );
        assert_eq!(g.team_kills(Team::Blue), 10);
        assert_eq!(g.team_kills(Team::Red), 3);
    }

    #[test]
    fn max_multikill_tier_spans_all_participants() {
        let mut a = player("a", Team::Blue, 4);
        a.multikills = [2, 0, 0, 0];
        let mut b = player("b", Team::Red, 9);
        b.multikills = [1, 1, 0, 0];
        let g = game(1800, Team::Blue, vec![a, b]);
        assert_eq!(g.max_multikill_tier(), Some(1));

        let g = game(1800, Team::Blue, vec![player("a", Team::Blue, 0)]);
        assert_eq!(g.max_multikill_tier(), None);
    }

    #[test]
    fn top_damage_keeps_first_occurrence_on_ties() {
        let mut a = player("a", Team::Blue, 4);
        a.damage = 20_000;
        let mut b = player("b", Team::Red, 4);
        b.damage = 20_000;
        let g = game(1800, Team::Blue, vec![a, b]);
        assert_eq!(g.top_damage(), 20_000);
    }

    #[test]
    fn max_division_picks_highest_weighted_tier() {
        let ranks = vec![
            RankedEntry {
                queue: "RANKED_SOLO_5x5".to_string(),
                tier: "GOLD".to_string(),
                division: "II".to_string(),
                lp: 10,
                wins: 5,
                losses: 5,
            },
            RankedEntry {
                queue: "RANKED_FLEX_SR".to_string(),
                tier: "PLATINUM".to_string(),
                division: "IV".to_string(),
                lp: 0,
                wins: 1,
                losses: 0,
            },
        ];
        assert_eq!(max_division(&ranks), "PLATINUM");
        assert_eq!(max_division(&[]), UNRANKED);
    }

    #[test]
    fn win_rate_is_omitted_without_games() {
        assert_eq!(win_rate(0, 0), None);
        assert_eq!(win_rate(3, 1).map(format_rounded).as_deref(), Some("75.0"));
    }

    #[test]
    fn format_rounded_trims_trailing_zeros() {
        assert_eq!(format_rounded(4.0), "4.0");
        assert_eq!(format_rounded(4.5), "4.5");
        assert_eq!(format_rounded(4.256), "4.26");
        assert_eq!(format_rounded(75.0), "75.0");
    }

    #[test]
    fn name_tag_displays_as_pair() {
        let tag = NameTag::new("Player".to_string(), "EUNE".to_string());
        assert_eq!(tag.to_string(), "Player#EUNE");
    }

    #[test]
    fn queue_ids_map_to_display_labels() {
        assert_eq!(QueueType::from(420).as_str(), "Solo/Duo");
        assert_eq!(QueueType::from(450).as_str(), "ARAM");
        assert_eq!(QueueType::from(999).as_str(), "Other");
    }
}
