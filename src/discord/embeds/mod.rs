//! Embed rendering for fully-resolved domain values. No network calls and no
//! business derivation happen here beyond formatting.

use poise::serenity_prelude::{CreateEmbed, CreateEmbedAuthor, Timestamp};

use crate::ddragon::ChampionIndex;
use crate::game_info::{
    format_rounded, win_rate, GameInfo, MatchOutcome, PlayerInfo, Team, UserInfo, UNRANKED,
};
use crate::riot::types::SummonerDto;
use crate::riot::Platform;

const MULTIKILL_NAMES: [&str; 4] = ["Doublekill", "Triplekill", "Quadrakill", "Pentakill"];

const REMAKE_COLOUR: u32 = 0xAFAEAE;
const VICTORY_COLOUR: u32 = 0x53A8E8;
const DEFEAT_COLOUR: u32 = 0xDA2D43;
const NEUTRAL_COLOUR: u32 = 0x2C6FB1;

pub fn match_embed(game: &GameInfo, focus_puuid: &str) -> CreateEmbed {
    let blue_kills = game.team_kills(Team::Blue);
    let red_kills = game.team_kills(Team::Red);
    let max_tier = game.max_multikill_tier();
    let top_damage = game.top_damage();

    let (title, colour) = match game.outcome_for(focus_puuid) {
        MatchOutcome::Remake => ("REMAKE".to_string(), REMAKE_COLOUR),
        MatchOutcome::Victory => (
            format!("VICTORY - {} TEAM WINS", game.winner.as_str().to_uppercase()),
            VICTORY_COLOUR,
        ),
        MatchOutcome::Defeat => (
            format!("DEFEAT - {} TEAM WINS", game.winner.as_str().to_uppercase()),
            DEFEAT_COLOUR,
        ),
    };

    let mut embed = CreateEmbed::new()
        .title(title)
        .description(format!(
            "Type: **{}**, Score: **{} - {}**, Time: **{}**",
            game.queue_type.as_str(),
            blue_kills,
            red_kills,
            game.formatted_duration()
        ))
        .colour(colour)
        .field(
            ":blue_circle: Blue Team",
            format!("Total Kills: **{blue_kills}**"),
            false,
        );

    for (i, player) in game.participants.iter().enumerate() {
        embed = embed.field(
            player_title(player, focus_puuid, max_tier),
            player_stats(player, game.duration, Some(top_damage)),
            false,
        );
        if i == 4 {
            embed = embed.field(
                ":red_circle: Red Team",
                format!("Total Kills: **{red_kills}**"),
                false,
            );
        }
    }

    if let Ok(ts) = Timestamp::from_unix_timestamp(game.start_time / 1000) {
        embed = embed.timestamp(ts);
    }
    embed
}

pub fn profile_embed(user: &UserInfo, champions: &ChampionIndex) -> CreateEmbed {
    let author_name = user
        .name_tag
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| user.puuid.clone());
    let author =
        CreateEmbedAuthor::new(author_name).icon_url(champions.profile_icon_url(user.icon));

    let mut embed = CreateEmbed::new()
        .title(format!("{} level", user.level))
        .colour(NEUTRAL_COLOUR)
        .author(author)
        .thumbnail(rank_icon_url(&user.max_division))
        .field(
            format!("Solo/Duo - {}", user.rank_solo),
            queue_summary(&user.rank_solo, user.lp_solo, user.wins_solo, user.losses_solo),
            true,
        )
        .field(
            format!("Flex - {}", user.rank_flex),
            queue_summary(&user.rank_flex, user.lp_flex, user.wins_flex, user.losses_flex),
            true,
        )
        .field(
            format!("Total Mastery: {}", user.total_mastery),
            format!("Total Points: {}", thousands(user.total_points)),
            false,
        );

    for champ in user.top_champs.iter().take(3) {
        let name = champions
            .champion_name(champ.champion_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("ID: {}", champ.champion_id));
        embed = embed.field(
            format!("{} ({} lvl)", name, champ.level),
            format!("{} pts.", thousands(champ.points as u64)),
            true,
        );
    }
    embed
}

pub fn history_embed(
    games: &[GameInfo],
    summoner: &SummonerDto,
    display_name: &str,
    champions: &ChampionIndex,
) -> CreateEmbed {
    let author = CreateEmbedAuthor::new(format!(
        "{} ({} lvl)",
        display_name, summoner.summoner_level
    ))
    .icon_url(champions.profile_icon_url(summoner.profile_icon_id));

    let mut embed = CreateEmbed::new()
        .title(format!("Last {} Games", games.len()))
        .colour(NEUTRAL_COLOUR)
        .author(author);

    for (i, game) in games.iter().enumerate() {
        let Some(player) = game.participant(&summoner.puuid) else {
            continue;
        };
        let emoji = match game.outcome_for(&summoner.puuid) {
            MatchOutcome::Remake => ":white_circle:",
            MatchOutcome::Victory => ":blue_circle:",
            MatchOutcome::Defeat => ":red_circle:",
        };
        embed = embed.field(
            format!(
                "{} {} - {} - {} {}/{}/{} - {}",
                emoji,
                i + 1,
                game.queue_type.as_str(),
                repair_champ_name(&player.champion_name),
                player.kills,
                player.deaths,
                player.assists,
                game.formatted_duration()
            ),
            player_stats(player, game.duration, None),
            false,
        );
    }
    embed
}

pub fn help_embed(default_platform: Platform) -> CreateEmbed {
    let servers = Platform::ALL
        .iter()
        .map(|p| p.display_name())
        .collect::<Vec<_>>()
        .join(", ");

    CreateEmbed::new()
        .title("Help")
        .colour(NEUTRAL_COLOUR)
        .field(
            "/profile {name} {tag} {server?}",
            "See your rank, mastery and favourite champs",
            false,
        )
        .field(
            "/match {name} {tag} {id?} {server?}",
            "Inspect a game from your history, default last game. Use /history to get game ids.",
            false,
        )
        .field(
            "/history {name} {tag} {count?} {server?}",
            "Check the last 1-20 games of a player, default 5",
            false,
        )
        .field(
            format!(
                "Available game servers (default is {})",
                default_platform.display_name()
            ),
            servers,
            false,
        )
}

fn player_title(player: &PlayerInfo, focus_puuid: &str, max_tier: Option<usize>) -> String {
    let name = player
        .name_tag
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "Unknown".to_string());
    let highlight = if player.puuid == focus_puuid {
        " :green_heart:"
    } else {
        ""
    };
    format!(
        "{} - {} {}/{}/{}{}{}",
        name,
        repair_champ_name(&player.champion_name),
        player.kills,
        player.deaths,
        player.assists,
        highlight,
        multikill_label(player, max_tier)
    )
}

/// A player is only annotated with the highest multikill tier anyone in the
/// game reached; lesser sprees stay silent.
fn multikill_label(player: &PlayerInfo, max_tier: Option<usize>) -> String {
    let Some(tier) = max_tier else {
        return String::new();
    };
    let count = player.multikills[tier];
    if count == 0 {
        return String::new();
    }
    let mut label = format!(" {}", MULTIKILL_NAMES[tier]);
    if count > 1 {
        label.push_str(&format!(" x{count}"));
    }
    if tier >= 2 {
        label.push_str(" :exclamation:");
    }
    label
}

fn player_stats(player: &PlayerInfo, duration: u64, top_damage: Option<u32>) -> String {
    let cs_per_min = player
        .cs_per_minute(duration)
        .map(|v| format!(" ({})", format_rounded(v)))
        .unwrap_or_default();
    let star = match top_damage {
        Some(top) if player.damage == top => "\u{2605} ",
        _ => "",
    };
    format!(
        "KDA: **{}**, CS: **{}**{}, {}DMG: **{}**, GOLD: **{}**",
        player.kda(),
        player.creep_score,
        cs_per_min,
        star,
        player.damage,
        player.gold
    )
}

/// Insert a space before inner capitals: `MissFortune` -> `Miss Fortune`.
fn repair_champ_name(champ_name: &str) -> String {
    let mut out = String::with_capacity(champ_name.len() + 4);
    for c in champ_name.chars() {
        if c.is_ascii_uppercase() && !out.is_empty() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

fn rank_icon_url(tier: &str) -> &'static str {
    match tier.to_ascii_uppercase().as_str() {
        "IRON" => "https://cdn.discordapp.com/attachments/989905618494181386/989905732445036614/iron.png",
        "BRONZE" => "https://cdn.discordapp.com/attachments/989905618494181386/989905730805047356/bronze.png",
        "SILVER" => "https://cdn.discordapp.com/attachments/989905618494181386/989905733128687626/silver.png",
        "GOLD" => "https://cdn.discordapp.com/attachments/989905618494181386/989905731933311027/gold.png",
        "PLATINUM" => "https://cdn.discordapp.com/attachments/989905618494181386/989905732856053851/platinum.png",
        "EMERALD" => "https://cdn.discordapp.com/attachments/989905618494181386/1132067774584324096/emerald.png",
        "DIAMOND" => "https://cdn.discordapp.com/attachments/989905618494181386/989905731463577600/diamond.png",
        "MASTER" => "https://cdn.discordapp.com/attachments/989905618494181386/989905732654739516/master.png",
        "GRANDMASTER" => "https://cdn.discordapp.com/attachments/989905618494181386/989905732176592956/grandmaster.png",
        "CHALLENGER" => "https://cdn.discordapp.com/attachments/989905618494181386/989905731186749470/challenger.png",
        _ => "https://cdn.discordapp.com/attachments/989905618494181386/989936020013334628/unranked.png",
    }
}

fn queue_summary(rank: &str, lp: i32, wins: u32, losses: u32) -> String {
    let mut summary = String::new();
    if rank != UNRANKED {
        summary.push_str(&format!("{} LP, ", lp));
    }
    summary.push_str(&format!("{} games", wins + losses));
    if let Some(rate) = win_rate(wins, losses) {
        summary.push_str(&format!(", {}% WR", format_rounded(rate)));
    }
    summary
}

fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_info::NameTag;

    fn player(multikills: [u32; 4]) -> PlayerInfo {
        PlayerInfo {
            puuid: "p1".to_string(),
            name_tag: Some(NameTag::new("Player".to_string(), "EUNE".to_string())),
            kills: 8,
            deaths: 0,
            assists: 4,
            champion_name: "MissFortune".to_string(),
            champion_id: 21,
            gold: 12_345,
            damage: 20_000,
            creep_score: 200,
            vision_score: 25,
            team: Team::Blue,
            multikills,
            position: "BOTTOM".to_string(),
        }
    }

    #[test]
    fn repair_champ_name_splits_inner_capitals() {
        assert_eq!(repair_champ_name("MissFortune"), "Miss Fortune");
        assert_eq!(repair_champ_name("Ahri"), "Ahri");
    }

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn multikill_label_only_marks_the_game_wide_max_tier() {
        // A double kill is silent when someone else reached a penta.
        assert_eq!(multikill_label(&player([2, 0, 0, 0]), Some(3)), "");
        assert_eq!(
            multikill_label(&player([2, 0, 0, 0]), Some(0)),
            " Doublekill x2"
        );
        assert_eq!(
            multikill_label(&player([0, 0, 0, 1]), Some(3)),
            " Pentakill :exclamation:"
        );
        assert_eq!(multikill_label(&player([2, 0, 0, 0]), None), "");
    }

    #[test]
    fn queue_summary_omits_win_rate_without_games() {
        assert_eq!(queue_summary(UNRANKED, 0, 0, 0), "0 games");
        assert_eq!(
            queue_summary("GOLD II", 42, 3, 1),
            "42 LP, 4 games, 75.0% WR"
        );
    }

    #[test]
    fn player_stats_stars_only_the_top_damage() {
        let p = player([0, 0, 0, 0]);
        assert!(player_stats(&p, 1800, Some(20_000)).contains('\u{2605}'));
        assert!(!player_stats(&p, 1800, Some(30_000)).contains('\u{2605}'));
        assert!(!player_stats(&p, 1800, None).contains('\u{2605}'));
    }
}
