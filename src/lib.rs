//! League of Legends statistics bot.
//!
//! The Riot client ([`riot`]) resolves user-entered Riot IDs through PUUID,
//! summoner, ranked, mastery and match lookups, memoizing each step in a TTL
//! cache ([`cache`]) and normalizing raw responses into the domain model
//! ([`game_info`]). The Discord layer ([`discord`]) is thin dispatch glue on
//! top of it.

pub mod cache;
pub mod config;
pub mod ddragon;
pub mod discord;
pub mod error;
pub mod game_info;
pub mod logging;
pub mod riot;
