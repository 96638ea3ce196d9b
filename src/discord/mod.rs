pub mod bot;
pub mod commands;
pub mod embeds;
