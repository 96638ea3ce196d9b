mod account;
mod league;
mod mastery;
mod match_v5;
mod summoner;
