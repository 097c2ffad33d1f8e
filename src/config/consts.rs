// src/config/consts.rs

// Input
pub const DEFAULT_INPUT: &str = "match.html";

// Scoreboard markup
pub const ITEM_SEL: &str = "div.st-content__item";
pub const USERNAME_SEL: &str = "span.trn-ign__username";
pub const DISCRIMINATOR_SEL: &str = "span.trn-ign__discriminator";
pub const RANK_SEL: &str = "div.rank";
pub const RANK_LABEL_SEL: &str = "span";
pub const VALUE_SEL: &str = "div.value";

// Export
pub const DEFAULT_STEM: &str = "match_stats";
pub const HEADERS: [&str; 16] = [
    "player", "rank", "TRS", "ACS", "K", "D", "A", "+/-",
    "K/D", "DDΔ", "ADR", "HS%", "KAST", "FK", "FD", "MK",
];
