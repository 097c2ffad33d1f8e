// src/specs/scoreboard.rs
//! Post-match scoreboard: one `div.st-content__item` block per player.
//!
//! Row shape: `[player, rank, <value cells…>]`, where `player` is
//! username + discriminator with no separator (e.g. `Player#1234`).

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{
    DISCRIMINATOR_SEL, HEADERS, ITEM_SEL, RANK_LABEL_SEL, RANK_SEL, USERNAME_SEL, VALUE_SEL,
};
use crate::core::html::{all_text, compile, first, first_text, parse_document};

static ITEM: LazyLock<Selector> = LazyLock::new(|| compile(ITEM_SEL));
static USERNAME: LazyLock<Selector> = LazyLock::new(|| compile(USERNAME_SEL));
static DISCRIMINATOR: LazyLock<Selector> = LazyLock::new(|| compile(DISCRIMINATOR_SEL));
static RANK: LazyLock<Selector> = LazyLock::new(|| compile(RANK_SEL));
static RANK_LABEL: LazyLock<Selector> = LazyLock::new(|| compile(RANK_LABEL_SEL));
static VALUE: LazyLock<Selector> = LazyLock::new(|| compile(VALUE_SEL));

/// One player's row. All fields are display text, trimmed, never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    pub player: String,
    pub rank: String,
    pub stats: Vec<String>,
}

impl PlayerRecord {
    pub fn into_row(self) -> Vec<String> {
        let mut row = Vec::with_capacity(2 + self.stats.len());
        row.push(self.player);
        row.push(self.rank);
        row.extend(self.stats);
        row
    }

    pub fn to_row(&self) -> Vec<String> {
        self.clone().into_row()
    }
}

/// Fixed export header (16 columns).
pub fn headers() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}

/// Extract every player block, in document order.
pub fn extract(doc: &Html) -> Vec<PlayerRecord> {
    let records: Vec<PlayerRecord> = doc.select(&ITEM).map(extract_item).collect();
    logd!("scoreboard: {} player blocks", records.len());
    records
}

pub fn extract_str(html: &str) -> Vec<PlayerRecord> {
    extract(&parse_document(html))
}

fn extract_item(item: ElementRef<'_>) -> PlayerRecord {
    PlayerRecord {
        player: player_tag(item),
        rank: rank_label(item),
        stats: all_text(item, &VALUE),
    }
}

/// Both halves or nothing.
fn player_tag(item: ElementRef<'_>) -> String {
    match (first_text(item, &USERNAME), first_text(item, &DISCRIMINATOR)) {
        (Some(name), Some(disc)) => join!(name, &disc),
        _ => s!(),
    }
}

fn rank_label(item: ElementRef<'_>) -> String {
    first(item, &RANK)
        .and_then(|rank| first_text(rank, &RANK_LABEL))
        .unwrap_or_default()
}
