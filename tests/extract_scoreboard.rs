// tests/extract_scoreboard.rs
//
// Extraction against saved and inline scoreboard markup.
//
use scoreboard_scrape::specs::scoreboard::{extract_str, PlayerRecord};

fn v(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|x| x.to_string()).collect()
}

fn fixture() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/match.html"))
        .unwrap()
}

#[test]
fn full_block_yields_sixteen_fields() {
    let html = r#"
        <div class="st-content__item">
          <span class="trn-ign__username">Player</span><span class="trn-ign__discriminator">#1234</span>
          <div class="rank"><span>Gold</span></div>
          <div class="value">10</div><div class="value">20</div><div class="value">3</div>
          <div class="value">1</div><div class="value">2</div><div class="value">0</div>
          <div class="value">1.5</div><div class="value">90</div><div class="value">85</div>
          <div class="value">50</div><div class="value">92</div><div class="value">1</div>
          <div class="value">0</div><div class="value">2</div>
        </div>"#;
    let recs = extract_str(html);
    assert_eq!(recs.len(), 1);
    assert_eq!(
        recs[0].to_row(),
        v(&["Player#1234", "Gold", "10", "20", "3", "1", "2", "0", "1.5", "90", "85", "50", "92", "1", "0", "2"])
    );
}

#[test]
fn missing_discriminator_blanks_player_and_keeps_short_stats() {
    let html = r#"
        <div class="st-content__item">
          <span class="trn-ign__username">Player</span>
          <div class="value">5</div>
        </div>"#;
    let recs = extract_str(html);
    assert_eq!(recs, vec![PlayerRecord { player: "".into(), rank: "".into(), stats: v(&["5"]) }]);
    assert_eq!(recs[0].to_row(), v(&["", "", "5"]));
}

#[test]
fn no_blocks_means_no_records() {
    assert!(extract_str("<html><body><div class=\"st-content\"></div></body></html>").is_empty());
    assert!(extract_str("").is_empty());
}

#[test]
fn extra_value_cells_are_kept_in_order() {
    let cells: String = (1..=17).map(|i| format!("<div class=\"value\">{i}</div>")).collect();
    let html = format!("<div class=\"st-content__item\">{cells}</div>");
    let recs = extract_str(&html);
    let expect: Vec<String> = (1..=17).map(|i| i.to_string()).collect();
    assert_eq!(recs[0].stats, expect);
    assert_eq!(recs[0].to_row().len(), 19);
}

#[test]
fn rank_label_is_first_span_in_rank() {
    let html = r#"
        <div class="st-content__item">
          <div class="rank"><div><span> Radiant </span></div><span>ignored</span></div>
        </div>"#;
    assert_eq!(extract_str(html)[0].rank, "Radiant");
}

#[test]
fn fixture_rows_in_document_order() {
    let recs = extract_str(&fixture());
    assert_eq!(recs.len(), 3);

    assert_eq!(recs[0].player, "Player#1234");
    assert_eq!(recs[0].rank, "Gold");
    assert_eq!(recs[0].stats.len(), 14);

    assert_eq!(recs[1].player, "Çağrı, \"the wall\"#TR1");
    assert_eq!(recs[1].rank, "");
    assert_eq!(recs[1].stats, v(&["241", "198", "+12"]));

    assert_eq!(recs[2].player, "");
    assert_eq!(recs[2].rank, "Immortal 1");
    assert_eq!(recs[2].stats, v(&["5"]));
}
