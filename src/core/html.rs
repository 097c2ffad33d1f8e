// src/core/html.rs
//! Small helpers over `scraper` shared by the page specs.
use scraper::{ElementRef, Html, Selector};

/// Compile a selector that is known at build time.
/// Panics on invalid CSS; only ever called with the constants in `config::consts`.
pub fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

pub fn parse_document(text: &str) -> Html {
    Html::parse_document(text)
}

/// All descendant text, concatenated, then trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// First matching descendant in document order.
pub fn first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

pub fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    first(scope, sel).map(text_of)
}

/// Trimmed text of every matching descendant, in document order.
pub fn all_text(scope: ElementRef<'_>, sel: &Selector) -> Vec<String> {
    scope.select(sel).map(text_of).collect()
}
