use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::types::Roster;

static NAME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r"span.text-xs.font-bold.uppercase.xl\:text-base")
        .expect("invalid selector: player name")
});

static LINE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r"div.flex.flex-row.justify-center span.text-xs.font-bold.uppercase.xl\:text-base")
        .expect("invalid selector: forward line")
});

static SPAN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span").expect("invalid selector: span"));

static RE_SECTION_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)forwards|defense|powerplay|penalty").expect("invalid regex: section boundary")
});

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }
}

pub trait RosterExtractor {
    fn primary_line(&self, doc: Option<&Document>) -> Roster;
    fn power_play_unit(&self, doc: Option<&Document>) -> Roster;
}

#[derive(Debug, Clone)]
pub struct ExtractionRules {
    pub name_selector: Selector,
    pub line_selector: Selector,
    pub forwards_label: String,
    pub power_play_label: String,
    // Scanning stops at the first candidate matching this.
    pub boundary: Regex,
    pub line_size: usize,
    pub unit_size: Option<usize>,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            name_selector: NAME_SELECTOR.clone(),
            line_selector: LINE_SELECTOR.clone(),
            forwards_label: "Forwards".to_string(),
            power_play_label: "1st Powerplay Unit".to_string(),
            boundary: RE_SECTION_BOUNDARY.clone(),
            line_size: 3,
            unit_size: Some(5),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineupExtractor {
    rules: ExtractionRules,
}

impl LineupExtractor {
    pub fn new(rules: ExtractionRules) -> Self {
        Self { rules }
    }
}

impl RosterExtractor for LineupExtractor {
    fn primary_line(&self, doc: Option<&Document>) -> Roster {
        extract_first_forward_line(doc, &self.rules)
    }

    fn power_play_unit(&self, doc: Option<&Document>) -> Roster {
        extract_section_players(
            doc,
            &self.rules,
            &self.rules.power_play_label,
            self.rules.unit_size,
        )
    }
}

fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_distinct(players: &mut Roster, name: String) {
    if !name.is_empty() && !players.contains(&name) {
        players.push(name);
    }
}

/// Finds the first text containing `label` (case-insensitive), then walks the
/// name elements that follow its enclosing `div` until a section header or
/// `max` distinct names.
pub fn extract_section_players(
    doc: Option<&Document>,
    rules: &ExtractionRules,
    label: &str,
    max: Option<usize>,
) -> Roster {
    let Some(doc) = doc else {
        return Vec::new();
    };
    let needle = label.to_lowercase();

    let Some(anchor) = doc.html.tree.root().descendants().find(|node| {
        node.value()
            .as_text()
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    }) else {
        log::debug!("Section '{}' not found", label);
        return Vec::new();
    };

    let Some(section) = anchor.ancestors().find(|node| {
        node.value()
            .as_element()
            .is_some_and(|element| element.name() == "div")
    }) else {
        log::debug!("Section '{}' has no enclosing div", label);
        return Vec::new();
    };
    let section_id = section.id();

    let candidates = doc
        .html
        .tree
        .root()
        .descendants()
        .skip_while(|node| node.id() != section_id)
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|element| rules.name_selector.matches(element));

    let mut players = Vec::new();
    for element in candidates {
        if max.is_some_and(|m| players.len() >= m) {
            break;
        }
        let text = normalize_whitespace(&elem_text(element));
        if rules.boundary.is_match(&text) {
            break;
        }
        push_distinct(&mut players, text);
    }
    players
}

pub fn extract_first_forward_line(doc: Option<&Document>, rules: &ExtractionRules) -> Roster {
    let Some(doc) = doc else {
        return Vec::new();
    };

    let has_forwards = doc.html.select(&SPAN_SELECTOR).any(|e| {
        normalize_whitespace(&elem_text(e)).eq_ignore_ascii_case(&rules.forwards_label)
    });
    if !has_forwards {
        log::debug!("Section '{}' not found", rules.forwards_label);
        return Vec::new();
    }

    let mut players = Vec::new();
    for element in doc.html.select(&rules.line_selector) {
        if players.len() >= rules.line_size {
            break;
        }
        push_distinct(&mut players, normalize_whitespace(&elem_text(element)));
    }
    players
}
