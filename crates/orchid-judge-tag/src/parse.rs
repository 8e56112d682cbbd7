use std::sync::LazyLock;

use regex::Regex;

use crate::identity::TagIdentity;

/// First quoted substring, double or single quotes.
static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"|'([^']+)'"#).unwrap());

/// Parenthesized substrings, scanned in order of appearance.
static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

/// Substrings marking a hybrid cross anywhere in the tag text.
const HYBRID_MARKERS: [&str; 6] = ["×", "x ", " x ", "hybrid", "cross", "grex"];

/// Words that introduce a clone name rather than extend the epithet.
const CLONE_INDICATORS: [&str; 3] = ["clone", "cv", "cultivar"];

/// Normalize recognized tag text line by line.
///
/// Characters outside the allow-set `[A-Za-z0-9 .,()\[\]"'×-]` become
/// spaces, whitespace runs collapse, and each line is trimmed. Line breaks
/// survive so the main-line heuristic still has lines to choose from.
pub fn normalize_tag_text(text: &str) -> Vec<String> {
    text.lines()
        .map(normalize_line)
        .filter(|l| !l.is_empty())
        .collect()
}

fn normalize_line(line: &str) -> String {
    let cleaned: String = line
        .chars()
        .map(|c| if is_allowed(c) { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            ' ' | '.' | ',' | '(' | ')' | '[' | ']' | '"' | '\'' | '×' | '-'
        )
}

/// Parse recognized tag text into a structured identity.
///
/// Pure and deterministic: the same text and confidence always produce the
/// same identity. An empty or failed recognition yields the all-empty
/// identity with `confidence = 0` instead of an error.
pub fn parse_tag(raw_text: &str, confidence: f32) -> TagIdentity {
    if raw_text.trim().is_empty() {
        return TagIdentity::empty(raw_text, 0.0);
    }
    let confidence = confidence.clamp(0.0, 1.0);

    let lines = normalize_tag_text(raw_text);
    if lines.is_empty() {
        return TagIdentity::empty(raw_text, confidence);
    }

    let main = select_main_line(&lines);
    let joined = lines.join(" ");

    let (genus, species_or_grex) = parse_main_line(main);
    let clone_name = extract_clone_name(&joined);
    let is_hybrid = detect_hybrid(&joined);

    log::debug!(
        "tag: genus={:?} species={:?} clone={:?} hybrid={}",
        genus,
        species_or_grex,
        clone_name,
        is_hybrid
    );

    TagIdentity {
        genus,
        species_or_grex,
        clone_name,
        is_hybrid,
        confidence,
        raw_text: raw_text.to_string(),
    }
}

/// The first line, unless it is too short or does not start with a
/// capitalized word (likely a stray header or noise), in which case the
/// second line when there is one.
fn select_main_line(lines: &[String]) -> &str {
    let first = &lines[0];
    let first_word_capitalized = first
        .split_whitespace()
        .next()
        .and_then(|w| w.chars().next())
        .is_some_and(|c| c.is_uppercase());

    if (first.len() < 3 || !first_word_capitalized) && lines.len() > 1 {
        &lines[1]
    } else {
        first
    }
}

/// Tokenize the main line into genus and species-or-grex.
fn parse_main_line(main: &str) -> (String, String) {
    let tokens: Vec<&str> = main.split_whitespace().collect();

    let genus = tokens
        .first()
        .map(|t| capitalize(&strip_non_word(t)))
        .unwrap_or_default();

    let mut species = tokens
        .get(1)
        .map(|t| t.to_lowercase())
        .unwrap_or_default();

    // Up to two more epithet words, stopping at anything that looks like a
    // clone indicator.
    for extra in tokens.iter().skip(2).take(2) {
        if is_clone_indicator(extra) {
            break;
        }
        species.push(' ');
        species.push_str(&extra.to_lowercase());
    }

    (genus, species)
}

fn strip_non_word(token: &str) -> String {
    token.chars().filter(|c| c.is_alphanumeric()).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn is_clone_indicator(token: &str) -> bool {
    if token.chars().any(|c| matches!(c, '"' | '\'' | '(' | ')')) {
        return true;
    }
    let word = token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    CLONE_INDICATORS.contains(&word.as_str())
}

/// First quoted substring, else the first parenthesized substring that is
/// not a hybrid cross notation.
fn extract_clone_name(joined: &str) -> String {
    if let Some(caps) = QUOTED.captures(joined) {
        let inner = caps.get(1).or_else(|| caps.get(2));
        if let Some(m) = inner {
            return m.as_str().trim().to_string();
        }
    }

    for caps in PARENTHESIZED.captures_iter(joined) {
        let inner = caps[1].trim();
        // A parenthetical holding a cross is parentage, not a clone name.
        if inner.contains('×') || inner.contains(" x ") {
            continue;
        }
        if !inner.is_empty() {
            return inner.to_string();
        }
    }

    String::new()
}

fn detect_hybrid(joined: &str) -> bool {
    let lower = joined.to_lowercase();
    HYBRID_MARKERS.iter().any(|m| lower.contains(m))
}
