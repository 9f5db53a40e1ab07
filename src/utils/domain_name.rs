//! Domain-safe name normalization and variation expansion.
//!
//! # Normalization Rules
//!
//! 1. Transliterate to ASCII (`ü` → `u`, `ß` → `ss`)
//! 2. Lowercase
//! 3. Remove legal-entity suffixes as whole words (`gmbh`, `ag`, `e.v.`, ...)
//! 4. Drop everything except `a-z`, `0-9`, whitespace and hyphens
//! 5. Collapse whitespace/hyphen runs into one hyphen, trim hyphens
//!
//! Words that only turn into a legal suffix after punctuation is dropped
//! (`"k/g"` → `"kg"`) are removed in step 5, so [`normalize`] is idempotent.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Legal-entity suffixes removed during normalization, in their dotless form.
pub const LEGAL_SUFFIXES: &[&str] = &["gmbh", "ag", "kg", "ohg", "gbr", "ev", "ug", "mbh"];

/// Generic variation patterns applied to every base token.
const GENERIC_VARIANTS: &[(&str, &str)] = &[("", "-online"), ("mein-", ""), ("", "-24")];

/// Sector-specific keywords used to build variations.
const SECTOR_KEYWORDS: &[(&str, &[&str])] = &[
    ("handwerker", &["handwerk", "meister", "service"]),
    ("haendler", &["shop", "store", "markt"]),
    ("dienstleister", &["service", "pro", "experte"]),
];

/// Matches any [`LEGAL_SUFFIXES`] entry as a whole word, with optional dots
/// between its letters (`e.V.`, `G.m.b.H.`).
static LEGAL_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = LEGAL_SUFFIXES
        .iter()
        .map(|suffix| {
            suffix
                .chars()
                .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
                .collect::<Vec<_>>()
                .join(r"\.?")
        })
        .collect();
    Regex::new(&format!(r"(?i)\b({})\.?\b", alternatives.join("|")))
        .expect("valid legal suffix regex")
});

static DISALLOWED_CHARS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid character class regex"));

static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("valid separator regex"));

/// Normalizes a free-text business name into a domain-safe token.
///
/// Returns an empty string when nothing usable remains.
///
/// # Examples
///
/// ```
/// use seitenkraft_api::utils::domain_name::normalize;
///
/// assert_eq!(normalize("Müller GmbH"), "muller");
/// assert_eq!(normalize("Schreinerei Müller GmbH"), "schreinerei-muller");
/// ```
pub fn normalize(name: &str) -> String {
    let ascii = deunicode::deunicode(name).to_lowercase();
    let without_suffixes = LEGAL_SUFFIX_REGEX.replace_all(&ascii, " ");
    let cleaned = DISALLOWED_CHARS_REGEX.replace_all(&without_suffixes, "");

    SEPARATOR_REGEX
        .split(&cleaned)
        .filter(|word| !word.is_empty() && !LEGAL_SUFFIXES.contains(word))
        .collect::<Vec<_>>()
        .join("-")
}

/// Returns the keywords configured for a sector, if the sector is known.
pub fn sector_keywords(sector: &str) -> Option<&'static [&'static str]> {
    SECTOR_KEYWORDS
        .iter()
        .find(|(name, _)| *name == sector)
        .map(|(_, keywords)| *keywords)
}

/// Expands a normalized token into candidate tokens.
///
/// The token itself always comes first, followed by `token-keyword` and
/// `keyword-token` for each keyword of a known sector, then the generic
/// variants `token-online`, `mein-token` and `token-24`. Duplicates are
/// removed keeping the first occurrence.
pub fn expand(token: &str, sector: Option<&str>) -> Vec<String> {
    let mut candidates = vec![token.to_string()];

    if let Some(keywords) = sector.and_then(sector_keywords) {
        for keyword in keywords {
            candidates.push(format!("{}-{}", token, keyword));
            candidates.push(format!("{}-{}", keyword, token));
        }
    }

    for (prefix, suffix) in GENERIC_VARIANTS {
        candidates.push(format!("{}{}{}", prefix, token, suffix));
    }

    let mut seen = HashSet::new();
    candidates.retain(|c| seen.insert(c.clone()));
    candidates
}

/// Splits a full domain on its last dot into `(name, tld)`.
///
/// Returns `None` when there is no dot or either side is empty.
///
/// ```
/// use seitenkraft_api::utils::domain_name::split_domain;
///
/// assert_eq!(split_domain("my.company.de"), Some(("my.company", "de")));
/// assert_eq!(split_domain("localhost"), None);
/// ```
pub fn split_domain(domain: &str) -> Option<(&str, &str)> {
    let (name, tld) = domain.rsplit_once('.')?;
    if name.is_empty() || tld.is_empty() {
        return None;
    }
    Some((name, tld))
}

/// Returns the text after the last dot, or the whole string if there is none.
pub fn tld_of(domain: &str) -> &str {
    domain.rsplit('.').next().unwrap_or(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_legal_suffix() {
        assert_eq!(normalize("Müller GmbH"), "muller");
        assert_eq!(normalize("Bäckerei Schmidt KG"), "backerei-schmidt");
        assert_eq!(normalize("Sportverein Nord e.V."), "sportverein-nord");
        assert_eq!(normalize("Gartenbau OHG & Co"), "gartenbau-co");
    }

    #[test]
    fn test_normalize_strips_every_listed_suffix() {
        for suffix in LEGAL_SUFFIXES {
            let dotted: String = suffix.chars().flat_map(|c| [c, '.']).collect();

            assert_eq!(normalize(&format!("Acme {}", suffix)), "acme", "{suffix}");
            assert_eq!(
                normalize(&format!("Acme {} Nord", dotted.to_uppercase())),
                "acme-nord",
                "{dotted}"
            );
        }
    }

    #[test]
    fn test_normalize_whole_words_only() {
        assert_eq!(normalize("Agrar Service"), "agrar-service");
        assert_eq!(normalize("Kugel Design"), "kugel-design");
        assert_eq!(normalize("Magnus"), "magnus");
    }

    #[test]
    fn test_normalize_transliterates() {
        assert_eq!(normalize("Straße"), "strasse");
        assert_eq!(normalize("Café Élan"), "cafe-elan");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize("  Foo   --  Bar  "), "foo-bar");
        assert_eq!(normalize("-foo-"), "foo");
        assert_eq!(normalize("A/B Testing!"), "ab-testing");
    }

    #[test]
    fn test_normalize_empty_results() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("GmbH"), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "Müller GmbH",
            "Schreinerei Müller GmbH",
            "k.g",
            "k/g",
            "e.v",
            "A.G.",
            "G.m.b.H. Nord",
            "Foo--Bar",
            "ÄÖÜ äöü ß",
            "ag-foo",
            "  mixed  CASE  UG (haftungsbeschränkt) ",
            "123 Shop",
            "",
        ];

        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_expand_starts_with_token() {
        let variants = expand("acme", None);

        assert_eq!(variants[0], "acme");
        assert_eq!(variants, vec!["acme", "acme-online", "mein-acme", "acme-24"]);
    }

    #[test]
    fn test_expand_with_sector() {
        let variants = expand("schreinerei-muller", Some("handwerker"));

        assert_eq!(
            variants,
            vec![
                "schreinerei-muller",
                "schreinerei-muller-handwerk",
                "handwerk-schreinerei-muller",
                "schreinerei-muller-meister",
                "meister-schreinerei-muller",
                "schreinerei-muller-service",
                "service-schreinerei-muller",
                "schreinerei-muller-online",
                "mein-schreinerei-muller",
                "schreinerei-muller-24",
            ]
        );
    }

    #[test]
    fn test_expand_unknown_sector_uses_generic_only() {
        assert_eq!(expand("acme", Some("astronaut")).len(), 4);
    }

    #[test]
    fn test_expand_deduplicates() {
        // "service" + "service" collide: keyword-token equals token-keyword.
        let variants = expand("service", Some("dienstleister"));
        let unique: HashSet<_> = variants.iter().collect();

        assert_eq!(unique.len(), variants.len());
        assert_eq!(variants[0], "service");
        assert_eq!(variants[1], "service-service");
    }

    #[test]
    fn test_split_domain_on_last_dot() {
        assert_eq!(split_domain("shop.de"), Some(("shop", "de")));
        assert_eq!(split_domain("my.company.de"), Some(("my.company", "de")));
        assert_eq!(split_domain("nodot"), None);
        assert_eq!(split_domain(".de"), None);
        assert_eq!(split_domain("shop."), None);
    }

    #[test]
    fn test_tld_of() {
        assert_eq!(tld_of("free.de"), "de");
        assert_eq!(tld_of("a.b.com"), "com");
        assert_eq!(tld_of("plain"), "plain");
    }
}
