//! Small interpreter for the data-driven extraction rules: ordered
//! `(pattern, label)` tables, capture lists, and keyword counting.

use regex::Regex;

/// Ordered classification table. Rules are evaluated top to bottom against
/// the whole message; the first pattern that matches anywhere wins.
pub struct RuleSet<T> {
    rules: Vec<(Regex, T)>,
}

impl<T: Copy> RuleSet<T> {
    /// Compiles a static rule table. Panics on an invalid pattern, which is
    /// a programming error in the table itself.
    pub fn compile(table: &[(&str, T)]) -> Self {
        let rules = table
            .iter()
            .map(|(pattern, label)| {
                (
                    Regex::new(pattern).expect("invalid rule pattern"),
                    *label,
                )
            })
            .collect();
        Self { rules }
    }

    pub fn classify(&self, text: &str) -> Option<T> {
        self.rules
            .iter()
            .find(|(re, _)| re.is_match(text))
            .map(|(_, label)| *label)
    }
}

pub fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("invalid extraction pattern"))
        .collect()
}

/// First non-empty capture group across an ordered list of patterns.
pub fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    for re in patterns {
        if let Some(caps) = re.captures(text) {
            for group in caps.iter().skip(1).flatten() {
                let s = group.as_str().trim();
                if !s.is_empty() {
                    return Some(s.to_string());
                }
            }
        }
    }
    None
}

/// Total match count across a set of patterns, for bias scoring.
pub fn keyword_hits(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}

/// Captured currency text always carries a leading "$" in the output. The
/// loose `\d+\.?\d*` capture keeps a sentence-ending period ("at 450."), so
/// a bare trailing dot is stripped here.
pub fn normalize_currency(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if trimmed.starts_with('$') {
        trimmed.to_string()
    } else {
        format!("${trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruleset_first_match_wins() {
        let rules = RuleSet::compile(&[
            (r"(?i)\balpha\b", "first"),
            (r"(?i)\bbeta\b", "second"),
        ]);
        assert_eq!(rules.classify("beta then alpha"), Some("first"));
        assert_eq!(rules.classify("only beta here"), Some("second"));
        assert_eq!(rules.classify("neither"), None);
    }

    #[test]
    fn test_first_capture_ordered() {
        let patterns = compile_all(&[r"x:(\d+)", r"(\d+)"]);
        assert_eq!(first_capture(&patterns, "7 then x:9"), Some("9".into()));
        assert_eq!(first_capture(&patterns, "just 7"), Some("7".into()));
        assert_eq!(first_capture(&patterns, "nothing"), None);
    }

    #[test]
    fn test_keyword_hits_counts_every_match() {
        let patterns = compile_all(&[r"(?i)\bup\b", r"(?i)\brun\b"]);
        assert_eq!(keyword_hits(&patterns, "up up and run"), 3);
        assert_eq!(keyword_hits(&patterns, "down"), 0);
    }

    #[test]
    fn test_normalize_currency() {
        assert_eq!(normalize_currency("954.73"), "$954.73");
        assert_eq!(normalize_currency("$954.73"), "$954.73");
        assert_eq!(normalize_currency("  12.50-13.20 "), "$12.50-13.20");
        // Sentence-ending capture keeps the period; normalization drops it
        assert_eq!(normalize_currency("450."), "$450");
        assert_eq!(normalize_currency("$450."), "$450");
    }
}
