//! Keyword classifier for customer objections.

/// Objection category for distrust/scam concerns.
pub const DISTRUST_CATEGORY: &str = "desconfianca";

/// Keywords associated with distrust and scam concerns.
pub const DISTRUST_KEYWORDS: &[&str] = &[
    "golpe",
    "confiável",
    "fake",
    "pix antes",
    "site seguro",
    "fraude",
    "verdade",
    "mentira",
    "enganar",
    "roubo",
    "falso",
];

/// Whether the text raises a distrust objection.
///
/// Case-insensitive substring matching; overlapping keywords may both
/// match, which makes no difference to the single boolean outcome.
pub fn detects_distrust(text: &str) -> bool {
    let lowered = text.to_lowercase();
    DISTRUST_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_keywords() {
        assert!(detects_distrust("isso não é golpe?"));
        assert!(detects_distrust("vou ter que pagar o pix antes?"));
        assert!(detects_distrust("esse site seguro mesmo?"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(detects_distrust("ISSO É GOLPE"));
        assert!(detects_distrust("Fraude?"));
    }

    #[test]
    fn test_accented_keyword() {
        assert!(detects_distrust("esse site é confiável?"));
        assert!(detects_distrust("é CONFIÁVEL?"));
    }

    #[test]
    fn test_substring_match_inside_word() {
        // Substring matching, not tokenized.
        assert!(detects_distrust("engolpeado"));
    }

    #[test]
    fn test_clean_text_does_not_match() {
        assert!(!detects_distrust("oi"));
        assert!(!detects_distrust("quero um combo de salmão"));
        assert!(!detects_distrust(""));
    }
}
