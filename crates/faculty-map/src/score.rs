//! Fuzzy matching of free-text queries against candidate strings.
//!
//! Scores are on a 0 to 100 scale. Full containment of the query wins
//! outright; otherwise each query token earns credit for being contained in
//! the candidate, or partial credit for its longest contained prefix. This
//! keeps typo-tolerant matches ("Kumaar" vs "Kumar") well below exact hits.

/// Score for a query that is contained verbatim in the candidate.
pub const EXACT_SCORE: f64 = 100.0;
/// Ceiling for token-based matches.
const TOKEN_SCALE: f64 = 80.0;
/// Maximum weight of a prefix-only token match.
const PREFIX_WEIGHT: f64 = 0.7;
/// Shortest prefix that still counts as evidence.
const MIN_PREFIX_LEN: usize = 3;

/// How a single query token matched.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMatch {
    pub token: String,
    /// Length (in chars) of the matched prefix; equals the token length for a
    /// full match and 0 when nothing matched.
    pub matched_len: usize,
    /// Contribution in `[0, 1]`.
    pub weight: f64,
}

/// Score with its per-token breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    pub score: f64,
    /// True when the whole query was found in the candidate.
    pub exact: bool,
    pub tokens: Vec<TokenMatch>,
}

impl MatchScore {
    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        if self.exact {
            return format!("exact containment: {:.0}", self.score);
        }
        if self.tokens.is_empty() {
            return "no usable tokens".to_string();
        }
        self.tokens
            .iter()
            .map(|t| format!("{}: {:.0}%", t.token, t.weight * 100.0))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Scores how well `query` matches `candidate`, in `[0, 100]`.
pub fn score(candidate: &str, query: &str) -> f64 {
    score_detailed(candidate, query).score
}

/// Like [`score`], but keeps the token breakdown.
pub fn score_detailed(candidate: &str, query: &str) -> MatchScore {
    let candidate = candidate.to_lowercase();
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return MatchScore {
            score: 0.0,
            exact: false,
            tokens: Vec::new(),
        };
    }

    if candidate.contains(&query) {
        return MatchScore {
            score: EXACT_SCORE,
            exact: true,
            tokens: Vec::new(),
        };
    }

    let tokens: Vec<TokenMatch> = query
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(|token| match_token(&candidate, token))
        .collect();

    if tokens.is_empty() {
        return MatchScore {
            score: 0.0,
            exact: false,
            tokens,
        };
    }

    let total: f64 = tokens.iter().map(|t| t.weight).sum();
    MatchScore {
        score: total / tokens.len() as f64 * TOKEN_SCALE,
        exact: false,
        tokens,
    }
}

fn match_token(candidate: &str, token: &str) -> TokenMatch {
    let chars: Vec<char> = token.chars().collect();
    let token_len = chars.len();

    if candidate.contains(token) {
        return TokenMatch {
            token: token.to_string(),
            matched_len: token_len,
            weight: 1.0,
        };
    }

    for len in (MIN_PREFIX_LEN..=token_len).rev() {
        let prefix: String = chars[..len].iter().collect();
        if candidate.contains(&prefix) {
            return TokenMatch {
                token: token.to_string(),
                matched_len: len,
                weight: len as f64 / token_len as f64 * PREFIX_WEIGHT,
            };
        }
    }

    TokenMatch {
        token: token.to_string(),
        matched_len: 0,
        weight: 0.0,
    }
}
