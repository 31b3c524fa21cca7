#![deny(unsafe_code)]

pub mod confidence;
pub mod resolver;
pub mod rules;
pub mod score;
pub mod utils;

pub use confidence::{ConfidenceLevel, ConfidenceThresholds};
pub use resolver::{NameResolver, NameSuggestion, RosterSearch, SearchWeights};
pub use rules::NameRules;
pub use score::{EXACT_SCORE, MatchScore, TokenMatch, score, score_detailed};
pub use utils::{name_from_filename, name_tokens};
