//! Heading matcher for document splitting.
//!
//! Matches a line of page text against a [`docsplit_vocab::Vocabulary`] and
//! reports the best canonical heading, a 0-100 confidence and how the match
//! was made. Thresholds are applied by the caller.

mod matcher;
mod score;
mod strategy;

pub use matcher::HeadingMatcher;
pub use score::partial_ratio;
pub use strategy::{Candidate, ExactStrategy, FuzzyStrategy, MatchStrategy, PatternStrategy};
