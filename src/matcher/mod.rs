// Matcher module
// Public interface for keyword-based response selection

mod keyword;
mod random;

pub use keyword::{KeywordMatcher, Rule, Selection};
pub use random::{choose, RandomSource, RngSource, ScriptedSource};
