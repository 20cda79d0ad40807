// Search query parsing and autocomplete.
// Heuristics run locally; the LLM is only reached through `extractor`.

pub mod extractor;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod quick_parse;
pub mod reference;
pub mod round;
pub mod suggestions;
