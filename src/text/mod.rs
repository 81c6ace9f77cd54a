//! Text normalization for job-description input.
//!
//! [`Normalizer::normalize`] lowercases the text, strips URLs and email
//! addresses, collapses whitespace and then re-tokenizes it with the
//! rule-based [`Tokenizer`], dropping punctuation, numbers and a narrow set
//! of stop words. The same tokenizer is reused by the skill matcher so that
//! both stages agree on token boundaries.

mod lexicon;
mod normalizer;
mod tokenizer;

pub use lexicon::{is_stop_word, like_num};
pub use normalizer::Normalizer;
pub use tokenizer::{Token, Tokenizer};
