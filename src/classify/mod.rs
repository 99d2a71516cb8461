//! Question classification.
//!
//! Maps a free-text heritage question onto a closed category vocabulary plus
//! extracted site, intent and question-type metadata.

mod categorizer;
mod category;

pub use categorizer::{strip_code_fences, Categorizer, Classification, ClassifyOutcome};
pub use category::{Category, QuestionType};
