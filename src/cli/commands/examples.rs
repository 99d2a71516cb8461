//! Examples command - show one sample question per category.

use crate::cli::Output;
use crate::classify::Category;

/// Run the examples command.
pub fn run_examples() {
    Output::header("Example questions");
    println!();
    for category in Category::ALL {
        Output::example(category.label(), category.example_query());
    }
    println!();
    Output::info("Try one with: arv ask \"<question>\"");
}
