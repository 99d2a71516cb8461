//! Interactive question-and-answer session.
//!
//! Each question runs the full pipeline independently; there is no
//! conversation memory, because every interaction is resolved completely
//! before the next one starts.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::classify::Category;
use crate::config::Settings;
use crate::error::Result;
use crate::pipeline::Pipeline;
use console::style;
use std::io::{self, BufRead, Write};

/// Run the interactive chat command.
pub async fn run_chat(model: Option<String>, mut settings: Settings) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Ask) {
        Output::error(&format!("{}", e));
        Output::info("Run 'arv doctor' for detailed diagnostics.");
        return Err(e);
    }

    if let Some(model) = model {
        settings.model.chat_model = model;
    }

    let pipeline = Pipeline::new(settings)?;

    println!("\n{}", style("Arv Tour Guide").bold().cyan());
    println!(
        "{}\n",
        style("Ask about any heritage site. Type 'examples' for ideas, 'exit' to quit.").dim()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("You:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Output::info("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("examples") {
            println!();
            for category in Category::ALL {
                Output::example(category.label(), category.example_query());
            }
            println!();
            continue;
        }

        let spinner = Output::spinner("Thinking...");
        match pipeline.answer(input).await {
            Ok(response) => {
                spinner.finish_and_clear();
                println!(
                    "\n{} {}\n",
                    style(format!("[{}]", response.classification.category)).dim(),
                    style(&response.classification.site).bold()
                );
                println!("{}\n", response.article.body);
            }
            Err(e) => {
                spinner.finish_and_clear();
                Output::error(&format!("Error: {}", e));
            }
        }
    }

    Ok(())
}
