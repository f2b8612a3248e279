//! The interactive conversation loop.
//!
//! Drives one turn at a time: prompt, classify the submission, query the
//! backend behind a spinner, then stream the reply word-paced in the accent
//! color. The loop owns no state across turns; each Query/Response pair is
//! local to its turn.

use std::io;

use anyhow::Result;
use console::{style, Term};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::backend::BackendClient;
use crate::constants;
use crate::render;

/// What to do with one prompt submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnAction {
    /// The user asked to leave (`"exit"` literal).
    Exit,
    /// Empty submission; show the validation message and prompt again.
    Reprompt,
    /// Forward the text to the backend.
    Query(String),
}

impl TurnAction {
    pub fn classify(input: &str) -> TurnAction {
        if input == "exit" {
            TurnAction::Exit
        } else if input.trim().is_empty() {
            TurnAction::Reprompt
        } else {
            TurnAction::Query(input.to_string())
        }
    }
}

/// Run the conversation until the user exits or cancels.
///
/// Transport and decode failures from the backend abort the loop via `?`;
/// backend-reported errors arrive as ordinary reply text and go through the
/// normal rendering path.
pub async fn run(client: &BackendClient) -> Result<()> {
    info!(endpoint = %client.endpoint(), "Starting conversation loop");

    render::echo("  └────────────────────╼");
    println!("Starting new conversation");

    loop {
        let Some(input) = prompt_user() else {
            // Ctrl-C (or a non-interactive stdin) cancels the prompt; that
            // is a normal exit, not an error.
            break;
        };

        match TurnAction::classify(&input) {
            TurnAction::Exit => break,
            TurnAction::Reprompt => {
                println!("{}", style("Please enter a prompt.").red());
            }
            TurnAction::Query(query) => run_turn(client, &query).await?,
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Present the `You:` prompt and block until the user submits text.
/// `None` means the prompt was cancelled. Empty submissions pass through;
/// the loop's validation arm handles them.
///
/// `interact_text` refuses to run without a terminal, so when stderr is not
/// a tty (piped input, tests) this falls back to reading lines from stdin,
/// with EOF acting as the cancellation signal.
fn prompt_user() -> Option<String> {
    if !Term::stderr().is_term() {
        return read_stdin_line();
    }

    // The theme appends ": " to the label.
    Input::<String>::new()
        .with_prompt(style("You").cyan().to_string())
        .allow_empty(true)
        .interact_text()
        .ok()
}

fn read_stdin_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// One query/response turn: spinner while the request is in flight, then the
/// completion label and the paced, accent-colored reply.
async fn run_turn(client: &BackendClient, query: &str) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("THINKING...");
    spinner.enable_steady_tick(constants::SPINNER_TICK);

    let response = client.query(query).await;

    // Clear the spinner before printing anything, including the error path.
    spinner.finish_and_clear();
    let response = response?;

    println!("{}", style("Web Search:").green());
    render::echo("│");
    render::stream_words(&response, constants::WORD_DELAY).await?;
    println!();
    println!();

    Ok(())
}
