// UI layer: the interactive menu loop. Operator input is line-oriented and
// every confirmation goes through the `Prompt` seam, so the whole flow can
// be driven by canned responses in tests.

use crate::api::{ApiClient, DeleteOutcome, RemoteItem};
use crate::sections::{self, Section, SECTIONS};
use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Blocking operator prompt. The menu loop never reads stdin directly;
/// it asks through this trait and waits for the answer.
pub trait Prompt {
    fn line(&mut self, prompt: &str) -> Result<String>;

    /// Destructive-action gate: only an exact "yes" (case-insensitive,
    /// surrounding whitespace ignored) confirms. Anything else declines.
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.line(prompt)?.trim().eq_ignore_ascii_case("yes"))
    }
}

/// Real prompt backed by `dialoguer`.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn line(&mut self, prompt: &str) -> Result<String> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }
}

/// Main interactive menu. Loops until the operator chooses `0`.
pub fn main_menu<P: Prompt>(api: &ApiClient, prompt: &mut P) -> Result<()> {
    loop {
        println!("\nChoose a section to manage:");
        for (id, section) in &SECTIONS {
            println!(" {}. {}", id, section.name);
        }
        println!(" 6. Remove All (All Sections)");
        println!(" 0. Exit");

        let choice = prompt.line("Enter your choice")?;
        match choice.trim() {
            "0" => {
                println!("[INFO] Exiting.");
                break;
            }
            "6" => {
                println!("You chose to delete EVERYTHING from all sections (1-5).");
                if prompt.confirm("Are you absolutely sure? (yes/no)")? {
                    for (_, section) in &SECTIONS {
                        purge_section(api, section);
                    }
                    println!("[INFO] All sections cleared (where items existed).");
                } else {
                    println!("[INFO] Aborted 'Remove All'.");
                }
            }
            other => match sections::resolve(other) {
                Ok(section) => section_menu(api, prompt, section)?,
                Err(_) => println!("[ERROR] Invalid choice. Please select a valid option."),
            },
        }
    }
    Ok(())
}

/// One visit to a section: list it, take a single selection line, apply it,
/// then show what is left. Control always returns to the main menu.
fn section_menu<P: Prompt>(api: &ApiClient, prompt: &mut P, section: &Section) -> Result<()> {
    let items = match list_items(api, section) {
        Ok(items) => items,
        Err(e) => {
            println!("[ERROR] Failed to retrieve {}: {}", section.name, e);
            return Ok(());
        }
    };
    if items.is_empty() {
        return Ok(());
    }

    let lowered = section.name.to_lowercase();
    println!("\nEnter the numbers of the {lowered} to delete, separated by commas (e.g., 1,3,5),");
    println!(" or type 'all' to delete ALL from this section, or 'exit' to return.");
    let input = prompt.line("Your choice")?;
    let input = input.trim().to_lowercase();

    if input == "exit" {
        println!("[INFO] Returning to main menu.");
        return Ok(());
    } else if input == "all" {
        let question = format!("Are you sure you want to delete ALL {lowered}? (yes/no)");
        if prompt.confirm(&question)? {
            delete_batch(api, section, &items);
        } else {
            println!("[INFO] Deletion canceled.");
        }
    } else {
        match parse_selection(&input) {
            Some(tokens) => {
                for token in tokens {
                    match token.parse::<usize>() {
                        Ok(index) if index >= 1 && index <= items.len() => {
                            let item = &items[index - 1];
                            let question = format!(
                                "Are you sure you want to delete {lowered} '{}' (ID: {})? (yes/no)",
                                item.display_name(),
                                item.id
                            );
                            if prompt.confirm(&question)? {
                                report_delete(api.delete(section, &item.id), &item.id);
                            } else {
                                println!(
                                    "[INFO] Skipping deletion of {lowered} '{}'.",
                                    item.display_name()
                                );
                            }
                        }
                        // Out of range, or numeric but too large to index.
                        _ => println!("[ERROR] Invalid {lowered} number: {token}"),
                    }
                }
            }
            None => {
                println!(
                    "[ERROR] Invalid input. Please enter numbers separated by commas or 'all'."
                )
            }
        }
    }

    // Ids must come from a fresh listing, so show the section again before
    // handing control back.
    println!("\n[INFO] Remaining {}:", section.name);
    if let Err(e) = list_items(api, section) {
        println!("[ERROR] Failed to retrieve {}: {}", section.name, e);
    }
    Ok(())
}

/// List a section and delete everything in it, used by the global purge.
/// A failed listing aborts this section's pass instead of passing for
/// "nothing to delete"; later sections still run.
fn purge_section(api: &ApiClient, section: &Section) {
    match list_items(api, section) {
        Ok(items) => delete_batch(api, section, &items),
        Err(e) => println!("[ERROR] Skipping {}: {}", section.name, e),
    }
}

/// Delete every item in listing order. Per-item failures are reported and
/// never stop the batch.
fn delete_batch(api: &ApiClient, section: &Section, items: &[RemoteItem]) {
    for item in items {
        report_delete(api.delete(section, &item.id), &item.id);
    }
}

/// Fetch a section with a spinner and print its contents. An empty section
/// prints an informational line; a remote failure surfaces as the error so
/// callers can tell it apart from "no items".
fn list_items(api: &ApiClient, section: &Section) -> crate::error::Result<Vec<RemoteItem>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Fetching {}...", section.name.to_lowercase()));
    let result = api.list(section);
    spinner.finish_and_clear();

    let items = result?;
    if items.is_empty() {
        println!("[INFO] No {} found.", section.name);
    } else {
        println!("[INFO] Retrieved {}:", section.name);
        for (i, item) in items.iter().enumerate() {
            println!(" {}. {} (ID: {})", i + 1, item.display_name(), item.id);
        }
    }
    Ok(items)
}

fn report_delete(result: crate::error::Result<DeleteOutcome>, item_id: &str) {
    match result {
        Ok(DeleteOutcome::Deleted) => {
            println!("[INFO] Successfully deleted item with ID: {item_id}")
        }
        Ok(DeleteOutcome::NotFound) => {
            println!("[INFO] Item with ID {item_id} not found or already deleted.")
        }
        Ok(DeleteOutcome::Failed { status, body }) => {
            println!("[ERROR] Failed to delete item with ID {item_id}. Status: {status}");
            println!("[ERROR] Response: {body}");
        }
        Err(e) => println!("[ERROR] Failed to delete item with ID {item_id}: {e}"),
    }
}

/// Split a selection line like "1,3,5" into its numeric tokens.
/// All-or-nothing on purpose: a single non-numeric token rejects the whole
/// line, so a typo never triggers a partial batch. Tokens are kept as text;
/// a number too large to ever index the listing is still numeric and gets
/// reported later as out of range instead of poisoning the line.
fn parse_selection(input: &str) -> Option<Vec<String>> {
    input
        .split(',')
        .map(|t| {
            let t = t.trim();
            (!t.is_empty() && t.bytes().all(|b| b.is_ascii_digit())).then(|| t.to_string())
        })
        .collect()
}
