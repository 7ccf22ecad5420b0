//! `krishi chat` interactive shell.
//!
//! A readline loop that answers questions inline, the single-process
//! equivalent of the HTTP front end. `/upload <path>` stores a local
//! photo through the same upload store the server uses.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use krishi_sahayak::advisor::respond;
use krishi_sahayak::uploads::UploadStore;
use krishi_sahayak::Config;

use super::output::print_advice;

/// Runs the interactive advisory shell.
pub fn run_chat(config: Config) -> Result<()> {
    let uploads = UploadStore::new(config.upload_dir());
    uploads.ensure_dir()?;

    let mut rl = DefaultEditor::new()?;

    println!("{}", "krishi-sahayak".bold().green());
    println!(
        "Ask about your crops. {} stores a photo, {} exits.\n",
        "/upload <path>".yellow(),
        "/quit".yellow()
    );

    let prompt = format!("{}> ", "krishi".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Some(path) = trimmed.strip_prefix("/upload ") {
                    handle_upload(&uploads, path.trim());
                    continue;
                }

                match respond(trimmed) {
                    Ok(advice) => {
                        print_advice(&advice, false);
                        println!();
                    }
                    Err(e) => eprintln!("{}: {e}", "error".red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Store a local photo through the upload store.
fn handle_upload(uploads: &UploadStore, path: &str) {
    let name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    match std::fs::read(path) {
        Ok(bytes) => match uploads.save(&name, &bytes) {
            Ok(stored) => println!("stored {}", stored.disk_path.display()),
            Err(e) => eprintln!("{}: {e}", "error".red()),
        },
        Err(e) => eprintln!("{}: {e}", "error".red()),
    }
}
