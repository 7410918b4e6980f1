//! Interactive explorer session.
//!
//! Each line of input is either a location to tell a story about or a
//! `:command`. The session keeps the current location and the saved list
//! between lines, the same state the HTTP front end works against.

use lore_actions::{Explorer, Notification};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, instrument};

use super::render::{print_notification, print_saved, print_story};
use super::story::detection_notice;
use super::{CliResult, OutputFormat};

const HELP: &str = "\
Type a location to hear its story, or one of:
  :save           save the current location
  :save NAME      save NAME
  :list           show saved locations
  :open N         tell the story of saved location N
  :here LAT LON   tell the story of a coordinate pair
  :help           show this help
  :quit           leave";

/// One parsed line of explorer input.
#[derive(Debug, Clone, PartialEq)]
enum Input {
    Generate(String),
    Save(Option<String>),
    List,
    Open(usize),
    Here(f64, f64),
    Help,
    Quit,
    Blank,
    Invalid(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Input::Blank;
        }
        let Some(command) = line.strip_prefix(':') else {
            return Input::Generate(line.to_string());
        };

        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        match name {
            "save" | "s" if rest.is_empty() => Input::Save(None),
            "save" | "s" => Input::Save(Some(rest.to_string())),
            "list" | "l" => Input::List,
            "open" | "o" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => Input::Open(n - 1),
                _ => Input::Invalid("Usage: :open N (numbering starts at 1)".to_string()),
            },
            "here" => {
                let mut parts = rest.split_whitespace().map(str::parse::<f64>);
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(Ok(lat)), Some(Ok(lon)), None) => Input::Here(lat, lon),
                    _ => Input::Invalid("Usage: :here LAT LON".to_string()),
                }
            }
            "help" | "h" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            other => Input::Invalid(format!("Unknown command :{other}. Type :help for commands.")),
        }
    }
}

/// Run the explorer until `:quit` or end of input.
#[instrument(skip_all)]
pub async fn run_explorer(explorer: Explorer) -> CliResult {
    let loaded = explorer.load().await;
    println!("Lore Explorer. {} saved location(s). Type :help for commands.", loaded);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(&explorer).await;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Input::parse(&line) {
            Input::Blank => {}
            Input::Quit => break,
            Input::Help => println!("{HELP}"),
            Input::Invalid(message) => eprintln!("{message}"),
            Input::List => print_saved(&explorer.saved().await, OutputFormat::Human),
            Input::Generate(location) => {
                println!("Generating story...");
                let outcome = explorer.generate(&location).await;
                show_story(&explorer, Notification::for_story(&outcome), outcome.success()).await;
            }
            Input::Open(index) => {
                let outcome = explorer.open_saved(index).await;
                show_story(&explorer, Notification::for_story(&outcome), outcome.success()).await;
            }
            Input::Here(lat, lon) => {
                if let Some(notice) = detection_notice(lat, lon) {
                    print_notification(&notice);
                }
                let outcome = explorer.generate_here(lat, lon).await;
                show_story(&explorer, Notification::for_story(&outcome), outcome.success()).await;
            }
            Input::Save(name) => {
                let outcome = match name {
                    Some(name) => explorer.save(&name).await,
                    None => explorer.save_current().await,
                };
                print_notification(&Notification::for_save(&outcome));
            }
        }
    }

    debug!("Explorer session ended");
    Ok(())
}

async fn show_story(
    explorer: &Explorer,
    notice: Option<Notification>,
    story: Option<&lore_core::Story>,
) {
    if let Some(notice) = notice {
        print_notification(&notice);
        return;
    }
    if let (Some(story), Some(location)) = (story, explorer.current_location().await) {
        print_story(&location, story, OutputFormat::Human);
    }
}

async fn prompt(explorer: &Explorer) {
    use std::io::Write;

    match explorer.current_location().await {
        Some(location) => print!("[{}] > ", location),
        None => print!("> "),
    }
    let _ = std::io::stdout().flush();
}
