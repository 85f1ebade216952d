//! Line-scripted demo driving a `Select` over JSON data.
//!
//! Reads a JSON array of records, mounts a select over it, then reads one
//! command per line from stdin and prints the view after every change.
//!
//! # Commands
//!
//! - `open` / `close`: imperative handle calls
//! - `type <text>`: set the search term
//! - `clear`: press the search input's clear control
//! - `pick <row>`: press a row (filtered position, from 0)
//! - `submit`: press the footer's submit control
//! - `backdrop` / `back` / `swipe`: dismiss the overlay
//! - `show`: print the current view
//!
//! # Example
//!
//! ```text
//! $ echo 'open
//! type an
//! pick 0' | picksheet fruits.json --searchable name --multiple
//! ```

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde_json::Value;

use picksheet::domain::{resolve, FieldAccessible, FieldPath, SearchSpec};
use picksheet::observability::init_tracing;
use picksheet::overlay::{DismissCallbacks, DismissTrigger};
use picksheet::ui::{render_plain, render_styled, Body, Line, Overrides, TextRenderer};
use picksheet::{load_theme, Config, Event, PicksheetError, Result, Select, SelectProps, Theme};

/// Command-line arguments accepted by the `picksheet` binary.
#[derive(Parser, Debug)]
#[command(name = "picksheet", version, about = "Drive a searchable select over JSON records")]
struct CliArgs {
    #[arg(value_name = "FILE", help = "JSON file holding an array of records")]
    data: PathBuf,
    #[arg(
        short,
        long,
        value_name = "PATHS",
        help = "Searchable field paths, comma-separated, or * for the record itself (default: no search)"
    )]
    searchable: Option<String>,
    #[arg(short, long, help = "Allow selecting several records (default: single)")]
    multiple: bool,
    #[arg(
        long,
        value_name = "PATH",
        help = "Field path shown as the row label (default: the record)"
    )]
    label_path: Option<String>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Field path used as the selection value (default: the record)"
    )]
    value_path: Option<String>,
    #[arg(short, long, value_name = "TEXT", help = "Title shown above the list")]
    title: Option<String>,
    #[arg(short, long, value_name = "FILE", help = "TOML configuration file (default: none)")]
    config: Option<PathBuf>,
    #[arg(long, help = "Print without colors")]
    plain: bool,
}

/// Parsed form of one stdin line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Open,
    Close,
    Type(String),
    Clear,
    Pick(usize),
    Submit,
    Dismiss(DismissTrigger),
    Show,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let (word, rest) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));
        match word {
            "open" => Some(Self::Open),
            "close" => Some(Self::Close),
            "type" => Some(Self::Type(rest.to_string())),
            "clear" => Some(Self::Clear),
            "pick" => rest.trim().parse().ok().map(Self::Pick),
            "submit" => Some(Self::Submit),
            "backdrop" => Some(Self::Dismiss(DismissTrigger::Backdrop)),
            "back" => Some(Self::Dismiss(DismissTrigger::BackButton)),
            "swipe" => Some(Self::Dismiss(DismissTrigger::Swipe)),
            "show" => Some(Self::Show),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    init_tracing(&config);
    let theme = load_theme(&config);

    let items = load_items(&args.data)?;
    tracing::debug!(count = items.len(), "loaded records");

    let mut props: SelectProps<Value, Value> = SelectProps::new(items)
        .multiple(args.multiple)
        .labels(config.labels.clone());
    if let Some(spec) = &args.searchable {
        props = props.searchable(SearchSpec::parse(spec));
    }
    if let Some(title) = &args.title {
        props = props.title(title.clone());
    }

    let mut select = Select::new(props)
        .on_select(|value| match serde_json::to_string(value.as_slice()) {
            Ok(json) => println!("selected: {json}"),
            Err(e) => tracing::warn!(error = %e, "failed to encode selection"),
        })
        .dismiss_callbacks(
            DismissCallbacks::default()
                .on_backdrop_press(|| println!("dismissed: backdrop"))
                .on_back_button_press(|| println!("dismissed: back"))
                .on_swipe_complete(|| println!("dismissed: swipe")),
        );
    let renderer = text_renderer(args.label_path.as_deref(), args.value_path.as_deref());
    let overrides = Overrides::default();
    let handle = select.handle();

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = Command::parse(&line) else {
            eprintln!("unknown command: {line}");
            continue;
        };

        let view = select.view(&renderer, &overrides);
        let changed = match command {
            Command::Open => {
                handle.open();
                true
            }
            Command::Close => {
                handle.close();
                true
            }
            Command::Type(text) => select.dispatch(Event::Search(text)),
            Command::Clear => select.dispatch(Event::ClearSearch),
            Command::Pick(row) => match row_event(&view.body, row) {
                Some(event) => select.dispatch(event),
                None => {
                    eprintln!("no pressable row {row}");
                    false
                }
            },
            Command::Submit => match view.footer.and_then(|line| line.on_press) {
                Some(event) => select.dispatch(event),
                None => {
                    eprintln!("nothing to submit");
                    false
                }
            },
            Command::Dismiss(trigger) => select.dispatch(Event::Dismiss(trigger)),
            Command::Show => true,
        };

        if changed {
            print_view(&select, &renderer, &overrides, &theme, args.plain);
        }
    }

    Ok(())
}

fn load_items(path: &Path) -> Result<Vec<Value>> {
    let text = std::fs::read_to_string(path)?;
    match serde_json::from_str(&text)? {
        Value::Array(items) => Ok(items),
        other => Err(PicksheetError::Config(format!(
            "{} must hold a JSON array, found {}",
            path.display(),
            kind(&other)
        ))),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn text_renderer(label_path: Option<&str>, value_path: Option<&str>) -> TextRenderer<Value, Value> {
    let label_path = label_path.map(FieldPath::new);
    let value_path = value_path.map(FieldPath::new);

    TextRenderer::new(
        move |item: &Value| {
            let target = match &label_path {
                Some(path) => resolve(item, path),
                None => Some(item),
            };
            target
                .map(|value| value.text().unwrap_or_else(|| value.to_string()))
                .unwrap_or_default()
        },
        move |item: &Value| match &value_path {
            Some(path) => resolve(item, path).cloned(),
            None => Some(item.clone()),
        },
    )
}

fn row_event(body: &Body<Line<Value>>, row: usize) -> Option<Event<Value>> {
    match body {
        Body::Rows(rows) => rows.get(row).and_then(|(_, line)| line.on_press.clone()),
        Body::NoResults(_) => None,
    }
}

fn print_view(
    select: &Select<Value, Value>,
    renderer: &TextRenderer<Value, Value>,
    overrides: &Overrides<Value, Value, Line<Value>>,
    theme: &Theme,
    plain: bool,
) {
    let view = select.view(renderer, overrides);
    if !view.visible {
        println!("(hidden)");
        return;
    }
    let out = if plain {
        render_plain(&view)
    } else {
        render_styled(&view, theme)
    };
    println!("{out}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("type ap"), Some(Command::Type("ap".to_string())));
        assert_eq!(Command::parse(" pick 2 "), Some(Command::Pick(2)));
        assert_eq!(Command::parse("pick x"), None);
        assert_eq!(Command::parse("back"), Some(Command::Dismiss(DismissTrigger::BackButton)));
        assert_eq!(Command::parse("dance"), None);
    }

    #[test]
    fn renderer_uses_paths() {
        let renderer = text_renderer(Some("name"), Some("id"));
        let data = vec![json!({"id": 7, "name": "Plum"})];
        let mut select = Select::new(SelectProps::new(data).default_visible(true));
        let view = select.view(&renderer, &Overrides::default());
        assert_eq!(render_plain(&view), "[ ] Plum");

        let event = row_event(&view.body, 0).unwrap();
        assert_eq!(event, Event::Select(json!(7)));
        select.dispatch(event);
        assert!(!select.is_visible());
    }

    #[test]
    fn rejects_non_array_data() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "{\"a\": 1}").unwrap();
        assert!(matches!(load_items(file.path()), Err(PicksheetError::Config(_))));
    }
}
