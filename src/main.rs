//! keyhint - inspect shortcut labels, test matches, and dispatch key events.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use keyhint::config::{self, Config};
use keyhint::error::KeyhintError;
use keyhint::logging;
use keyhint::shortcuts::{
    display, label, label_for, matches, Dispatch, InputFocus, KeyEvent, OsFamily,
    ShortcutDefinition, ShortcutDispatcher,
};

/// Keyboard shortcut hints for the search front-end
#[derive(Parser)]
#[command(name = "keyhint")]
#[command(version)]
struct Args {
    /// Configuration file path (default: ~/.keyhint/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print display labels for a shortcut
    Label {
        /// OS family name; "Darwin" selects macOS glyphs
        #[arg(long)]
        os: Option<String>,
        /// Shortcut tokens, e.g. `cmd shift k`
        tokens: Vec<String>,
    },
    /// Check whether a key event matches a shortcut
    Match {
        /// Key identifier as reported by the host, e.g. `k` or `Enter`
        #[arg(long)]
        key: String,
        #[arg(long)]
        meta: bool,
        #[arg(long)]
        ctrl: bool,
        #[arg(long)]
        shift: bool,
        tokens: Vec<String>,
    },
    /// List registered bindings with their labels
    Bindings {
        #[arg(long)]
        os: Option<String>,
    },
    /// Read JSONL key events from stdin and print what each one triggers
    Dispatch {
        /// Treat every event as typed into a text input
        #[arg(long)]
        text_input: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_error) = load_startup_config(args.config.as_deref());
    let _guard = logging::init(&config.log_config());
    if let Some(err) = config_error {
        err.report();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Label { os, tokens } => {
            let shortcut = (!tokens.is_empty()).then(|| ShortcutDefinition::new(tokens));
            if let Some(labels) = label(shortcut.as_ref(), os.as_deref()) {
                writeln!(out, "{}", labels.join(" "))?;
            }
        }
        Command::Match {
            key,
            meta,
            ctrl,
            shift,
            tokens,
        } => {
            let event = KeyEvent {
                key,
                meta_key: meta,
                ctrl_key: ctrl,
                shift_key: shift,
            };
            let shortcut = (!tokens.is_empty()).then(|| ShortcutDefinition::new(tokens));
            writeln!(out, "{}", matches(&event, shortcut.as_ref()))?;
        }
        Command::Bindings { os } => {
            let os = resolve_os(&config, os.as_deref());
            let registry = config.build_registry();
            for binding in registry.bindings() {
                let hint = match registry.get_shortcut(&binding.id) {
                    Some(shortcut) => display(shortcut, os),
                    None => "(disabled)".to_string(),
                };
                writeln!(out, "{:<24} {:<12} {}", binding.id, hint, binding.name)?;
            }
        }
        Command::Dispatch { text_input } => {
            let focus = if text_input {
                InputFocus::TextInput
            } else {
                InputFocus::Other
            };
            let dispatcher = ShortcutDispatcher::new(config.build_registry());
            let os = config.os_family();
            tracing::info!(os = os.name(), ?focus, "Dispatching key events from stdin");
            run_dispatch(&dispatcher, focus, os, io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}

/// The log level and file flag live in the config, so a load failure is held
/// back until logging is initialized and reported by the caller.
fn load_startup_config(path: Option<&Path>) -> (Config, Option<KeyhintError>) {
    let path = path.map_or_else(config::default_config_path, Path::to_path_buf);
    match config::load_config(&path) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    }
}

fn resolve_os(config: &Config, flag: Option<&str>) -> OsFamily {
    match flag {
        Some(name) => OsFamily::from_name(Some(name)),
        None => config.os_family(),
    }
}

/// One JSON object per output line: the dispatch outcome plus the hint
/// label of the matched binding.
fn run_dispatch(
    dispatcher: &ShortcutDispatcher,
    focus: InputFocus,
    os: OsFamily,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    for (line_no, line) in input.lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let event: KeyEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                let _span = tracing::warn_span!("stdin", line = line_no + 1).entered();
                KeyhintError::from(e).report();
                continue;
            }
        };

        let outcome = dispatcher.dispatch(&event, focus);
        let mut record = serde_json::to_value(&outcome)?;
        if let Dispatch::Matched(id) = &outcome {
            if let Some(shortcut) = dispatcher.registry().get_shortcut(id) {
                record["labels"] = serde_json::json!(label_for(shortcut, os));
            }
        }
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyhint::shortcuts::ShortcutRegistry;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn collect(&self, f: impl FnOnce()) -> String {
            let writer = self.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_ansi(false)
                .with_writer(move || writer.clone())
                .finish();
            tracing::subscriber::with_default(subscriber, f);
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn run(input: &str, focus: InputFocus) -> Vec<serde_json::Value> {
        let dispatcher = ShortcutDispatcher::new(ShortcutRegistry::with_defaults());
        let mut out = Vec::new();
        run_dispatch(&dispatcher, focus, OsFamily::Darwin, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn dispatch_reports_matches_with_labels() {
        let records = run(
            "{\"key\":\"k\",\"metaKey\":true}\n{\"key\":\"q\"}\n",
            InputFocus::Other,
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["outcome"], "matched");
        assert_eq!(records[0]["id"], "commandBar.open");
        assert_eq!(records[0]["labels"], serde_json::json!(["⌘", "k"]));
        assert_eq!(records[1]["outcome"], "unmatched");
    }

    #[test]
    fn dispatch_skips_blank_and_malformed_lines() {
        let records = run("\nnot json\n{\"key\":\"Escape\"}\n", InputFocus::TextInput);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], "commandBar.close");
    }

    #[test]
    fn broken_config_warning_is_logged_after_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"logLevel": "debug", "bindings": [{"id": "x"}]}"#).unwrap();

        let (config, err) = load_startup_config(Some(&path));
        assert_eq!(config.log_config().level, "info");
        let err = err.expect("broken config should be reported");

        let logs = CapturedLogs::default().collect(|| err.report());
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("using default settings"), "{logs}");
        assert!(logs.contains("config.json"), "{logs}");
    }

    #[test]
    fn missing_config_is_not_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (config, err) = load_startup_config(Some(&dir.path().join("config.json")));
        assert!(err.is_none());
        assert!(config.bindings.is_empty());
    }

    #[test]
    fn malformed_event_line_is_logged_as_warning() {
        let dispatcher = ShortcutDispatcher::new(ShortcutRegistry::with_defaults());
        let mut out = Vec::new();
        let logs = CapturedLogs::default().collect(|| {
            run_dispatch(
                &dispatcher,
                InputFocus::Other,
                OsFamily::Other,
                "{\"key\":\"k\",\"metaKey\":true}\nnot json\n".as_bytes(),
                &mut out,
            )
            .unwrap();
        });
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("line=2"), "{logs}");
        assert!(logs.contains("Invalid key event"), "{logs}");
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn resolve_os_prefers_flag() {
        let config = Config {
            os_family: Some("Darwin".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_os(&config, Some("Linux")), OsFamily::Other);
        assert_eq!(resolve_os(&config, None), OsFamily::Darwin);
    }

    #[test]
    fn args_parse_match_command() {
        let args = Args::try_parse_from([
            "keyhint", "match", "--key", "k", "--meta", "cmd", "k",
        ])
        .unwrap();
        match args.command {
            Command::Match { key, meta, tokens, .. } => {
                assert_eq!(key, "k");
                assert!(meta);
                assert_eq!(tokens, vec!["cmd", "k"]);
            }
            _ => panic!("expected match command"),
        }
    }
}
