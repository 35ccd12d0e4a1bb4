//! Console commands
//!
//! A small registry of named commands driving the [`EditorState`]. Names are
//! matched case-insensitively. A failing command is logged and echoed back,
//! it never stops the frame loop.

use super::EditorState;
use crate::export::{TargetPlatform, UnknownPlatform};
use std::collections::BTreeMap;
use thiserror::Error;

/// Most recent inputs kept in the history
pub const HISTORY_LIMIT: usize = 50;

/// Console command errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// No command registered under this name
    #[error("unknown command `{0}`")]
    Unknown(String),

    /// Wrong number or shape of arguments
    #[error("usage: {usage}")]
    Usage {
        /// Expected invocation
        usage: &'static str,
    },

    /// `select` named an entity that does not exist
    #[error("no entity named `{0}`")]
    NoSuchEntity(String),

    /// `export` named an unknown platform
    #[error(transparent)]
    Platform(#[from] UnknownPlatform),
}

/// Command body: receives the editor and the arguments after the name
pub type Handler = fn(&mut EditorState, &[&str]) -> Result<String, CommandError>;

#[derive(Clone, Copy)]
enum Action {
    Help,
    Run(Handler),
}

#[derive(Clone, Copy)]
struct CommandSpec {
    usage: &'static str,
    action: Action,
}

/// Command registry plus input history
pub struct Console {
    commands: BTreeMap<String, CommandSpec>,
    history: Vec<String>,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Console with the built-in editor commands
    pub fn new() -> Self {
        let mut console = Self {
            commands: BTreeMap::new(),
            history: Vec::new(),
        };
        console.commands.insert(
            "help".to_string(),
            CommandSpec {
                usage: "help",
                action: Action::Help,
            },
        );
        console.register("play", "play", |editor, _| {
            editor.toggle_play();
            Ok(format!("Playing: {}", editor.is_playing()))
        });
        console.register("pause", "pause", |editor, _| {
            editor.toggle_pause();
            Ok(format!("Paused: {}", editor.is_paused()))
        });
        console.register("stop", "stop", |editor, _| {
            editor.stop();
            Ok("Stopped".to_string())
        });
        console.register("colliders", "colliders", |editor, _| {
            editor.toggle_colliders();
            Ok(format!("Collider overlay: {}", editor.shows_colliders()))
        });
        console.register("list", "list", |editor, _| {
            let names: Vec<_> = editor.scene().iter().map(|(_, entity)| entity.name.as_str()).collect();
            Ok(names.join("\n"))
        });
        console.register("select", "select <name>", select);
        console.register("export", "export <desktop|android>", export);
        console
    }

    /// Register or replace a command
    pub fn register(&mut self, name: &str, usage: &'static str, handler: Handler) {
        self.commands.insert(
            name.to_lowercase(),
            CommandSpec {
                usage,
                action: Action::Run(handler),
            },
        );
    }

    /// Registered command names, sorted
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Previous inputs, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Parse and run one input line. Blank input is a no-op.
    pub fn execute(&mut self, editor: &mut EditorState, input: &str) -> Result<String, CommandError> {
        let mut words = input.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(String::new());
        };
        self.record(input.trim());

        let args: Vec<&str> = words.collect();
        let spec = self
            .commands
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| CommandError::Unknown(name.to_string()))?;

        match spec.action {
            Action::Help => Ok(self
                .commands
                .values()
                .map(|spec| format!("- {}", spec.usage))
                .collect::<Vec<_>>()
                .join("\n")),
            Action::Run(handler) => handler(editor, &args),
        }
    }

    /// Run one input line, logging the outcome instead of returning it
    pub fn submit(&mut self, editor: &mut EditorState, input: &str) {
        match self.execute(editor, input) {
            Ok(output) if !output.is_empty() => log::info!("{output}"),
            Ok(_) => {}
            Err(err) => log::warn!("Command `{}` failed: {err}", input.trim()),
        }
    }

    fn record(&mut self, input: &str) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(input.to_string());
    }
}

fn select(editor: &mut EditorState, args: &[&str]) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::Usage { usage: "select <name>" });
    }
    // Entity names may contain spaces.
    let name = args.join(" ");
    editor
        .select_by_name(&name)
        .map(|_| format!("Selected: {name}"))
        .ok_or(CommandError::NoSuchEntity(name))
}

fn export(editor: &mut EditorState, args: &[&str]) -> Result<String, CommandError> {
    let [platform] = args else {
        return Err(CommandError::Usage {
            usage: "export <desktop|android>",
        });
    };
    let platform: TargetPlatform = platform.parse()?;
    if editor.request_export(platform) {
        Ok(format!("Exporting {platform}..."))
    } else {
        Ok("Export already in progress".to_string())
    }
}
