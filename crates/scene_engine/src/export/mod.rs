//! Standalone program export
//!
//! Turns a [`SceneSnapshot`](crate::scene::SceneSnapshot) into the source of a
//! self-contained macroquad program for one [`TargetPlatform`]. Generation is
//! deterministic and separate from writing, so a bundle can be inspected or
//! diffed before it touches disk. [`ExportJob`] runs the whole pipeline off the
//! editor thread, one export at a time.

mod bundle;
mod codegen;
mod exporter;
mod job;
mod launcher;
mod literal;
mod profile;
mod template;

pub use bundle::{Document, ExportBundle};
pub use codegen::{CameraBlock, ComponentBlock, EntityBlock, SceneBody};
pub use exporter::{Exporter, HIDDEN_ENTRY, PRIMARY_ENTRY};
pub use job::{ExportJob, JobState};
pub use launcher::{BuildLauncher, LaunchError, ProcessLauncher};
pub use literal::{escape_str, Literal};
pub use profile::{TargetPlatform, TargetProfile, UnknownPlatform, ANDROID_TARGET_TRIPLES, DESKTOP_TARGET_TRIPLE};
pub use template::{SlotValues, Template, TemplateError};

use std::path::PathBuf;
use thiserror::Error;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem failure while writing a document
    #[error("failed to write {path}: {source}")]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Template parse or render failure
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The runtime header has no entry point to suppress
    #[error("runtime header does not declare `{needle}`")]
    EntryPointMissing {
        /// Declaration searched for
        needle: &'static str,
    },

    /// The export thread panicked
    #[error("export panicked: {0}")]
    Panicked(String),
}
