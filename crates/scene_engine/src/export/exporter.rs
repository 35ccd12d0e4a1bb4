//! Export pipeline: snapshot → documents → disk → build launch

use super::bundle::{Document, ExportBundle};
use super::codegen::SceneBody;
use super::launcher::BuildLauncher;
use super::literal::Literal;
use super::profile::{TargetPlatform, TargetProfile};
use super::template::{SlotValues, Template};
use super::ExportError;
use crate::assets::{CHECKERBOARD_CELL, CHECKERBOARD_SIZE};
use crate::core::{ExportConfig, PhysicsConfig};
use crate::render::Color;
use crate::scene::SceneSnapshot;
use std::path::PathBuf;

const RUNTIME_HEADER: &str = include_str!("../../templates/runtime_header.rs.tmpl");
const RUNTIME_FOOTER: &str = include_str!("../../templates/runtime_footer.rs.tmpl");
const ANDROID_ENTRY: &str = include_str!("../../templates/android_entry.rs.tmpl");
const DESKTOP_MANIFEST: &str = include_str!("../../templates/desktop_manifest.toml.tmpl");
const ANDROID_MANIFEST: &str = include_str!("../../templates/android_manifest.toml.tmpl");
const DESKTOP_SCRIPT: &str = include_str!("../../templates/build_desktop.sh.tmpl");
const ANDROID_SCRIPT: &str = include_str!("../../templates/build_android.sh.tmpl");

/// Entry-point declaration emitted by the runtime header
pub const PRIMARY_ENTRY: &str = "fn main() {";

/// Replacement that keeps the desktop entry compiling but unreachable
pub const HIDDEN_ENTRY: &str = "#[allow(dead_code)]\nfn desktop_main_hidden() {";

/// Generates and writes export bundles
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: ExportConfig,
    physics: PhysicsConfig,
}

impl Exporter {
    /// Exporter baking the given package settings and physics constants
    pub fn new(config: ExportConfig, physics: PhysicsConfig) -> Self {
        Self { config, physics }
    }

    /// Package settings in use
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Directory a platform's documents are written to
    pub fn output_dir(&self, platform: TargetPlatform) -> PathBuf {
        self.config.resolve_export_root().join(platform.profile().output_dir)
    }

    /// Generate every document for `platform`.
    ///
    /// Output is a pure function of the snapshot, the platform and the
    /// exporter settings: identical inputs give byte-identical documents.
    pub fn generate(&self, snapshot: &SceneSnapshot, platform: TargetPlatform) -> Result<ExportBundle, ExportError> {
        let profile = platform.profile();
        let mut documents = vec![Document::new(profile.runtime_path, self.runtime(snapshot, profile)?)];

        if let Some(entry_path) = profile.entry_path {
            let entry = Template::parse("android_entry", ANDROID_ENTRY)?.render(&SlotValues::new())?;
            documents.push(Document::new(entry_path, entry));
        }
        documents.push(Document::new(profile.manifest_path, self.manifest(profile)?));
        documents.push(Document::script(profile.script_name, self.script(profile)?));

        Ok(ExportBundle { platform, documents })
    }

    /// Generate, write, then launch the build script if enabled.
    ///
    /// A launch failure is logged and does not fail the export.
    pub fn export(
        &self,
        snapshot: &SceneSnapshot,
        platform: TargetPlatform,
        launcher: &dyn BuildLauncher,
    ) -> Result<PathBuf, ExportError> {
        log::info!("Generating {} export...", platform.profile().display_name);
        let bundle = self.generate(snapshot, platform)?;
        let dir = self.output_dir(platform);
        let written = bundle.write_to(&dir)?;
        log::info!("Wrote {} files to {}", written.len(), dir.display());

        if self.config.launch_build {
            if let Err(err) = launcher.launch(&dir, platform.profile().script_name) {
                log::warn!("Build launch failed: {err}");
            }
        }
        Ok(dir)
    }

    fn runtime(&self, snapshot: &SceneSnapshot, profile: &TargetProfile) -> Result<String, ExportError> {
        let header_values = SlotValues::new()
            .with("window_title", Literal::Str(self.config.window_title.clone()).to_string())
            .with("background", Literal::Color(Color::CORNFLOWER_BLUE).to_string())
            .with("checkerboard_size", CHECKERBOARD_SIZE.to_string())
            .with("checkerboard_cell", CHECKERBOARD_CELL.to_string())
            .with("checkerboard_light", Color::LIGHT_GRAY.r.to_string())
            .with("checkerboard_dark", Color::DARK_GRAY.r.to_string());
        let mut header = Template::parse("runtime_header", RUNTIME_HEADER)?.render(&header_values)?;

        if profile.suppress_primary_entry {
            if !header.contains(PRIMARY_ENTRY) {
                return Err(ExportError::EntryPointMissing {
                    needle: PRIMARY_ENTRY,
                });
            }
            header = header.replacen(PRIMARY_ENTRY, HIDDEN_ENTRY, 1);
        }

        let body = SceneBody::from_snapshot(snapshot).render();

        let footer_values = SlotValues::new()
            .with("gravity", Literal::Float(self.physics.gravity).to_string())
            .with("floor_height", Literal::Float(self.physics.floor_height).to_string())
            .with("overlap_nudge", Literal::Float(self.physics.overlap_nudge).to_string());
        let footer = Template::parse("runtime_footer", RUNTIME_FOOTER)?.render(&footer_values)?;

        Ok(header + &body + &footer)
    }

    fn manifest(&self, profile: &TargetProfile) -> Result<String, ExportError> {
        let (name, source) = match profile.platform {
            TargetPlatform::Desktop => ("desktop_manifest", DESKTOP_MANIFEST),
            TargetPlatform::Android => ("android_manifest", ANDROID_MANIFEST),
        };
        let triples = toml::Value::Array(
            profile
                .target_triples
                .iter()
                .map(|triple| toml::Value::String((*triple).to_string()))
                .collect(),
        );
        let values = SlotValues::new()
            .with("package_name", toml_string(&self.config.package_name))
            .with("application_id", toml_string(&self.config.application_id))
            .with("window_title", toml_string(&self.config.window_title))
            .with("build_targets", triples.to_string());
        Ok(Template::parse(name, source)?.render(&values)?)
    }

    fn script(&self, profile: &TargetProfile) -> Result<String, ExportError> {
        let (name, source) = match profile.platform {
            TargetPlatform::Desktop => ("build_desktop", DESKTOP_SCRIPT),
            TargetPlatform::Android => ("build_android", ANDROID_SCRIPT),
        };
        let values = SlotValues::new()
            .with("display_name", profile.display_name)
            .with("cargo_flags", profile.cargo_flags())
            .with("target_triple", profile.target_triples.first().copied().unwrap_or_default())
            .with("binary_name", self.config.package_name.clone());
        Ok(Template::parse(name, source)?.render(&values)?)
    }
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{build_physics_scene, Scene};

    fn demo_snapshot() -> SceneSnapshot {
        let mut scene = Scene::new();
        build_physics_scene(&mut scene);
        scene.snapshot()
    }

    #[test]
    fn test_desktop_bundle_layout() {
        let bundle = Exporter::default().generate(&demo_snapshot(), TargetPlatform::Desktop).unwrap();
        let paths: Vec<_> = bundle.documents.iter().map(|d| d.relative_path.as_str()).collect();
        assert_eq!(paths, ["src/main.rs", "Cargo.toml", "build_desktop.sh"]);

        let runtime = &bundle.documents[0].contents;
        assert!(runtime.contains(PRIMARY_ENTRY));
        assert!(runtime.contains("pub const WINDOW_TITLE: &str = \"Exported Scene\";"));
        assert!(runtime.contains("pub const GRAVITY: f32 = 9.8f32;"));
        assert!(runtime.contains("let size = 64usize;"));
        assert!(runtime.contains("clear_background(Color::from_rgba(100, 149, 237, 255));"));
        assert!(!runtime.contains("{{"));
        assert!(bundle.documents[2].executable);
    }

    #[test]
    fn test_android_entry_is_suppressed() {
        let bundle = Exporter::default().generate(&demo_snapshot(), TargetPlatform::Android).unwrap();
        let runtime = &bundle.document("src/game.rs").unwrap().contents;
        assert!(!runtime.contains(PRIMARY_ENTRY));
        assert!(runtime.contains(HIDDEN_ENTRY));

        let entry = &bundle.document("src/lib.rs").unwrap().contents;
        assert!(entry.contains("mod game;"));
        assert!(entry.contains("pub extern \"C\" fn quad_main()"));

        let manifest = &bundle.document("Cargo.toml").unwrap().contents;
        assert!(manifest.contains("crate-type = [\"cdylib\"]"));
        assert!(manifest.contains("package_name = \"com.sceneengine.exported_scene\""));
    }

    #[test]
    fn test_manifest_is_valid_toml() {
        let mut config = ExportConfig::default();
        config.window_title = "Quote \" and \\ backslash".to_string();
        let exporter = Exporter::new(config, PhysicsConfig::default());

        for platform in TargetPlatform::ALL {
            let bundle = exporter.generate(&demo_snapshot(), platform).unwrap();
            let manifest = &bundle.document("Cargo.toml").unwrap().contents;
            let parsed: toml::Value = toml::from_str(manifest).unwrap();
            assert_eq!(parsed["package"]["name"].as_str(), Some("exported_scene"));
        }
    }

    #[test]
    fn test_entity_name_cannot_spoof_entry_point() {
        let mut scene = Scene::new();
        scene.add(crate::ecs::Entity::new("fn main() {"));
        let bundle = Exporter::default().generate(&scene.snapshot(), TargetPlatform::Android).unwrap();
        let runtime = &bundle.document("src/game.rs").unwrap().contents;
        assert!(runtime.contains(HIDDEN_ENTRY));
        assert!(runtime.contains("Entity::new(\"fn main() {\")"));
    }
}
