//! Editor controller
//!
//! [`EditorState`] is the root of the interactive application: it owns the
//! scene, the mode flags and the export job, and drives one frame at a time
//! from an input snapshot. Hosts call [`EditorState::tick`] then
//! [`EditorState::draw`] once per frame.

pub mod console;

pub use console::{CommandError, Console};

use crate::core::EditorConfig;
use crate::ecs::{BoxCollider, EntityId, FrameContext};
use crate::export::{BuildLauncher, ExportJob, Exporter, JobState, ProcessLauncher, TargetPlatform};
use crate::foundation::math::Vec2;
use crate::input::{InputState, KeyCode, MouseButton, RawInput};
use crate::physics::{raycast, PhysicsSystem};
use crate::render::{debug_lines, Color, RenderBackend, Viewport};
use crate::scene::{build_physics_scene, Scene};
use std::sync::Arc;

/// Left/top inset of the editor viewport inside the window
const EDITOR_INSET: (f32, f32) = (300.0, 50.0);

/// Horizontal and vertical space taken by the editor panels
const EDITOR_PANELS: (f32, f32) = (600.0, 300.0);

/// Explicit application state for the editor
pub struct EditorState {
    config: EditorConfig,
    scene: Scene,
    physics: PhysicsSystem,
    exporter: Exporter,
    job: ExportJob,
    launcher: Arc<dyn BuildLauncher>,
    input: InputState,
    selection: Option<EntityId>,
    editor_mode: bool,
    show_colliders: bool,
    playing: bool,
    paused: bool,
    window: (u32, u32),
}

impl EditorState {
    /// Editor over the default physics scene
    pub fn new(config: EditorConfig) -> Self {
        let mut scene = Scene::new();
        build_physics_scene(&mut scene);
        Self::with_scene(config, scene)
    }

    /// Editor over an already-built scene
    pub fn with_scene(config: EditorConfig, scene: Scene) -> Self {
        let window = (config.window.width, config.window.height);
        let mut state = Self {
            physics: PhysicsSystem::new(config.physics),
            exporter: Exporter::new(config.export.clone(), config.physics),
            config,
            scene,
            job: ExportJob::new(),
            launcher: Arc::new(ProcessLauncher),
            input: InputState::new(),
            selection: None,
            editor_mode: true,
            show_colliders: true,
            playing: false,
            paused: false,
            window,
        };
        let aspect = state.viewport().aspect_ratio();
        state.scene.camera.recompute(aspect);
        state
    }

    /// Replace the build launcher used after exports
    pub fn with_launcher(mut self, launcher: Arc<dyn BuildLauncher>) -> Self {
        self.launcher = launcher;
        self
    }

    /// Advance one frame: mode toggles, picking, then update and simulate
    /// while playing, or only the camera while editing.
    pub fn tick(&mut self, raw: RawInput, delta_time: f32) {
        self.input.begin_frame(raw);

        if self.input.key_pressed(KeyCode::F1) {
            self.editor_mode = !self.editor_mode;
            log::info!("Editor mode: {}", on_off(self.editor_mode));
        }
        if self.input.key_pressed(KeyCode::F2) {
            self.show_colliders = !self.show_colliders;
            log::info!("Collider overlay: {}", on_off(self.show_colliders));
        }

        let viewport = self.viewport();
        if self.editor_mode && self.input.button_pressed(MouseButton::Left) {
            self.pick(self.input.pointer_position(), &viewport);
        }

        let aspect = viewport.aspect_ratio();
        if self.playing && !self.paused {
            let ctx = FrameContext {
                delta_time,
                input: &self.input,
            };
            self.scene.update(&ctx, aspect);
            self.physics.simulate(&mut self.scene, delta_time);
        } else {
            self.scene.editor_update(&self.input, delta_time, aspect);
        }
    }

    fn pick(&mut self, pointer: Vec2, viewport: &Viewport) {
        if !viewport.contains(pointer.x, pointer.y) {
            return;
        }
        if let Some(id) = raycast(pointer, &self.scene.camera, viewport, &self.scene) {
            self.selection = Some(id);
            if let Some(entity) = self.scene.get(id) {
                log::info!("Selected: {}", entity.name);
            }
        }
    }

    /// Emit the frame: grid, scene, collider overlay, gizmo, then the 2D pass
    pub fn draw(&self, backend: &mut dyn RenderBackend) {
        if self.editor_mode && !self.playing {
            backend.set_camera(self.scene.camera.view(), self.scene.camera.projection());
            backend.draw_lines(&debug_lines::grid_lines(1.0));
        }

        self.scene.draw_3d(backend);

        if self.editor_mode && self.show_colliders {
            for (_, entity) in self.scene.iter() {
                if let Some(collider) = entity.get_component::<BoxCollider>() {
                    let bounds = collider.world_bounds(&entity.transform);
                    backend.draw_lines(&debug_lines::box_lines(&bounds, Color::LIME_GREEN));
                }
            }
        }

        if self.editor_mode {
            if let Some(entity) = self.selection.and_then(|id| self.scene.get(id)) {
                backend.draw_lines(&debug_lines::gizmo_lines(entity.transform.position));
            }
        }

        self.scene.draw_2d(backend);
        if self.editor_mode {
            backend.draw_text(&self.status_line(), Vec2::new(10.0, 10.0), Color::WHITE);
        }
    }

    /// Mode, selection and export summary shown in the editor overlay
    pub fn status_line(&self) -> String {
        let mode = match (self.playing, self.paused) {
            (true, true) => "[PAUSED]",
            (true, false) => "[PLAY]",
            _ => "[EDITOR]",
        };
        let selected = self
            .selected_entity_name()
            .map_or_else(|| "none".to_string(), str::to_string);
        let export = match self.job.state() {
            JobState::Idle => "idle".to_string(),
            JobState::Running { platform } => format!("exporting {platform}"),
            JobState::Finished { platform, .. } => format!("{platform} done"),
            JobState::Failed { platform, .. } => format!("{platform} failed"),
        };
        format!("{mode} | selected: {selected} | export: {export}")
    }

    /// Flip play mode; entering or leaving it always clears pause
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
        self.paused = false;
        log::info!("Play mode: {}", on_off(self.playing));
    }

    /// Flip pause, only while playing
    pub fn toggle_pause(&mut self) {
        if self.playing {
            self.paused = !self.paused;
            log::info!("Paused: {}", on_off(self.paused));
        }
    }

    /// Leave play mode
    pub fn stop(&mut self) {
        self.playing = false;
        self.paused = false;
        log::info!("Play mode: off");
    }

    /// Flip the collider overlay
    pub fn toggle_colliders(&mut self) {
        self.show_colliders = !self.show_colliders;
    }

    /// Select an entity by name (case-insensitive)
    pub fn select_by_name(&mut self, name: &str) -> Option<EntityId> {
        let id = self.scene.find_by_name(name)?;
        self.selection = Some(id);
        log::info!("Selected: {name}");
        Some(id)
    }

    /// Start a background export of the scene as it is right now.
    ///
    /// The scene is copied before the job is dispatched, so later edits do
    /// not leak into the export. Returns `false` while another export is
    /// still running.
    pub fn request_export(&mut self, platform: TargetPlatform) -> bool {
        if self.job.is_busy() {
            log::info!("Export already in progress, ignoring {platform} request");
            return false;
        }
        let snapshot = self.scene.snapshot();
        let exporter = self.exporter.clone();
        let launcher = Arc::clone(&self.launcher);
        self.job
            .try_start(platform, move || exporter.export(&snapshot, platform, launcher.as_ref()))
    }

    /// Block until the in-flight export has finished
    pub fn wait_for_export(&mut self) -> JobState {
        self.job.wait()
    }

    /// Export job state
    pub fn export_state(&self) -> JobState {
        self.job.state()
    }

    /// Viewport the scene is rendered into this frame
    pub fn viewport(&self) -> Viewport {
        let (width, height) = (self.window.0 as f32, self.window.1 as f32);
        if self.editor_mode && width > EDITOR_PANELS.0 && height > EDITOR_PANELS.1 {
            Viewport::new(
                EDITOR_INSET.0,
                EDITOR_INSET.1,
                width - EDITOR_PANELS.0,
                height - EDITOR_PANELS.1,
            )
        } else {
            Viewport::full(self.window.0, self.window.1)
        }
    }

    /// Scene being edited
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene being edited
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Active configuration
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Currently selected entity
    pub fn selection(&self) -> Option<EntityId> {
        self.selection
    }

    /// Name of the currently selected entity
    pub fn selected_entity_name(&self) -> Option<&str> {
        self.selection
            .and_then(|id| self.scene.get(id))
            .map(|entity| entity.name.as_str())
    }

    /// Editor overlay and picking are active
    pub fn is_editor_mode(&self) -> bool {
        self.editor_mode
    }

    /// Collider wireframes are drawn
    pub fn shows_colliders(&self) -> bool {
        self.show_colliders
    }

    /// Play mode is on
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Simulation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::LaunchError;
    use crate::render::RecordingBackend;
    use approx::assert_relative_eq;
    use std::path::Path;

    struct NoLaunch;

    impl BuildLauncher for NoLaunch {
        fn launch(&self, _directory: &Path, _script: &str) -> Result<(), LaunchError> {
            Ok(())
        }
    }

    fn editor() -> EditorState {
        EditorState::new(EditorConfig::default()).with_launcher(Arc::new(NoLaunch))
    }

    #[test]
    fn test_editing_does_not_simulate() {
        let mut editor = editor();
        let player = editor.scene().find_by_name("PlayerCube").unwrap();
        editor.tick(RawInput::default(), 0.1);
        assert_relative_eq!(editor.scene().get(player).unwrap().transform.position.y, 4.0);
    }

    #[test]
    fn test_playing_applies_gravity_until_paused() {
        let mut editor = editor();
        let player = editor.scene().find_by_name("PlayerCube").unwrap();

        editor.toggle_play();
        editor.tick(RawInput::default(), 0.1);
        let y = editor.scene().get(player).unwrap().transform.position.y;
        assert_relative_eq!(y, 4.0 - 0.98, epsilon = 1e-5);

        editor.toggle_pause();
        editor.tick(RawInput::default(), 0.1);
        assert_relative_eq!(editor.scene().get(player).unwrap().transform.position.y, y);
    }

    #[test]
    fn test_pause_requires_play() {
        let mut editor = editor();
        editor.toggle_pause();
        assert!(!editor.is_paused());
        editor.toggle_play();
        editor.toggle_pause();
        assert!(editor.is_paused());
        editor.toggle_play();
        assert!(!editor.is_playing() && !editor.is_paused());
    }

    #[test]
    fn test_function_keys_toggle_modes() {
        let mut editor = editor();
        editor.tick(RawInput::default().with_key(KeyCode::F1).with_key(KeyCode::F2), 0.016);
        assert!(!editor.is_editor_mode());
        assert!(!editor.shows_colliders());
        assert_eq!(editor.viewport(), Viewport::full(1600, 900));

        // Held keys do not toggle again.
        editor.tick(RawInput::default().with_key(KeyCode::F1), 0.016);
        assert!(!editor.is_editor_mode());
    }

    #[test]
    fn test_click_selects_entity_under_pointer() {
        let mut editor = editor();
        let viewport = editor.viewport();
        let center = (viewport.x + viewport.width / 2.0, viewport.y + viewport.height / 2.0);

        // Pitch down slightly so the center ray runs into the player cube.
        editor.scene_mut().camera.rotation.x = -0.1;
        let aspect = viewport.aspect_ratio();
        editor.scene_mut().camera.recompute(aspect);

        editor.tick(RawInput::default().with_pointer(center.0, center.1).with_button(MouseButton::Left), 0.016);
        assert_eq!(editor.selected_entity_name(), Some("PlayerCube"));
    }

    #[test]
    fn test_click_outside_viewport_is_ignored() {
        let mut editor = editor();
        editor.tick(RawInput::default().with_pointer(5.0, 5.0).with_button(MouseButton::Left), 0.016);
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn test_draw_order_in_editor_mode() {
        let mut editor = editor();
        editor.select_by_name("obstacle").unwrap();
        let mut backend = RecordingBackend::new();
        editor.draw(&mut backend);

        // Grid, three colliders, gizmo.
        let expected_lines = 42 + 3 * 12 + 3;
        assert_eq!(backend.line_count(), expected_lines);
        assert_eq!(backend.meshes().count(), 3);
    }

    #[test]
    fn test_export_request_snapshots_scene() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = EditorConfig::default();
        config.export.export_root = Some(dir.path().to_path_buf());
        config.export.launch_build = false;
        let mut editor = EditorState::new(config).with_launcher(Arc::new(NoLaunch));

        assert!(editor.request_export(TargetPlatform::Desktop));
        editor.scene_mut().add(crate::ecs::Entity::new("AddedAfterDispatch"));

        match editor.wait_for_export() {
            JobState::Finished { output_dir, .. } => {
                let runtime = std::fs::read_to_string(output_dir.join("src/main.rs")).unwrap();
                assert!(runtime.contains("\"Obstacle\""));
                assert!(!runtime.contains("AddedAfterDispatch"));
            }
            other => panic!("unexpected state {other:?}"),
        }
    }
}
