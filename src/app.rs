//! Application state and controller
//!
//! All mutable session state lives in one `AppState`, owned by an
//! `AppController` that applies UI commands and pointer events and runs the
//! per-frame update. Nothing here touches the window or the GPU, so the
//! whole interaction model is testable headless.
//!
//! # Frame order
//! 1. Deferred UI actions that are due
//! 2. Camera easing toward the pointer
//! 3. Trail marker decay (throttled)
//! 4. Periodic effects of the active environment
//! 5. Tag-driven animation of the active environment

use rand::rngs::StdRng;
use rand::SeedableRng;

use liminal_core::{Animator, EnvironmentManager, World};
use liminal_input::{CursorTrail, LookAtController, PointerEvent, PointerTracker};
use liminal_math::Vec3;
use liminal_render::CursorGlow;

use crate::audio::{AudioCue, AudioSink};
use crate::config::AppConfig;
use crate::scene;
use crate::ui::{DeferredAction, DeferredQueue, MenuController, Screen, UiCommand};

/// Everything the session mutates
pub struct AppState {
    pub environments: EnvironmentManager,
    pub menu: MenuController,
    pub pointer: PointerTracker,
    pub cursor_trail: CursorTrail,
    pub camera: LookAtController,
    pub animator: Animator,
    pub deferred: DeferredQueue,
}

/// What one frame did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Deferred UI actions applied
    pub deferred_applied: usize,
    /// Periodic effects that fired
    pub effects_fired: usize,
    /// Entities an animation rule touched
    pub animated: usize,
}

/// Owns the application state and applies every mutation to it
pub struct AppController<S: AudioSink> {
    state: AppState,
    audio: S,
    sound: bool,
    collapse_delay_ms: f64,
    base_title: String,
    glow_color: [f32; 4],
    title_stats: bool,
}

impl<S: AudioSink> AppController<S> {
    /// Build the environments and initial state at time zero
    ///
    /// With `animation.seed` set, scene layout and every random draw at
    /// runtime are reproducible.
    pub fn new(config: &AppConfig, audio: S) -> Self {
        let mut rng = match config.animation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let environments = EnvironmentManager::new(scene::build_all(&mut rng));
        let animator = match config.animation.seed {
            Some(seed) => Animator::new().with_seed(seed.wrapping_add(1)),
            None => Animator::new(),
        };

        let menu = MenuController::new(&config.cursor);

        let mut pointer = PointerTracker::new(
            config.window.width,
            config.window.height,
            config.trail.capacity,
        );
        pointer.set_trail_enabled(menu.cursor_enabled());

        let cursor_trail = CursorTrail::new(config.trail.capacity)
            .with_decay(config.trail.decay)
            .with_base_blur(config.trail.base_blur)
            .with_base_opacity(config.trail.base_opacity)
            .with_throttle_ms(config.trail.throttle_ms);

        let cam = &config.camera;
        let mut camera = LookAtController::new()
            .with_eye(Vec3::from(cam.eye))
            .with_look_at(Vec3::from(cam.look_at))
            .with_easing(cam.easing)
            .with_projection(cam.fov, cam.near, cam.far);
        camera.range_x = cam.range_x;
        camera.range_y = cam.range_y;
        camera.set_aspect(pointer.viewport().aspect());

        let mut deferred = DeferredQueue::new();
        deferred.schedule(0.0, config.ui.expand_delay_ms, DeferredAction::ExpandMenu);

        log::info!(
            "Application state ready ({} environments, active: {})",
            environments.iter().count(),
            environments.active_kind()
        );

        Self {
            state: AppState {
                environments,
                menu,
                pointer,
                cursor_trail,
                camera,
                animator,
                deferred,
            },
            audio,
            sound: config.ui.sound,
            collapse_delay_ms: config.ui.collapse_delay_ms,
            base_title: config.window.title.clone(),
            glow_color: config.cursor.glow_color,
            title_stats: config.debug.title_stats,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn audio(&self) -> &S {
        &self.audio
    }

    pub fn screen(&self) -> Screen {
        self.state.menu.screen()
    }

    /// Index of the active environment
    pub fn active_index(&self) -> usize {
        self.state.environments.active_index()
    }

    pub fn active_world(&self) -> &World {
        self.state.environments.active_world()
    }

    /// Apply a menu command
    ///
    /// Returns true if any state changed.
    pub fn handle_command(&mut self, command: UiCommand) -> bool {
        match command {
            UiCommand::SelectEnvironment(index) => self.select_environment(index),
            UiCommand::ReturnToMenu => {
                self.state.menu.show_main_menu();
                self.state.camera.reset();
                self.play(AudioCue::Click);
                log::info!("Returned to main menu");
                true
            }
            UiCommand::ToggleCursorEffect => {
                let enabled = self.state.menu.toggle_cursor();
                self.state.pointer.set_trail_enabled(enabled);
                if !enabled {
                    self.state.cursor_trail.hide_all();
                }
                self.play(AudioCue::Click);
                log::info!("Cursor effect {}", if enabled { "enabled" } else { "disabled" });
                true
            }
            UiCommand::SetCursorEffectSize(size) => {
                let previous = self.state.menu.cursor_size();
                previous != self.state.menu.set_cursor_size(size)
            }
            UiCommand::ToggleMenu => {
                self.state.menu.toggle_expanded();
                self.play(AudioCue::Click);
                true
            }
        }
    }

    fn select_environment(&mut self, index: usize) -> bool {
        let entering = self.state.menu.screen() == Screen::MainMenu;
        let changed = match self.state.environments.activate(index) {
            Ok(changed) => changed,
            Err(e) => {
                log::warn!("Ignoring environment selection: {}", e);
                return false;
            }
        };
        if !entering && !changed {
            return false;
        }

        if entering {
            self.state.menu.enter_environment();
            self.state.pointer.reset_interaction();
        }
        self.state.pointer.clear_trail();
        self.state.cursor_trail.hide_all();
        self.play(AudioCue::Switch);
        true
    }

    /// Apply a pointer event at `now_ms`
    pub fn pointer_event(&mut self, event: PointerEvent, now_ms: f64) {
        match event {
            PointerEvent::Moved { x, y } => self.record_pointer(x, y, now_ms),
            PointerEvent::Pressed { at } => {
                if let Some((x, y)) = at {
                    self.record_pointer(x, y, now_ms);
                }
                self.state.pointer.set_pressed(true);
                self.play(AudioCue::Click);
            }
            PointerEvent::Released => self.state.pointer.set_pressed(false),
        }
    }

    fn record_pointer(&mut self, x: f32, y: f32, now_ms: f64) {
        if self.state.pointer.record_pointer(x, y, now_ms) {
            self.state.deferred.schedule(
                now_ms,
                self.collapse_delay_ms,
                DeferredAction::CollapseMenuIfExpanded,
            );
        }
    }

    /// Track a new window size in physical pixels
    ///
    /// Zero sizes (a minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.state.pointer.resize(width, height);
        self.state.camera.set_aspect(self.state.pointer.viewport().aspect());
    }

    /// Run one frame's worth of updates at `now_ms` since startup
    pub fn frame(&mut self, now_ms: f64) -> FrameStats {
        let state = &mut self.state;

        let due = state.deferred.drain_due(now_ms);
        for action in &due {
            state.menu.apply_deferred(*action);
        }

        let (px, py) = state.pointer.normalized();
        state.camera.update(px, py);

        state
            .cursor_trail
            .update(now_ms, state.pointer.trail(), state.menu.cursor_size());

        let env = state.environments.active_mut();
        let effects_fired = env.advance_effects(now_ms, state.animator.rng_mut());
        let animated = state.animator.animate(env, (now_ms / 1000.0) as f32);

        FrameStats {
            deferred_applied: due.len(),
            effects_fired,
            animated,
        }
    }

    /// True if the active world changed since the last call; clears the flags
    pub fn take_scene_dirty(&mut self) -> bool {
        let world = &mut self.state.environments.active_mut().world;
        let dirty = world.has_dirty_entities();
        world.clear_all_dirty();
        dirty
    }

    /// The glow under the pointer, if the effect is on and the pointer has moved
    pub fn cursor_glow(&self) -> Option<CursorGlow> {
        if !self.state.menu.cursor_enabled() {
            return None;
        }
        self.state.pointer.last_client().map(|(x, y)| CursorGlow {
            x,
            y,
            size: self.state.menu.cursor_size(),
            color: self.glow_color,
        })
    }

    /// Window title mirroring the menu state
    pub fn title(&self) -> String {
        let menu = &self.state.menu;
        let mut title = match menu.screen() {
            Screen::MainMenu => format!(
                "{} - Main menu [1/2/3 to enter, Esc to quit]",
                self.base_title
            ),
            Screen::InEnvironment => format!(
                "{} - {} [Esc for menu]",
                self.base_title,
                self.state.environments.active_kind()
            ),
        };

        let cursor = if menu.cursor_enabled() {
            format!("cursor {:.0}px", menu.cursor_size())
        } else {
            "cursor off".to_string()
        };
        title.push_str(&format!(" | {}", cursor));
        if menu.is_expanded() {
            title.push_str(" | menu open");
        }
        if self.title_stats {
            title.push_str(&format!(
                " | {} objects",
                self.state.environments.active_world().entity_count()
            ));
        }
        title
    }

    fn play(&mut self, cue: AudioCue) {
        if self.sound {
            self.audio.play(cue);
        }
    }
}
