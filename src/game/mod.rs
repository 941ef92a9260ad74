// Game module - the per-frame update/draw loop
//
// This module contains:
// - mod.rs: Game, which owns the jellyfish list and drives update/draw
// - state.rs: GameState, score/automation/debounce bookkeeping

pub mod state;

pub use state::GameState;

use crate::config::{GameConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::jellyfish::Jellyfish;
use crate::surface::{Clock, DrawSurface, InputSurface, SpriteSize, SystemClock};
use crate::text::{GLYPH_HEIGHT, TEXT_SCALE};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sdl2::pixels::Color;
use std::collections::VecDeque;

/// Gap between the score line and the bottom/left screen edges
const SCORE_MARGIN: i32 = 5;

/// How often (in frames) the debug overlay logs its frame count
const DEBUG_LOG_INTERVAL: u64 = 600;

/// The whole game: jellyfish, score, and automation
///
/// Driven by the frame loop calling [`Game::update`] then [`Game::draw`]
/// once per frame.
pub struct Game {
    config: GameConfig,
    sprite: SpriteSize,
    state: GameState,
    /// Oldest first. Only the front is ever removed (see `draw`).
    jellyfishes: VecDeque<Jellyfish>,
    rng: StdRng,
    clock: Box<dyn Clock>,
    debug_frames: u64,
}

impl Game {
    pub fn new(config: GameConfig, sprite: SpriteSize) -> Self {
        Self::with_parts(config, sprite, StdRng::from_entropy(), Box::new(SystemClock))
    }

    /// Creates a game with an explicit random source and clock
    pub fn with_parts(
        config: GameConfig,
        sprite: SpriteSize,
        rng: StdRng,
        clock: Box<dyn Clock>,
    ) -> Self {
        let state = GameState::new(clock.current_second());
        Game {
            config,
            sprite,
            state,
            jellyfishes: VecDeque::new(),
            rng,
            clock,
            debug_frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn jellyfishes(&self) -> &VecDeque<Jellyfish> {
        &self.jellyfishes
    }

    /// Logical screen size, independent of the real window size
    pub fn layout(&self) -> (u32, u32) {
        (SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    /// Advance game rules by one frame
    ///
    /// Order matters: the automation check runs before this frame's click is
    /// counted, so crossing the threshold takes effect on the next update.
    pub fn update<I: InputSurface + ?Sized>(&mut self, input: &I) {
        let threshold = self.config.automation_threshold;
        if self.state.try_enable_automation(threshold, self.config.automation_increment) {
            info!(
                "Automation enabled at score {:.0} ({} per second)",
                self.state.score, self.state.automation_rate
            );
        }

        if self.state.register_press(input.is_primary_pressed()) {
            self.spawn();
        }

        if self.state.take_tick(self.clock.current_second()) {
            for _ in 0..self.state.automation_rate {
                self.spawn();
            }
        }
    }

    /// Render the frame, moving jellyfish as a side effect
    ///
    /// Cleanup is lazy: at most one deleted jellyfish is dropped per frame,
    /// and only when it sits at the front of the list. Deleted ones further
    /// back are skipped until they reach the front.
    pub fn draw<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> Result<(), String> {
        surface.fill(self.config.background_color())?;

        if self.config.debug {
            self.debug_frames += 1;
            if self.debug_frames % DEBUG_LOG_INTERVAL == 0 {
                debug!(
                    "frame {}: score {:.0}, {} jellyfish",
                    self.debug_frames,
                    self.state.score,
                    self.jellyfishes.len()
                );
            }
            let overlay = format!("score: {:.0}", self.state.score);
            surface.draw_text(&overlay, 0, 0, Color::RGB(0, 0, 0))?;
        }

        if self.jellyfishes.front().is_some_and(|j| j.deleted) {
            self.jellyfishes.pop_front();
        }

        let screen_height = SCREEN_HEIGHT as f64;
        for jellyfish in self.jellyfishes.iter_mut().filter(|j| !j.deleted) {
            // Marked now, still moved and drawn this frame
            if jellyfish.is_below(screen_height) {
                jellyfish.deleted = true;
            }
            jellyfish.fall();
            surface.draw_sprite(jellyfish.placement(self.sprite))?;
        }

        let text_y = SCREEN_HEIGHT as i32 - SCORE_MARGIN - (GLYPH_HEIGHT * TEXT_SCALE) as i32;
        surface.draw_text(
            &format!("Score: {:.0}", self.state.score),
            SCORE_MARGIN,
            text_y,
            Color::RGB(0, 0, 0),
        )?;

        Ok(())
    }

    fn spawn(&mut self) {
        let jellyfish = Jellyfish::spawn(&mut self.rng, &self.config);
        self.jellyfishes.push_back(jellyfish);
        self.state.record_spawn();
    }
}
