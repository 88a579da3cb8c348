//! Canvas state and the per-frame particle render loop
//!
//! [`CanvasState`] owns everything the canvas screen mutates: cursor,
//! active particles and the RNG used for bursts. [`render_frame`] is the
//! frame callback: it clears the surface, draws the cursor marker, ticks and
//! draws every particle, then drops the expired ones.
//!
//! # Example
//! ```ignore
//! let mut canvas = CanvasState::new(600.0, 600.0, CanvasSettings::default());
//! canvas.pointer_clicked(Vec2::new(50.0, 50.0), 1);
//!
//! let mut list = DrawList::new(600.0, 600.0);
//! let stats = render_frame(&mut canvas, &mut list);
//! ```

use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::SeedableRng;
use sparkle_math::{Color, Rect, Vec2};

use crate::cursor::{CursorState, CLICK_HINT, IDLE_HINT};
use crate::draw::{DrawSurface, TextAlign};
use crate::particle::ParticleSet;
use crate::spawn::BurstSpawn;

/// Tunables for a canvas
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasSettings {
    /// Burst spawned on each single click
    pub burst: BurstSpawn,
    /// Edge length of a particle square
    pub particle_size: f32,
    /// Diameter of the cursor marker
    pub marker_size: f32,
    /// Vertical distance from the cursor to the hint baseline
    pub hint_offset: f32,
    pub idle_hint: String,
    pub click_hint: String,
    /// Cap on active particles; `None` = unbounded
    pub max_particles: Option<NonZeroUsize>,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Color of the marker and hint text
    pub ink: Color,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            burst: BurstSpawn::default(),
            particle_size: 3.0,
            marker_size: 4.0,
            hint_offset: 30.0,
            idle_hint: IDLE_HINT.to_string(),
            click_hint: CLICK_HINT.to_string(),
            max_particles: None,
            seed: None,
            ink: Color::BLACK,
        }
    }
}

/// Per-frame statistics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Particles ticked and drawn this frame
    pub drawn: usize,
    /// Particles removed at the end of the frame
    pub expired: usize,
}

/// Mutable state of the canvas screen
pub struct CanvasState {
    settings: CanvasSettings,
    bounds: Rect,
    cursor: CursorState,
    particles: ParticleSet,
    rng: StdRng,
}

impl CanvasState {
    /// Create a canvas of the given size
    pub fn new(width: f32, height: f32, settings: CanvasSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            cursor: CursorState::new(settings.idle_hint.clone()),
            particles: ParticleSet::with_limit(settings.max_particles),
            bounds: Rect::from_size(width, height),
            settings,
            rng,
        }
    }

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    /// Canvas area in canvas-local coordinates
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Pointer moved to `position` (canvas-local)
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.cursor.move_to(position);
    }

    /// Pointer clicked at `position` (canvas-local)
    ///
    /// Only a single click inside the canvas spawns a burst; anything else
    /// just moves the cursor. Returns the number of particles spawned.
    pub fn pointer_clicked(&mut self, position: Vec2, clicks: u32) -> usize {
        self.cursor.move_to(position);
        if clicks != 1 || !self.bounds.contains(position) {
            return 0;
        }

        self.cursor.set_hint(self.settings.click_hint.clone());
        let burst = self.settings.burst.spawn(position, &mut self.rng);
        let spawned = burst.len();
        let evicted = self.particles.extend(burst);
        log::debug!(
            "Burst of {} particles at ({:.1}, {:.1}), {} active, {} evicted",
            spawned,
            position.x,
            position.y,
            self.particles.len(),
            evicted
        );
        spawned
    }

    /// Remove every particle
    pub fn clear_particles(&mut self) {
        self.particles.clear();
    }
}

/// Run one frame of the canvas: clear, draw cursor, tick and draw particles,
/// remove expired particles
pub fn render_frame<S: DrawSurface + ?Sized>(state: &mut CanvasState, surface: &mut S) -> FrameStats {
    surface.clear();

    let settings = &state.settings;
    let p = state.cursor.position();
    if surface.bounds().contains(p) {
        let marker = Rect::new(p.x, p.y, settings.marker_size, settings.marker_size);
        surface.fill_oval(marker, settings.ink);
        surface.fill_text(
            state.cursor.hint(),
            Vec2::new(p.x, p.y + settings.hint_offset),
            settings.ink,
            TextAlign::Left,
        );
    }

    let mut drawn = 0;
    for particle in state.particles.iter_mut() {
        particle.tick();
        surface.fill_rect(particle.bounds(settings.particle_size), particle.color);
        drawn += 1;
    }

    let expired = state.particles.remove_expired();
    FrameStats { drawn, expired }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawCommand, DrawList};

    fn seeded_settings() -> CanvasSettings {
        CanvasSettings {
            seed: Some(1234),
            ..CanvasSettings::default()
        }
    }

    fn make_canvas() -> CanvasState {
        CanvasState::new(600.0, 600.0, seeded_settings())
    }

    fn count_rects(list: &DrawList) -> usize {
        list.commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count()
    }

    #[test]
    fn test_single_click_spawns_burst() {
        let mut canvas = make_canvas();
        assert_eq!(canvas.pointer_clicked(Vec2::new(50.0, 50.0), 1), 100);
        assert_eq!(canvas.particle_count(), 100);
        assert_eq!(canvas.cursor().hint(), "Pretty cool eh?!");
    }

    #[test]
    fn test_double_click_does_not_spawn() {
        let mut canvas = make_canvas();
        assert_eq!(canvas.pointer_clicked(Vec2::new(50.0, 50.0), 2), 0);
        assert_eq!(canvas.particle_count(), 0);
        assert_eq!(canvas.cursor().position(), Vec2::new(50.0, 50.0));
        assert_eq!(canvas.cursor().hint(), "Try clicking!");
    }

    #[test]
    fn test_click_outside_does_not_spawn() {
        let mut canvas = make_canvas();
        assert_eq!(canvas.pointer_clicked(Vec2::new(700.0, 50.0), 1), 0);
        assert_eq!(canvas.particle_count(), 0);
    }

    #[test]
    fn test_move_updates_cursor_only() {
        let mut canvas = make_canvas();
        canvas.pointer_moved(Vec2::new(10.0, 20.0));
        assert_eq!(canvas.cursor().position(), Vec2::new(10.0, 20.0));
        assert_eq!(canvas.particle_count(), 0);
    }

    #[test]
    fn test_first_frame_draws_cursor_at_origin() {
        let mut canvas = make_canvas();
        let mut list = DrawList::new(600.0, 600.0);
        render_frame(&mut canvas, &mut list);
        assert_eq!(
            list.commands(),
            &[
                DrawCommand::Clear,
                DrawCommand::FillOval {
                    rect: Rect::new(0.0, 0.0, 4.0, 4.0),
                    color: Color::BLACK
                },
                DrawCommand::FillText {
                    text: "Try clicking!".to_string(),
                    position: Vec2::new(0.0, 30.0),
                    color: Color::BLACK,
                    align: TextAlign::Left,
                },
            ]
        );
    }

    #[test]
    fn test_cursor_marker_and_hint() {
        let mut canvas = make_canvas();
        canvas.pointer_moved(Vec2::new(100.0, 120.0));
        let mut list = DrawList::new(600.0, 600.0);
        render_frame(&mut canvas, &mut list);

        assert_eq!(
            list.commands()[1],
            DrawCommand::FillOval {
                rect: Rect::new(100.0, 120.0, 4.0, 4.0),
                color: Color::BLACK
            }
        );
        assert_eq!(
            list.commands()[2],
            DrawCommand::FillText {
                text: "Try clicking!".to_string(),
                position: Vec2::new(100.0, 150.0),
                color: Color::BLACK,
                align: TextAlign::Left,
            }
        );
    }

    #[test]
    fn test_cursor_outside_bounds_not_drawn() {
        let mut canvas = make_canvas();
        canvas.pointer_moved(Vec2::new(-5.0, 10.0));
        let mut list = DrawList::new(600.0, 600.0);
        render_frame(&mut canvas, &mut list);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_each_particle_drawn_once_per_frame() {
        let mut canvas = make_canvas();
        canvas.pointer_clicked(Vec2::new(50.0, 50.0), 1);
        let mut list = DrawList::new(600.0, 600.0);
        let stats = render_frame(&mut canvas, &mut list);
        assert_eq!(stats, FrameStats { drawn: 100, expired: 0 });
        assert_eq!(count_rects(&list), 100);
    }

    #[test]
    fn test_position_advances_by_velocity() {
        let mut canvas = make_canvas();
        canvas.pointer_clicked(Vec2::new(50.0, 50.0), 1);
        let before: Vec<_> = canvas.particles().iter().map(|p| (p.position, p.velocity)).collect();

        let mut list = DrawList::new(600.0, 600.0);
        render_frame(&mut canvas, &mut list);

        for ((pos, vel), p) in before.iter().zip(canvas.particles().iter()) {
            assert_eq!(p.position, *pos + *vel);
            assert_eq!(p.velocity, *vel);
        }
    }

    #[test]
    fn test_particles_drawn_with_fading_alpha() {
        let mut canvas = make_canvas();
        canvas.pointer_clicked(Vec2::new(50.0, 50.0), 1);
        let mut list = DrawList::new(600.0, 600.0);
        render_frame(&mut canvas, &mut list);

        for command in list.commands() {
            if let DrawCommand::FillRect { rect, color } = command {
                assert_eq!(rect.width, 3.0);
                assert!((color.a - 179.0 / 180.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_burst_expires_after_lifetime() {
        let mut canvas = make_canvas();
        canvas.pointer_clicked(Vec2::new(50.0, 50.0), 1);
        let mut list = DrawList::new(600.0, 600.0);

        for _ in 0..179 {
            let stats = render_frame(&mut canvas, &mut list);
            assert_eq!(stats.expired, 0);
        }
        assert_eq!(canvas.particle_count(), 100);

        let stats = render_frame(&mut canvas, &mut list);
        assert_eq!(stats, FrameStats { drawn: 100, expired: 100 });
        assert_eq!(canvas.particle_count(), 0);
    }

    #[test]
    fn test_max_particles_caps_active_set() {
        let settings = CanvasSettings {
            max_particles: NonZeroUsize::new(150),
            ..seeded_settings()
        };
        let mut canvas = CanvasState::new(600.0, 600.0, settings);
        canvas.pointer_clicked(Vec2::new(50.0, 50.0), 1);
        canvas.pointer_clicked(Vec2::new(60.0, 60.0), 1);
        assert_eq!(canvas.particle_count(), 150);
    }

    #[test]
    fn test_seeded_canvases_match() {
        let mut a = make_canvas();
        let mut b = make_canvas();
        a.pointer_clicked(Vec2::new(5.0, 5.0), 1);
        b.pointer_clicked(Vec2::new(5.0, 5.0), 1);
        let va: Vec<_> = a.particles().iter().map(|p| p.velocity).collect();
        let vb: Vec<_> = b.particles().iter().map(|p| p.velocity).collect();
        assert_eq!(va, vb);
    }

    #[test]
    fn test_clear_particles() {
        let mut canvas = make_canvas();
        canvas.pointer_clicked(Vec2::new(50.0, 50.0), 1);
        canvas.clear_particles();
        assert_eq!(canvas.particle_count(), 0);
    }
}
