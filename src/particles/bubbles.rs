use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;
use crate::engine::{Engine, SurfaceMode};
use crate::theme::with_opacity;

const BUBBLE_COLOR: Color = Color { r: 255, g: 255, b: 255, a: 255 };
const BUBBLE_TINT: f32 = 0.3; // Base alpha of the bubble fill, scaled by the animated opacity

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Motion {
    /// Rise once per loop while fading in then out.
    Rise,
    /// Drift up and back down, pulsing opacity and scale.
    Bob,
}

/// One looping bubble, positioned relative to an anchor point.
#[derive(Debug, Clone)]
pub struct Bubble {
    pub offset_x: f32,
    pub offset_y: f32,
    pub size: f32,
    pub duration: f32,
    pub delay: f32,

    motion: Motion,
    elapsed: f32,
    rise: f32,
    opacity: f32,
    scale: f32,
}

impl Bubble {
    fn new(index: usize) -> Self {
        let i = index as f32;
        Self {
            offset_x: (i - (BUBBLE_COUNT / 2) as f32) * BUBBLE_SPACING,
            offset_y: 0.0,
            size: (20.0 - i * 2.0).max(12.0),
            duration: 2.0 + i * 0.5,
            delay: i * 0.5,
            motion: Motion::Rise,
            elapsed: 0.0,
            rise: 0.0,
            opacity: 0.0,
            scale: 1.0,
        }
    }

    /// A bubble hovering around the hero product at a random spot.
    pub fn bobbing(rng: &mut impl Rng) -> Self {
        let reach = HERO_BUBBLE_SPREAD * 0.5;
        Self {
            offset_x: rng.random_range(-reach..reach),
            offset_y: rng.random_range(-reach..reach),
            size: rng.random_range(10.0..40.0),
            duration: rng.random_range(3.0..6.0),
            delay: rng.random_range(0.0..2.0),
            motion: Motion::Bob,
            elapsed: 0.0,
            rise: 0.0,
            opacity: HERO_BUBBLE_MIN_OPACITY,
            scale: 1.0,
        }
    }

    pub fn rise(&self) -> f32 {
        self.rise
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        let running = self.elapsed - self.delay;
        if running < 0.0 {
            return;
        }

        // Fold completed loops away so the clock stays small
        let running = running % self.duration;
        self.elapsed = self.delay + running;

        let t = running / self.duration;
        match self.motion {
            Motion::Rise => {
                self.rise = ease::cubic_out(t, 0.0, BUBBLE_RISE, 1.0);
                self.opacity = if t < 0.5 {
                    BUBBLE_PEAK_OPACITY * (t / 0.5)
                } else {
                    BUBBLE_PEAK_OPACITY * (1.0 - (t - 0.5) / 0.5)
                };
            }
            Motion::Bob => {
                let k = if t < 0.5 {
                    ease::sine_in_out(t * 2.0, 0.0, 1.0, 1.0)
                } else {
                    ease::sine_in_out((t - 0.5) * 2.0, 1.0, -1.0, 1.0)
                };
                self.rise = BUBBLE_RISE * k;
                self.opacity = HERO_BUBBLE_MIN_OPACITY + (HERO_BUBBLE_MAX_OPACITY - HERO_BUBBLE_MIN_OPACITY) * k;
                self.scale = 1.0 + 0.2 * k;
            }
        }
    }
}

/// Fixed set of looping bubbles anchored near the bottom of the viewport.
pub struct BubbleField {
    bubbles: Vec<Bubble>,
    anchor: Vector2,
}

impl BubbleField {
    pub fn new() -> Self {
        Self {
            bubbles: (0..BUBBLE_COUNT).map(Bubble::new).collect(),
            anchor: Vector2::new(0.0, 0.0),
        }
    }

    #[cfg(test)]
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    #[cfg(test)]
    pub fn anchor(&self) -> Vector2 {
        self.anchor
    }
}

impl Engine for BubbleField {
    fn resize(&mut self, width: f32, height: f32) {
        self.anchor = Vector2::new(width * 0.5, (height - BUBBLE_ANCHOR_MARGIN).max(0.0));
        self.bubbles = (0..BUBBLE_COUNT).map(Bubble::new).collect();
    }

    fn update(&mut self, dt: f32) {
        for bubble in self.bubbles.iter_mut() {
            bubble.update(dt);
        }
    }

    fn draw(&self, d: &mut SurfaceMode) {
        for bubble in self.bubbles.iter() {
            if bubble.opacity <= 0.0 {
                continue;
            }
            d.draw_circle(
                (self.anchor.x + bubble.offset_x) as i32,
                (self.anchor.y - bubble.rise) as i32,
                bubble.size * 0.5,
                with_opacity(BUBBLE_COLOR, BUBBLE_TINT * bubble.opacity),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bubble_layout_is_fixed() {
        let field = BubbleField::new();
        assert_eq!(field.bubbles().len(), BUBBLE_COUNT);

        let sizes: Vec<f32> = field.bubbles().iter().map(|b| b.size).collect();
        assert_eq!(sizes, vec![20.0, 18.0, 16.0, 14.0, 12.0, 12.0]);

        let offsets: Vec<f32> = field.bubbles().iter().map(|b| b.offset_x).collect();
        assert_eq!(offsets, vec![-45.0, -30.0, -15.0, 0.0, 15.0, 30.0]);
    }

    #[test]
    fn bubbles_wait_for_their_delay() {
        let mut field = BubbleField::new();
        field.resize(800.0, 600.0);
        field.update(0.25);

        let bubbles = field.bubbles();
        assert!(bubbles[0].opacity() > 0.0);
        assert_eq!(bubbles[1].opacity(), 0.0);
        assert_eq!(bubbles[5].rise(), 0.0);
    }

    #[test]
    fn animation_loops_within_bounds() {
        let mut field = BubbleField::new();
        field.resize(800.0, 600.0);

        for _ in 0..1_000 {
            field.update(FRAME_TIME);
            for bubble in field.bubbles() {
                assert!((0.0..=BUBBLE_PEAK_OPACITY + 1e-4).contains(&bubble.opacity()));
                assert!((0.0..=BUBBLE_RISE + 1e-3).contains(&bubble.rise()));
            }
        }
    }

    #[test]
    fn peak_opacity_at_mid_loop() {
        let mut field = BubbleField::new();
        field.resize(800.0, 600.0);
        // First bubble: no delay, 2 second loop
        field.update(1.0);
        assert!((field.bubbles()[0].opacity() - BUBBLE_PEAK_OPACITY).abs() < 1e-4);
    }

    #[test]
    fn resize_reanchors_and_restarts() {
        let mut field = BubbleField::new();
        field.resize(800.0, 600.0);
        field.update(1.0);

        field.resize(1000.0, 400.0);
        let anchor = field.anchor();
        assert_eq!((anchor.x, anchor.y), (500.0, 320.0));
        assert!(field.bubbles().iter().all(|b| b.opacity() == 0.0));
    }

    #[test]
    fn bobbing_bubbles_drift_and_return() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let mut bubble = Bubble::bobbing(&mut rng);
            assert!(bubble.offset_x.abs() <= HERO_BUBBLE_SPREAD * 0.5);
            assert!(bubble.offset_y.abs() <= HERO_BUBBLE_SPREAD * 0.5);
            assert!((10.0..40.0).contains(&bubble.size));
            assert_eq!(bubble.opacity(), HERO_BUBBLE_MIN_OPACITY);

            // Halfway through the first loop: highest, brightest, largest
            bubble.update(bubble.delay + bubble.duration * 0.5);
            assert!((bubble.rise() - BUBBLE_RISE).abs() < 1e-3);
            assert!((bubble.opacity() - HERO_BUBBLE_MAX_OPACITY).abs() < 1e-3);
            assert!((bubble.scale() - 1.2).abs() < 1e-3);

            // Back at rest when the loop closes
            bubble.update(bubble.duration * 0.5 - 1e-4);
            assert!(bubble.rise() < 1e-2);
            assert!((bubble.opacity() - HERO_BUBBLE_MIN_OPACITY).abs() < 1e-3);
        }
    }
}
