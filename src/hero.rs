//! Featured product in the hero section: mouse tilt, float and the bubbles
//! hovering around it.

use raylib::prelude::*;

use crate::catalog::Product;
use crate::constants::*;
use crate::particles::Bubble;
use crate::texture_loader::fit_scale;
use crate::theme::{ACCENT, TEXT, with_opacity};
use crate::typography::draw_label;

const BUBBLE_FILL: Color = Color { r: 6, g: 182, b: 212, a: 255 };
const GLOW_PERIOD: f32 = 4.0;

/// Tilt in degrees for a pointer at `offset` from the product center.
///
/// `x` tips the product back and forth (pointer below the center tilts the
/// top away), `y` turns it left and right. Both saturate at
/// `HERO_TILT_MAX` once the pointer is `HERO_TILT_REACH` pixels out.
pub fn tilt_for(offset: Vector2) -> Vector2 {
    let map = |v: f32| (v / HERO_TILT_REACH).clamp(-1.0, 1.0) * HERO_TILT_MAX;
    Vector2::new(-map(offset.y), map(offset.x))
}

/// How a tilted product is flattened onto the screen.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Projection {
    pub scale_x: f32,
    pub scale_y: f32,
    pub shift: Vector2,
}

pub fn project(tilt: Vector2) -> Projection {
    let (rx, ry) = (tilt.x.to_radians(), tilt.y.to_radians());
    Projection {
        scale_x: ry.cos(),
        scale_y: rx.cos(),
        shift: Vector2::new(ry.sin() * HERO_TILT_DEPTH, -rx.sin() * HERO_TILT_DEPTH),
    }
}

/// Pointer-driven tilt that eases back to rest when the pointer leaves.
#[derive(Debug, Clone, Copy)]
pub struct HeroTilt {
    angles: Vector2,
    release: Option<(f32, Vector2)>, // (elapsed, angles when the pointer left)
}

impl Default for HeroTilt {
    fn default() -> Self {
        Self {
            angles: Vector2::new(0.0, 0.0),
            release: None,
        }
    }
}

impl HeroTilt {
    pub fn angles(&self) -> Vector2 {
        self.angles
    }

    /// `Some(offset)` while the pointer is over the product area.
    pub fn track(&mut self, offset: Option<Vector2>) {
        match offset {
            Some(offset) => {
                self.angles = tilt_for(offset);
                self.release = None;
            }
            None => {
                let at_rest = self.angles.x == 0.0 && self.angles.y == 0.0;
                if self.release.is_none() && !at_rest {
                    self.release = Some((0.0, self.angles));
                }
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        let Some((elapsed, from)) = self.release else {
            return;
        };

        let elapsed = elapsed + dt;
        if elapsed >= HERO_TILT_RELEASE {
            self.angles = Vector2::new(0.0, 0.0);
            self.release = None;
            return;
        }

        let k = 1.0 - ease::cubic_out(elapsed / HERO_TILT_RELEASE, 0.0, 1.0, 1.0);
        self.angles = Vector2::new(from.x * k, from.y * k);
        self.release = Some((elapsed, from));
    }
}

pub struct Hero {
    tilt: HeroTilt,
    bubbles: Vec<Bubble>,
    clock: f32,
}

impl Hero {
    pub fn new() -> Self {
        let mut rng = rand::rng();
        Self {
            tilt: HeroTilt::default(),
            bubbles: (0..HERO_BUBBLE_COUNT).map(|_| Bubble::bobbing(&mut rng)).collect(),
            clock: 0.0,
        }
    }

    #[cfg(test)]
    pub fn tilt(&self) -> &HeroTilt {
        &self.tilt
    }

    /// Follow the pointer while it is inside the stage centered on `center`.
    pub fn track_pointer(&mut self, center: Vector2, pointer: Vector2) {
        let offset = Vector2::new(pointer.x - center.x, pointer.y - center.y);
        let half = HERO_STAGE * 0.5;
        let inside = offset.x.abs() <= half && offset.y.abs() <= half;
        self.tilt.track(inside.then_some(offset));
    }

    pub fn update(&mut self, dt: f32) {
        self.clock = (self.clock + dt) % GLOW_PERIOD;
        self.tilt.update(dt);
        for bubble in self.bubbles.iter_mut() {
            bubble.update(dt);
        }
    }

    pub fn draw(
        &self,
        d: &mut RaylibDrawHandle,
        font: Option<&Font>,
        center: Vector2,
        texture: Option<&Texture2D>,
        product: &Product,
        alpha: f32,
    ) {
        let projection = project(self.tilt.angles());
        let product_center = Vector2::new(center.x + projection.shift.x, center.y + projection.shift.y);

        // Pulsing glow behind the product
        let pulse = 0.3 + 0.1 * (self.clock / GLOW_PERIOD * std::f32::consts::TAU).cos();
        d.draw_circle_gradient(
            product_center.x as i32,
            product_center.y as i32,
            HERO_IMAGE_BOX * 0.5 + 32.0,
            with_opacity(ACCENT, pulse * alpha),
            with_opacity(ACCENT, 0.0),
        );

        match texture {
            Some(texture) => {
                let (width, height) = (texture.width() as f32, texture.height() as f32);
                let scale = fit_scale(width, height, HERO_IMAGE_BOX, HERO_IMAGE_BOX);
                let dest_width = width * scale * projection.scale_x;
                let dest_height = height * scale * projection.scale_y;
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, width, height),
                    Rectangle::new(product_center.x, product_center.y, dest_width, dest_height),
                    Vector2::new(dest_width * 0.5, dest_height * 0.5),
                    0.0,
                    with_opacity(Color::WHITE, alpha),
                );
            }
            None => {
                d.draw_ellipse(
                    product_center.x as i32,
                    product_center.y as i32,
                    90.0 * projection.scale_x,
                    90.0 * projection.scale_y,
                    with_opacity(product.color, 0.7 * alpha),
                );
                draw_label(
                    d,
                    font,
                    &product.name,
                    product_center.x - 70.0,
                    product_center.y + 110.0,
                    24.0,
                    with_opacity(TEXT, alpha),
                );
            }
        }

        // Bubbles sit nearer than the product, so they shift half as far
        for bubble in self.bubbles.iter() {
            let x = center.x + projection.shift.x * 0.5 + bubble.offset_x;
            let y = center.y + projection.shift.y * 0.5 + bubble.offset_y - bubble.rise();
            let radius = bubble.size * bubble.scale() * 0.5;
            d.draw_circle(x as i32, y as i32, radius, with_opacity(BUBBLE_FILL, 0.2 * bubble.opacity() * alpha));
            d.draw_circle_lines(x as i32, y as i32, radius, with_opacity(BUBBLE_FILL, 0.3 * bubble.opacity() * alpha));
        }
    }
}
