//! Screen layout, hit-testing and drawing of the product carousel.

use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::catalog::{Catalog, Product};
use crate::theme::{ACCENT, TEXT, with_opacity};
use crate::texture_loader::fit_scale;
use crate::typography::draw_label;

const BUTTON_RADIUS: f32 = 24.0;
const BUTTON_INSET: f32 = 16.0;
const MARKER_RADIUS: f32 = 6.0;
const MARKER_GAP: f32 = 8.0;
const MARKER_MARGIN: f32 = 32.0;
const IMAGE_BOX: f32 = 300.0;
const CARD_PADDING: f32 = 48.0;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselAction {
    Previous,
    Next,
    Select(usize),
}

impl CarouselAction {
    pub fn apply(self, carousel: &mut Carousel) {
        match self {
            CarouselAction::Previous => carousel.previous(),
            CarouselAction::Next => carousel.next(),
            CarouselAction::Select(index) => {
                if let Err(e) = carousel.select(index) {
                    log::error!("Ignoring carousel selection: {}", e);
                }
            }
        }
    }
}

fn within(center: Vector2, radius: f32, point: Vector2) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx * dx + dy * dy <= radius * radius
}

/// Screen-space geometry of the carousel card, its arrow buttons and the
/// pagination markers below it.
#[derive(Debug, Clone)]
pub struct CarouselLayout {
    pub card: Rectangle,
    pub previous_button: Vector2,
    pub next_button: Vector2,
    pub markers: Vec<Vector2>,
}

impl CarouselLayout {
    pub fn new(card: Rectangle, count: usize) -> Self {
        let center_y = card.y + card.height * 0.5;

        let stride = MARKER_RADIUS * 2.0 + MARKER_GAP;
        let row_width = count as f32 * stride - MARKER_GAP;
        let first_x = card.x + (card.width - row_width) * 0.5 + MARKER_RADIUS;
        let marker_y = card.y + card.height + MARKER_MARGIN + MARKER_RADIUS;

        Self {
            card,
            previous_button: Vector2::new(card.x + BUTTON_INSET + BUTTON_RADIUS, center_y),
            next_button: Vector2::new(card.x + card.width - BUTTON_INSET - BUTTON_RADIUS, center_y),
            markers: (0..count)
                .map(|i| Vector2::new(first_x + i as f32 * stride, marker_y))
                .collect(),
        }
    }

    pub fn hit_test(&self, point: Vector2) -> Option<CarouselAction> {
        if within(self.previous_button, BUTTON_RADIUS, point) {
            return Some(CarouselAction::Previous);
        }
        if within(self.next_button, BUTTON_RADIUS, point) {
            return Some(CarouselAction::Next);
        }
        self.markers
            .iter()
            .position(|&marker| within(marker, MARKER_RADIUS, point))
            .map(CarouselAction::Select)
    }
}

pub fn draw_carousel(
    d: &mut RaylibDrawHandle,
    font: Option<&Font>,
    layout: &CarouselLayout,
    carousel: &Carousel,
    catalog: &Catalog,
    images: &[Option<Texture2D>],
    alpha: f32,
) {
    let panel = carousel.panel();
    let Some(product) = catalog.get(panel.index) else {
        return;
    };
    let card = layout.card;

    // Card and accent glow of the displayed product
    d.draw_rectangle_rounded(card, 0.1, 16, with_opacity(TEXT, 0.05 * alpha));
    d.draw_circle_gradient(
        (card.x + card.width * 0.5) as i32,
        (card.y + card.height * 0.5) as i32,
        card.width.min(card.height) * 0.5,
        with_opacity(product.color, 0.2 * alpha),
        with_opacity(product.color, 0.0),
    );

    // Image and text share the panel offset and opacity
    let panel_alpha = panel.opacity * alpha;
    let half = card.width * 0.5;
    let image_center = Vector2::new(card.x + half * 0.5 + panel.offset, card.y + card.height * 0.5);
    draw_product_image(d, font, product, images.get(panel.index).and_then(Option::as_ref), image_center, panel_alpha);
    draw_product_text(d, font, product, card.x + half + panel.offset, card.y + CARD_PADDING, panel_alpha);

    // Arrow buttons
    for (center, label) in [(layout.previous_button, "<"), (layout.next_button, ">")] {
        d.draw_circle_v(center, BUTTON_RADIUS, with_opacity(TEXT, 0.1 * alpha));
        d.draw_circle_lines(center.x as i32, center.y as i32, BUTTON_RADIUS, with_opacity(TEXT, 0.2 * alpha));
        draw_label(d, font, label, center.x - 6.0, center.y - 12.0, 24.0, with_opacity(TEXT, alpha));
    }

    // Pagination markers
    for (i, marker) in layout.markers.iter().enumerate() {
        let color = if i == carousel.active_index() {
            with_opacity(ACCENT, alpha)
        } else {
            with_opacity(TEXT, 0.3 * alpha)
        };
        d.draw_circle_v(*marker, MARKER_RADIUS, color);
    }
}

fn draw_product_image(
    d: &mut RaylibDrawHandle,
    font: Option<&Font>,
    product: &Product,
    texture: Option<&Texture2D>,
    center: Vector2,
    alpha: f32,
) {
    d.draw_circle_gradient(
        center.x as i32,
        center.y as i32,
        IMAGE_BOX * 0.5 + 16.0,
        with_opacity(product.color, 0.25 * alpha),
        with_opacity(product.color, 0.0),
    );

    match texture {
        Some(texture) => {
            let tex_width = texture.width() as f32;
            let tex_height = texture.height() as f32;
            let scale = fit_scale(tex_width, tex_height, IMAGE_BOX, IMAGE_BOX);

            d.draw_texture_ex(
                texture,
                Vector2::new(center.x - tex_width * scale * 0.5, center.y - tex_height * scale * 0.5),
                0.0,
                scale,
                with_opacity(Color::WHITE, alpha),
            );
        }
        None => {
            // Placeholder: accent disc with the product initial
            d.draw_circle_v(center, IMAGE_BOX * 0.3, with_opacity(product.color, 0.6 * alpha));
            let initial: String = product.name.chars().take(1).collect();
            draw_label(d, font, &initial, center.x - 20.0, center.y - 32.0, 64.0, with_opacity(TEXT, alpha));
        }
    }
}

fn draw_product_text(d: &mut RaylibDrawHandle, font: Option<&Font>, product: &Product, x: f32, y: f32, alpha: f32) {
    let mut y = y;

    draw_label(d, font, "Produto Pratt", x, y, 18.0, with_opacity(product.color, alpha));
    y += 36.0;
    draw_label(d, font, &product.name, x, y, 40.0, with_opacity(TEXT, alpha));
    y += 56.0;
    draw_label(d, font, &product.description, x, y, 20.0, with_opacity(TEXT, 0.8 * alpha));
    y += 48.0;

    // Two-column feature grid
    for (i, feature) in product.features.iter().enumerate() {
        let fx = x + (i % 2) as f32 * 240.0;
        let fy = y + (i / 2) as f32 * 36.0;
        d.draw_circle(fx as i32 + 12, fy as i32 + 10, 12.0, with_opacity(product.color, alpha));
        draw_label(d, font, "+", fx + 7.0, fy + 1.0, 20.0, with_opacity(TEXT, alpha));
        draw_label(d, font, feature, fx + 32.0, fy + 2.0, 18.0, with_opacity(TEXT, 0.8 * alpha));
    }
    y += product.features.len().div_ceil(2) as f32 * 36.0 + 24.0;

    let button = Rectangle::new(x, y, 180.0, 48.0);
    d.draw_rectangle_rounded(button, 1.0, 16, with_opacity(ACCENT, alpha));
    draw_label(d, font, "Ver detalhes", x + 32.0, y + 14.0, 20.0, with_opacity(TEXT, alpha));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout() -> CarouselLayout {
        CarouselLayout::new(Rectangle::new(100.0, 200.0, 1000.0, 500.0), 6)
    }

    #[test]
    fn arrow_buttons_sit_on_card_edges() {
        let layout = layout();
        assert_eq!((layout.previous_button.x, layout.previous_button.y), (140.0, 450.0));
        assert_eq!((layout.next_button.x, layout.next_button.y), (1060.0, 450.0));
    }

    #[test]
    fn one_marker_per_entry_centered_below_card() {
        let layout = layout();
        assert_eq!(layout.markers.len(), 6);

        let first = layout.markers[0].x;
        let last = layout.markers[5].x;
        assert!(((first + last) * 0.5 - 600.0).abs() < 1e-3);
        assert!(layout.markers.iter().all(|m| m.y > 700.0));
    }

    #[test]
    fn hit_test_maps_points_to_actions() {
        let layout = layout();

        assert_eq!(layout.hit_test(Vector2::new(140.0, 450.0)), Some(CarouselAction::Previous));
        assert_eq!(layout.hit_test(Vector2::new(1070.0, 440.0)), Some(CarouselAction::Next));
        for (i, marker) in layout.markers.iter().enumerate() {
            assert_eq!(layout.hit_test(*marker), Some(CarouselAction::Select(i)));
        }
        assert_eq!(layout.hit_test(Vector2::new(600.0, 450.0)), None);
        assert_eq!(layout.hit_test(Vector2::new(0.0, 0.0)), None);
    }

    #[test]
    fn actions_drive_the_carousel() {
        let mut carousel = Carousel::new(6).unwrap();

        CarouselAction::Next.apply(&mut carousel);
        assert_eq!(carousel.active_index(), 1);
        CarouselAction::Previous.apply(&mut carousel);
        CarouselAction::Previous.apply(&mut carousel);
        assert_eq!(carousel.active_index(), 5);
        CarouselAction::Select(3).apply(&mut carousel);
        assert_eq!(carousel.active_index(), 3);

        // Out of range selections are logged and ignored
        CarouselAction::Select(42).apply(&mut carousel);
        assert_eq!(carousel.active_index(), 3);
    }
}
