//! Page composition: hero, products, about and contact sections stacked in
//! one scrollable column.
//!
//! Sections other than the hero are revealed by the visibility observer as
//! they scroll into view. The products section hosts the carousel.

use std::cell::RefCell;
use std::rc::Rc;

use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::carousel_view::{CarouselAction, CarouselLayout, draw_carousel};
use crate::catalog::Catalog;
use crate::constants::*;
use crate::error::CarouselError;
use crate::hero::Hero;
use crate::reveal::{Reveal, TargetId, VisibilityObserver};
use crate::theme::{ACCENT, BACKGROUND_BOTTOM, BACKGROUND_MID, BACKGROUND_TOP, TEXT, with_opacity};
use crate::typography::draw_label;

const HERO_FLOAT_PERIOD: f32 = 4.0;
const HERO_FLOAT_RISE: f32 = -20.0;
const CONTENT_MARGIN: f32 = 64.0;
const HEADER_HEIGHT: f32 = 200.0;
const CARD_HEIGHT: f32 = 480.0;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SectionKind {
    Hero,
    Products,
    About,
    Contact,
}

const SECTIONS: [SectionKind; 4] = [SectionKind::Hero, SectionKind::Products, SectionKind::About, SectionKind::Contact];

struct Section {
    kind: SectionKind,
    top: f32,
    height: f32,
    target: TargetId,
    reveal: Rc<RefCell<Reveal>>,
}

/// Hero block displacement for the current scroll position.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Parallax {
    pub text_y: f32,
    pub image_y: f32,
    pub opacity: f32,
}

fn section_height(kind: SectionKind, viewport_height: f32) -> f32 {
    match kind {
        SectionKind::Hero => viewport_height,
        SectionKind::Products => viewport_height.max(HEADER_HEIGHT + CARD_HEIGHT + 160.0),
        SectionKind::About | SectionKind::Contact => (viewport_height * 0.9).max(640.0),
    }
}

/// Looping float of the hero product: up 20 px and back every 4 seconds.
pub fn hero_float(clock: f32) -> f32 {
    let phase = (clock % HERO_FLOAT_PERIOD) / HERO_FLOAT_PERIOD;
    if phase < 0.5 {
        ease::sine_in_out(phase * 2.0, 0.0, HERO_FLOAT_RISE, 1.0)
    } else {
        ease::sine_in_out((phase - 0.5) * 2.0, HERO_FLOAT_RISE, -HERO_FLOAT_RISE, 1.0)
    }
}

pub struct Page {
    catalog: Catalog,
    carousel: Carousel,
    images: Vec<Option<Texture2D>>,
    font: Option<Font>,
    hero: Hero,

    sections: Vec<Section>,
    observer: VisibilityObserver,

    width: f32,
    height: f32,
    scroll: f32,
    clock: f32,
}

impl Page {
    pub fn new(catalog: Catalog, images: Vec<Option<Texture2D>>, width: f32, height: f32) -> Result<Self, CarouselError> {
        let carousel = Carousel::new(catalog.len())?;
        let mut observer = VisibilityObserver::new(VIEWPORT_MARGIN);

        let mut sections = Vec::with_capacity(SECTIONS.len());
        let mut top = 0.0;
        for kind in SECTIONS {
            let span = section_height(kind, height);
            let target = observer.observe_target(top, span, false);
            let reveal = Rc::new(RefCell::new(Reveal::new(target)));
            observer.subscribe(reveal.clone());
            sections.push(Section { kind, top, height: span, target, reveal });
            top += span;
        }

        let mut page = Self {
            catalog,
            carousel,
            images,
            font: None,
            hero: Hero::new(),
            sections,
            observer,
            width,
            height,
            scroll: 0.0,
            clock: 0.0,
        };
        page.observer.observe(0.0, height);
        Ok(page)
    }

    /// Draw text with `font` instead of raylib's ASCII-only default.
    pub fn with_font(mut self, font: Option<Font>) -> Self {
        self.font = font;
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn page_height(&self) -> f32 {
        self.sections.iter().map(|s| s.height).sum()
    }

    pub fn max_scroll(&self) -> f32 {
        (self.page_height() - self.height).max(0.0)
    }

    pub fn section_top(&self, kind: SectionKind) -> Option<f32> {
        self.sections.iter().find(|s| s.kind == kind).map(|s| s.top)
    }

    #[cfg(test)]
    pub fn is_section_visible(&self, kind: SectionKind) -> bool {
        self.sections
            .iter()
            .find(|s| s.kind == kind)
            .is_some_and(|s| self.observer.is_visible(s.target))
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;

        let mut top = 0.0;
        for section in self.sections.iter_mut() {
            section.top = top;
            section.height = section_height(section.kind, height);
            self.observer.set_bounds(section.target, section.top, section.height);
            top += section.height;
        }
        self.scroll = self.scroll.clamp(0.0, self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll = (self.scroll + delta).clamp(0.0, self.max_scroll());
    }

    pub fn scroll_to(&mut self, kind: SectionKind) {
        if let Some(top) = self.section_top(kind) {
            self.scroll = top.clamp(0.0, self.max_scroll());
        }
    }

    pub fn parallax(&self) -> Parallax {
        let max = self.max_scroll();
        let progress = if max > 0.0 { self.scroll / max } else { 0.0 };
        let k = (progress / PARALLAX_RANGE).clamp(0.0, 1.0);

        Parallax {
            text_y: HERO_TEXT_SHIFT * k,
            image_y: HERO_IMAGE_SHIFT * k,
            opacity: 1.0 - k,
        }
    }

    /// Screen position of the featured hero product.
    pub fn hero_center(&self) -> Vector2 {
        let top = self.section_top(SectionKind::Hero).unwrap_or(0.0) - self.scroll;
        Vector2::new(
            self.width * 0.75,
            top + self.height * 0.5 + self.parallax().image_y + hero_float(self.clock),
        )
    }

    pub fn track_pointer(&mut self, pointer: Vector2) {
        let center = self.hero_center();
        self.hero.track_pointer(center, pointer);
    }

    pub fn update(&mut self, dt: f32) {
        self.clock = (self.clock + dt) % HERO_FLOAT_PERIOD;
        self.hero.update(dt);
        self.carousel.update(dt);
        self.observer.observe(self.scroll, self.height);
        for section in self.sections.iter() {
            section.reveal.borrow_mut().update(dt);
        }
    }

    fn reveal_of(&self, kind: SectionKind) -> (f32, f32) {
        self.sections
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| {
                let reveal = s.reveal.borrow();
                (reveal.opacity(), reveal.offset_y())
            })
            .unwrap_or((1.0, 0.0))
    }

    /// Carousel geometry in screen space, following scroll and reveal.
    pub fn carousel_layout(&self) -> CarouselLayout {
        let top = self.section_top(SectionKind::Products).unwrap_or(0.0);
        let (_, offset_y) = self.reveal_of(SectionKind::Products);
        let card = Rectangle::new(
            CONTENT_MARGIN,
            top - self.scroll + HEADER_HEIGHT + offset_y,
            (self.width - CONTENT_MARGIN * 2.0).max(0.0),
            CARD_HEIGHT,
        );
        CarouselLayout::new(card, self.catalog.len())
    }

    pub fn apply(&mut self, action: CarouselAction) {
        log::debug!("Carousel action {:?}", action);
        action.apply(&mut self.carousel);
    }

    /// Route a click to the carousel. Returns whether it hit anything.
    pub fn click(&mut self, point: Vector2) -> bool {
        match self.carousel_layout().hit_test(point) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    pub fn draw_backdrop(&self, d: &mut RaylibDrawHandle) {
        let half = (self.height * 0.5) as i32;
        let width = self.width as i32;
        d.draw_rectangle_gradient_v(0, 0, width, half, BACKGROUND_TOP, BACKGROUND_MID);
        d.draw_rectangle_gradient_v(0, half, width, self.height as i32 - half, BACKGROUND_MID, BACKGROUND_BOTTOM);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for section in self.sections.iter() {
            let screen_top = section.top - self.scroll;
            if screen_top > self.height || screen_top + section.height < 0.0 {
                continue;
            }
            match section.kind {
                SectionKind::Hero => self.draw_hero(d, screen_top),
                SectionKind::Products => self.draw_products(d, screen_top),
                SectionKind::About => self.draw_about(d, screen_top),
                SectionKind::Contact => self.draw_contact(d, screen_top),
            }
        }
    }

    fn draw_heading(&self, d: &mut RaylibDrawHandle, badge: &str, title: &str, y: f32, alpha: f32) {
        let font = self.font.as_ref();
        draw_label(d, font, badge, CONTENT_MARGIN, y, 18.0, with_opacity(ACCENT, alpha));
        draw_label(d, font, title, CONTENT_MARGIN, y + 32.0, 44.0, with_opacity(TEXT, alpha));
    }

    fn draw_hero(&self, d: &mut RaylibDrawHandle, top: f32) {
        let font = self.font.as_ref();
        let parallax = self.parallax();
        let alpha = parallax.opacity;
        let x = CONTENT_MARGIN;
        let y = top + self.height * 0.3 + parallax.text_y;

        draw_label(d, font, "Distribuidor Oficial Pratt", x, y, 20.0, with_opacity(ACCENT, alpha));
        draw_label(d, font, "Soluções de Limpeza", x, y + 40.0, 56.0, with_opacity(TEXT, alpha));
        draw_label(d, font, "Profissional", x, y + 104.0, 56.0, with_opacity(TEXT, alpha));
        draw_label(
            d,
            font,
            "Transforme seus espaços com produtos de alta performance e qualidade superior.",
            x,
            y + 180.0,
            20.0,
            with_opacity(TEXT, 0.8 * alpha),
        );

        // Featured product floating on the right
        let featured = if self.catalog.len() > 1 { 1 } else { 0 };
        if let Some(product) = self.catalog.get(featured) {
            let texture = self.images.get(featured).and_then(Option::as_ref);
            self.hero.draw(d, font, self.hero_center(), texture, product, alpha);
        }
    }

    fn draw_products(&self, d: &mut RaylibDrawHandle, top: f32) {
        let (alpha, offset_y) = self.reveal_of(SectionKind::Products);
        self.draw_heading(d, "Produtos Pratt", "Linha Completa de Produtos", top + 64.0 + offset_y, alpha);
        draw_carousel(d, self.font.as_ref(), &self.carousel_layout(), &self.carousel, &self.catalog, &self.images, alpha);
    }

    fn draw_about(&self, d: &mut RaylibDrawHandle, top: f32) {
        let (alpha, offset_y) = self.reveal_of(SectionKind::About);
        let y = top + 64.0 + offset_y;
        self.draw_heading(d, "Nossa História", "Otsuka Soluções", y, alpha);

        let lines = [
            "A Otsuka Soluções é especializada em fornecer produtos de limpeza profissional",
            "de alta qualidade para empresas e instituições. Como distribuidora oficial da",
            "linha Pratt, garantimos soluções eficientes e sustentáveis para todas as",
            "necessidades de limpeza.",
        ];
        for (i, line) in lines.iter().enumerate() {
            let line_y = y + 120.0 + i as f32 * 30.0;
            draw_label(d, self.font.as_ref(), line, CONTENT_MARGIN, line_y, 20.0, with_opacity(TEXT, 0.8 * alpha));
        }
    }

    fn draw_contact(&self, d: &mut RaylibDrawHandle, top: f32) {
        let font = self.font.as_ref();
        let (alpha, offset_y) = self.reveal_of(SectionKind::Contact);
        let y = top + 64.0 + offset_y;
        self.draw_heading(d, "Fale Conosco", "Entre em contato conosco!", y, alpha);

        // Static form fields, nothing is submitted
        let x = CONTENT_MARGIN;
        let width = ((self.width - CONTENT_MARGIN * 3.0) * 0.5).max(0.0);
        let mut field_y = y + 130.0;
        for (label, rows) in [("Nome", 1.0), ("Email", 1.0), ("Mensagem", 3.0)] {
            draw_label(d, font, label, x, field_y, 18.0, with_opacity(TEXT, 0.8 * alpha));
            let field = Rectangle::new(x, field_y + 26.0, width, 40.0 * rows);
            d.draw_rectangle_rounded(field, 0.2, 8, with_opacity(TEXT, 0.08 * alpha));
            field_y += 26.0 + 40.0 * rows + 20.0;
        }

        let info_x = CONTENT_MARGIN * 2.0 + width;
        draw_label(d, font, "Informações de Contato", info_x, y + 130.0, 24.0, with_opacity(TEXT, alpha));
        draw_label(
            d,
            font,
            "Av. Principal, 1000 - Centro Empresarial, Salvador - BA, 40000-000",
            info_x,
            y + 170.0,
            18.0,
            with_opacity(TEXT, 0.8 * alpha),
        );
    }
}
