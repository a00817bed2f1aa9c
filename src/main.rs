use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;

mod background;
mod carousel;
mod carousel_view;
mod catalog;
mod config;
mod constants;
mod engine;
mod error;
mod hero;
mod page;
mod particles;
mod reveal;
mod state;
mod task;
mod texture_loader;
mod theme;
mod typography;

use crate::background::{ParticleBackground, Surface};
use crate::carousel_view::CarouselAction;
use crate::catalog::Catalog;
use crate::config::{BackgroundKind, Config};
use crate::constants::*;
use crate::engine::Engine;
use crate::page::{Page, SectionKind};
use crate::particles::{BubbleField, ParticleField};
use crate::task::FrameScheduler;
use crate::texture_loader::load_product_images;
use crate::typography::load_font;

fn main() -> Result<()> {
    let config = Config::parse();

    // --- Logging ---
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = config.log_level() {
        logger.filter_level(level);
    }
    logger.init();

    // --- Catalog ---
    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };
    log::info!("Showing {} products", catalog.len());

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Otsuka Soluções - Produtos Pratt")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let images = load_product_images(&mut rl, &thread, &config.assets, &catalog);
    let font = load_font(&mut rl, &thread, &config.font_path());

    let mut width = rl.get_screen_width();
    let mut height = rl.get_screen_height();

    let mut page = Page::new(catalog, images, width as f32, height as f32)
        .context("Failed to build the page")?
        .with_font(font);

    // --- Background ---
    let mut scheduler = FrameScheduler::new();
    let engine: Option<Box<dyn Engine>> = match config.background {
        BackgroundKind::Canvas => Some(Box::new(ParticleField::new(config.particle_cap()))),
        BackgroundKind::Bubbles => Some(Box::new(BubbleField::new())),
        BackgroundKind::None => None,
    };
    let mut background = engine
        .map(|engine| ParticleBackground::mount(engine, &mut scheduler, width as f32, height as f32));

    let mut surface = Surface::new();
    if background.is_some() {
        surface.acquire(&mut rl, &thread, width, height);
    }

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = if config.fixed_step { config.frame_step() } else { rl.get_frame_time() };

        // 1. Viewport changes regenerate the background and relayout the page
        if rl.is_window_resized() {
            width = rl.get_screen_width();
            height = rl.get_screen_height();
            log::debug!("Window resized to {}x{}", width, height);

            page.resize(width as f32, height as f32);
            if let Some(background) = background.as_mut() {
                background.resize(&mut scheduler, width as f32, height as f32);
                surface.acquire(&mut rl, &thread, width, height);
            }
        }

        // 2. Input
        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            page.scroll_by(-wheel * SCROLL_STEP);
        }
        let pointer = rl.get_mouse_position();
        page.track_pointer(pointer);
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            page.click(pointer);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            page.apply(CarouselAction::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            page.apply(CarouselAction::Previous);
        }
        let jumps = [
            (KeyboardKey::KEY_ONE, SectionKind::Hero),
            (KeyboardKey::KEY_TWO, SectionKind::Products),
            (KeyboardKey::KEY_THREE, SectionKind::About),
            (KeyboardKey::KEY_FOUR, SectionKind::Contact),
        ];
        for (key, section) in jumps {
            if rl.is_key_pressed(key) {
                page.scroll_to(section);
            }
        }

        // 3. Animation
        scheduler.run_frame(dt);
        page.update(dt);

        // 4. Render background off-screen, then compose the frame
        if let Some(background) = background.as_ref() {
            background.render(&mut rl, &thread, &mut surface);
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        page.draw_backdrop(&mut d);
        surface.blit(&mut d, width as f32, height as f32);
        page.draw(&mut d);
    }

    // Teardown: stop the frame loop before the window goes away
    if let Some(mut background) = background.take() {
        background.stop();
    }

    Ok(())
}
