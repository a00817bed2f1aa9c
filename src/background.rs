//! Background component: one animated [`Engine`] mounted behind the page.
//!
//! The engine is advanced by a frame task. Every resize cancels the running
//! task before rebuilding the engine and starting a new one, so only the
//! latest generation ever animates. Dropping the component cancels its task.

use std::cell::RefCell;
use std::rc::Rc;

use raylib::prelude::*;

use crate::engine::Engine;
use crate::task::{FrameScheduler, TaskHandle};

/// Off-screen texture the background is drawn into. If it cannot be created
/// the background is simply not drawn.
pub struct Surface {
    texture: Option<RenderTexture2D>,
    warned: bool,
}

impl Surface {
    pub fn new() -> Self {
        Self { texture: None, warned: false }
    }

    pub fn acquire(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, width: i32, height: i32) {
        // Release the old texture before asking for a new one
        self.texture = None;

        if width <= 0 || height <= 0 {
            return;
        }

        match rl.load_render_texture(thread, width as u32, height as u32) {
            Ok(texture) => {
                self.texture = Some(texture);
                self.warned = false;
            }
            Err(e) => {
                if !self.warned {
                    log::warn!("Background surface unavailable, skipping background: {}", e);
                    self.warned = true;
                }
            }
        }
    }

    #[cfg(test)]
    pub fn is_available(&self) -> bool {
        self.texture.is_some()
    }

    /// Copy the surface onto the screen, stretched to `width` x `height`.
    pub fn blit(&self, d: &mut RaylibDrawHandle, width: f32, height: f32) {
        let Some(texture) = &self.texture else {
            return;
        };

        // Render textures are stored upside down
        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, texture.width() as f32, -(texture.height() as f32)),
            Rectangle::new(0.0, 0.0, width, height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

pub struct ParticleBackground {
    engine: Rc<RefCell<Box<dyn Engine>>>,
    frame: Option<TaskHandle>,
    generation: u64,
}

impl ParticleBackground {
    pub fn mount(engine: Box<dyn Engine>, scheduler: &mut FrameScheduler, width: f32, height: f32) -> Self {
        let mut background = Self {
            engine: Rc::new(RefCell::new(engine)),
            frame: None,
            generation: 0,
        };
        background.resize(scheduler, width, height);
        background
    }

    /// Drop the current animation and start over for the new viewport.
    pub fn resize(&mut self, scheduler: &mut FrameScheduler, width: f32, height: f32) {
        self.stop();
        self.engine.borrow_mut().resize(width, height);

        let engine = Rc::clone(&self.engine);
        self.frame = Some(scheduler.start(move |dt| engine.borrow_mut().update(dt)));
        self.generation += 1;

        log::debug!("Background generation {} for {}x{}", self.generation, width, height);
    }

    /// Cancel the frame task. Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(frame) = self.frame.take() {
            frame.cancel();
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.frame.as_ref().is_some_and(|frame| !frame.is_cancelled())
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn render(&self, rl: &mut RaylibHandle, thread: &RaylibThread, surface: &mut Surface) {
        let Some(texture) = surface.texture.as_mut() else {
            return;
        };

        let engine = self.engine.borrow();
        let mut d = rl.begin_texture_mode(thread, texture);
        d.clear_background(Color::BLANK);
        engine.draw(&mut d);
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SurfaceMode;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    // Records what the component asks of its engine
    struct Probe {
        resizes: Rc<Cell<usize>>,
        ticks: Rc<Cell<usize>>,
    }

    impl Engine for Probe {
        fn resize(&mut self, _width: f32, _height: f32) {
            self.resizes.set(self.resizes.get() + 1);
        }

        fn update(&mut self, _dt: f32) {
            self.ticks.set(self.ticks.get() + 1);
        }

        fn draw(&self, _d: &mut SurfaceMode) {}
    }

    fn probe() -> (Box<dyn Engine>, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let resizes = Rc::new(Cell::new(0));
        let ticks = Rc::new(Cell::new(0));
        let engine = Probe { resizes: Rc::clone(&resizes), ticks: Rc::clone(&ticks) };
        (Box::new(engine), resizes, ticks)
    }

    #[test]
    fn mount_starts_one_task() {
        let mut scheduler = FrameScheduler::new();
        let (engine, resizes, ticks) = probe();
        let background = ParticleBackground::mount(engine, &mut scheduler, 800.0, 600.0);

        assert_eq!(resizes.get(), 1);
        assert_eq!(scheduler.active_count(), 1);
        assert!(background.is_running());

        scheduler.run_frame(0.016);
        scheduler.run_frame(0.016);
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn rapid_resizes_leave_only_latest_generation() {
        let mut scheduler = FrameScheduler::new();
        let (engine, resizes, ticks) = probe();
        let mut background = ParticleBackground::mount(engine, &mut scheduler, 800.0, 600.0);

        for width in [810.0, 820.0, 830.0, 840.0, 850.0] {
            background.resize(&mut scheduler, width, 600.0);
        }
        assert_eq!(background.generation(), 6);
        assert_eq!(resizes.get(), 6);
        assert_eq!(scheduler.active_count(), 1);

        scheduler.run_frame(0.016);
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut scheduler = FrameScheduler::new();
        let (engine, _, ticks) = probe();
        let mut background = ParticleBackground::mount(engine, &mut scheduler, 800.0, 600.0);

        background.stop();
        background.stop();
        assert!(!background.is_running());

        scheduler.run_frame(0.016);
        assert_eq!(ticks.get(), 0);
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn teardown_cancels_the_frame_task() {
        let mut scheduler = FrameScheduler::new();
        let (engine, _, ticks) = probe();
        let background = ParticleBackground::mount(engine, &mut scheduler, 800.0, 600.0);

        drop(background);
        scheduler.run_frame(0.016);

        assert_eq!(ticks.get(), 0);
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn missing_surface_is_not_available() {
        let surface = Surface::new();
        assert!(!surface.is_available());
    }
}
