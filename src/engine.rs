use raylib::prelude::*;

/// Draw target of a background layer: its off-screen surface.
pub type SurfaceMode<'a> = RaylibTextureMode<'a, RaylibHandle>;

/// A full-viewport animated layer drawn behind the page.
pub trait Engine {
    /// Rebuild for a new viewport. Whatever was animating before is dropped.
    fn resize(&mut self, width: f32, height: f32);
    fn update(&mut self, dt: f32);
    fn draw(&self, d: &mut SurfaceMode);
}
