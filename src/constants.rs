pub const DEFAULT_WIDTH: i32 = 1280;          // Initial window width
pub const DEFAULT_HEIGHT: i32 = 720;          // Initial window height
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

// Particle field (canvas variant)
pub const PARTICLE_DENSITY: f32 = 15.0;       // One particle per this many pixels of viewport width
pub const MAX_PARTICLES: usize = 80;
pub const PARTICLE_MIN_SIZE: f32 = 1.0;
pub const PARTICLE_MAX_SIZE: f32 = 4.0;
pub const PARTICLE_MIN_OPACITY: f32 = 0.1;
pub const PARTICLE_MAX_OPACITY: f32 = 0.6;
pub const PARTICLE_MAX_SPEED: f32 = 9.0;      // Pixels per second, per axis
pub const PARTICLE_GLOW: f32 = 2.0;           // Gradient radius as a multiple of size

// Bubble field (declarative variant)
pub const BUBBLE_COUNT: usize = 6;
pub const BUBBLE_RISE: f32 = 100.0;
pub const BUBBLE_SPACING: f32 = 15.0;
pub const BUBBLE_PEAK_OPACITY: f32 = 0.7;
pub const BUBBLE_ANCHOR_MARGIN: f32 = 80.0;   // Distance of the spawn line from the bottom edge

// Carousel
pub const SLIDE_DURATION: f32 = 0.3;          // Duration of each exit/enter phase (seconds)
pub const SLIDE_DISTANCE: f32 = 100.0;        // Horizontal travel of a panel (pixels)

// Scroll reveal
pub const REVEAL_DURATION: f32 = 0.8;
pub const REVEAL_OFFSET: f32 = 50.0;
pub const VIEWPORT_MARGIN: f32 = 100.0;       // Viewport shrink applied before intersection tests
pub const SCROLL_STEP: f32 = 80.0;            // Pixels per mouse wheel notch

// Hero parallax, expressed over the first part of the scroll range
pub const PARALLAX_RANGE: f32 = 0.2;
pub const HERO_TEXT_SHIFT: f32 = -100.0;
pub const HERO_IMAGE_SHIFT: f32 = -50.0;

// Hero product
pub const HERO_STAGE: f32 = 400.0;            // Side of the square area that tracks the mouse
pub const HERO_IMAGE_BOX: f32 = 300.0;
pub const HERO_TILT_MAX: f32 = 10.0;          // Degrees, reached at HERO_TILT_REACH pixels from the center
pub const HERO_TILT_REACH: f32 = 100.0;
pub const HERO_TILT_RELEASE: f32 = 0.5;       // Seconds to settle back once the mouse leaves
pub const HERO_TILT_DEPTH: f32 = 40.0;        // Apparent depth used to shift the tilted image
pub const HERO_BUBBLE_COUNT: usize = 8;
pub const HERO_BUBBLE_SPREAD: f32 = 200.0;
pub const HERO_BUBBLE_MIN_OPACITY: f32 = 0.2;
pub const HERO_BUBBLE_MAX_OPACITY: f32 = 0.8;
