//! Ambient background layers.
//!
//! Two variants share the [`Engine`](crate::engine::Engine) interface: a
//! canvas-style field of drifting glow particles, and a small fixed set of
//! looping bubbles.

pub mod bubbles;
pub mod field;

pub use bubbles::{Bubble, BubbleField};
pub use field::ParticleField;
