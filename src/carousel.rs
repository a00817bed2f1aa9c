use raylib::prelude::*;

use crate::constants::*;
use crate::error::CarouselError;
use crate::state::{Direction, TransitionPhase};

/// Where the visible product panel sits this frame. Image and text panels
/// are both drawn from the same frame.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PanelFrame {
    pub index: usize,   // Product being drawn (lags `active_index` while exiting)
    pub offset: f32,    // Horizontal offset in pixels
    pub opacity: f32,
}

/// Navigation state over a fixed-size catalog.
#[derive(Debug)]
pub struct Carousel {
    len: usize,
    active_index: usize,
    direction: Direction,

    displayed_index: usize,
    phase: TransitionPhase,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::EmptyCatalog);
        }

        Ok(Self {
            len,
            active_index: 0,
            direction: Direction::Neutral,
            displayed_index: 0,
            phase: TransitionPhase::Idle,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn is_transitioning(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    pub fn next(&mut self) {
        self.direction = Direction::Forward;
        self.active_index = (self.active_index + 1) % self.len;
        self.begin_transition();
    }

    pub fn previous(&mut self) {
        self.direction = Direction::Backward;
        self.active_index = (self.active_index + self.len - 1) % self.len;
        self.begin_transition();
    }

    /// Jump straight to `index`. Selecting the active entry reports
    /// `Direction::Backward`.
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange { index, len: self.len });
        }

        self.direction = if index > self.active_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.active_index = index;
        self.begin_transition();
        Ok(())
    }

    // Restart the exit phase from wherever the panel is right now, so an
    // interrupted transition never jumps.
    fn begin_transition(&mut self) {
        if self.phase == TransitionPhase::Idle && self.active_index == self.displayed_index {
            return;
        }

        let current = self.panel();
        self.phase = TransitionPhase::Exiting {
            elapsed: 0.0,
            from_offset: current.offset,
            from_opacity: current.opacity,
        };
    }

    pub fn update(&mut self, dt: f32) {
        match self.phase {
            TransitionPhase::Idle => {}
            TransitionPhase::Exiting { elapsed, from_offset, from_opacity } => {
                let elapsed = elapsed + dt;
                if elapsed >= SLIDE_DURATION {
                    // Outgoing panel is gone, swap in the active product
                    self.displayed_index = self.active_index;
                    self.phase = TransitionPhase::Entering { elapsed: 0.0 };
                    self.update(elapsed - SLIDE_DURATION);
                } else {
                    self.phase = TransitionPhase::Exiting { elapsed, from_offset, from_opacity };
                }
            }
            TransitionPhase::Entering { elapsed } => {
                let elapsed = elapsed + dt;
                self.phase = if elapsed >= SLIDE_DURATION {
                    TransitionPhase::Idle
                } else {
                    TransitionPhase::Entering { elapsed }
                };
            }
        }
    }

    pub fn panel(&self) -> PanelFrame {
        let sweep = self.direction.sign() * SLIDE_DISTANCE;

        let (offset, opacity) = match self.phase {
            TransitionPhase::Idle => (0.0, 1.0),
            TransitionPhase::Exiting { elapsed, from_offset, from_opacity } => (
                ease::cubic_in_out(elapsed, from_offset, -sweep - from_offset, SLIDE_DURATION),
                ease::cubic_in_out(elapsed, from_opacity, -from_opacity, SLIDE_DURATION),
            ),
            TransitionPhase::Entering { elapsed } => (
                ease::cubic_in_out(elapsed, sweep, -sweep, SLIDE_DURATION),
                ease::cubic_in_out(elapsed, 0.0, 1.0, SLIDE_DURATION),
            ),
        };

        PanelFrame { index: self.displayed_index, offset, opacity }
    }
}
