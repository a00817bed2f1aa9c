//! Scroll-triggered reveals.
//!
//! [`VisibilityObserver`] watches vertical page spans and tells its
//! subscribers whenever a span crosses into or out of the (margin-shrunk)
//! viewport. [`Reveal`] is the subscriber that fades and lifts a section in
//! while it is on screen.

use std::cell::RefCell;
use std::rc::Rc;

use raylib::prelude::*;

use crate::constants::*;

pub type TargetId = usize;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Visibility {
    Entered,
    Exited,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct VisibilityEvent {
    pub target: TargetId,
    pub visibility: Visibility,
}

pub trait VisibilityListener {
    fn on_visibility(&mut self, event: VisibilityEvent);
}

#[derive(Debug)]
struct Target {
    id: TargetId,
    top: f32,
    height: f32,
    once: bool,
    visible: bool,
    done: bool,
}

pub struct VisibilityObserver {
    targets: Vec<Target>,
    listeners: Vec<Rc<RefCell<dyn VisibilityListener>>>,
    margin: f32,
}

impl VisibilityObserver {
    pub fn new(margin: f32) -> Self {
        Self {
            targets: Vec::new(),
            listeners: Vec::new(),
            margin,
        }
    }

    /// Start watching the span `[top, top + height)`. A `once` target stops
    /// reporting after it first enters the viewport.
    pub fn observe_target(&mut self, top: f32, height: f32, once: bool) -> TargetId {
        let id = self.targets.len();
        self.targets.push(Target { id, top, height, once, visible: false, done: false });
        id
    }

    /// Move a target without resetting its visibility.
    pub fn set_bounds(&mut self, id: TargetId, top: f32, height: f32) {
        if let Some(target) = self.targets.get_mut(id) {
            target.top = top;
            target.height = height;
        }
    }

    pub fn subscribe(&mut self, listener: Rc<RefCell<dyn VisibilityListener>>) {
        self.listeners.push(listener);
    }

    #[cfg(test)]
    pub fn is_visible(&self, id: TargetId) -> bool {
        self.targets.get(id).is_some_and(|target| target.visible)
    }

    /// Compare every target against the viewport at `scroll_offset` and
    /// notify subscribers of each crossing. Returns the emitted events.
    pub fn observe(&mut self, scroll_offset: f32, viewport_height: f32) -> Vec<VisibilityEvent> {
        let view_top = scroll_offset + self.margin;
        let view_bottom = scroll_offset + viewport_height - self.margin;

        let mut events = Vec::new();
        for target in self.targets.iter_mut().filter(|t| !t.done) {
            let intersecting = view_bottom > view_top
                && target.top < view_bottom
                && target.top + target.height > view_top;

            if intersecting == target.visible {
                continue;
            }
            target.visible = intersecting;

            let visibility = if intersecting {
                if target.once {
                    target.done = true;
                }
                Visibility::Entered
            } else {
                Visibility::Exited
            };
            events.push(VisibilityEvent { target: target.id, visibility });
        }

        for event in events.iter() {
            for listener in self.listeners.iter() {
                listener.borrow_mut().on_visibility(*event);
            }
        }
        events
    }
}

/// Fade-and-lift animation for one observed section.
#[derive(Debug)]
pub struct Reveal {
    target: TargetId,
    shown: bool,
    progress: f32,
}

impl Reveal {
    pub fn new(target: TargetId) -> Self {
        Self { target, shown: false, progress: 0.0 }
    }

    pub fn update(&mut self, dt: f32) {
        let step = dt / REVEAL_DURATION;
        self.progress = if self.shown {
            (self.progress + step).min(1.0)
        } else {
            (self.progress - step).max(0.0)
        };
    }

    fn eased(&self) -> f32 {
        ease::cubic_out(self.progress, 0.0, 1.0, 1.0)
    }

    pub fn opacity(&self) -> f32 {
        self.eased()
    }

    /// Vertical offset in pixels, positive is lower on screen.
    pub fn offset_y(&self) -> f32 {
        REVEAL_OFFSET * (1.0 - self.eased())
    }

    #[cfg(test)]
    pub fn is_shown(&self) -> bool {
        self.shown
    }
}

impl VisibilityListener for Reveal {
    fn on_visibility(&mut self, event: VisibilityEvent) {
        if event.target == self.target {
            self.shown = event.visibility == Visibility::Entered;
        }
    }
}
