//! Cancellable per-frame tasks.
//!
//! The window loop calls [`FrameScheduler::run_frame`] once per frame. Each
//! started task runs on every frame until its [`TaskHandle`] is cancelled;
//! between frames control returns to the window loop.

use std::cell::Cell;
use std::rc::Rc;

type Tick = Box<dyn FnMut(f32)>;

struct Scheduled {
    id: u64,
    cancelled: Rc<Cell<bool>>,
    tick: Tick,
}

/// Handle to a running task. Cancelling is idempotent and safe after the
/// scheduler has already dropped the task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: u64,
    cancelled: Rc<Cell<bool>>,
}

impl TaskHandle {
    #[cfg(test)]
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn cancel(&self) {
        if !self.cancelled.replace(true) {
            log::trace!("Cancelled frame task {}", self.id);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[derive(Default)]
pub struct FrameScheduler {
    tasks: Vec<Scheduled>,
    next_id: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, tick: impl FnMut(f32) + 'static) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;

        let cancelled = Rc::new(Cell::new(false));
        self.tasks.push(Scheduled {
            id,
            cancelled: Rc::clone(&cancelled),
            tick: Box::new(tick),
        });
        log::trace!("Started frame task {}", id);

        TaskHandle { id, cancelled }
    }

    /// Run every live task once, in start order.
    pub fn run_frame(&mut self, dt: f32) {
        self.tasks.retain(|task| {
            let live = !task.cancelled.get();
            if !live {
                log::trace!("Dropped frame task {}", task.id);
            }
            live
        });
        for task in self.tasks.iter_mut() {
            // A task may cancel another one mid-frame
            if !task.cancelled.get() {
                (task.tick)(dt);
            }
        }
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.cancelled.get()).count()
    }

    #[cfg(test)]
    pub fn is_active(&self, handle: &TaskHandle) -> bool {
        self.tasks
            .iter()
            .any(|task| task.id == handle.id && !task.cancelled.get())
    }
}
