//! Per-frame update scheduling.
//!
//! The scheduler owns the render clock and walks an ordered registry of
//! animated objects once per display refresh, handing each the frame delta
//! and the absolute elapsed time. Nothing here touches the GPU; the renderer
//! reads object state after the pass.

use std::sync::{Arc, RwLock};

use super::{Clock, Id};

/// Per-frame update hook implemented by every animated object.
pub trait Updatable {
    /// Advance the object by one frame. `delta` is the time since the
    /// previous frame and `elapsed` the time since scheduler start, both in
    /// seconds.
    fn update(&mut self, delta: f32, elapsed: f32);
}

/// Timing snapshot for one executed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds since the scheduler started.
    pub elapsed: f32,
}

/// A shared handle to a scheduled object.
///
/// Callers keep a clone to read state back out after a frame; the scheduler
/// keeps one to drive updates.
pub type UpdateHandle = Arc<RwLock<dyn Updatable>>;

struct Registration {
    id: Id,
    target: UpdateHandle,
}

/// Drives registered objects once per display refresh, in registration
/// order.
///
/// `tick` reads the wall clock for live rendering; `step` advances a virtual
/// clock by an exact delta so tests run without a display.
pub struct Scheduler {
    clock: Clock,
    registry: Vec<Registration>,
    elapsed: f64,
    running: bool,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Create an empty scheduler (not started).
    pub fn new() -> Self {
        Self {
            clock: Clock::new(),
            registry: Vec::new(),
            elapsed: 0.0,
            running: false,
        }
    }

    /// Add an object to the end of the update order.
    pub fn register(&mut self, target: UpdateHandle) -> Id {
        let id = Id::new();
        log::debug!("scheduler: registered object {}", id);
        self.registry.push(Registration { id, target });
        id
    }

    /// Detach an object, returning its handle if it was registered.
    ///
    /// Safe between frames; the object simply stops receiving updates.
    pub fn remove(&mut self, id: Id) -> Option<UpdateHandle> {
        let index = self.registry.iter().position(|r| r.id == id)?;
        log::debug!("scheduler: removed object {}", id);
        Some(self.registry.remove(index).target)
    }

    /// Number of registered objects.
    #[inline]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True when nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Start the clock and reset elapsed time.
    pub fn start(&mut self) {
        self.clock.start();
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Stop the clock. Ticks become no-ops until restarted.
    pub fn stop(&mut self) {
        self.clock.stop();
        self.running = false;
    }

    /// Whether the scheduler is running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds of update time the scheduler has distributed so far.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    /// Run one frame from the wall clock.
    ///
    /// Returns `None` without updating anything when the scheduler is
    /// stopped.
    pub fn tick(&mut self) -> Option<FrameTiming> {
        if !self.running {
            return None;
        }
        let delta = self.clock.get_delta() as f32;
        Some(self.run_pass(delta))
    }

    /// Run one frame with an exact virtual delta.
    ///
    /// Ignores the wall clock entirely, so frames are reproducible.
    pub fn step(&mut self, delta: f32) -> FrameTiming {
        self.run_pass(delta)
    }

    fn run_pass(&mut self, delta: f32) -> FrameTiming {
        self.elapsed += delta as f64;
        let elapsed = self.elapsed as f32;
        for registration in &self.registry {
            if let Ok(mut target) = registration.target.write() {
                target.update(delta, elapsed);
            }
        }
        FrameTiming { delta, elapsed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Probe {
        tag: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
        last_elapsed: f32,
    }

    impl Updatable for Probe {
        fn update(&mut self, _delta: f32, elapsed: f32) {
            self.last_elapsed = elapsed;
            if let Ok(mut log) = self.log.lock() {
                log.push(self.tag);
            }
        }
    }

    fn probe(tag: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> Arc<RwLock<Probe>> {
        Arc::new(RwLock::new(Probe {
            tag,
            log: Arc::clone(log),
            last_elapsed: 0.0,
        }))
    }

    #[test]
    fn test_updates_run_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        scheduler.register(probe("snow", &log));
        scheduler.register(probe("fire", &log));
        scheduler.register(probe("creature", &log));

        scheduler.step(0.016);
        assert_eq!(*log.lock().unwrap(), vec!["snow", "fire", "creature"]);
    }

    #[test]
    fn test_step_accumulates_elapsed() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        let p = probe("p", &log);
        scheduler.register(p.clone());

        scheduler.step(0.5);
        let timing = scheduler.step(0.25);
        assert_eq!(timing.delta, 0.25);
        assert_eq!(timing.elapsed, 0.75);
        assert_eq!(p.read().unwrap().last_elapsed, 0.75);
    }

    #[test]
    fn test_tick_is_noop_while_stopped() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        scheduler.register(probe("p", &log));

        assert!(scheduler.tick().is_none());
        assert!(log.lock().unwrap().is_empty());

        scheduler.start();
        assert!(scheduler.tick().is_some());
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_detaches_object() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut scheduler = Scheduler::new();
        let id = scheduler.register(probe("a", &log));
        scheduler.register(probe("b", &log));

        assert!(scheduler.remove(id).is_some());
        assert!(scheduler.remove(id).is_none());
        assert_eq!(scheduler.len(), 1);

        scheduler.step(0.016);
        assert_eq!(*log.lock().unwrap(), vec!["b"]);
    }
}
