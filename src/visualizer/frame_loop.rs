/// Requests display-aligned callbacks. The callback target is fixed when the scheduler is built.
pub trait FrameScheduler {
    type Handle;

    fn request_frame(&self) -> Option<Self::Handle>;
    fn cancel_frame(&self, handle: Self::Handle);
}

/// A self-rescheduling render loop with exactly one pending-request slot.
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    running: bool,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start the loop; a no-op if a frame is already pending.
    pub fn start(&mut self) {
        self.running = true;
        if self.pending.is_none() {
            self.pending = self.scheduler.request_frame();
        }
    }

    /// Called when the scheduled callback fires. Returns whether this frame should render.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        self.running
    }

    /// Ask for the next iteration after rendering.
    pub fn schedule_next(&mut self) {
        if self.running && self.pending.is_none() {
            self.pending = self.scheduler.request_frame();
        }
    }

    /// Cancel whatever is pending. Safe to call any number of times.
    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Hands out increasing ids and remembers which ones were cancelled.
    #[derive(Default, Clone)]
    pub struct CountingScheduler {
        pub next: Rc<Cell<u32>>,
        pub cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl CountingScheduler {
        pub fn requested(&self) -> u32 {
            self.next.get()
        }
    }

    impl FrameScheduler for CountingScheduler {
        type Handle = u32;

        fn request_frame(&self) -> Option<u32> {
            let id = self.next.get() + 1;
            self.next.set(id);
            Some(id)
        }

        fn cancel_frame(&self, handle: u32) {
            self.cancelled.borrow_mut().push(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::CountingScheduler;
    use super::*;

    #[test]
    fn only_one_frame_is_ever_pending() {
        let scheduler = CountingScheduler::default();
        let mut frames = FrameLoop::new(scheduler.clone());
        frames.start();
        frames.start();
        frames.schedule_next();
        assert_eq!(scheduler.requested(), 1);
        assert!(frames.is_pending());
    }

    #[test]
    fn each_frame_requests_exactly_one_successor() {
        let scheduler = CountingScheduler::default();
        let mut frames = FrameLoop::new(scheduler.clone());
        frames.start();
        for _ in 0..10 {
            assert!(frames.begin_frame());
            assert!(!frames.is_pending());
            frames.schedule_next();
        }
        assert_eq!(scheduler.requested(), 11);
    }

    #[test]
    fn stop_is_idempotent() {
        let scheduler = CountingScheduler::default();
        let mut frames = FrameLoop::new(scheduler.clone());
        frames.stop();
        frames.start();
        frames.stop();
        frames.stop();
        assert_eq!(*scheduler.cancelled.borrow(), vec![1]);
        assert!(!frames.is_pending());
        assert!(!frames.is_running());
    }

    #[test]
    fn frame_firing_after_stop_does_not_render() {
        let scheduler = CountingScheduler::default();
        let mut frames = FrameLoop::new(scheduler.clone());
        frames.start();
        frames.stop();
        assert!(!frames.begin_frame());
        frames.schedule_next();
        assert_eq!(scheduler.requested(), 1);
    }
}
