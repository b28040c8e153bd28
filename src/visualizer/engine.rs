use crate::visualizer::{
    paint_frame, AnalysisBackend, AnalysisSession, FrameLoop, FrameScheduler, SpectrumSurface,
    FFT_SIZE,
};

/// Ties the analysis session to the render loop for one mounted visualizer.
pub struct VisualizerEngine<B: AnalysisBackend, S: FrameScheduler> {
    session: AnalysisSession<B>,
    frames: FrameLoop<S>,
    samples: Vec<u8>,
}

impl<B: AnalysisBackend, S: FrameScheduler> VisualizerEngine<B, S> {
    pub fn new(backend: B, scheduler: S) -> Self {
        Self {
            session: AnalysisSession::new(backend, FFT_SIZE),
            frames: FrameLoop::new(scheduler),
            samples: Vec::new(),
        }
    }

    /// Follow the playing flag: start rendering (building the graph on first use) or stop.
    pub fn set_playing(&mut self, playing: bool) {
        if !playing {
            self.frames.stop();
            return;
        }
        if self.session.activate().is_some() {
            self.frames.start();
        }
    }

    /// Body of the frame callback. Missing surface or graph ends the loop quietly.
    pub fn on_frame<T: SpectrumSurface + ?Sized>(&mut self, surface: Option<&mut T>) {
        if !self.frames.begin_frame() {
            return;
        }
        let (Some(surface), Some(graph)) = (surface, self.session.graph()) else {
            return;
        };
        paint_frame(graph, surface, &mut self.samples);
        self.frames.schedule_next();
    }

    /// Cancel any pending frame; the graph stays for the lifetime of the page.
    pub fn dispose(&mut self) {
        self.frames.stop();
    }

    pub fn session(&self) -> &AnalysisSession<B> {
        &self.session
    }

    pub fn frames(&self) -> &FrameLoop<S> {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualizer::frame_loop::fake::CountingScheduler;
    use crate::visualizer::graph::fake::FakeBackend;
    use crate::visualizer::spectrum::fake::RecordingSurface;

    fn engine() -> (VisualizerEngine<FakeBackend, CountingScheduler>, FakeBackend, CountingScheduler) {
        let backend = FakeBackend::default();
        let probe = FakeBackend {
            builds: backend.builds.clone(),
            resumes: backend.resumes.clone(),
            ..FakeBackend::default()
        };
        let scheduler = CountingScheduler::default();
        (VisualizerEngine::new(backend, scheduler.clone()), probe, scheduler)
    }

    #[test]
    fn graph_is_built_once_across_play_pause_cycles() {
        let (mut engine, probe, _) = engine();
        for _ in 0..4 {
            engine.set_playing(true);
            engine.set_playing(false);
        }
        assert_eq!(probe.builds.get(), 1);
        assert_eq!(engine.session().attempts(), 1);
    }

    #[test]
    fn nothing_is_built_before_playback() {
        let (mut engine, probe, scheduler) = engine();
        engine.set_playing(false);
        engine.dispose();
        assert_eq!(probe.builds.get(), 0);
        assert_eq!(scheduler.requested(), 0);
    }

    #[test]
    fn frames_render_and_reschedule_while_playing() {
        let (mut engine, _, scheduler) = engine();
        let mut surface = RecordingSurface::default();
        engine.set_playing(true);
        engine.on_frame(Some(&mut surface));
        engine.on_frame(Some(&mut surface));

        assert_eq!(surface.clears, 2);
        assert_eq!(surface.bars.len(), 128);
        assert_eq!(scheduler.requested(), 3);
        assert!(engine.frames().is_pending());
    }

    #[test]
    fn pausing_cancels_the_pending_frame() {
        let (mut engine, _, scheduler) = engine();
        engine.set_playing(true);
        engine.set_playing(false);
        assert_eq!(*scheduler.cancelled.borrow(), vec![1]);
        assert!(!engine.frames().is_pending());

        let mut surface = RecordingSurface::default();
        engine.on_frame(Some(&mut surface));
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn missing_surface_ends_the_loop_without_fault() {
        let (mut engine, _, scheduler) = engine();
        engine.set_playing(true);
        engine.on_frame(None::<&mut RecordingSurface>);
        assert!(!engine.frames().is_pending());
        assert_eq!(scheduler.requested(), 1);
        engine.dispose();
        engine.dispose();
        assert!(scheduler.cancelled.borrow().is_empty());
    }

    #[test]
    fn failed_graph_never_starts_the_loop() {
        let backend = FakeBackend {
            unsupported: true,
            ..FakeBackend::default()
        };
        let scheduler = CountingScheduler::default();
        let mut engine = VisualizerEngine::new(backend, scheduler.clone());
        engine.set_playing(true);
        engine.set_playing(true);
        assert_eq!(scheduler.requested(), 0);
        assert!(engine.session().has_failed());
    }
}
