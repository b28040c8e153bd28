use crate::diagnostics::log_warn;
use crate::visualizer::FrequencySource;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The media element is already bound into an extraction graph.
    AlreadyConstructed,
    /// The environment has no usable audio context.
    Unsupported(String),
    /// Nodes could not be created or wired.
    Connect(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyConstructed => write!(f, "analysis graph already constructed"),
            Self::Unsupported(reason) => write!(f, "audio analysis unsupported: {reason}"),
            Self::Connect(reason) => write!(f, "failed to wire analysis graph: {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// A built source -> analyser -> output chain.
pub trait AnalysisGraph: FrequencySource {
    fn is_suspended(&self) -> bool;
    fn resume(&self);
}

/// Builds analysis graphs tapped off the media element.
pub trait AnalysisBackend {
    type Graph: AnalysisGraph;

    fn build(&self, fft_size: u32) -> Result<Self::Graph, GraphError>;
}

/// Wire nodes onto a freshly opened audio context. When wiring fails the
/// context is released before the error is returned.
pub fn wire_or_release<C, T>(
    context: C,
    wire: impl FnOnce(&C) -> Result<T, GraphError>,
    release: impl FnOnce(&C),
) -> Result<(C, T), GraphError> {
    match wire(&context) {
        Ok(nodes) => Ok((context, nodes)),
        Err(err) => {
            release(&context);
            Err(err)
        }
    }
}

enum GraphSlot<G> {
    Uninitialized,
    Constructed(G),
    /// Construction was attempted and failed; the element may be half-bound, so it is never retried.
    Failed,
}

/// Uninitialized -> Constructed (or Failed), once per mounted visualizer.
pub struct AnalysisSession<B: AnalysisBackend> {
    backend: B,
    fft_size: u32,
    slot: GraphSlot<B::Graph>,
    attempts: u32,
}

impl<B: AnalysisBackend> AnalysisSession<B> {
    pub fn new(backend: B, fft_size: u32) -> Self {
        Self {
            backend,
            fft_size,
            slot: GraphSlot::Uninitialized,
            attempts: 0,
        }
    }

    /// Build the graph. Any call after the first is rejected.
    pub fn construct(&mut self) -> Result<&B::Graph, GraphError> {
        if !matches!(self.slot, GraphSlot::Uninitialized) {
            return Err(GraphError::AlreadyConstructed);
        }
        self.attempts += 1;
        match self.backend.build(self.fft_size) {
            Ok(graph) => {
                self.slot = GraphSlot::Constructed(graph);
                self.graph().ok_or(GraphError::AlreadyConstructed)
            }
            Err(err) => {
                self.slot = GraphSlot::Failed;
                Err(err)
            }
        }
    }

    /// Called on every transition into playing: builds on first use, wakes a
    /// suspended context, and hands back the graph if there is one.
    pub fn activate(&mut self) -> Option<&B::Graph> {
        if matches!(self.slot, GraphSlot::Uninitialized) {
            if let Err(err) = self.construct() {
                log_warn("visualizer", format!("{err}"));
                return None;
            }
        }
        let graph = self.graph()?;
        if graph.is_suspended() {
            graph.resume();
        }
        Some(graph)
    }

    pub fn graph(&self) -> Option<&B::Graph> {
        match &self.slot {
            GraphSlot::Constructed(graph) => Some(graph),
            _ => None,
        }
    }

    pub fn has_failed(&self) -> bool {
        matches!(self.slot, GraphSlot::Failed)
    }

    /// Number of times the backend was asked to build.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeBackend;
    use super::*;
    use crate::visualizer::FFT_SIZE;

    #[test]
    fn failed_wiring_releases_the_context() {
        let released = std::cell::Cell::new(0);
        let result: Result<(u8, ()), GraphError> = wire_or_release(
            7u8,
            |_| Err(GraphError::Connect("InvalidStateError".to_string())),
            |_| released.set(released.get() + 1),
        );
        assert_eq!(
            result.err(),
            Some(GraphError::Connect("InvalidStateError".to_string()))
        );
        assert_eq!(released.get(), 1);

        let wired = wire_or_release(7u8, |context| Ok(*context + 1), |_| {
            released.set(released.get() + 1)
        });
        assert_eq!(wired, Ok((7, 8)));
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn second_construction_is_rejected() {
        let backend = FakeBackend::default();
        let builds = backend.builds.clone();
        let mut session = AnalysisSession::new(backend, FFT_SIZE);

        assert!(session.construct().is_ok());
        assert_eq!(session.construct().err(), Some(GraphError::AlreadyConstructed));
        assert_eq!(builds.get(), 1);
    }

    #[test]
    fn activate_builds_once_and_keeps_bin_count() {
        let backend = FakeBackend::default();
        let builds = backend.builds.clone();
        let mut session = AnalysisSession::new(backend, FFT_SIZE);

        for _ in 0..5 {
            let graph = session.activate().expect("graph");
            assert_eq!(graph.bin_count(), 128);
        }
        assert_eq!(builds.get(), 1);
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn suspended_context_is_resumed_on_activate() {
        let backend = FakeBackend {
            start_suspended: true,
            ..FakeBackend::default()
        };
        let resumes = backend.resumes.clone();
        let mut session = AnalysisSession::new(backend, FFT_SIZE);

        session.activate();
        session.activate();
        assert_eq!(resumes.get(), 1);
    }

    #[test]
    fn failed_construction_is_terminal() {
        let backend = FakeBackend {
            unsupported: true,
            ..FakeBackend::default()
        };
        let builds = backend.builds.clone();
        let mut session = AnalysisSession::new(backend, FFT_SIZE);

        assert!(session.activate().is_none());
        assert!(session.activate().is_none());
        assert!(session.has_failed());
        assert_eq!(builds.get(), 1);
        assert_eq!(session.construct().err(), Some(GraphError::AlreadyConstructed));
    }
}
