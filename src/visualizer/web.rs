use crate::diagnostics::{describe_js_error, log_warn};
use crate::visualizer::{
    AnalysisBackend, AnalysisGraph, Bar, FrameScheduler, FrequencySource, GraphError,
    SpectrumSurface, VisualizerEngine, GRADIENT_BOTTOM, GRADIENT_TOP, wire_or_release,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, AnalyserNode, AudioContext, AudioContextState, CanvasGradient,
    CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement, MediaElementAudioSourceNode,
};

pub struct WebAnalysisBackend {
    audio: HtmlAudioElement,
}

impl WebAnalysisBackend {
    pub fn new(audio: HtmlAudioElement) -> Self {
        Self { audio }
    }
}

impl AnalysisBackend for WebAnalysisBackend {
    type Graph = WebAnalysisGraph;

    fn build(&self, fft_size: u32) -> Result<WebAnalysisGraph, GraphError> {
        let context =
            AudioContext::new().map_err(|e| GraphError::Unsupported(describe_js_error(&e)))?;

        let (context, (analyser, source)) = wire_or_release(
            context,
            |context| {
                let analyser = context
                    .create_analyser()
                    .map_err(|e| GraphError::Connect(describe_js_error(&e)))?;
                analyser.set_fft_size(fft_size);

                // Source -> analyser -> speakers, so the analyser is a tap and not a sink.
                let source = context
                    .create_media_element_source(&self.audio)
                    .map_err(|e| GraphError::Connect(describe_js_error(&e)))?;
                source
                    .connect_with_audio_node(&analyser)
                    .map_err(|e| GraphError::Connect(describe_js_error(&e)))?;
                analyser
                    .connect_with_audio_node(&context.destination())
                    .map_err(|e| GraphError::Connect(describe_js_error(&e)))?;
                Ok((analyser, source))
            },
            |context| {
                if let Err(err) = context.close() {
                    log_warn("visualizer", format!("close failed: {}", describe_js_error(&err)));
                }
            },
        )?;

        Ok(WebAnalysisGraph {
            context,
            analyser,
            _source: source,
        })
    }
}

pub struct WebAnalysisGraph {
    context: AudioContext,
    analyser: AnalyserNode,
    _source: MediaElementAudioSourceNode,
}

impl FrequencySource for WebAnalysisGraph {
    fn bin_count(&self) -> usize {
        self.analyser.frequency_bin_count() as usize
    }

    fn read_frequencies(&self, buffer: &mut [u8]) {
        self.analyser.get_byte_frequency_data(buffer);
    }
}

impl AnalysisGraph for WebAnalysisGraph {
    fn is_suspended(&self) -> bool {
        self.context.state() == AudioContextState::Suspended
    }

    fn resume(&self) {
        if let Err(err) = self.context.resume() {
            log_warn("visualizer", format!("resume failed: {}", describe_js_error(&err)));
        }
    }
}

/// 2D canvas looked up by id on every frame, so an unmounted canvas simply yields `None`.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    gradient: CanvasGradient,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn find(canvas_id: &str) -> Option<Self> {
        let canvas: HtmlCanvasElement = window()?
            .document()?
            .get_element_by_id(canvas_id)?
            .dyn_into()
            .ok()?;
        let context: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;

        let gradient = context.create_linear_gradient(0.0, height, 0.0, 0.0);
        gradient.add_color_stop(0.0, GRADIENT_BOTTOM).ok()?;
        gradient.add_color_stop(1.0, GRADIENT_TOP).ok()?;

        Some(Self {
            context,
            gradient,
            width,
            height,
        })
    }
}

impl SpectrumSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_bar(&mut self, bar: Bar) {
        self.context.set_fill_style_canvas_gradient(&self.gradient);
        self.context.fill_rect(bar.x, bar.y, bar.width, bar.height);
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct RafScheduler {
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&self) -> Option<i32> {
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        window()?
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&self, handle: i32) {
        if let Some(win) = window() {
            let _ = win.cancel_animation_frame(handle);
        }
    }
}

type WebEngine = VisualizerEngine<WebAnalysisBackend, RafScheduler>;

/// Browser-side visualizer: engine plus the requestAnimationFrame closure driving it.
pub struct WebVisualizer {
    engine: Rc<RefCell<WebEngine>>,
    callback: FrameCallback,
}

impl WebVisualizer {
    pub fn new(audio: HtmlAudioElement, canvas_id: &'static str) -> Self {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let engine = Rc::new(RefCell::new(VisualizerEngine::new(
            WebAnalysisBackend::new(audio),
            RafScheduler {
                callback: callback.clone(),
            },
        )));

        let weak: Weak<RefCell<WebEngine>> = Rc::downgrade(&engine);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(engine) = weak.upgrade() else {
                return;
            };
            let mut surface = CanvasSurface::find(canvas_id);
            engine.borrow_mut().on_frame(surface.as_mut());
        }) as Box<dyn FnMut()>));

        Self { engine, callback }
    }

    pub fn set_playing(&self, playing: bool) {
        self.engine.borrow_mut().set_playing(playing);
    }

    /// Cancel the pending frame and release the callback.
    pub fn dispose(&self) {
        self.engine.borrow_mut().dispose();
        self.callback.borrow_mut().take();
    }
}

impl Drop for WebVisualizer {
    fn drop(&mut self) {
        self.dispose();
    }
}
