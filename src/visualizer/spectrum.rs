/// Analyser window length; yields `FFT_SIZE / 2` frequency bins.
pub const FFT_SIZE: u32 = 256;
pub const SURFACE_WIDTH: u32 = 600;
pub const SURFACE_HEIGHT: u32 = 150;

const BAR_WIDTH_SCALE: f64 = 2.5;
const BAR_GAP: f64 = 2.0;
const HEIGHT_DIVISOR: f64 = 1.5;

pub const GRADIENT_BOTTOM: &str = "#FFD700";
pub const GRADIENT_TOP: &str = "#947600";

pub fn bin_count(fft_size: u32) -> usize {
    (fft_size / 2) as usize
}

/// One filled rectangle in surface coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Per-bin magnitude bytes (0-255) from an analyser.
pub trait FrequencySource {
    fn bin_count(&self) -> usize;
    fn read_frequencies(&self, buffer: &mut [u8]);
}

pub trait SpectrumSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self);
    /// Fill with the vertical bottom-to-top gradient.
    fn fill_bar(&mut self, bar: Bar);
}

/// Bars for one frame, left to right, anchored at the bottom edge.
pub fn layout_bars(samples: &[u8], width: f64, height: f64) -> Vec<Bar> {
    if samples.is_empty() {
        return Vec::new();
    }
    let bar_width = width / samples.len() as f64 * BAR_WIDTH_SCALE;
    let mut x = 0.0;
    samples
        .iter()
        .map(|&value| {
            let bar_height = value as f64 / HEIGHT_DIVISOR;
            let bar = Bar {
                x,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            };
            x += bar_width + BAR_GAP;
            bar
        })
        .collect()
}

/// Read, clear, draw. `buffer` is reused between frames.
pub fn paint_frame<F, S>(source: &F, surface: &mut S, buffer: &mut Vec<u8>)
where
    F: FrequencySource + ?Sized,
    S: SpectrumSurface + ?Sized,
{
    let bins = source.bin_count();
    buffer.resize(bins, 0);
    source.read_frequencies(buffer);

    surface.clear();
    for bar in layout_bars(buffer, surface.width(), surface.height()) {
        surface.fill_bar(bar);
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::Cell;

    pub struct ConstantSource {
        pub bins: usize,
        pub value: u8,
        pub reads: Cell<u32>,
    }

    impl ConstantSource {
        pub fn new(bins: usize, value: u8) -> Self {
            Self {
                bins,
                value,
                reads: Cell::new(0),
            }
        }
    }

    impl FrequencySource for ConstantSource {
        fn bin_count(&self) -> usize {
            self.bins
        }

        fn read_frequencies(&self, buffer: &mut [u8]) {
            self.reads.set(self.reads.get() + 1);
            buffer.fill(self.value);
        }
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub clears: u32,
        pub bars: Vec<Bar>,
    }

    impl SpectrumSurface for RecordingSurface {
        fn width(&self) -> f64 {
            SURFACE_WIDTH as f64
        }

        fn height(&self) -> f64 {
            SURFACE_HEIGHT as f64
        }

        fn clear(&mut self) {
            self.clears += 1;
            self.bars.clear();
        }

        fn fill_bar(&mut self, bar: Bar) {
            self.bars.push(bar);
        }
    }
}
