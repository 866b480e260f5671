use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::ShellError;
use crate::heat_map::HeatMap;
use crate::types::FigureSize;

/// Fractions of the figure taken by the single axes region.
const AXES_LEFT: f32 = 0.125;
const AXES_RIGHT: f32 = 0.9;
const AXES_BOTTOM: f32 = 0.11;
const AXES_TOP: f32 = 0.88;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const FRAME: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxesLimits {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Default for AxesLimits {
    fn default() -> Self {
        Self {
            x: (0.0, 1.0),
            y: (0.0, 1.0),
        }
    }
}

impl AxesLimits {
    fn span(&self) -> (f64, f64) {
        ((self.x.1 - self.x.0).abs(), (self.y.1 - self.y.0).abs())
    }
}

/// Pixel rectangle inside the figure, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl PixelRect {
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// Drawable figure with one axes region.
///
/// The window reads `generation` to decide when the texture needs a fresh
/// upload; it changes only on `redraw`.
pub struct PlotCanvas {
    figure: FigureSize,
    limits: AxesLimits,
    image: Option<HeatMap>,
    generation: u64,
}

impl PlotCanvas {
    pub fn new(figure: FigureSize) -> Self {
        Self {
            figure,
            limits: AxesLimits::default(),
            image: None,
            generation: 0,
        }
    }

    pub fn limits(&self) -> AxesLimits {
        self.limits
    }

    pub fn image(&self) -> Option<&HeatMap> {
        self.image.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) {
        self.limits.x = (min, max);
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) {
        self.limits.y = (min, max);
    }

    /// Drops whatever is drawn on the axes. Limits are kept.
    pub fn clear(&mut self) {
        self.image = None;
    }

    pub fn draw_heat_map(&mut self, heat_map: HeatMap) {
        self.image = Some(heat_map);
    }

    pub fn redraw(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Axes region in figure pixels.
    pub fn axes_rect(&self) -> PixelRect {
        let [w, h] = self.figure.pixels();
        let (w, h) = (w as f32, h as f32);
        PixelRect {
            x0: AXES_LEFT * w,
            y0: (1.0 - AXES_TOP) * h,
            x1: AXES_RIGHT * w,
            y1: (1.0 - AXES_BOTTOM) * h,
        }
    }

    /// Data box inside the axes region, shrunk to keep square cells.
    pub fn data_rect(&self) -> PixelRect {
        let axes = self.axes_rect();
        let (span_x, span_y) = self.limits.span();
        if span_x <= 0.0 || span_y <= 0.0 {
            return axes;
        }

        let scale = (axes.width() / span_x as f32).min(axes.height() / span_y as f32);
        let w = span_x as f32 * scale;
        let h = span_y as f32 * scale;
        let x0 = axes.x0 + (axes.width() - w) * 0.5;
        let y0 = axes.y0 + (axes.height() - h) * 0.5;
        PixelRect {
            x0,
            y0,
            x1: x0 + w,
            y1: y0 + h,
        }
    }

    /// Rasterises the whole figure: background, the image with nearest
    /// sampling, and the axes frame.
    pub fn render_figure(&self) -> RgbaImage {
        let [w, h] = self.figure.pixels();
        let mut out = RgbaImage::from_pixel(w, h, BACKGROUND);
        let rect = self.data_rect();

        if let Some(heat_map) = &self.image {
            self.paint_heat_map(&mut out, heat_map, rect);
        }

        let x0 = rect.x0.floor().max(0.0) as u32;
        let y0 = rect.y0.floor().max(0.0) as u32;
        let x1 = (rect.x1.ceil() as u32).min(w.saturating_sub(1));
        let y1 = (rect.y1.ceil() as u32).min(h.saturating_sub(1));
        for x in x0..=x1 {
            out.put_pixel(x, y0, FRAME);
            out.put_pixel(x, y1, FRAME);
        }
        for y in y0..=y1 {
            out.put_pixel(x0, y, FRAME);
            out.put_pixel(x1, y, FRAME);
        }

        out
    }

    fn paint_heat_map(&self, out: &mut RgbaImage, heat_map: &HeatMap, rect: PixelRect) {
        let size = heat_map.size();
        if size == 0 || rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }

        let rgba = heat_map.to_rgba8();
        let (x_min, x_max) = self.limits.x;
        let (y_min, y_max) = self.limits.y;
        let px_x = rect.width() as f64 / (x_max - x_min);
        let px_y = rect.height() as f64 / (y_max - y_min);

        let start_x = rect.x0.floor().max(0.0) as u32;
        let start_y = rect.y0.floor().max(0.0) as u32;
        let end_x = (rect.x1.ceil() as u32).min(out.width());
        let end_y = (rect.y1.ceil() as u32).min(out.height());

        for py in start_y..end_y {
            let data_y = y_max - (py as f64 + 0.5 - rect.y0 as f64) / px_y;
            if data_y < 0.0 || data_y >= size as f64 {
                continue;
            }
            // to_rgba8 stores the top data row first.
            let row = size - 1 - data_y.floor() as usize;

            for px in start_x..end_x {
                let data_x = x_min + (px as f64 + 0.5 - rect.x0 as f64) / px_x;
                if data_x < 0.0 || data_x >= size as f64 {
                    continue;
                }
                let col = data_x.floor() as usize;
                let offset = (row * size + col) * 4;
                out.put_pixel(
                    px,
                    py,
                    Rgba([rgba[offset], rgba[offset + 1], rgba[offset + 2], 255]),
                );
            }
        }
    }

    /// Writes the figure as PNG, replacing any existing file.
    pub fn save_png(&self, path: &Path) -> Result<(), ShellError> {
        self.render_figure()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| ShellError::Save {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn canvas_with_field(size: usize) -> PlotCanvas {
        let mut canvas = PlotCanvas::new(FigureSize::default());
        canvas.set_xlim(0.0, size as f64);
        canvas.set_ylim(0.0, size as f64);
        let mut rng = StdRng::seed_from_u64(3);
        canvas.draw_heat_map(HeatMap::random(size, &mut rng));
        canvas.redraw();
        canvas
    }

    #[test]
    fn figure_matches_configured_size() {
        let canvas = PlotCanvas::new(FigureSize::default());
        let figure = canvas.render_figure();
        assert_eq!(figure.dimensions(), (500, 400));
    }

    #[test]
    fn data_rect_is_square_for_square_limits() {
        let canvas = canvas_with_field(10);
        let rect = canvas.data_rect();
        assert!((rect.width() - rect.height()).abs() < 1.0e-3);
        let axes = canvas.axes_rect();
        assert!(rect.x0 >= axes.x0 && rect.x1 <= axes.x1);
    }

    #[test]
    fn rendered_corners_follow_lower_origin() {
        let canvas = canvas_with_field(4);
        let heat_map = canvas.image().unwrap();
        let rect = canvas.data_rect();
        let figure = canvas.render_figure();

        let cell = rect.width() / 4.0;
        let bottom_left = figure.get_pixel(
            (rect.x0 + cell * 0.5) as u32,
            (rect.y1 - cell * 0.5) as u32,
        );
        let [r, g, b] = heat_map.color_at(0, 0);
        assert_eq!(bottom_left.0, [r, g, b, 255]);

        let top_right = figure.get_pixel(
            (rect.x1 - cell * 0.5) as u32,
            (rect.y0 + cell * 0.5) as u32,
        );
        let [r, g, b] = heat_map.color_at(3, 3);
        assert_eq!(top_right.0, [r, g, b, 255]);
    }

    #[test]
    fn clear_removes_image_but_keeps_limits() {
        let mut canvas = canvas_with_field(6);
        canvas.clear();
        assert!(canvas.image().is_none());
        assert_eq!(canvas.limits().x, (0.0, 6.0));
    }

    #[test]
    fn redraw_bumps_generation() {
        let mut canvas = PlotCanvas::new(FigureSize::default());
        assert_eq!(canvas.generation(), 0);
        canvas.redraw();
        canvas.redraw();
        assert_eq!(canvas.generation(), 2);
    }
}
