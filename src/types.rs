/// Text contents of the run toolbar fields.
///
/// Only `canvas_size` is read by a handler. The others are kept as typed
/// strings so the window can edit them in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterFields {
    pub sim_end_time: String,
    pub sim_delta_time: String,
    pub canvas_size: String,
    pub canvas_scale: String,
}

impl Default for ParameterFields {
    fn default() -> Self {
        Self {
            sim_end_time: "1000".to_owned(),
            sim_delta_time: "10".to_owned(),
            canvas_size: "10".to_owned(),
            canvas_scale: "1".to_owned(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WindowSettings {
    pub title: &'static str,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Potential Fractals",
            inner_size: [1000.0, 1000.0],
            min_inner_size: [640.0, 480.0],
        }
    }
}

/// Figure geometry in inches and dots per inch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
    pub dpi: f32,
}

impl FigureSize {
    pub fn pixels(&self) -> [u32; 2] {
        [
            (self.width * self.dpi).round() as u32,
            (self.height * self.dpi).round() as u32,
        ]
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 4.0,
            dpi: 100.0,
        }
    }
}
