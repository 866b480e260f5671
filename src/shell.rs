use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::actions::{Action, Handler};
use crate::canvas::PlotCanvas;
use crate::error::ShellError;
use crate::heat_map::HeatMap;
use crate::types::{FigureSize, ParameterFields};

pub const PLOT_FILE_NAME: &str = "plot.png";
pub const MAX_CANVAS_SIZE: usize = 4096;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Drawn { size: usize },
    Saved(PathBuf),
    CloseRequested,
    Ignored,
}

/// Window state that does not depend on the UI toolkit: the parameter
/// fields, the plotting canvas and the handlers that act on them.
pub struct Shell {
    pub fields: ParameterFields,
    canvas: PlotCanvas,
    rng: StdRng,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            fields: ParameterFields::default(),
            canvas: PlotCanvas::new(FigureSize::default()),
            rng,
        }
    }

    pub fn canvas(&self) -> &PlotCanvas {
        &self.canvas
    }

    /// Reads the canvas size field and replaces the canvas content with a
    /// fresh random field of that side length.
    pub fn run(&mut self) -> Result<usize, ShellError> {
        let size = parse_canvas_size(&self.fields.canvas_size)?;
        let heat_map = HeatMap::random(size, &mut self.rng);

        self.canvas.set_xlim(0.0, size as f64);
        self.canvas.set_ylim(0.0, size as f64);
        self.canvas.clear();
        self.canvas.draw_heat_map(heat_map);
        self.canvas.redraw();

        log::info!("drew {size}x{size} random field");
        Ok(size)
    }

    pub fn save(&self) -> Result<PathBuf, ShellError> {
        let path = PathBuf::from(PLOT_FILE_NAME);
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ShellError> {
        self.canvas.save_png(path)?;
        log::info!("saved plot to {}", path.display());
        Ok(())
    }

    pub fn trigger(&mut self, action: Action) -> Result<ActionOutcome, ShellError> {
        match action.handler() {
            Some(Handler::Run) => self.run().map(|size| ActionOutcome::Drawn { size }),
            Some(Handler::Save) => self.save().map(ActionOutcome::Saved),
            Some(Handler::Close) => Ok(ActionOutcome::CloseRequested),
            None => {
                log::debug!("{:?} has no handler", action.label());
                Ok(ActionOutcome::Ignored)
            }
        }
    }
}

pub fn parse_canvas_size(input: &str) -> Result<usize, ShellError> {
    let size = input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&size| size > 0)
        .ok_or_else(|| ShellError::InvalidCanvasSize {
            input: input.to_owned(),
        })?;

    if size > MAX_CANVAS_SIZE {
        return Err(ShellError::CanvasTooLarge {
            size,
            max: MAX_CANVAS_SIZE,
        });
    }

    Ok(size)
}
