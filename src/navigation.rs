use egui_plot::PlotBounds;

const MAX_VIEWS: usize = 64;

/// Visible data rectangle of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl ViewBounds {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Self { min, max }
    }

    /// Equal up to a small fraction of the view span, so sub-pixel jitter
    /// from the plot's aspect fitting does not count as navigation.
    pub fn approx_eq(&self, other: &ViewBounds) -> bool {
        let span = (self.max[0] - self.min[0])
            .abs()
            .max((self.max[1] - self.min[1]).abs())
            .max(f64::EPSILON);
        let tol = span * 1.0e-6;
        (0..2).all(|axis| {
            (self.min[axis] - other.min[axis]).abs() <= tol
                && (self.max[axis] - other.max[axis]).abs() <= tol
        })
    }

    pub fn to_plot_bounds(self) -> PlotBounds {
        PlotBounds::from_min_max(self.min, self.max)
    }
}

impl From<&PlotBounds> for ViewBounds {
    fn from(bounds: &PlotBounds) -> Self {
        Self::new(bounds.min(), bounds.max())
    }
}

/// Back/forward stack of canvas views. Entry 0 is the home view.
#[derive(Clone, Debug)]
pub struct ViewHistory {
    views: Vec<ViewBounds>,
    index: usize,
}

impl ViewHistory {
    pub fn new(home: ViewBounds) -> Self {
        Self {
            views: vec![home],
            index: 0,
        }
    }

    /// Drops all history and starts over from a new home view.
    pub fn reset(&mut self, home: ViewBounds) {
        self.views.clear();
        self.views.push(home);
        self.index = 0;
    }

    pub fn current(&self) -> ViewBounds {
        self.views[self.index]
    }

    /// Records a new view. Anything ahead of the cursor is discarded.
    /// Returns false if the view matches the current one.
    pub fn push(&mut self, view: ViewBounds) -> bool {
        if self.current().approx_eq(&view) {
            return false;
        }

        self.views.truncate(self.index + 1);
        self.views.push(view);
        if self.views.len() > MAX_VIEWS {
            // Keep the home view.
            self.views.remove(1);
        }
        self.index = self.views.len() - 1;
        true
    }

    /// Overwrites the current entry, used once the plot has fitted a
    /// requested view to its aspect ratio.
    pub fn replace_current(&mut self, view: ViewBounds) {
        self.views[self.index] = view;
    }

    pub fn home(&mut self) -> ViewBounds {
        let home = self.views[0];
        self.push(home);
        home
    }

    pub fn back(&mut self) -> Option<ViewBounds> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<ViewBounds> {
        if self.index + 1 >= self.views.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.views.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(x0: f64, x1: f64) -> ViewBounds {
        ViewBounds::new([x0, x0], [x1, x1])
    }

    #[test]
    fn back_and_forward_walk_the_stack() {
        let mut history = ViewHistory::new(view(0.0, 10.0));
        assert!(history.push(view(2.0, 8.0)));
        assert!(history.push(view(3.0, 5.0)));

        assert_eq!(history.back(), Some(view(2.0, 8.0)));
        assert_eq!(history.back(), Some(view(0.0, 10.0)));
        assert_eq!(history.back(), None);
        assert!(history.can_go_forward());

        assert_eq!(history.forward(), Some(view(2.0, 8.0)));
        assert_eq!(history.forward(), Some(view(3.0, 5.0)));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn pushing_after_back_drops_forward_entries() {
        let mut history = ViewHistory::new(view(0.0, 10.0));
        history.push(view(2.0, 8.0));
        history.push(view(3.0, 5.0));
        history.back();

        history.push(view(1.0, 4.0));
        assert!(!history.can_go_forward());
        assert_eq!(history.back(), Some(view(2.0, 8.0)));
    }

    #[test]
    fn unchanged_view_is_not_recorded() {
        let mut history = ViewHistory::new(view(0.0, 10.0));
        assert!(!history.push(view(0.0, 10.0 + 1.0e-9)));
        assert!(!history.can_go_back());
    }

    #[test]
    fn home_returns_first_view_and_keeps_history() {
        let mut history = ViewHistory::new(view(0.0, 10.0));
        history.push(view(4.0, 6.0));

        assert_eq!(history.home(), view(0.0, 10.0));
        assert_eq!(history.current(), view(0.0, 10.0));
        assert_eq!(history.back(), Some(view(4.0, 6.0)));
    }

    #[test]
    fn reset_starts_a_fresh_stack() {
        let mut history = ViewHistory::new(view(0.0, 10.0));
        history.push(view(4.0, 6.0));
        history.reset(view(0.0, 3.0));

        assert_eq!(history.current(), view(0.0, 3.0));
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn stack_is_bounded_and_keeps_home() {
        let mut history = ViewHistory::new(view(0.0, 1000.0));
        for step in 1..=(MAX_VIEWS * 2) {
            history.push(view(step as f64, 1000.0));
        }

        let mut steps = 0;
        while history.back().is_some() {
            steps += 1;
        }
        assert_eq!(steps, MAX_VIEWS - 1);
        assert_eq!(history.current(), view(0.0, 1000.0));
    }
}
