use crate::core::{SeriesScale, project_series};
use crate::render::{PathBuilder, Renderer};

use super::LineGraph;

impl<R: Renderer> LineGraph<R> {
    pub(super) fn series_scale(&self) -> SeriesScale {
        SeriesScale::new(self.minmax, self.size, self.datapoints.len())
    }

    /// Pixel x of datapoint `index`: `index / (n - 1) * width`.
    #[must_use]
    pub fn x_of(&self, index: usize) -> f64 {
        self.series_scale().x_of(index)
    }

    /// Pixel y of datapoint `index`, flipped so the range max sits at row 0.
    ///
    /// Returns NaN for an out-of-bounds index.
    #[must_use]
    pub fn y_of(&self, index: usize) -> f64 {
        let value = self.datapoints.get(index).copied().unwrap_or(f64::NAN);
        self.series_scale().y_of(value)
    }

    /// Rebuilds the stroke and fill paths from the datapoints.
    ///
    /// The overlay is cleared too and redrawn at the last pointer position
    /// when the pointer is still over the surface.
    pub fn update(&mut self) {
        let vertices = project_series(&self.datapoints, self.series_scale());
        let width = self.size.width_px();
        let height = self.size.height_px();

        for id in [self.shapes.stroke, self.shapes.fill] {
            let path = &mut self.canvas[id];
            path.clear();
            trace_polyline(path, vertices.iter().map(|vertex| (vertex.x, vertex.y)));
        }

        let fill = &mut self.canvas[self.shapes.fill];
        if vertices.len() >= 2 {
            fill.line_to(width, height, false).line_to(0.0, height, false);
        }
        // Zero-sized circle pinning the bounding box when the silhouette collapses.
        fill.circle(0.0, 0.0, 0.0, 0.0, false);

        self.refresh_overlay();
    }

    /// Clears the overlay, then redraws it at the last pointer x while the
    /// pointer is still over the surface. The resolved index is recorded
    /// without reporting it.
    pub(super) fn refresh_overlay(&mut self) {
        self.canvas[self.shapes.overlay].clear();
        if let Some(pointer_x) = self.hover.last_pointer_x() {
            let sample = self.update_contextual_line(pointer_x);
            self.hover.resync_index(sample.index);
        }
    }

    /// Redraws the hover marker at `(x, y)`: two bars leaving a gap of
    /// radius `4 * line_size / 2` around `y`, plus a circle of that radius.
    pub(super) fn draw_overlay(&mut self, x: f64, y: f64) {
        let half = self.style.line_size / 2.0;
        let radius = 4.0 * half;
        let height = self.size.height_px();

        let x_left = x - half;
        let x_right = x + half;
        let upper_end = y - radius;
        let lower_start = y + radius;

        self.canvas[self.shapes.overlay]
            .clear()
            .force_absolute(true)
            .move_to(x_left, 0.0, true)
            .line_to(x_right, 0.0, true)
            .line_to(x_right, upper_end, true)
            .line_to(x_left, upper_end, true)
            .close()
            .move_to(x_left, lower_start, true)
            .line_to(x_right, lower_start, true)
            .line_to(x_right, height, true)
            .line_to(x_left, height, true)
            .close()
            .force_absolute(false)
            .circle(x, y, radius, radius, false);
    }
}

fn trace_polyline(path: &mut PathBuilder, vertices: impl Iterator<Item = (f64, f64)>) {
    for (index, (x, y)) in vertices.enumerate() {
        if index == 0 {
            path.move_to(x, y, false);
        } else {
            path.line_to(x, y, false);
        }
    }
}
