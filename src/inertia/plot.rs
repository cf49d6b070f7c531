/*!
# Plotting

Turns an [`InertiaSet`] into the finite point set one would draw: with a known size, every
point `(i, j)` with `i + j <= size` that lies above a generator; without a size, only the
generators. Rendering itself is left to external tools; [`InertiaPlot::write_points`] emits
whitespace separated `x y` lines that e.g. gnuplot reads directly.
*/

use std::{collections::BTreeSet, io::Write};

use super::*;

/// Rendering options handed to the plotting tool
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub point_size: f64,
    pub show_grid: bool,
    /// Range of both axes; derived from the inertia set if `None`
    pub axis_range: Option<(u32, u32)>,
    pub aspect_ratio: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            point_size: 70.0,
            show_grid: true,
            axis_range: None,
            aspect_ratio: 1.0,
        }
    }
}

impl PlotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_size(mut self, point_size: f64) -> Self {
        self.point_size = point_size;
        self
    }

    pub fn show_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    pub fn axis_range(mut self, min: u32, max: u32) -> Self {
        self.axis_range = Some((min, max));
        self
    }

    pub fn aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }
}

impl InertiaSet {
    /// Points to draw: all dominated points within `i + j <= size` if the size is known,
    /// otherwise just the generators
    pub fn plot_points(&self) -> BTreeSet<Point> {
        let mut points = self.generators().clone();

        if let Some(size) = self.size() {
            for (x, y) in self.iter().filter(|&(x, _)| x <= size) {
                for j in y..=size - x {
                    points.extend((x..=size - j).map(|i| (i, j)));
                }
            }
        }

        points
    }
}

/// Plot-ready points of an inertia set together with the options to draw them with
#[derive(Debug, Clone)]
pub struct InertiaPlot {
    points: BTreeSet<Point>,
    axis_range: (u32, u32),
    options: PlotOptions,
}

impl InertiaPlot {
    pub fn new(set: &InertiaSet, options: PlotOptions) -> Self {
        let axis_range = options.axis_range.unwrap_or_else(|| {
            let max = set
                .size()
                .unwrap_or_else(|| set.iter().map(|(x, _)| x).max().unwrap_or(0));
            (0, max)
        });

        Self {
            points: set.plot_points(),
            axis_range,
            options,
        }
    }

    pub fn points(&self) -> &BTreeSet<Point> {
        &self.points
    }

    /// Range of both axes
    pub fn axis_range(&self) -> (u32, u32) {
        self.axis_range
    }

    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    /// Writes one `x y` line per point
    pub fn write_points<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for (x, y) in &self.points {
            writeln!(writer, "{x} {y}")?;
        }
        Ok(())
    }
}
