//! A sink that draws a line-with-markers chart as text.

use super::{Plot, PlotSink, RenderConfig};
use std::io::{self, Stdout, Write};

/// The width of the column that holds the y-axis tick labels.
const TICK_WIDTH: usize = 8;

/// The symbol used for the background grid.
const GRID_CHAR: char = '+';

/// Draws charts into the writer 'out'.
pub struct TerminalPlot<W: Write> {
    out: W,
}

impl TerminalPlot<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalPlot<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Maps the value 'val' in the range [lo, lo + span] to a cell in [0, cells).
fn to_cell(val: f64, lo: f64, span: f64, cells: usize) -> usize {
    let pos = ((val - lo) / span * (cells - 1) as f64).round();
    (pos.max(0.) as usize).min(cells - 1)
}

/// A grid of characters, indexed by row from the top.
struct Canvas {
    cells: Vec<Vec<char>>,
}

impl Canvas {
    fn new(cols: usize, rows: usize) -> Self {
        Self {
            cells: vec![vec![' '; cols]; rows],
        }
    }

    fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Place 'c' at column 'col', 'row' cells above the bottom.
    fn put(&mut self, col: usize, row: usize, c: char) {
        let top = self.rows() - 1 - row;
        self.cells[top][col] = c;
    }

    /// Draw a straight segment between two cells.
    fn segment(&mut self, from: (usize, usize), to: (usize, usize), c: char) {
        let (c0, r0) = (from.0 as i64, from.1 as i64);
        let (c1, r1) = (to.0 as i64, to.1 as i64);
        let steps = (c1 - c0).abs().max((r1 - r0).abs());
        if steps == 0 {
            return;
        }
        for s in 0..=steps {
            let col = c0 as f64 + (c1 - c0) as f64 * s as f64 / steps as f64;
            let row = r0 as f64 + (r1 - r0) as f64 * s as f64 / steps as f64;
            self.put(col.round() as usize, row.round() as usize, c);
        }
    }

    fn line(&self, row: usize) -> String {
        self.cells[row].iter().collect()
    }
}

impl<W: Write> PlotSink for TerminalPlot<W> {
    fn render(
        &mut self,
        plot: &Plot<'_>,
        config: &RenderConfig,
    ) -> io::Result<()> {
        writeln!(self.out, "{}", plot.title())?;

        let points: Vec<(f64, f64)> = plot
            .points()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        if points.is_empty() {
            writeln!(self.out, "-- empty --")?;
            return Ok(());
        }

        let cols = config.columns();
        let rows = config.rows();

        // Find the ranges of the axes. The y axis always starts at zero.
        let mut x_lo = f64::INFINITY;
        let mut x_hi = f64::NEG_INFINITY;
        let mut y_lo: f64 = 0.;
        let mut y_hi = f64::NEG_INFINITY;
        for (x, y) in &points {
            x_lo = x_lo.min(*x);
            x_hi = x_hi.max(*x);
            y_lo = y_lo.min(*y);
            y_hi = y_hi.max(*y);
        }
        let x_span = if x_hi > x_lo { x_hi - x_lo } else { 1. };
        if y_hi <= y_lo {
            y_hi = y_lo + 1.;
        }
        let y_span = y_hi - y_lo;

        let mut canvas = Canvas::new(cols, rows);
        if config.grid_lines {
            for q in 0..=4 {
                let col = q * (cols - 1) / 4;
                for r in 0..=4 {
                    canvas.put(col, r * (rows - 1) / 4, GRID_CHAR);
                }
            }
        }

        let cells: Vec<(usize, usize)> = points
            .iter()
            .map(|(x, y)| {
                (
                    to_cell(*x, x_lo, x_span, cols),
                    to_cell(*y, y_lo, y_span, rows),
                )
            })
            .collect();

        for pair in cells.windows(2) {
            canvas.segment(pair[0], pair[1], config.line);
        }
        for (col, row) in &cells {
            canvas.put(*col, *row, config.marker);
        }

        writeln!(self.out, "{}", config.y_label)?;
        for row in 0..rows {
            let tick = if row == 0 {
                format!("{:.3}", y_hi)
            } else if row == rows - 1 {
                format!("{:.3}", y_lo)
            } else {
                String::new()
            };
            writeln!(
                self.out,
                "{:>width$} |{}",
                tick,
                canvas.line(row),
                width = TICK_WIDTH
            )?;
        }

        writeln!(
            self.out,
            "{:>width$} +{}",
            "",
            "-".repeat(cols),
            width = TICK_WIDTH
        )?;

        let left = format!("{}", x_lo);
        let right = format!("{}", x_lo + x_span);
        let gap = cols.saturating_sub(left.len() + right.len());
        writeln!(
            self.out,
            "{:>width$}  {}{}{}",
            "",
            left,
            " ".repeat(gap),
            right,
            width = TICK_WIDTH
        )?;

        let pad = cols.saturating_sub(config.x_label.len()) / 2;
        writeln!(
            self.out,
            "{:>width$}  {}{}",
            "",
            " ".repeat(pad),
            config.x_label,
            width = TICK_WIDTH
        )?;
        self.out.flush()
    }
}
