//! Terminal world-map rendering
//!
//! Draws sites and polylines on a character grid in Miller projection.
//! Polylines are plotted sample-by-sample; arc and equator sampling is
//! dense enough that no line rasterization is needed.

use std::fmt;

use log::debug;

use crate::projection::{self, MapXY};
use crate::sites::SiteCatalog;

/// Fallback grid width when the terminal size cannot be detected
const DEFAULT_WIDTH: usize = 100;
/// Grid height; kept fixed so the aspect ratio suits character cells
const DEFAULT_HEIGHT: usize = 30;

/// A character-grid world map
///
/// The grid covers the full Miller-projected extent: the x axis spans
/// longitudes [-180°, 180°] and the y axis the projected latitude range.
/// Later plots overwrite earlier ones, so draw lines first and markers
/// last.
pub struct MapCanvas {
    width: usize,
    height: usize,
    grid: Vec<Vec<char>>,
}

impl MapCanvas {
    /// Create a canvas with an explicit grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            grid: vec![vec![' '; width]; height],
        }
    }

    /// Create a canvas sized to the current terminal
    ///
    /// Falls back to a fixed width when no terminal is attached.
    pub fn sized_to_terminal() -> Self {
        let width = term_size::dimensions()
            .map(|(w, _)| w.saturating_sub(4).clamp(40, 160))
            .unwrap_or(DEFAULT_WIDTH);
        Self::new(width, DEFAULT_HEIGHT)
    }

    /// Grid width in characters
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in characters
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid cell for a projected coordinate
    ///
    /// Longitudes outside [-180°, 180°] wrap around the map edge, so an
    /// unwrapped polyline crossing the antimeridian reenters on the other
    /// side as it would on a repeating world strip.
    fn cell(&self, xy: MapXY) -> (usize, usize) {
        use std::f64::consts::PI;

        let max_y = projection::max_y();
        let col_f = (xy.x + PI) / (2.0 * PI) * self.width as f64;
        let col = (col_f.floor().rem_euclid(self.width as f64)) as usize;

        let row_f = (max_y - xy.y) / (2.0 * max_y) * self.height as f64;
        let row = (row_f.floor() as isize).clamp(0, self.height as isize - 1) as usize;

        (row, col)
    }

    /// Plot a single glyph at a geographic position
    pub fn plot_point(&mut self, lat_deg: f64, lon_deg: f64, glyph: char) {
        let (row, col) = self.cell(projection::forward_degrees(lat_deg, lon_deg));
        self.grid[row][col] = glyph;
    }

    /// Plot a polyline given parallel latitude/longitude degree arrays
    ///
    /// Accepts unwrapped longitudes; each sample is projected and plotted
    /// independently.
    pub fn plot_polyline(&mut self, lats_deg: &[f64], lons_deg: &[f64], glyph: char) {
        debug!("plotting polyline with {} samples", lats_deg.len());
        for (&lat, &lon) in lats_deg.iter().zip(lons_deg.iter()) {
            self.plot_point(lat, lon, glyph);
        }
    }

    /// Plot every site in a catalog with the given marker glyph
    pub fn plot_sites(&mut self, catalog: &SiteCatalog, glyph: char) {
        for site in catalog.iter() {
            self.plot_point(
                site.position.lat_degrees(),
                site.position.lon_degrees(),
                glyph,
            );
        }
    }
}

impl fmt::Display for MapCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}", "-".repeat(self.width + 2))?;
        for row in &self.grid {
            write!(f, "  |")?;
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  {}", "-".repeat(self.width + 2))?;
        Ok(())
    }
}
