//! Viewport and coordinate transformation for the seating canvas.
//!
//! Converts between world coordinates (the plan, where tables have their `x`/`y`) and
//! screen coordinates. Both spaces use a top-left origin with Y growing downward, so the
//! mapping is a uniform scale followed by a translation:
//!
//! ```text
//! screen = world * zoom + pan
//! world  = (screen - pan) / zoom
//! ```

use std::fmt;

use crate::geometry::{seat_positions, GeometryParams};
use crate::model::{Layout, Point, SeatRef, Table};

/// Zoom bounds and step factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    /// Factor applied by one zoom-in step.
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.25,
            max: 4.0,
            step: 1.2,
        }
    }
}

impl ZoomLimits {
    /// Returns usable limits: bounds must be finite and positive and the step greater
    /// than one, otherwise the default is used. Swapped bounds are put in order.
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let (mut min, mut max) = (self.min, self.max);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && max > 0.0) {
            min = defaults.min;
            max = defaults.max;
        } else if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        let step = if self.step.is_finite() && self.step > 1.0 {
            self.step
        } else {
            defaults.step
        };
        Self { min, max, step }
    }
}

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    limits: ZoomLimits,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates a viewport at 100% with no pan.
    pub fn new() -> Self {
        Self::with_limits(ZoomLimits::default())
    }

    /// Creates a viewport bounded by `limits`, normalised with [`ZoomLimits::normalized`].
    pub fn with_limits(limits: ZoomLimits) -> Self {
        let limits = limits.normalized();
        Self {
            zoom: 1.0_f64.clamp(limits.min, limits.max),
            pan_x: 0.0,
            pan_y: 0.0,
            limits,
        }
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the configured limits. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.limits.min, self.limits.max);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * self.limits.step);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / self.limits.step);
    }

    /// Resets zoom to 1.0 (100%).
    pub fn reset_zoom(&mut self) {
        self.set_zoom(1.0);
    }

    /// Zooms while keeping the world point under `screen_point` fixed on screen.
    pub fn zoom_at(&mut self, screen_point: Point, zoom: f64) {
        let anchor = self.screen_to_world(screen_point);
        self.set_zoom(zoom);
        self.pan_x = screen_point.x - anchor.x * self.zoom;
        self.pan_y = screen_point.y - anchor.y * self.zoom;
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    pub fn reset_pan(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Resets both zoom and pan.
    pub fn reset(&mut self) {
        self.reset_zoom();
        self.reset_pan();
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.zoom + self.pan_x,
            world.y * self.zoom + self.pan_y,
        )
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan_x) / self.zoom,
            (screen.y - self.pan_y) / self.zoom,
        )
    }

    /// Maps a point in `table`'s local space to the screen.
    pub fn table_to_screen(&self, table: &Table, local: Point) -> Point {
        self.world_to_screen(Point::new(table.x + local.x, table.y + local.y))
    }

    /// Finds the seat whose marker contains `screen_point`.
    ///
    /// Later tables are drawn on top, so they are hit first.
    pub fn seat_at(
        &self,
        layout: &Layout,
        params: &GeometryParams,
        screen_point: Point,
    ) -> Option<SeatRef> {
        let world = self.screen_to_world(screen_point);
        layout.tables().iter().rev().find_map(|table| {
            let local = Point::new(world.x - table.x, world.y - table.y);
            seat_positions(table, params, 1.0)
                .iter()
                .zip(&table.seats)
                .find(|(pos, _)| pos.contains(local))
                .map(|(_, seat)| SeatRef::new(table.id, seat.id))
        })
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}
