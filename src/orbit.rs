use crate::math::{project, Projection, Viewport};

/// Angle step applied per qualifying pointer move, in radians
pub const ROTATION_SPEED: f64 = 0.0055;

/// Pointer positions left of this fraction of the width turn the ship one way
pub const LEFT_ZONE_END: f64 = 0.45;

/// Pointer positions right of this fraction of the width turn it the other way
pub const RIGHT_ZONE_START: f64 = 0.55;

/// Horizontal band of the screen a pointer sample falls in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Left,
    Dead,
    Right,
}

impl Zone {
    /// Classifies `x` against the viewport width. Both boundaries are dead.
    pub fn classify(x: f64, width: f64) -> Self {
        if x > width * RIGHT_ZONE_START {
            Zone::Right
        } else if x < width * LEFT_ZONE_END {
            Zone::Left
        } else {
            Zone::Dead
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Zone::Left => "left",
            Zone::Dead => "dead",
            Zone::Right => "right",
        }
    }
}

/// Owns the ship's orbital angle and applies pointer input to it
#[derive(Clone, Debug)]
pub struct OrbitController {
    angle: f64,
    rotation_speed: f64,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self::with_rotation_speed(ROTATION_SPEED)
    }

    pub fn with_rotation_speed(rotation_speed: f64) -> Self {
        OrbitController {
            angle: 0.0,
            rotation_speed,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    /// Applies one pointer sample. The angle is never clamped or wrapped.
    pub fn on_pointer_move(&mut self, x: f64, width: f64) -> Zone {
        let zone = Zone::classify(x, width);
        match zone {
            Zone::Right => self.angle -= self.rotation_speed,
            Zone::Left => self.angle += self.rotation_speed,
            Zone::Dead => {}
        }
        zone
    }

    /// Pointer lifted. Leaves the angle alone; easing belongs to the view.
    pub fn on_pointer_release(&mut self) {}

    pub fn project(&self, viewport: Viewport) -> Projection {
        project(self.angle, viewport)
    }
}
