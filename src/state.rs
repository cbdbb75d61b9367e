use crate::orbit::{Zone, ROTATION_SPEED};
use std::time::Duration;

/// Length of the transition played after each pointer move
pub const MOVE_TRANSITION: Duration = Duration::from_millis(100);

/// Default length of the ease-out played when the pointer is lifted
pub const EASE_OUT: Duration = Duration::from_millis(500);

/// Settings the view is started with
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// Angle step per pointer move, in radians
    pub rotation_speed: f64,
    /// Duration of the release transition
    pub ease_out: Duration,
    /// Frames painted per second
    pub fps: u32,
    /// Show the debug overlay from the start
    pub debug: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            rotation_speed: ROTATION_SPEED,
            ease_out: EASE_OUT,
            fps: 60,
            debug: false,
        }
    }
}

impl ViewConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}

/// Pointer drag in progress, if any
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragSession {
    /// Is a button currently held?
    pub active: bool,
    /// Last pointer position seen during the drag
    pub last_position: Option<[f64; 2]>,
    /// Zone of the last pointer sample
    pub last_zone: Option<Zone>,
}

impl DragSession {
    pub fn track(&mut self, position: [f64; 2], zone: Zone) {
        self.active = true;
        self.last_position = Some(position);
        self.last_zone = Some(zone);
    }

    pub fn end(&mut self) {
        self.active = false;
        self.last_position = None;
    }
}
