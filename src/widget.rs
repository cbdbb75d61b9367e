use crate::animation::{AngleAnimation, Easing};
use crate::graphics::{draw_circle, draw_ship, ship_size, Canvas};
use crate::math::project;
use crate::orbit::OrbitController;
use crate::state::{DragSession, ViewConfig, MOVE_TRANSITION};
use crossterm::cursor::MoveTo;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

const BACKGROUND: Color = Color::Black;
const RING: Color = Color::Grey;
const SHIP: Color = Color::White;

/// What the main loop should do after an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Orbit game view
pub struct OrbitWidget {
    controller: OrbitController,
    drag: DragSession,
    animation: AngleAnimation,
    ease_out: Duration,
    /// Enable debug overlay
    debug: bool,
    canvas: Canvas,
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl OrbitWidget {
    pub fn new(config: &ViewConfig, columns: u16, rows: u16) -> Self {
        let controller = OrbitController::with_rotation_speed(config.rotation_speed);
        let animation = AngleAnimation::new(controller.angle());
        OrbitWidget {
            controller,
            drag: DragSession::default(),
            animation,
            ease_out: config.ease_out,
            debug: config.debug,
            canvas: Canvas::for_terminal(columns, rows),
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
        }
    }

    pub fn controller(&self) -> &OrbitController {
        &self.controller
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn displayed_angle(&self) -> f64 {
        self.animation.shown()
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Handle a terminal event
    pub fn event(&mut self, event: &Event) -> Control {
        match event {
            Event::Key(key_event) => return self.key(key_event),
            Event::Mouse(mouse_event) => self.mouse(mouse_event),
            Event::Resize(columns, rows) => {
                info!(columns, rows, "terminal resized");
                self.canvas = Canvas::for_terminal(*columns, *rows);
            }
            _ => {}
        }
        Control::Continue
    }

    fn key(&mut self, key_event: &KeyEvent) -> Control {
        if key_event.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        match key_event.code {
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.debug = !self.debug;
                debug!(debug = self.debug, "toggled debug overlay");
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                return Control::Quit;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
            _ => {}
        }
        Control::Continue
    }

    fn mouse(&mut self, mouse_event: &MouseEvent) {
        // Sample the middle of the cell in canvas pixels
        let x = mouse_event.column as f64 + 0.5;
        let y = mouse_event.row as f64 * 2.0 + 1.0;
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                let width = self.canvas.width() as f64;
                let zone = self.controller.on_pointer_move(x, width);
                self.drag.track([x, y], zone);
                self.animation
                    .retarget(self.controller.angle(), MOVE_TRANSITION, Easing::Linear);
                debug!(x, width, zone = zone.label(), angle = self.controller.angle(), "pointer move");
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag.end();
                self.controller.on_pointer_release();
                self.animation
                    .retarget(self.controller.angle(), self.ease_out, Easing::EaseOut);
                debug!(angle = self.controller.angle(), "pointer released");
            }
            _ => {}
        }
    }

    /// Advance presentation state by one frame
    pub fn tick(&mut self, dt: Duration) {
        self.animation.advance(dt);
    }

    /// Paint the view
    pub fn paint<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        let viewport = self.canvas.viewport();
        let projection = project(self.animation.shown(), viewport);

        self.canvas.clear();
        draw_circle(&mut self.canvas, viewport.center(), viewport.ring_radius(), RING);
        draw_ship(
            &mut self.canvas,
            [projection.x, projection.y],
            projection.heading,
            ship_size(viewport),
            SHIP,
        );

        self.flush_canvas(out)?;

        // Add debug info if debug mode is enabled
        if self.debug {
            let zone = self.drag.last_zone.map_or("-", |zone| zone.label());
            let lines = [
                format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
                format!(
                    "Angle: {:.4}, Shown: {:.4}, Heading: {:.4}",
                    self.controller.angle(),
                    self.animation.shown(),
                    projection.heading
                ),
                format!("Step: {:.4}", self.controller.rotation_speed()),
                format!("Ship: ({:.1}, {:.1})", projection.x, projection.y),
                format!("Zone: {}, Dragging: {}", zone, self.drag.active),
                format!("FPS: {:.2}", self.fps),
            ];
            queue!(out, SetForegroundColor(Color::White), SetBackgroundColor(BACKGROUND))?;
            for (row, text) in lines.iter().enumerate() {
                queue!(out, MoveTo(1, row as u16), Print(text))?;
            }
        }

        queue!(out, ResetColor)?;
        out.flush()
    }

    /// Writes the canvas as half-block glyphs, two pixels per cell
    fn flush_canvas<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut current: Option<(Color, Color)> = None;
        for row in 0..self.canvas.rows() {
            queue!(out, MoveTo(0, row as u16))?;
            for column in 0..self.canvas.width() {
                let (glyph, fg, bg) = match self.canvas.cell(column, row) {
                    (None, None) => (' ', SHIP, BACKGROUND),
                    (Some(top), None) => ('▀', top, BACKGROUND),
                    (None, Some(bottom)) => ('▄', bottom, BACKGROUND),
                    (Some(top), Some(bottom)) if top == bottom => ('█', top, BACKGROUND),
                    (Some(top), Some(bottom)) => ('▀', top, bottom),
                };
                if current != Some((fg, bg)) {
                    queue!(out, SetForegroundColor(fg), SetBackgroundColor(bg))?;
                    current = Some((fg, bg));
                }
                queue!(out, Print(glyph))?;
            }
        }
        Ok(())
    }
}
