use crate::math::{place, Viewport};
use crossterm::style::Color;
use std::f64::consts::PI;

/// Pixel buffer where each terminal cell holds two vertically stacked pixels
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Option<Color>>,
}

impl Canvas {
    /// Creates a canvas covering `columns x rows` terminal cells
    pub fn for_terminal(columns: u16, rows: u16) -> Self {
        Canvas::new(columns as usize, rows as usize * 2)
    }

    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f64, self.height as f64)
    }

    pub fn clear(&mut self) {
        self.pixels.fill(None);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            None
        }
    }

    /// Sets a pixel, ignoring coordinates outside the canvas
    pub fn plot(&mut self, x: isize, y: isize, color: Color) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            let offset = y as usize * self.width + x as usize;
            self.pixels[offset] = Some(color);
        }
    }

    /// Top and bottom pixel shown by the terminal cell at (`column`, `row`)
    pub fn cell(&self, column: usize, row: usize) -> (Option<Color>, Option<Color>) {
        (self.get(column, row * 2), self.get(column, row * 2 + 1))
    }

    pub fn rows(&self) -> usize {
        self.height.div_ceil(2)
    }
}

/// Draws a line between two points in the pixel buffer using Bresenham's algorithm
pub fn draw_line(canvas: &mut Canvas, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
    let (mut x0, mut y0, x1, y1) = (
        x0.round() as isize,
        y0.round() as isize,
        x1.round() as isize,
        y1.round() as isize,
    );
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy

    loop {
        canvas.plot(x0, y0, color);

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draws a circle outline by sampling its circumference
pub fn draw_circle(canvas: &mut Canvas, center: [f64; 2], radius: f64, color: Color) {
    if radius <= 0.0 {
        canvas.plot(center[0].round() as isize, center[1].round() as isize, color);
        return;
    }
    // Two samples per pixel of circumference leaves no gaps
    let steps = (4.0 * PI * radius).ceil().max(8.0) as usize;
    for step in 0..steps {
        let theta = step as f64 / steps as f64 * 2.0 * PI;
        let (sin_t, cos_t) = theta.sin_cos();
        canvas.plot(
            (center[0] + cos_t * radius).round() as isize,
            (center[1] + sin_t * radius).round() as isize,
            color,
        );
    }
}

/// Draws the ship as a triangle outline with its nose along `heading`
pub fn draw_ship(canvas: &mut Canvas, position: [f64; 2], heading: f64, size: f64, color: Color) {
    // Outline in ship space, nose on +x
    let outline = [
        [size, 0.0],
        [-size * 0.7, size * 0.6],
        [-size * 0.4, 0.0],
        [-size * 0.7, -size * 0.6],
    ];
    let corners: Vec<[f64; 2]> = outline
        .iter()
        .map(|&point| place(point, heading, position))
        .collect();
    for (i, start) in corners.iter().enumerate() {
        let end = corners[(i + 1) % corners.len()];
        draw_line(canvas, start[0], start[1], end[0], end[1], color);
    }
}

/// Nose-to-centre length of the ship for a viewport
pub fn ship_size(viewport: Viewport) -> f64 {
    (viewport.shorter_side() * 0.05).max(2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_canvas_doubles_rows() {
        let canvas = Canvas::for_terminal(80, 24);
        assert_eq!(canvas.width(), 80);
        assert_eq!(canvas.height(), 48);
        assert_eq!(canvas.rows(), 24);
    }

    #[test]
    fn line_endpoints_are_plotted() {
        let mut canvas = Canvas::new(10, 10);
        draw_line(&mut canvas, 1.0, 1.0, 8.0, 5.0, Color::White);
        assert_eq!(canvas.get(1, 1), Some(Color::White));
        assert_eq!(canvas.get(8, 5), Some(Color::White));
    }

    #[test]
    fn drawing_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        draw_line(&mut canvas, -10.0, -10.0, 20.0, 20.0, Color::White);
        draw_circle(&mut canvas, [2.0, 2.0], 30.0, Color::Grey);
        assert_eq!(canvas.get(0, 0), Some(Color::White));
        assert_eq!(canvas.get(3, 3), Some(Color::White));
        assert_eq!(canvas.get(4, 4), None);
    }

    #[test]
    fn circle_hits_cardinal_points() {
        let mut canvas = Canvas::new(21, 21);
        draw_circle(&mut canvas, [10.0, 10.0], 8.0, Color::Grey);
        assert_eq!(canvas.get(18, 10), Some(Color::Grey));
        assert_eq!(canvas.get(2, 10), Some(Color::Grey));
        assert_eq!(canvas.get(10, 2), Some(Color::Grey));
        assert_eq!(canvas.get(10, 18), Some(Color::Grey));
        assert_eq!(canvas.get(10, 10), None);
    }

    #[test]
    fn ship_nose_follows_heading() {
        let mut canvas = Canvas::new(20, 20);
        draw_ship(&mut canvas, [10.0, 10.0], PI / 2.0, 4.0, Color::White);
        // Heading of π/2 points down the screen
        assert_eq!(canvas.get(10, 14), Some(Color::White));
        assert_eq!(canvas.get(10, 6), None);
    }

    #[test]
    fn cell_pairs_pixels() {
        let mut canvas = Canvas::new(2, 4);
        canvas.plot(1, 3, Color::Red);
        assert_eq!(canvas.cell(1, 1), (None, Some(Color::Red)));
        canvas.clear();
        assert!(canvas.pixels.iter().all(|p| p.is_none()));
    }

    #[test]
    fn ship_size_has_floor() {
        assert_eq!(ship_size(Viewport::new(10.0, 10.0)), 2.0);
        assert_eq!(ship_size(Viewport::new(400.0, 200.0)), 10.0);
    }
}
