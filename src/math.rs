use std::f64::consts::FRAC_PI_2;

/// Fraction of the shorter viewport side used as the orbit ring radius
pub const RING_RADIUS_FACTOR: f64 = 0.45;

/// Inset of the ship's path from the ring
pub const RING_INSET: f64 = 5.0;

/// Size of the display area
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    pub fn center(&self) -> [f64; 2] {
        [self.width / 2.0, self.height / 2.0]
    }

    pub fn shorter_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Radius of the drawn orbit ring
    pub fn ring_radius(&self) -> f64 {
        self.shorter_side() * RING_RADIUS_FACTOR
    }

    /// Radius of the circle the ship travels on
    pub fn orbit_radius(&self) -> f64 {
        self.ring_radius() - RING_INSET
    }
}

/// Screen position and facing of the ship
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

/// Projects an orbital angle onto the viewport
pub fn project(angle: f64, viewport: Viewport) -> Projection {
    let [cx, cy] = viewport.center();
    let radius = viewport.orbit_radius();
    let (sin_a, cos_a) = angle.sin_cos();
    Projection {
        x: cx + cos_a * radius,
        y: cy + sin_a * radius,
        heading: angle + FRAC_PI_2,
    }
}

/// Multiplies a 2x2 matrix by a 2-dimensional vector
pub fn multiply_matrix_vector(matrix: &[[f64; 2]; 2], vector: &[f64; 2]) -> [f64; 2] {
    let mut result = [0.0; 2];
    for i in 0..2 {
        for j in 0..2 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Rotation matrix for screen coordinates (y grows downward)
pub fn rotation_matrix(angle: f64) -> [[f64; 2]; 2] {
    let (sin_a, cos_a) = angle.sin_cos();
    [[cos_a, -sin_a], [sin_a, cos_a]]
}

/// Rotates `point` by `angle` and moves it to `origin`
pub fn place(point: [f64; 2], angle: f64, origin: [f64; 2]) -> [f64; 2] {
    let [x, y] = multiply_matrix_vector(&rotation_matrix(angle), &point);
    [x + origin[0], y + origin[1]]
}
