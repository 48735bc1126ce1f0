//! Vector algebra kernels shared by the curve evaluator and scene builders.

use std::ops::{Add, Mul, Neg, Sub};

use kurbo::{Affine, Point};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Owned 3D vector used for world-space geometry.
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Build from components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Cross product.
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Squared Euclidean length.
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len == 0.0 { None } else { Some(self * (1.0 / len)) }
    }

    /// Rotate about a unit-length `axis` by `angle` radians (Rodrigues'
    /// rotation formula).
    pub fn rotated_about(self, axis: Self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        self * cos + axis.cross(self) * sin + axis * (axis.dot(self) * (1.0 - cos))
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Rotate `p` about `pivot` by `angle` radians.
pub fn rotate_about(p: Point, pivot: Point, angle: f64) -> Point {
    let pivot = pivot.to_vec2();
    // T(pivot) * R(angle) * T(-pivot)
    let transform = Affine::translate(pivot) * Affine::rotate(angle) * Affine::translate(-pivot);
    transform * p
}

/// Reflect `p` across the line through `a` and `b`.
///
/// A degenerate line (`a == b`) reflects through the point `a`.
pub fn reflect_across_line(p: Point, a: Point, b: Point) -> Point {
    let dir = b - a;
    let len2 = dir.hypot2();
    if len2 == 0.0 {
        return a + (a - p);
    }
    let t = (p - a).dot(dir) / len2;
    let foot = a + dir * t;
    foot + (foot - p)
}
