use approx::assert_relative_eq;
use std::ops::{Add, Mul, Sub};

pub type Float = f32;

// Minimal affine point/vector pair for exercising the kernel with 3-D
// control polygons. Point minus point is a vector, point plus vector is a
// point, vectors scale; that is all the kernel asks of a point type.

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Point3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }
}

impl Vector3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }
}

impl Sub for Point3f {
    type Output = Vector3f;

    fn sub(self, rhs: Self) -> Vector3f {
        Vector3f::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vector3f> for Point3f {
    type Output = Point3f;

    fn add(self, rhs: Vector3f) -> Point3f {
        Point3f::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<Float> for Vector3f {
    type Output = Vector3f;

    fn mul(self, s: Float) -> Vector3f {
        Vector3f::new(self.x * s, self.y * s, self.z * s)
    }
}

pub fn assert_point_eq(a: Point3f, b: Point3f) {
    assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
    assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
}

// The control polygon the original evaluation harness was built around:
// a cubic running from the origin to (1,1,1) along the unit cube edges.
pub fn cube_edge_cubic() -> Vec<Point3f> {
    vec![
        Point3f::new(0.0, 0.0, 0.0),
        Point3f::new(1.0, 0.0, 0.0),
        Point3f::new(1.0, 1.0, 0.0),
        Point3f::new(1.0, 1.0, 1.0),
    ]
}
