// File: crates/combo-core/src/geometry.rs
// Summary: Lightweight screen-space geometry (points, sizes, rects) for pixel math.

use std::ops::{Add, Sub};

/// Screen-space point, in pixels. Y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle stored as top-left location plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub location: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(location: Point, size: Size) -> Self {
        Self { location, size }
    }
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { location: Point::new(x, y), size: Size::new(width, height) }
    }
    pub fn left(&self) -> f32 { self.location.x }
    pub fn top(&self) -> f32 { self.location.y }
    pub fn right(&self) -> f32 { self.location.x + self.size.width }
    pub fn bottom(&self) -> f32 { self.location.y + self.size.height }
}
