//! Rectangles used for screens, work areas and client frames.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};
use std::ops::Add;
use std::ops::Sub;

/// A rectangle in root coordinates. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Copy)]
pub struct Xyhw {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Add for Xyhw {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            w: self.w + other.w,
            h: self.h + other.h,
        }
    }
}

impl Sub for Xyhw {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            w: self.w - other.w,
            h: self.h - other.h,
        }
    }
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        (self.x <= x && x <= self.right()) && (self.y <= y && y <= self.bottom())
    }

    /// Like `contains_point` but excludes the right and bottom edges, so adjacent
    /// screens never both claim a point.
    #[must_use]
    pub const fn owns_point(&self, x: i32, y: i32) -> bool {
        (self.x <= x && x < self.right()) && (self.y <= y && y < self.bottom())
    }

    /// The four corners of a frame drawn with `border` pixels around this rect.
    #[must_use]
    pub const fn outer_corners(&self, border: i32) -> [(i32, i32); 4] {
        let right = self.x + self.w + 2 * border;
        let bottom = self.y + self.h + 2 * border;
        [
            (self.x, self.y),
            (right, self.y),
            (self.x, bottom),
            (right, bottom),
        ]
    }

    /// Shrink the size so that a frame with `border` pixels fits into this rect.
    /// The result is never smaller than 1x1.
    #[must_use]
    pub fn inset_border(&self, border: i32) -> Self {
        Self {
            x: self.x,
            y: self.y,
            w: (self.w - 2 * border).max(1),
            h: (self.h - 2 * border).max(1),
        }
    }

    #[must_use]
    pub const fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            w: self.w,
            h: self.h,
        }
    }

    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        let x = self.x + (self.w / 2);
        let y = self.y + (self.h / 2);
        (x, y)
    }

    /// Place `self` at the center of `outer`, keeping the size.
    pub fn center_relative(&mut self, outer: Self, border: i32) {
        self.x = outer.x + outer.w / 2 - self.w / 2 - border;
        self.y = outer.y + outer.h / 2 - self.h / 2 - border;
    }
}
