//! Drawing surface abstraction and the recording surface handed to JS.
//!
//! Draw commands are `#[repr(C)]` structs made only of `f32`, so the
//! recorded slices double as flat buffers the page reads straight out of
//! wasm memory.

use std::mem::size_of;

pub const CIRCLE_STRIDE: usize = size_of::<Circle>() / size_of::<f32>();
pub const LINE_STRIDE: usize = size_of::<Line>() / size_of::<f32>();

/// Canvas style colour: `r`, `g`, `b` in 0..=255, `a` in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub width: f32,
    pub color: Rgba,
}

/// A 2D target the particle field renders onto.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, circle: Circle);
    fn stroke_line(&mut self, line: Line);
}

/// Records one frame of draw commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    width: f32,
    height: f32,
    circles: Vec<Circle>,
    lines: Vec<Line>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(circles: usize, lines: usize) -> Self {
        Self {
            circles: Vec::with_capacity(circles),
            lines: Vec::with_capacity(lines),
            ..Self::default()
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn circles_ptr(&self) -> *const f32 {
        self.circles.as_ptr().cast()
    }

    /// Length of the circle buffer in `f32` units.
    pub fn circles_len(&self) -> u32 {
        (self.circles.len() * CIRCLE_STRIDE) as u32
    }

    pub fn lines_ptr(&self) -> *const f32 {
        self.lines.as_ptr().cast()
    }

    /// Length of the line buffer in `f32` units.
    pub fn lines_len(&self) -> u32 {
        (self.lines.len() * LINE_STRIDE) as u32
    }
}

impl Surface for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.circles.clear();
        self.lines.clear();
    }

    fn fill_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    fn stroke_line(&mut self, line: Line) {
        self.lines.push(line);
    }
}
