//! Render-/plot-side output containers.
//!
//! - `PointBuffer`: ordered 3D positions (the "wire").
//! - `PathBuffer`: ordered `(position, normal)` samples bracketed by explicit
//!   begin/end markers, forming one open path.
//!
//! Both are cleared and repopulated on every update; consumers read them
//! through slices.

use nalgebra::Vector3;

/// A 3D position paired with the ribbon's cross-section direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RibbonSample {
    pub position: Vector3<f64>,
    pub normal: Vector3<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointBuffer {
    vertices: Vec<Vector3<f64>>,
}

impl PointBuffer {
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Make room for at least `additional` more vertices.
    #[inline]
    pub fn extend_capacity(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }

    #[inline]
    pub fn push(&mut self, p: Vector3<f64>) {
        self.vertices.push(p);
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector3<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }
}

/// Bracketing state of a `PathBuffer`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathState {
    /// Cleared; no `begin` yet.
    #[default]
    Empty,
    /// Between `begin` and `end`; samples may be added.
    Open,
    /// `end` was called; the path is complete.
    Closed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathBuffer {
    samples: Vec<RibbonSample>,
    state: PathState,
}

impl PathBuffer {
    #[inline]
    pub fn clear(&mut self) {
        self.samples.clear();
        self.state = PathState::Empty;
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.samples.reserve(additional);
    }

    #[inline]
    pub fn begin(&mut self) {
        debug_assert_eq!(self.state, PathState::Empty, "begin on a non-empty path");
        self.state = PathState::Open;
    }

    #[inline]
    pub fn add(&mut self, position: Vector3<f64>, normal: Vector3<f64>) {
        debug_assert_eq!(self.state, PathState::Open, "add outside begin/end");
        self.samples.push(RibbonSample { position, normal });
    }

    #[inline]
    pub fn end(&mut self) {
        debug_assert_eq!(self.state, PathState::Open, "end without begin");
        self.state = PathState::Closed;
    }

    #[inline]
    pub fn state(&self) -> PathState {
        self.state
    }

    #[inline]
    pub fn samples(&self) -> &[RibbonSample] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
