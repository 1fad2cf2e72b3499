//! Plain geometric value types shared by the node model and the pipelines.
//!
//! These are deliberately dumb `Copy` structs with public fields; all the
//! interesting data lives in the engine tree and is converted on access.

/// A 2D affine transform in SVG `matrix(a b c d e f)` order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Whether this transform is (approximately) the identity.
    ///
    /// Composed transforms coming out of the engine are not guaranteed to be
    /// bit-identical to the identity even when semantically equivalent, so
    /// the comparison uses a small epsilon rather than exact equality.
    pub fn is_identity(self) -> bool {
        const EPS: f32 = 1e-6;
        (self.a - 1.0).abs() < EPS
            && self.b.abs() < EPS
            && self.c.abs() < EPS
            && (self.d - 1.0).abs() < EPS
            && self.e.abs() < EPS
            && self.f.abs() < EPS
    }

    pub(crate) fn from_engine(t: usvg::Transform) -> Self {
        Self {
            a: t.sx,
            b: t.ky,
            c: t.kx,
            d: t.sy,
            e: t.tx,
            f: t.ty,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A straight-alpha RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts an engine RGB color; paint colors carry no alpha of their
    /// own (opacity is a separate attribute), so alpha is 255.
    pub(crate) fn from_engine_rgb(c: usvg::Color) -> Self {
        Self {
            r: c.red,
            g: c.green,
            b: c.blue,
            a: 255,
        }
    }
}

/// A point in user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A rectangle with position and size in user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub(crate) fn from_engine(r: usvg::Rect) -> Self {
        Self {
            x: r.x(),
            y: r.y(),
            width: r.width(),
            height: r.height(),
        }
    }

    pub(crate) fn from_engine_non_zero(r: usvg::NonZeroRect) -> Self {
        Self {
            x: r.x(),
            y: r.y(),
            width: r.width(),
            height: r.height(),
        }
    }
}

/// A size in user units. Always positive for a successfully parsed tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub(crate) fn from_engine(s: usvg::Size) -> Self {
        Self {
            width: s.width(),
            height: s.height(),
        }
    }
}
