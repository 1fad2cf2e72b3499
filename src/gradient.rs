use crate::foundation::geom::{Color, Transform};

/// Gradient extension policy beyond the defined stop range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpreadMethod {
    Pad,
    Reflect,
    Repeat,
}

impl SpreadMethod {
    fn from_engine(method: usvg::SpreadMethod) -> Self {
        match method {
            usvg::SpreadMethod::Pad => Self::Pad,
            usvg::SpreadMethod::Reflect => Self::Reflect,
            usvg::SpreadMethod::Repeat => Self::Repeat,
        }
    }
}

/// A color stop in a gradient.
///
/// The stop's own opacity is folded into the color's alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Offset position in `[0, 1]`. Stops are ordered non-decreasing by
    /// convention; the engine is trusted, not re-validated.
    pub offset: f32,
    /// The color at this stop, alpha included.
    pub color: Color,
}

fn stop_from_engine(stop: &usvg::Stop) -> GradientStop {
    let c = stop.color();
    let a = (stop.opacity().get() * 255.0).round() as u8;
    GradientStop {
        offset: stop.offset().get(),
        color: Color::new(c.red, c.green, c.blue, a),
    }
}

/// A linear gradient paint: a line from `(x1, y1)` to `(x2, y2)` with an
/// ordered, non-empty stop sequence.
#[derive(Clone, Copy, Debug)]
pub struct LinearGradient<'a> {
    inner: &'a usvg::LinearGradient,
}

impl<'a> LinearGradient<'a> {
    pub(crate) fn new(inner: &'a usvg::LinearGradient) -> Self {
        Self { inner }
    }

    /// The element `id`, or the empty string if the attribute was absent.
    pub fn id(self) -> &'a str {
        self.inner.id()
    }

    /// Start point X coordinate.
    pub fn x1(self) -> f32 {
        self.inner.x1()
    }

    /// Start point Y coordinate.
    pub fn y1(self) -> f32 {
        self.inner.y1()
    }

    /// End point X coordinate.
    pub fn x2(self) -> f32 {
        self.inner.x2()
    }

    /// End point Y coordinate.
    pub fn y2(self) -> f32 {
        self.inner.y2()
    }

    /// The gradient transform.
    pub fn transform(self) -> Transform {
        Transform::from_engine(self.inner.transform())
    }

    /// The spread method.
    pub fn spread_method(self) -> SpreadMethod {
        SpreadMethod::from_engine(self.inner.spread_method())
    }

    /// The number of stops. Always at least one for a parsed gradient.
    pub fn stop_count(self) -> usize {
        self.inner.stops().len()
    }

    /// The stop at `index`, or `None` when out of range.
    pub fn stop_at(self, index: usize) -> Option<GradientStop> {
        self.inner.stops().get(index).map(stop_from_engine)
    }

    /// All stops in order.
    pub fn stops(self) -> Vec<GradientStop> {
        self.inner.stops().iter().map(stop_from_engine).collect()
    }
}

/// A radial gradient paint: center, radius and focal point with an ordered,
/// non-empty stop sequence.
#[derive(Clone, Copy, Debug)]
pub struct RadialGradient<'a> {
    inner: &'a usvg::RadialGradient,
}

impl<'a> RadialGradient<'a> {
    pub(crate) fn new(inner: &'a usvg::RadialGradient) -> Self {
        Self { inner }
    }

    /// The element `id`, or the empty string if the attribute was absent.
    pub fn id(self) -> &'a str {
        self.inner.id()
    }

    /// Center X coordinate.
    pub fn cx(self) -> f32 {
        self.inner.cx()
    }

    /// Center Y coordinate.
    pub fn cy(self) -> f32 {
        self.inner.cy()
    }

    /// Radius. Never negative.
    pub fn r(self) -> f32 {
        self.inner.r().get()
    }

    /// Focal point X coordinate.
    pub fn fx(self) -> f32 {
        self.inner.fx()
    }

    /// Focal point Y coordinate.
    pub fn fy(self) -> f32 {
        self.inner.fy()
    }

    /// The gradient transform.
    pub fn transform(self) -> Transform {
        Transform::from_engine(self.inner.transform())
    }

    /// The spread method.
    pub fn spread_method(self) -> SpreadMethod {
        SpreadMethod::from_engine(self.inner.spread_method())
    }

    /// The number of stops. Always at least one for a parsed gradient.
    pub fn stop_count(self) -> usize {
        self.inner.stops().len()
    }

    /// The stop at `index`, or `None` when out of range.
    pub fn stop_at(self, index: usize) -> Option<GradientStop> {
        self.inner.stops().get(index).map(stop_from_engine)
    }

    /// All stops in order.
    pub fn stops(self) -> Vec<GradientStop> {
        self.inner.stops().iter().map(stop_from_engine).collect()
    }
}
