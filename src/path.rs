use crate::foundation::geom::{Color, Point, Transform};
use crate::gradient::{LinearGradient, RadialGradient};

/// A path node: an ordered sequence of segments with optional fill and
/// stroke styling. Basic shapes (`rect`, `circle`, ...) are lowered to
/// paths by the engine during parsing.
#[derive(Clone, Copy, Debug)]
pub struct Path<'a> {
    inner: &'a usvg::Path,
}

impl<'a> Path<'a> {
    pub(crate) fn new(inner: &'a usvg::Path) -> Self {
        Self { inner }
    }

    /// The element `id`, or the empty string if the attribute was absent.
    pub fn id(self) -> &'a str {
        self.inner.id()
    }

    /// The absolute transform of this path, composed from all ancestors.
    pub fn abs_transform(self) -> Transform {
        Transform::from_engine(self.inner.abs_transform())
    }

    /// Whether this path is visible.
    pub fn is_visible(self) -> bool {
        self.inner.is_visible()
    }

    /// The number of segments in the path data.
    pub fn segment_count(self) -> usize {
        self.inner.data().segments().count()
    }

    /// The segment at `index`, or `None` when out of range.
    pub fn segment_at(self, index: usize) -> Option<PathSegment> {
        self.inner
            .data()
            .segments()
            .nth(index)
            .map(PathSegment::from_engine)
    }

    /// All segments in order.
    pub fn segments(self) -> Vec<PathSegment> {
        self.inner
            .data()
            .segments()
            .map(PathSegment::from_engine)
            .collect()
    }

    /// Whether this path has a fill.
    pub fn has_fill(self) -> bool {
        self.inner.fill().is_some()
    }

    /// Whether this path has a stroke.
    pub fn has_stroke(self) -> bool {
        self.inner.stroke().is_some()
    }

    /// The fill of this path, if any.
    pub fn fill(self) -> Option<Fill<'a>> {
        self.inner.fill().map(Fill::new)
    }

    /// The stroke of this path, if any.
    pub fn stroke(self) -> Option<Stroke<'a>> {
        self.inner.stroke().map(Stroke::new)
    }
}

/// One segment of a path's geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo {
        ctrl: Point,
        end: Point,
    },
    CubicTo {
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
    },
    Close,
}

impl PathSegment {
    fn from_engine(seg: usvg::tiny_skia_path::PathSegment) -> Self {
        use usvg::tiny_skia_path::PathSegment as Seg;

        fn point(p: usvg::tiny_skia_path::Point) -> Point {
            Point { x: p.x, y: p.y }
        }

        match seg {
            Seg::MoveTo(p) => Self::MoveTo(point(p)),
            Seg::LineTo(p) => Self::LineTo(point(p)),
            Seg::QuadTo(c, p) => Self::QuadTo {
                ctrl: point(c),
                end: point(p),
            },
            Seg::CubicTo(c1, c2, p) => Self::CubicTo {
                ctrl1: point(c1),
                ctrl2: point(c2),
                end: point(p),
            },
            Seg::Close => Self::Close,
        }
    }
}

/// The discriminant of a [`Paint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintKind {
    Color,
    LinearGradient,
    RadialGradient,
    Pattern,
}

/// The paint of a fill or stroke; exactly one variant is active.
///
/// Pattern paints are classified but expose no further structure.
#[derive(Clone, Copy, Debug)]
pub enum Paint<'a> {
    Color(Color),
    LinearGradient(LinearGradient<'a>),
    RadialGradient(RadialGradient<'a>),
    Pattern,
}

impl<'a> Paint<'a> {
    fn from_engine(paint: &'a usvg::Paint) -> Self {
        match paint {
            usvg::Paint::Color(c) => Self::Color(Color::from_engine_rgb(*c)),
            usvg::Paint::LinearGradient(lg) => Self::LinearGradient(LinearGradient::new(lg)),
            usvg::Paint::RadialGradient(rg) => Self::RadialGradient(RadialGradient::new(rg)),
            usvg::Paint::Pattern(_) => Self::Pattern,
        }
    }

    fn kind(&self) -> PaintKind {
        match self {
            Self::Color(_) => PaintKind::Color,
            Self::LinearGradient(_) => PaintKind::LinearGradient,
            Self::RadialGradient(_) => PaintKind::RadialGradient,
            Self::Pattern => PaintKind::Pattern,
        }
    }
}

/// The fill rule used to determine path interiors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

/// Fill properties of a [`Path`].
#[derive(Clone, Copy, Debug)]
pub struct Fill<'a> {
    inner: &'a usvg::Fill,
}

impl<'a> Fill<'a> {
    pub(crate) fn new(inner: &'a usvg::Fill) -> Self {
        Self { inner }
    }

    /// The paint used by this fill.
    pub fn paint(self) -> Paint<'a> {
        Paint::from_engine(self.inner.paint())
    }

    /// The kind of paint used by this fill.
    pub fn paint_kind(self) -> PaintKind {
        self.paint().kind()
    }

    /// The solid color, if the paint is a color.
    pub fn color(self) -> Option<Color> {
        match self.paint() {
            Paint::Color(c) => Some(c),
            _ => None,
        }
    }

    /// The linear gradient, if the paint is one.
    pub fn linear_gradient(self) -> Option<LinearGradient<'a>> {
        match self.paint() {
            Paint::LinearGradient(lg) => Some(lg),
            _ => None,
        }
    }

    /// The radial gradient, if the paint is one.
    pub fn radial_gradient(self) -> Option<RadialGradient<'a>> {
        match self.paint() {
            Paint::RadialGradient(rg) => Some(rg),
            _ => None,
        }
    }

    /// Fill opacity in `[0, 1]`.
    pub fn opacity(self) -> f32 {
        self.inner.opacity().get()
    }

    /// The fill rule.
    pub fn rule(self) -> FillRule {
        match self.inner.rule() {
            usvg::FillRule::NonZero => FillRule::NonZero,
            usvg::FillRule::EvenOdd => FillRule::EvenOdd,
        }
    }
}

/// Stroke line cap styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Stroke line join styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Stroke properties of a [`Path`].
#[derive(Clone, Copy, Debug)]
pub struct Stroke<'a> {
    inner: &'a usvg::Stroke,
}

impl<'a> Stroke<'a> {
    pub(crate) fn new(inner: &'a usvg::Stroke) -> Self {
        Self { inner }
    }

    /// The paint used by this stroke.
    pub fn paint(self) -> Paint<'a> {
        Paint::from_engine(self.inner.paint())
    }

    /// The kind of paint used by this stroke.
    pub fn paint_kind(self) -> PaintKind {
        self.paint().kind()
    }

    /// The solid color, if the paint is a color.
    pub fn color(self) -> Option<Color> {
        match self.paint() {
            Paint::Color(c) => Some(c),
            _ => None,
        }
    }

    /// The linear gradient, if the paint is one.
    pub fn linear_gradient(self) -> Option<LinearGradient<'a>> {
        match self.paint() {
            Paint::LinearGradient(lg) => Some(lg),
            _ => None,
        }
    }

    /// The radial gradient, if the paint is one.
    pub fn radial_gradient(self) -> Option<RadialGradient<'a>> {
        match self.paint() {
            Paint::RadialGradient(rg) => Some(rg),
            _ => None,
        }
    }

    /// Stroke opacity in `[0, 1]`.
    pub fn opacity(self) -> f32 {
        self.inner.opacity().get()
    }

    /// The stroke width. Always positive.
    pub fn width(self) -> f32 {
        self.inner.width().get()
    }

    /// The line cap style.
    pub fn line_cap(self) -> LineCap {
        match self.inner.linecap() {
            usvg::LineCap::Butt => LineCap::Butt,
            usvg::LineCap::Round => LineCap::Round,
            usvg::LineCap::Square => LineCap::Square,
        }
    }

    /// The line join style. The engine's miter-clip join reports as miter.
    pub fn line_join(self) -> LineJoin {
        match self.inner.linejoin() {
            usvg::LineJoin::Miter | usvg::LineJoin::MiterClip => LineJoin::Miter,
            usvg::LineJoin::Round => LineJoin::Round,
            usvg::LineJoin::Bevel => LineJoin::Bevel,
        }
    }

    /// The miter limit.
    pub fn miter_limit(self) -> f32 {
        self.inner.miterlimit().get()
    }

    /// The dash array, or an empty vector when the stroke is not dashed.
    pub fn dash_array(self) -> Vec<f32> {
        self.inner
            .dasharray()
            .map(|d| d.to_vec())
            .unwrap_or_default()
    }

    /// The dash offset.
    pub fn dash_offset(self) -> f32 {
        self.inner.dashoffset()
    }
}
