use crate::foundation::geom::{Rect, Transform};
use crate::image::ImageNode;
use crate::path::Path;
use crate::text::TextNode;

/// The discriminant of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Group,
    Path,
    Image,
    Text,
}

/// A node in the document tree: one of group, path, image or text.
///
/// Inspect [`Node::kind`] and narrow with the matching `as_*` method. The
/// narrowing methods are total and side-effect-free: narrowing to the wrong
/// variant returns `None`, never panics.
#[derive(Clone, Copy, Debug)]
pub struct Node<'a> {
    inner: &'a usvg::Node,
}

impl<'a> Node<'a> {
    pub(crate) fn new(inner: &'a usvg::Node) -> Self {
        Self { inner }
    }

    /// The type of this node.
    pub fn kind(self) -> NodeKind {
        match self.inner {
            usvg::Node::Group(_) => NodeKind::Group,
            usvg::Node::Path(_) => NodeKind::Path,
            usvg::Node::Image(_) => NodeKind::Image,
            usvg::Node::Text(_) => NodeKind::Text,
        }
    }

    /// The element `id`, or the empty string if the attribute was absent.
    pub fn id(self) -> &'a str {
        match self.inner {
            usvg::Node::Group(g) => g.id(),
            usvg::Node::Path(p) => p.id(),
            usvg::Node::Image(i) => i.id(),
            usvg::Node::Text(t) => t.id(),
        }
    }

    /// The absolute transform of this node, composed from all ancestors.
    pub fn abs_transform(self) -> Transform {
        Transform::from_engine(self.inner.abs_transform())
    }

    /// Narrows to [`Group`] if this is a group node.
    pub fn as_group(self) -> Option<Group<'a>> {
        match self.inner {
            usvg::Node::Group(g) => Some(Group::new(g)),
            _ => None,
        }
    }

    /// Narrows to [`Path`] if this is a path node.
    pub fn as_path(self) -> Option<Path<'a>> {
        match self.inner {
            usvg::Node::Path(p) => Some(Path::new(p)),
            _ => None,
        }
    }

    /// Narrows to [`ImageNode`] if this is an image node.
    pub fn as_image(self) -> Option<ImageNode<'a>> {
        match self.inner {
            usvg::Node::Image(i) => Some(ImageNode::new(i)),
            _ => None,
        }
    }

    /// Narrows to [`TextNode`] if this is a text node.
    pub fn as_text(self) -> Option<TextNode<'a>> {
        match self.inner {
            usvg::Node::Text(t) => Some(TextNode::new(t)),
            _ => None,
        }
    }
}

/// SVG blend modes, as resolved by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendMode {
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    fn from_engine(mode: usvg::BlendMode) -> Self {
        match mode {
            usvg::BlendMode::Normal => Self::Normal,
            usvg::BlendMode::Multiply => Self::Multiply,
            usvg::BlendMode::Screen => Self::Screen,
            usvg::BlendMode::Overlay => Self::Overlay,
            usvg::BlendMode::Darken => Self::Darken,
            usvg::BlendMode::Lighten => Self::Lighten,
            usvg::BlendMode::ColorDodge => Self::ColorDodge,
            usvg::BlendMode::ColorBurn => Self::ColorBurn,
            usvg::BlendMode::HardLight => Self::HardLight,
            usvg::BlendMode::SoftLight => Self::SoftLight,
            usvg::BlendMode::Difference => Self::Difference,
            usvg::BlendMode::Exclusion => Self::Exclusion,
            usvg::BlendMode::Hue => Self::Hue,
            usvg::BlendMode::Saturation => Self::Saturation,
            usvg::BlendMode::Color => Self::Color,
            usvg::BlendMode::Luminosity => Self::Luminosity,
        }
    }
}

/// A container node with ordered children in document order.
#[derive(Clone, Copy, Debug)]
pub struct Group<'a> {
    inner: &'a usvg::Group,
}

impl<'a> Group<'a> {
    pub(crate) fn new(inner: &'a usvg::Group) -> Self {
        Self { inner }
    }

    /// The element `id`, or the empty string if the attribute was absent.
    pub fn id(self) -> &'a str {
        self.inner.id()
    }

    /// The transform of this group relative to its parent. Identity when the
    /// element carried no transform.
    pub fn transform(self) -> Transform {
        Transform::from_engine(self.inner.transform())
    }

    /// The absolute transform, composed from all ancestor transforms. The
    /// engine precomputes this during parsing.
    pub fn abs_transform(self) -> Transform {
        Transform::from_engine(self.inner.abs_transform())
    }

    /// Group opacity in `[0, 1]`.
    pub fn opacity(self) -> f32 {
        self.inner.opacity().get()
    }

    /// The blend mode used to composite this group.
    pub fn blend_mode(self) -> BlendMode {
        BlendMode::from_engine(self.inner.blend_mode())
    }

    /// Whether this group isolates its blending.
    pub fn is_isolated(self) -> bool {
        self.inner.isolate()
    }

    /// Whether a mask is attached to this group.
    pub fn has_mask(self) -> bool {
        self.inner.mask().is_some()
    }

    /// Whether a clip path is attached to this group.
    pub fn has_clip_path(self) -> bool {
        self.inner.clip_path().is_some()
    }

    /// The mask applied to this group, if any.
    pub fn mask(self) -> Option<Mask<'a>> {
        self.inner.mask().map(Mask::new)
    }

    /// The clip path applied to this group, if any.
    pub fn clip_path(self) -> Option<ClipPath<'a>> {
        self.inner.clip_path().map(ClipPath::new)
    }

    /// The number of direct children.
    pub fn child_count(self) -> usize {
        self.inner.children().len()
    }

    /// The child at `index`, or `None` when out of range.
    pub fn child_at(self, index: usize) -> Option<Node<'a>> {
        self.inner.children().get(index).map(Node::new)
    }

    /// All direct children in document order.
    pub fn children(self) -> Vec<Node<'a>> {
        self.inner.children().iter().map(Node::new).collect()
    }
}

/// How mask pixel values are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaskKind {
    Luminance,
    Alpha,
}

/// A mask attached to a [`Group`]. Its content is a nested group subtree;
/// masks may themselves carry a nested mask.
#[derive(Clone, Copy, Debug)]
pub struct Mask<'a> {
    inner: &'a usvg::Mask,
}

impl<'a> Mask<'a> {
    pub(crate) fn new(inner: &'a usvg::Mask) -> Self {
        Self { inner }
    }

    /// The element `id`, or the empty string if the attribute was absent.
    pub fn id(self) -> &'a str {
        self.inner.id()
    }

    /// The mask bounding rectangle.
    pub fn rect(self) -> Rect {
        Rect::from_engine_non_zero(self.inner.rect())
    }

    /// Whether the mask is a luminance or an alpha mask.
    pub fn kind(self) -> MaskKind {
        match self.inner.kind() {
            usvg::MaskType::Luminance => MaskKind::Luminance,
            usvg::MaskType::Alpha => MaskKind::Alpha,
        }
    }

    /// The group holding the mask content.
    pub fn root(self) -> Group<'a> {
        Group::new(self.inner.root())
    }

    /// A mask applied to this mask, if any.
    pub fn nested_mask(self) -> Option<Mask<'a>> {
        self.inner.mask().map(Mask::new)
    }
}

/// A clip path attached to a [`Group`]. Its content is a nested group
/// subtree of clip geometry.
#[derive(Clone, Copy, Debug)]
pub struct ClipPath<'a> {
    inner: &'a usvg::ClipPath,
}

impl<'a> ClipPath<'a> {
    pub(crate) fn new(inner: &'a usvg::ClipPath) -> Self {
        Self { inner }
    }

    /// The element `id`, or the empty string if the attribute was absent.
    pub fn id(self) -> &'a str {
        self.inner.id()
    }

    /// The clip path's own transform.
    pub fn transform(self) -> Transform {
        Transform::from_engine(self.inner.transform())
    }

    /// The group holding the clip geometry.
    pub fn root(self) -> Group<'a> {
        Group::new(self.inner.root())
    }
}
