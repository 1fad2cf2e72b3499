use crate::foundation::geom::{Rect, Transform};
use crate::node::Group;

/// A text node.
///
/// Text has no independent rendering path: after font resolution the engine
/// flattens every text element into an equivalent group of paths, and that
/// flattened form is the only consumable representation.
#[derive(Clone, Copy, Debug)]
pub struct TextNode<'a> {
    inner: &'a usvg::Text,
}

impl<'a> TextNode<'a> {
    pub(crate) fn new(inner: &'a usvg::Text) -> Self {
        Self { inner }
    }

    /// The element `id`, or the empty string if the attribute was absent.
    pub fn id(self) -> &'a str {
        self.inner.id()
    }

    /// The absolute transform of this text, composed from all ancestors.
    pub fn abs_transform(self) -> Transform {
        Transform::from_engine(self.inner.abs_transform())
    }

    /// The bounding box of the laid-out text.
    pub fn bounding_box(self) -> Rect {
        Rect::from_engine(self.inner.bounding_box())
    }

    /// The text converted to an equivalent group of path nodes.
    pub fn flattened(self) -> Group<'a> {
        Group::new(self.inner.flattened())
    }
}
