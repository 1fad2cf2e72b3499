use crate::foundation::geom::{Size, Transform};

/// The format of an embedded or linked image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
    Webp,
    /// A nested SVG document.
    Svg,
}

/// An image node. The raw bytes are decoded and owned by the engine; this
/// layer exposes only classification and geometry.
#[derive(Clone, Copy, Debug)]
pub struct ImageNode<'a> {
    inner: &'a usvg::Image,
}

impl<'a> ImageNode<'a> {
    pub(crate) fn new(inner: &'a usvg::Image) -> Self {
        Self { inner }
    }

    /// The element `id`, or the empty string if the attribute was absent.
    pub fn id(self) -> &'a str {
        self.inner.id()
    }

    /// The absolute transform of this image, composed from all ancestors.
    pub fn abs_transform(self) -> Transform {
        Transform::from_engine(self.inner.abs_transform())
    }

    /// Whether this image is visible.
    pub fn is_visible(self) -> bool {
        self.inner.is_visible()
    }

    /// The image size in pixels.
    pub fn size(self) -> Size {
        Size::from_engine(self.inner.size())
    }

    /// The kind of image data.
    pub fn kind(self) -> ImageKind {
        match self.inner.kind() {
            usvg::ImageKind::JPEG(_) => ImageKind::Jpeg,
            usvg::ImageKind::PNG(_) => ImageKind::Png,
            usvg::ImageKind::GIF(_) => ImageKind::Gif,
            usvg::ImageKind::WEBP(_) => ImageKind::Webp,
            usvg::ImageKind::SVG(_) => ImageKind::Svg,
        }
    }
}
