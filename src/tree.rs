use crate::foundation::error::{VectreeError, VectreeResult};
use crate::foundation::geom::Size;
use crate::node::Group;

/// An owning handle to a parsed, immutable SVG document.
///
/// All node views ([`Group`], [`crate::Path`], ...) borrow from the tree
/// they were derived from and cannot outlive it; dropping the tree releases
/// the whole document at once.
///
/// A tree is immutable after construction and is `Send + Sync`, so it can be
/// shared freely for concurrent read-only access.
///
/// ```no_run
/// # fn main() -> vectree::VectreeResult<()> {
/// let tree = vectree::Tree::from_data(br#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#)?;
/// for child in tree.root().children() {
///     match child.kind() {
///         vectree::NodeKind::Path => { /* inspect child.as_path() */ }
///         _ => {}
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Tree {
    inner: usvg::Tree,
}

impl Tree {
    /// Parses SVG data into a tree.
    ///
    /// Accepts UTF-8 text or gzip-compressed UTF-8 text; compression is
    /// auto-detected by the engine.
    pub fn from_data(data: &[u8]) -> VectreeResult<Self> {
        let opt = usvg::Options::default();
        let inner = usvg::Tree::from_data(data, &opt)?;
        Ok(Self { inner })
    }

    /// Reads and parses an SVG file.
    ///
    /// An I/O failure before parsing surfaces as
    /// [`VectreeError::FileOpenFailed`] with the offending path.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> VectreeResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| VectreeError::FileOpenFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_data(&data)
    }

    /// The resolved document size in user units.
    pub fn size(&self) -> Size {
        Size::from_engine(self.inner.size())
    }

    /// Whether the document has no renderable content.
    ///
    /// The engine prunes elements that cannot render during parsing, so a
    /// document containing only empty groups still reports empty.
    pub fn is_empty(&self) -> bool {
        self.inner.root().children().is_empty()
    }

    /// The top-level group. The root of a parsed document is always a group.
    pub fn root(&self) -> Group<'_> {
        Group::new(self.inner.root())
    }

    /// Serializes the fully resolved, reference-expanded form of the
    /// document: defaults applied, styles inlined, `use` expanded, basic
    /// shapes lowered to paths.
    ///
    /// The output is always UTF-8; it is returned as bytes to mirror the
    /// parse input. See [`crate::normalize_to_string`] for a checked string.
    pub fn export_normalized(&self) -> VectreeResult<Vec<u8>> {
        let markup = self.inner.to_string(&usvg::WriteOptions::default());
        if markup.is_empty() {
            return Err(VectreeError::ExportFailed);
        }
        Ok(markup.into_bytes())
    }

    pub(crate) fn engine(&self) -> &usvg::Tree {
        &self.inner
    }
}
