use crate::foundation::error::{VectreeError, VectreeResult};
use crate::tree::Tree;

/// Parses SVG data and re-exports its spec-resolved form.
///
/// Normalization applies SVG defaults, inlines resolved styles, expands
/// `use` references, lowers basic shapes to paths and resolves clip/mask
/// references to concrete geometry, producing markup that can be consumed
/// without full SVG/CSS machinery.
#[tracing::instrument(skip(data), fields(len = data.len()))]
pub fn normalize(data: &[u8]) -> VectreeResult<Vec<u8>> {
    let tree = Tree::from_data(data)?;
    tree.export_normalized()
}

/// Reads an SVG file and normalizes it. See [`normalize`].
pub fn normalize_file(path: impl AsRef<std::path::Path>) -> VectreeResult<Vec<u8>> {
    let tree = Tree::from_file(path)?;
    tree.export_normalized()
}

/// Like [`normalize`], but decodes the output as UTF-8.
///
/// The engine is expected to always emit UTF-8; the decode failure path maps
/// to [`VectreeError::NotUtf8`] so the boundary never assumes it.
pub fn normalize_to_string(data: &[u8]) -> VectreeResult<String> {
    let bytes = normalize(data)?;
    String::from_utf8(bytes).map_err(|_| VectreeError::NotUtf8)
}
