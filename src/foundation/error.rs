pub type VectreeResult<T> = Result<T, VectreeError>;

/// Everything that can go wrong while parsing, inspecting, rasterizing or
/// normalizing an SVG document.
///
/// Each engine call site maps its failure to exactly one variant; failures
/// are terminal for the operation that produced them.
#[derive(thiserror::Error, Debug)]
pub enum VectreeError {
    /// The document (after optional gzip decompression) is not valid UTF-8.
    #[error("svg data is not a valid UTF-8 string")]
    NotUtf8,

    /// Reading the input file failed before parsing started.
    #[error("failed to open svg file: {path}")]
    FileOpenFailed {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The gzip envelope of a compressed document is invalid.
    #[error("compressed svg is not a valid gzip stream")]
    MalformedGzip,

    /// The document exceeds the engine's element-count safety cap.
    ///
    /// This is a resource-exhaustion guard against crafted documents, not a
    /// bug in the input.
    #[error("svg exceeds the element count safety limit")]
    ElementsLimitExceeded,

    /// The resolved document dimensions are non-positive, either as parsed
    /// or after applying a rasterization scale.
    #[error("svg has invalid size (width/height <= 0 or missing viewBox)")]
    InvalidSize,

    /// Generic syntax or schema failure from the parser.
    #[error("failed to parse svg: {0}")]
    ParseFailed(String),

    /// The document has no renderable elements, so there is nothing to
    /// rasterize. Distinct from a valid image that renders all-transparent.
    #[error("svg has no renderable elements")]
    EmptyImage,

    /// The engine could not serialize the document back to markup.
    #[error("failed to export normalized svg")]
    ExportFailed,

    /// An engine failure the taxonomy cannot name. Carries the engine's own
    /// description so callers can log it without engine internals.
    #[error("unexpected engine failure: {0}")]
    Engine(String),
}

impl From<usvg::Error> for VectreeError {
    fn from(err: usvg::Error) -> Self {
        match err {
            usvg::Error::NotAnUtf8Str => Self::NotUtf8,
            usvg::Error::MalformedGZip => Self::MalformedGzip,
            usvg::Error::ElementsLimitReached => Self::ElementsLimitExceeded,
            usvg::Error::InvalidSize => Self::InvalidSize,
            usvg::Error::ParsingFailed(e) => Self::ParseFailed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert!(VectreeError::NotUtf8.to_string().contains("UTF-8"));
        assert!(VectreeError::MalformedGzip.to_string().contains("gzip"));
        assert!(
            VectreeError::ElementsLimitExceeded
                .to_string()
                .contains("element count")
        );
        assert!(VectreeError::InvalidSize.to_string().contains("invalid size"));
        assert!(VectreeError::EmptyImage.to_string().contains("no renderable"));
        assert!(
            VectreeError::ParseFailed("boom".into())
                .to_string()
                .contains("boom")
        );
        assert!(
            VectreeError::Engine("odd".into())
                .to_string()
                .contains("odd")
        );
    }

    #[test]
    fn file_open_failed_preserves_source() {
        let err = VectreeError::FileOpenFailed {
            path: "missing.svg".to_string(),
            source: std::io::Error::other("boom"),
        };
        assert!(err.to_string().contains("missing.svg"));
        let source = std::error::Error::source(&err).expect("io source");
        assert!(source.to_string().contains("boom"));
    }

    #[test]
    fn engine_errors_map_onto_taxonomy() {
        assert!(matches!(
            VectreeError::from(usvg::Error::NotAnUtf8Str),
            VectreeError::NotUtf8
        ));
        assert!(matches!(
            VectreeError::from(usvg::Error::MalformedGZip),
            VectreeError::MalformedGzip
        ));
        assert!(matches!(
            VectreeError::from(usvg::Error::ElementsLimitReached),
            VectreeError::ElementsLimitExceeded
        ));
        assert!(matches!(
            VectreeError::from(usvg::Error::InvalidSize),
            VectreeError::InvalidSize
        ));
    }
}
