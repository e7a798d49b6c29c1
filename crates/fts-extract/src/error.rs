//! Extraction error types.

/// Error raised while parsing page markup.
///
/// Extraction itself is infallible once a document tree exists; all
/// failures surface at parse time.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Markup could not be read as a tag stream.
    #[error("markup parse error: {0}")]
    Parse(#[from] quick_xml::Error),

    /// An attribute could not be decoded.
    #[error("attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Text could not be decoded from the source encoding.
    #[error("encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),
}
