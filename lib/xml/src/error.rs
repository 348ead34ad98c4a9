use std::str::Utf8Error;

/// An error raised while reading or writing an XML [`Element`](crate::Element) tree.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// The text is not well-formed XML.
    #[error(transparent)]
    Syntax(#[from] quick_xml::Error),
    /// A name is not valid UTF-8.
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
    /// The input ended before the element was closed.
    #[error("The element <{0}> is not closed")]
    UnclosedElement(String),
    /// The input contains no element.
    #[error("No root element found")]
    MissingRoot,
    /// The input contains content after the root element.
    #[error("Unexpected content after the root element")]
    TrailingContent,
}
