use std::fmt::{self, Display, Formatter};
use std::ops::Range;

/// A byte range into the parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start offset, inclusive.
    pub start: usize,
    /// End offset, exclusive.
    pub end: usize,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub(crate) fn from_str_span(span: xmlparser::StrSpan) -> Self {
        Span::new(span.start(), span.end())
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// Reasons a document fails to parse.
///
/// Parsing does not attempt recovery: the first problem aborts the parse
/// and no tree is produced.
#[derive(Debug)]
pub enum ParseError {
    /// A close tag does not match the element that is open.
    InvalidCloseTag {
        /// The name of the open element.
        expected: String,
        /// The name found in the close tag.
        found: String,
        span: Span,
    },
    /// A close tag appears while no element is open.
    UnexpectedCloseTag { name: String, span: Span },
    /// The input ended while this element was still open.
    UnclosedTag { name: String, span: Span },
    /// The XML declaration is not acceptable, for instance an unsupported
    /// version.
    InvalidDeclaration { reason: String, span: Span },
    /// An entity reference without a closing `;`.
    UnclosedEntity { entity: String, span: Span },
    /// An entity reference that is neither predefined nor a character
    /// reference.
    InvalidEntity { entity: String, span: Span },
    /// Byte input in a character set we cannot decode.
    UnknownEncoding { label: String },
    /// Syntax error reported by the tokenizer.
    XmlParser { error: xmlparser::Error, span: Span },
}

impl ParseError {
    /// The location in the input where the problem was found.
    pub fn span(&self) -> Span {
        use ParseError::*;
        match self {
            InvalidCloseTag { span, .. }
            | UnexpectedCloseTag { span, .. }
            | UnclosedTag { span, .. }
            | InvalidDeclaration { span, .. }
            | UnclosedEntity { span, .. }
            | InvalidEntity { span, .. }
            | XmlParser { span, .. } => *span,
            UnknownEncoding { .. } => Span::new(0, 0),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use ParseError::*;
        match self {
            InvalidCloseTag {
                expected, found, ..
            } => write!(f, "expected close tag for <{}>, found </{}>", expected, found),
            UnexpectedCloseTag { name, .. } => {
                write!(f, "close tag </{}> without open element", name)
            }
            UnclosedTag { name, .. } => write!(f, "element <{}> is never closed", name),
            InvalidDeclaration { reason, .. } => write!(f, "invalid declaration: {}", reason),
            UnclosedEntity { entity, .. } => write!(f, "unclosed entity reference &{}", entity),
            InvalidEntity { entity, .. } => write!(f, "unknown entity reference &{};", entity),
            UnknownEncoding { label } => write!(f, "unsupported character encoding {}", label),
            XmlParser { error, .. } => write!(f, "{}", error),
        }
    }
}

/// A path expression that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathError {
    /// The expression as given.
    pub expression: String,
    /// Byte offset into the expression where the problem starts.
    pub position: usize,
    pub reason: String,
}

impl PathError {
    pub(crate) fn new(expression: &str, position: usize, reason: impl Into<String>) -> Self {
        PathError {
            expression: expression.to_string(),
            position,
            reason: reason.into(),
        }
    }
}

impl Display for PathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at offset {} in {:?}",
            self.reason, self.position, self.expression
        )
    }
}

/// Errors surfaced by this crate.
///
/// Absence of a match is never an error: selection returns `None` or an
/// empty list instead.
#[derive(Debug)]
pub enum Error {
    /// The input is not a well-formed document.
    MalformedDocument(ParseError),
    /// The path evaluator rejected the expression.
    InvalidPathExpression(PathError),
    /// Reading the input or writing the output failed.
    Io(std::io::Error),
    /// Arena linkage failed while building the tree.
    Tree(indextree::NodeError),
}

impl Error {
    /// The parse error, if this is a malformed document.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::MalformedDocument(e) => Some(e),
            _ => None,
        }
    }

    /// The path error, if the expression was rejected.
    pub fn path_error(&self) -> Option<&PathError> {
        match self {
            Error::InvalidPathExpression(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedDocument(e) => write!(f, "malformed document: {}", e),
            Error::InvalidPathExpression(e) => write!(f, "invalid path expression: {}", e),
            Error::Io(e) => write!(f, "{}", e),
            Error::Tree(e) => write!(f, "tree error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Tree(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    #[inline]
    fn from(e: ParseError) -> Self {
        Error::MalformedDocument(e)
    }
}

impl From<PathError> for Error {
    #[inline]
    fn from(e: PathError) -> Self {
        Error::InvalidPathExpression(e)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<indextree::NodeError> for Error {
    #[inline]
    fn from(e: indextree::NodeError) -> Self {
        Error::Tree(e)
    }
}
