use crate::common::GenericError;
use crate::models::NodeId;
use std::fmt;

/// Specifies a reason of parse failure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// A data line has unexpected amount of tokens.
    MalformedLine {
        /// Expected amount of tokens.
        expected: usize,
        /// Actual amount of tokens.
        actual: usize,
    },
    /// A demand or depot line references a node which has no coordinates.
    UnknownNode(NodeId),
    /// A token cannot be converted into a number.
    InvalidNumber(String),
    /// A node id is repeated in the coordinate section and duplicates are rejected.
    DuplicateNode(NodeId),
}

/// An error which stops parsing at specific line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    /// An error reason.
    pub kind: ParseErrorKind,
    /// One-based line number.
    pub line_number: usize,
    /// Line content.
    pub line: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, line_number: usize, line: &str) -> Self {
        Self { kind, line_number, line: line.to_string() }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { expected, actual } => {
                write!(f, "malformed line: expected {expected} tokens, got {actual}")
            }
            Self::UnknownNode(id) => write!(f, "unknown node '{id}'"),
            Self::InvalidNumber(token) => write!(f, "invalid number '{token}'"),
            Self::DuplicateNode(id) => write!(f, "duplicate node '{id}'"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}: '{}'", self.kind, self.line_number, self.line)
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for GenericError {
    fn from(err: ParseError) -> Self {
        err.to_string().into()
    }
}
