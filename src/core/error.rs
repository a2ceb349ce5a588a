use std::fmt;

use crate::factory::OpTag;

/// Errors that can occur while building or rendering expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    // Construction errors
    /// A unary tag was given a second operand
    UnexpectedOperand { tag: OpTag },
    /// A binary tag was given only one operand
    MissingOperand { tag: OpTag },
    /// Tag name not recognized by `OpTag::from_str`
    UnknownTag(String),

    // Mutation errors
    /// `append` was called on a node that is not n-ary
    NotAppendable { kind: &'static str },

    // Safety limits
    MaxDepthExceeded { limit: usize, depth: usize },
    MaxNodesExceeded { limit: usize, count: usize },
}

impl ExprError {
    /// Create UnknownTag from any string-like name
    pub fn unknown_tag(name: impl Into<String>) -> Self {
        ExprError::UnknownTag(name.into())
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::UnexpectedOperand { tag } => {
                write!(
                    f,
                    "Operator '{}' takes exactly one operand, but a second one was given",
                    tag
                )
            }
            ExprError::MissingOperand { tag } => {
                write!(
                    f,
                    "Operator '{}' takes two operands, but only one was given",
                    tag
                )
            }
            ExprError::UnknownTag(name) => write!(f, "Unknown operator tag: '{}'", name),
            ExprError::NotAppendable { kind } => {
                write!(
                    f,
                    "Cannot append to a '{}' node: only n-ary operators accept new children",
                    kind
                )
            }
            ExprError::MaxDepthExceeded { limit, depth } => {
                write!(
                    f,
                    "Expression nesting depth {} exceeds maximum limit {}",
                    depth, limit
                )
            }
            ExprError::MaxNodesExceeded { limit, count } => {
                write!(
                    f,
                    "Expression size {} exceeds maximum node count limit {}",
                    count, limit
                )
            }
        }
    }
}

impl std::error::Error for ExprError {}
