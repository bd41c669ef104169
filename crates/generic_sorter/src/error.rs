use thiserror::Error;

use crate::element::ElementKind;
use crate::OrderingMode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Raised before any comparison runs; the input is left untouched.
    #[error("element {index} is {kind}, which {ordering} ordering cannot compare")]
    UnsupportedElement {
        index: usize,
        kind: ElementKind,
        ordering: OrderingMode,
    },

    #[error("`{token}` is not a valid {kind} element")]
    InvalidElement { kind: ElementKind, token: String },

    #[error("unknown sort algorithm `{0}`")]
    UnknownAlgorithm(String),

    #[error("unknown element kind `{0}`")]
    UnknownKind(String),
}
