use std::fmt;
use std::str::FromStr;

use crate::compare::{case_insensitive_less, natural_less};
use crate::error::SortError;
use crate::view::AsView;
use crate::{OrderingMode, SortAlgorithm, sort_by, supports_kind};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ElementKind {
    Int,
    Char,
    Text,
}

pub const ALL_KINDS: [ElementKind; 3] = [ElementKind::Int, ElementKind::Char, ElementKind::Text];

pub fn kind_name(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Int => "int",
        ElementKind::Char => "char",
        ElementKind::Text => "text",
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(kind_name(*self))
    }
}

impl FromStr for ElementKind {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|&kind| kind_name(kind).eq_ignore_ascii_case(s))
            .ok_or_else(|| SortError::UnknownKind(s.to_owned()))
    }
}

/// A value whose kind is only known at run time.
///
/// The derived order ranks every `Int` before every `Char` before every
/// `Text`, then compares values within a kind.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Element {
    Int(i64),
    Char(char),
    Text(String),
}

impl Element {
    pub fn parse(kind: ElementKind, token: &str) -> Result<Self, SortError> {
        let invalid = || SortError::InvalidElement {
            kind,
            token: token.to_owned(),
        };

        match kind {
            ElementKind::Int => token.trim().parse().map(Element::Int).map_err(|_| invalid()),
            ElementKind::Char => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Element::Char(c)),
                    _ => Err(invalid()),
                }
            }
            ElementKind::Text => Ok(Element::Text(token.to_owned())),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Int(_) => ElementKind::Int,
            Element::Char(_) => ElementKind::Char,
            Element::Text(_) => ElementKind::Text,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Element::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(v) => write!(f, "{v}"),
            Element::Char(c) => write!(f, "{c}"),
            Element::Text(s) => f.write_str(s),
        }
    }
}

/// Sorts run-time typed elements, rejecting kinds the ordering cannot compare
/// before the first comparison.
pub fn sort_elements<S>(
    algo: SortAlgorithm,
    ordering: OrderingMode,
    source: &mut S,
) -> Result<(), SortError>
where
    S: AsView<Elem = Element> + ?Sized,
{
    let mut view = source.as_view();

    if let Some((index, element)) = view
        .as_slice()
        .iter()
        .enumerate()
        .find(|(_, element)| !supports_kind(ordering, element.kind()))
    {
        return Err(SortError::UnsupportedElement {
            index,
            kind: element.kind(),
            ordering,
        });
    }

    match ordering {
        OrderingMode::Natural => sort_by(algo, &mut view, natural_less::<Element>),
        OrderingMode::CaseInsensitive => sort_by(algo, &mut view, |a: &Element, b: &Element| {
            match (a.as_text(), b.as_text()) {
                (Some(a), Some(b)) => case_insensitive_less(a, b),
                _ => a < b,
            }
        }),
    }

    Ok(())
}
