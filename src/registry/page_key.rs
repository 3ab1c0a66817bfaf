//! # Page Keys
//!
//! Identity of a registrable page slot: a kind (route, option, or any other
//! discriminator) and a name. Keys compare structurally, so a name containing the
//! `.` separator can never collide with a different kind/name split.

use crate::constants::{KEY_SEPARATOR, OPTION_GROUP_JOINER, OPTION_KIND, ROUTE_KIND};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminator between route-backed and option-backed pages
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PageKind {
    Route,
    Option,
    /// Any other discriminator, carried through opaquely
    Custom(String),
}

impl PageKind {
    pub fn as_str(&self) -> &str {
        match self {
            PageKind::Route => ROUTE_KIND,
            PageKind::Option => OPTION_KIND,
            PageKind::Custom(kind) => kind,
        }
    }

    pub fn is_option(&self) -> bool {
        matches!(self, PageKind::Option)
    }
}

impl From<&str> for PageKind {
    fn from(kind: &str) -> Self {
        match kind {
            ROUTE_KIND => PageKind::Route,
            OPTION_KIND => PageKind::Option,
            other => PageKind::Custom(other.to_string()),
        }
    }
}

impl From<String> for PageKind {
    fn from(kind: String) -> Self {
        PageKind::from(kind.as_str())
    }
}

impl From<PageKind> for String {
    fn from(kind: PageKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for PageKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PageKind::from(s))
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite page identity, rendered as `kind.name`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageKey {
    pub kind: PageKind,
    pub name: String,
}

impl PageKey {
    pub fn new(kind: impl Into<PageKind>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }

    pub fn route(name: impl Into<String>) -> Self {
        Self::new(PageKind::Route, name)
    }

    pub fn option(name: impl Into<String>) -> Self {
        Self::new(PageKind::Option, name)
    }

    /// Key for one template governing several option groups (`option.meta+social`)
    pub fn option_group<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(OPTION_GROUP_JOINER);
        Self::option(joined)
    }

    /// Parse a rendered key, splitting on the first separator.
    ///
    /// Returns `None` when the separator is missing or the kind is empty.
    pub fn parse(key: &str) -> Option<Self> {
        let (kind, name) = key.split_once(KEY_SEPARATOR)?;
        if kind.is_empty() {
            return None;
        }
        Some(Self::new(kind, name))
    }

    pub fn is_option(&self) -> bool {
        self.kind.is_option()
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind, KEY_SEPARATOR, self.name)
    }
}
