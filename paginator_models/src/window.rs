use nutype::nutype;

/// One element of the pagination display sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A concrete, 1-indexed page number.
    Page(u64),
    /// A collapsed range of hidden page numbers.
    Ellipsis,
}

impl PageToken {
    pub const ELLIPSIS: &'static str = "…";

    pub fn page(self) -> Option<u64> {
        match self {
            Self::Page(number) => Some(number),
            Self::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl std::fmt::Display for PageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(number) => number.fmt(f),
            Self::Ellipsis => f.write_str(PageToken::ELLIPSIS),
        }
    }
}

/// Maximum number of tokens (page numbers and ellipses) shown at once.
#[nutype(
    validate(greater_or_equal = MaxVisible::MIN, less_or_equal = MaxVisible::MAX),
    derive(
        Debug,
        Display,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Deref,
        TryFrom,
        Serialize,
        Deserialize
    )
)]
pub struct MaxVisible(u64);

impl MaxVisible {
    /// First page, last page, two ellipses and the current page.
    pub const MIN: u64 = 5;
    pub const MAX: u64 = 99;
    pub const DEFAULT: u64 = 7;
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self::try_new(Self::DEFAULT).unwrap()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowConfig {
    pub max_visible: MaxVisible,
}
