//! The enumeration seam between the locator and its toolset sources.

use crate::toolset::Toolset;

/// Outcome of asking a source for its installed toolsets.
///
/// `Absent` means the source itself was out of reach: the backing service is
/// not present on this host, or it turned out to hold nothing usable. `Found`
/// carries whatever the source reported, preserving the source's internal
/// order. The distinction only matters to the merge policy - an absent
/// source contributes nothing to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enumeration {
    /// The source could not be reached or had nothing usable to report.
    Absent,
    /// Toolsets reported by the source, in source order. May be empty.
    Found(Vec<Toolset>),
}

impl Enumeration {
    /// Number of toolsets this outcome contributes to the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Found(toolsets) => toolsets.len(),
        }
    }

    /// True when the outcome contributes no toolsets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A source of installed toolsets.
///
/// Implementations must not fail: any internal error is recovered by
/// degrading to [`Enumeration::Absent`] or an empty `Found` list, whichever
/// the source's contract calls for. Which of the two a degraded source
/// reports is part of that contract - the engine-backed source always
/// reports `Found`, the side-by-side source collapses every miss to
/// `Absent`.
pub trait ToolsetSource {
    /// Short source name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Enumerate the toolsets this source can currently see.
    fn enumerate(&self) -> Enumeration;
}
