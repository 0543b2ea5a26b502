/// Page state definitions for tracking a URL through one crawl
///
/// Every discovered URL walks the same path:
/// `Discovered -> Canonicalized -> Checked -> Html -> Fetched -> Extracted -> Recorded`,
/// leaving it at the first terminal state it reaches.
use std::fmt;

/// Represents the current state of a URL in the traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Active States =====
    /// Link was found on a page (or is the root)
    Discovered,

    /// Link was resolved into a canonical URL
    Canonicalized,

    /// HEAD request answered
    Checked,

    /// HEAD response announced `text/html`
    Html,

    /// Body was downloaded
    Fetched,

    /// Visible text was extracted from the body
    Extracted,

    /// Page record was handed to the result sink
    Recorded,

    // ===== Terminal Skip States =====
    /// Link could not be parsed as a URL
    RejectedInvalid,

    /// URL was already visited during this crawl
    DedupedSkip,

    /// HEAD response announced something other than `text/html`
    NonHtmlSkip,

    // ===== Terminal Error States =====
    /// HEAD or GET failed (connection, TLS, DNS, timeout, body read)
    TransportFailed,

    // ===== Terminal Success States =====
    /// Page was recorded but sits at the depth limit, so its links are not followed
    LeafAtDepthLimit,

    /// Page was recorded and its in-scope links were queued
    Expanded,
}

impl PageState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::RejectedInvalid
                | Self::DedupedSkip
                | Self::NonHtmlSkip
                | Self::TransportFailed
                | Self::LeafAtDepthLimit
                | Self::Expanded
        )
    }

    /// Returns true if the page produced a record
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::LeafAtDepthLimit | Self::Expanded)
    }

    /// Returns true if the branch was pruned before producing a record
    pub fn is_pruned(&self) -> bool {
        self.is_terminal() && !self.is_recorded()
    }

    /// Returns true if `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: PageState) -> bool {
        use PageState::*;

        matches!(
            (self, next),
            (Discovered, Canonicalized)
                | (Discovered, RejectedInvalid)
                | (Canonicalized, DedupedSkip)
                | (Canonicalized, Checked)
                | (Canonicalized, TransportFailed)
                | (Checked, NonHtmlSkip)
                | (Checked, Html)
                | (Html, DedupedSkip)
                | (Html, Fetched)
                | (Html, TransportFailed)
                | (Fetched, Extracted)
                | (Extracted, Recorded)
                | (Recorded, LeafAtDepthLimit)
                | (Recorded, Expanded)
        )
    }

    /// Returns the stable snake_case name of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discovered => "discovered",
            Self::Canonicalized => "canonicalized",
            Self::Checked => "checked",
            Self::Html => "html",
            Self::Fetched => "fetched",
            Self::Extracted => "extracted",
            Self::Recorded => "recorded",
            Self::RejectedInvalid => "rejected_invalid",
            Self::DedupedSkip => "deduped_skip",
            Self::NonHtmlSkip => "non_html_skip",
            Self::TransportFailed => "transport_failed",
            Self::LeafAtDepthLimit => "leaf_at_depth_limit",
            Self::Expanded => "expanded",
        }
    }

    /// Returns all terminal states
    pub fn terminal_states() -> [Self; 6] {
        [
            Self::RejectedInvalid,
            Self::DedupedSkip,
            Self::NonHtmlSkip,
            Self::TransportFailed,
            Self::LeafAtDepthLimit,
            Self::Expanded,
        ]
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
