//! Common types and data structures

/// Which mockup view the shell currently mounts
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewKind {
    Landing,
    History,
    Answer,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Landing, ViewKind::History, ViewKind::Answer];

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Landing => "Landing",
            ViewKind::History => "History",
            ViewKind::Answer => "Answer",
        }
    }
}

/// Entry in the landing feature grid
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// Informational panel in the landing footer. Panels carry either a prose
/// paragraph or a bullet list, never both.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FooterPanel {
    pub title: &'static str,
    pub prose: Option<&'static str>,
    pub bullets: &'static [&'static str],
}

/// Labeled grouping of placeholder history entries. The most-recent bucket
/// has no label in the mockups.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HistoryBucket {
    pub label: Option<&'static str>,
    pub entries: &'static [&'static str],
}

/// One line of the canned answer outline. Depth 0 is the heading level;
/// children indent one step per depth.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OutlineItem {
    pub depth: u8,
    pub text: &'static str,
    pub strong: bool,
}
