//! Fixture text for the three mockup views
//!
//! Everything the views display lives here as const data. The strings are
//! the literal placeholder copy from the product mockups, leading dashes
//! included, so the rendered output matches them character for character.

use crate::types::{Feature, FooterPanel, HistoryBucket, OutlineItem, ViewKind};

// ============================================================================
// LANDING VIEW
// ============================================================================

pub const HERO_TITLE: &str = "Understand Advanced Torah Research, Accurately and Intelligently";
pub const HERO_SUBTITLE: &str = "Explore complex Talmudic concepts, compile comprehensive source lists, locate specific quotes, and discover connections between Torah topics, with verified citations from approved databases.";

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Concept Explanation",
        description: "- Explain complex Talmudic and Halachic concepts with citations",
    },
    Feature {
        title: "Find Sources",
        description: "- Compile comprehensive source lists for research topics",
    },
    Feature {
        title: "Halachic Background",
        description: "- What are the views on celebrating Yom Ha'atzmaut?",
    },
    Feature {
        title: "Topic Connections",
        description: "- Explore relationships between different Torah topics",
    },
];

pub const QUERY_MODE_HINT: &str = "Select a query mode above";
pub const GREETING: &str = "Shalom! What would you like to learn today?";
pub const SEARCH_HINT: &str = "Search Torah Sources";

pub const FOOTER_PANELS: [FooterPanel; 3] = [
    FooterPanel {
        title: "TORAH AI",
        prose: Some("AI-Powered Torah Research Assistant Providing Reliable Citations And Scholarly Analysis From Approved Databases."),
        bullets: &[],
    },
    FooterPanel {
        title: "SECURITY FEATURES",
        prose: None,
        bullets: &[
            "- APPROVED DATABASE SOURCES ONLY",
            "- CITATION VERIFICATION SYSTEM",
            "- NO EXTERNAL INFORMATION MIXING",
            "- TRANSPARENT SOURCE ATTRIBUTION",
        ],
    },
    FooterPanel {
        title: "RESEARCH CAPABILITIES",
        prose: None,
        bullets: &[
            "- TALMUDIC CONCEPT EXPLANATION",
            "- COMPREHENSIVE SOURCE COMPILATION",
            "- ORIGINAL QUOTE LOCATION",
            "- TOPIC CONNECTION ANALYSIS",
        ],
    },
];

pub const DISCLAIMER: &str = "This Tool Provides Educational Information Only. For Halachic Rulings, Consult A Qualified Rabbi.";

// ============================================================================
// SHARED HEADER / HISTORY
// ============================================================================

pub const BRAND: &str = "TORAH AI";
pub const NEW_CHAT_LABEL: &str = "+ New Chat";
pub const HISTORY_HEADING: &str = "Conversation History";
pub const CLEAR_ALL_LABEL: &str = "Clear All";

const PLACEHOLDER_QUERY: &str = "What are the benefits of eating v...";
const PLACEHOLDER_QUERY_DASHED: &str = "- What are the benefits of eating v...";

/// History view buckets: 8 unlabeled recent entries, 6 under "Last 7 Days"
pub const HISTORY_PANEL_BUCKETS: [HistoryBucket; 2] = [
    HistoryBucket {
        label: None,
        entries: &[PLACEHOLDER_QUERY; 8],
    },
    HistoryBucket {
        label: Some("Last 7 Days"),
        entries: &[
            PLACEHOLDER_QUERY,
            PLACEHOLDER_QUERY,
            PLACEHOLDER_QUERY,
            PLACEHOLDER_QUERY,
            PLACEHOLDER_QUERY,
            ANSWER_QUESTION,
        ],
    },
];

/// Answer view buckets: 5 unlabeled recent entries, 4 under "Last 7 Days".
/// This variant prefixes each entry with a dash, as the mockup does.
pub const ANSWER_HISTORY_BUCKETS: [HistoryBucket; 2] = [
    HistoryBucket {
        label: None,
        entries: &[PLACEHOLDER_QUERY_DASHED; 5],
    },
    HistoryBucket {
        label: Some("Last 7 Days"),
        entries: &[PLACEHOLDER_QUERY_DASHED; 4],
    },
];

/// Trailing section label under the answer view's history list
pub const SETTINGS_LABEL: &str = "Settings";

// ============================================================================
// ANSWER VIEW
// ============================================================================

pub const ANSWER_QUESTION: &str =
    "What is the difference between melacha and av melacha on Shabbat?";
pub const ANSWER_LEAD: &str = "Great question!";

pub const ANSWER_OUTLINE: [OutlineItem; 13] = [
    OutlineItem { depth: 0, strong: true, text: "- Melacha vs. Av Melacha on Shabbat" },
    OutlineItem { depth: 1, strong: false, text: "- Melacha (מלאכה)" },
    OutlineItem { depth: 2, strong: false, text: "- Definition: In halacha, a melacha refers to a category of creative labor that is prohibited on Shabbat." },
    OutlineItem { depth: 2, strong: false, text: "- These are not simply \"work\" in the modern sense (e.g., lifting something heavy), but rather specific types of constructive actions that were done in building the Mishkan (Tabernacle)." },
    OutlineItem { depth: 2, strong: false, text: "- Example: Writing two letters, lighting a fire, or planting a seed are all melachot." },
    OutlineItem { depth: 1, strong: false, text: "- Av Melacha (אב מלאכה)" },
    OutlineItem { depth: 2, strong: false, text: "- Translation: \"Primary category of labor\"" },
    OutlineItem { depth: 2, strong: false, text: "- There are 39 avot melacha (plural of av melacha), derived directly from the Torah." },
    OutlineItem { depth: 2, strong: false, text: "- These are the main archetypes of forbidden activities." },
    OutlineItem { depth: 2, strong: false, text: "- Each av melacha has related subcategories called toladot (offspring actions) that are also forbidden because they resemble or result from the same principle." },
    OutlineItem { depth: 1, strong: false, text: "- Relationship" },
    OutlineItem { depth: 2, strong: false, text: "- Every av melacha is a melacha, but not every melacha is an av melacha." },
    OutlineItem { depth: 2, strong: false, text: "- Think of it like this:" },
];

pub const CITATION_HASH: &str = "CCCDHHJDMN2637872NDDM...";
pub const CITATION_FORMAT: &str = "PDF";

pub const ASK_HINT: &str = "Ask anything...";
pub const TRUST_CAPTION: &str = "Torah AI will only respond with trusted Torah sources, not modern unsourced opinions or unreliable internet results";

// ============================================================================
// PLAIN-TEXT DUMP
// ============================================================================

/// Linearize a view's fixture data into plain text, one display string per
/// line in render order. Used by the determinism tests.
pub fn plain_text(view: ViewKind) -> String {
    let mut out = String::new();
    let mut line = |s: &str| {
        out.push_str(s);
        out.push('\n');
    };
    match view {
        ViewKind::Landing => {
            line(HERO_TITLE);
            line(HERO_SUBTITLE);
            for f in &FEATURES {
                line(f.title);
                line(f.description);
            }
            line(QUERY_MODE_HINT);
            line(GREETING);
            line(SEARCH_HINT);
            for p in &FOOTER_PANELS {
                line(p.title);
                if let Some(prose) = p.prose {
                    line(prose);
                }
                for b in p.bullets {
                    line(b);
                }
            }
            line(DISCLAIMER);
        }
        ViewKind::History => {
            line(BRAND);
            line(NEW_CHAT_LABEL);
            line(HISTORY_HEADING);
            line(CLEAR_ALL_LABEL);
            for bucket in &HISTORY_PANEL_BUCKETS {
                if let Some(label) = bucket.label {
                    line(label);
                }
                for e in bucket.entries {
                    line(e);
                }
            }
        }
        ViewKind::Answer => {
            line(BRAND);
            line(NEW_CHAT_LABEL);
            line(HISTORY_HEADING);
            line(CLEAR_ALL_LABEL);
            for bucket in &ANSWER_HISTORY_BUCKETS {
                if let Some(label) = bucket.label {
                    line(label);
                }
                for e in bucket.entries {
                    line(e);
                }
            }
            line(SETTINGS_LABEL);
            line(ANSWER_QUESTION);
            line(ANSWER_LEAD);
            for item in &ANSWER_OUTLINE {
                line(item.text);
            }
            line(CITATION_HASH);
            line(CITATION_FORMAT);
            line(ASK_HINT);
            line(TRUST_CAPTION);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_is_deterministic() {
        for view in ViewKind::ALL {
            assert_eq!(plain_text(view), plain_text(view));
        }
    }

    #[test]
    fn landing_has_four_features() {
        assert_eq!(FEATURES.len(), 4);
        for f in &FEATURES {
            assert!(!f.title.is_empty());
            assert!(!f.description.is_empty());
        }
    }

    #[test]
    fn footer_panel_shape() {
        assert_eq!(FOOTER_PANELS.len(), 3);
        let titles: Vec<&str> = FOOTER_PANELS.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            ["TORAH AI", "SECURITY FEATURES", "RESEARCH CAPABILITIES"]
        );
        let bullet_counts: Vec<usize> = FOOTER_PANELS.iter().map(|p| p.bullets.len()).collect();
        assert_eq!(bullet_counts, [0, 4, 4]);
        // first panel is prose, the others are bullets only
        assert!(FOOTER_PANELS[0].prose.is_some());
        assert!(FOOTER_PANELS[1].prose.is_none());
        assert!(FOOTER_PANELS[2].prose.is_none());
    }

    #[test]
    fn history_bucket_counts() {
        assert_eq!(HISTORY_PANEL_BUCKETS[0].label, None);
        assert_eq!(HISTORY_PANEL_BUCKETS[0].entries.len(), 8);
        assert_eq!(HISTORY_PANEL_BUCKETS[1].label, Some("Last 7 Days"));
        assert_eq!(HISTORY_PANEL_BUCKETS[1].entries.len(), 6);

        assert_eq!(ANSWER_HISTORY_BUCKETS[0].label, None);
        assert_eq!(ANSWER_HISTORY_BUCKETS[0].entries.len(), 5);
        assert_eq!(ANSWER_HISTORY_BUCKETS[1].label, Some("Last 7 Days"));
        assert_eq!(ANSWER_HISTORY_BUCKETS[1].entries.len(), 4);
    }

    #[test]
    fn answer_contains_question_literal() {
        let text = plain_text(ViewKind::Answer);
        assert!(text.contains(
            "What is the difference between melacha and av melacha on Shabbat?"
        ));
        // the same question closes the history view's "Last 7 Days" bucket
        assert_eq!(
            HISTORY_PANEL_BUCKETS[1].entries.last().copied(),
            Some(ANSWER_QUESTION)
        );
    }

    #[test]
    fn outline_nesting_is_well_formed() {
        assert_eq!(ANSWER_OUTLINE[0].depth, 0);
        let mut prev = 0u8;
        for item in &ANSWER_OUTLINE {
            assert!(item.depth <= prev + 1, "depth jumps at {:?}", item.text);
            assert!(item.depth <= 2);
            assert!(!item.text.is_empty());
            prev = item.depth;
        }
        // all three indentation levels are exercised
        assert!(ANSWER_OUTLINE.iter().any(|i| i.depth == 1));
        assert!(ANSWER_OUTLINE.iter().any(|i| i.depth == 2));
    }
}
