use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The four derivative-content types, in canonical generation order.
///
/// `Ord` follows declaration order, so iterating a [`ContentResults`] map
/// yields entries in the same order the batch driver runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    Critique,
    PerspectiveFeedback,
    BibleStudyGuide,
    KidsFollowAlong,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Critique,
        ContentKind::PerspectiveFeedback,
        ContentKind::BibleStudyGuide,
        ContentKind::KidsFollowAlong,
    ];

    /// Stable string key, also used as the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Critique => "critique",
            ContentKind::PerspectiveFeedback => "perspectiveFeedback",
            ContentKind::BibleStudyGuide => "bibleStudyGuide",
            ContentKind::KidsFollowAlong => "kidsFollowAlong",
        }
    }

    /// Sampling temperature for this kind's completion request.
    pub fn temperature(&self) -> f32 {
        match self {
            ContentKind::KidsFollowAlong => 0.8,
            _ => 0.7,
        }
    }

    /// Cap on generated tokens for this kind's completion request.
    pub fn max_output_tokens(&self) -> u32 {
        match self {
            ContentKind::KidsFollowAlong => 1200,
            _ => 1500,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry per selected kind; the value is either generated text or a
/// human-readable per-task error string. Unselected kinds are absent.
pub type ContentResults = BTreeMap<ContentKind, String>;

/// Boolean selection of derivative content to generate, supplied fresh per
/// batch. Grouped the way the UI presents them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    pub sermon_prep: SermonPrepOptions,
    pub sunday_content: SundayContentOptions,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SermonPrepOptions {
    pub critique: bool,
    pub perspective_feedback: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SundayContentOptions {
    pub bible_study_guide: bool,
    pub kids_follow_along: bool,
}

impl GenerationOptions {
    /// Every kind selected.
    pub fn all() -> Self {
        GenerationOptions {
            sermon_prep: SermonPrepOptions {
                critique: true,
                perspective_feedback: true,
            },
            sunday_content: SundayContentOptions {
                bible_study_guide: true,
                kids_follow_along: true,
            },
        }
    }

    fn is_selected(&self, kind: ContentKind) -> bool {
        match kind {
            ContentKind::Critique => self.sermon_prep.critique,
            ContentKind::PerspectiveFeedback => self.sermon_prep.perspective_feedback,
            ContentKind::BibleStudyGuide => self.sunday_content.bible_study_guide,
            ContentKind::KidsFollowAlong => self.sunday_content.kids_follow_along,
        }
    }

    /// Selected kinds in canonical generation order.
    pub fn selected_kinds(&self) -> Vec<ContentKind> {
        ContentKind::ALL
            .into_iter()
            .filter(|kind| self.is_selected(*kind))
            .collect()
    }
}
