//! Keyword Classification
//!
//! Four independent predicates, one per bucket. An entry is tested against
//! each of them separately, so it can land in several buckets or none.
//! Keyword matching is a case-sensitive substring test.

use crate::profile::KeywordTables;
use crate::vocabulary::VocabularyEntry;
use serde::Serialize;

/// Classification bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SocialLife,
    CultureTravel,
    Verb,
    Adjective,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::SocialLife,
        Category::CultureTravel,
        Category::Verb,
        Category::Adjective,
    ];

    /// Label used in the statistics section of the report
    pub fn label(self) -> &'static str {
        match self {
            Category::SocialLife => "社会生活词汇",
            Category::CultureTravel => "文化旅游词汇",
            Category::Verb => "动词",
            Category::Adjective => "形容词",
        }
    }

    /// Whether `entry` belongs to this bucket
    pub fn matches(self, entry: &VocabularyEntry, tables: &KeywordTables) -> bool {
        let translation = entry.translation_text();
        match self {
            Category::SocialLife => is_social_life(translation, tables),
            Category::CultureTravel => is_culture_travel(translation, tables),
            Category::Verb => is_verb(entry.part_of_speech_tag(), tables),
            Category::Adjective => is_adjective(translation, tables),
        }
    }
}

/// True if `text` contains any keyword
pub fn contains_any<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    keywords.iter().any(|kw| {
        let kw: &str = kw.as_ref();
        text.contains(kw)
    })
}

pub fn is_social_life(translation: &str, tables: &KeywordTables) -> bool {
    contains_any(translation, &tables.social_life)
}

pub fn is_culture_travel(translation: &str, tables: &KeywordTables) -> bool {
    contains_any(translation, &tables.culture_travel)
}

/// Exact match on the tag, no case folding
pub fn is_verb(part_of_speech: &str, tables: &KeywordTables) -> bool {
    part_of_speech == tables.verb_tag
}

pub fn is_adjective(translation: &str, tables: &KeywordTables) -> bool {
    contains_any(translation, &tables.adjective)
}

/// Every bucket `entry` falls into, in report order
pub fn categories_of(entry: &VocabularyEntry, tables: &KeywordTables) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|category| category.matches(entry, tables))
        .collect()
}

/// Bucket sizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub social_life: usize,
    pub culture_travel: usize,
    pub verb: usize,
    pub adjective: usize,
}

impl CategoryCounts {
    pub fn tally(entries: &[VocabularyEntry], tables: &KeywordTables) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            for category in categories_of(entry, tables) {
                *counts.slot(category) += 1;
            }
        }
        counts
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::SocialLife => self.social_life,
            Category::CultureTravel => self.culture_travel,
            Category::Verb => self.verb,
            Category::Adjective => self.adjective,
        }
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::SocialLife => &mut self.social_life,
            Category::CultureTravel => &mut self.culture_travel,
            Category::Verb => &mut self.verb,
            Category::Adjective => &mut self.adjective,
        }
    }
}
