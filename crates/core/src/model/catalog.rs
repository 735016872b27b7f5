use std::collections::{BTreeSet, HashSet};

use thiserror::Error;

use crate::model::ids::LessonId;
use crate::model::lesson::{Difficulty, LessonDescriptor, LessonDraft};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,

    #[error("duplicate lesson id {0}")]
    DuplicateId(LessonId),
}

const BUILTIN_LESSONS: [LessonDraft; 5] = [
    LessonDraft {
        id: 1,
        title: "Creative Personality Prompting",
        description: "Learn to ask AI engaging questions that reveal personality insights and make creative connections.",
        duration: "30 sec",
        difficulty: Difficulty::Beginner,
        skills: &["Creative Prompting", "Personality Analysis"],
        prompt: "Ask me 5 short and simple, multiple choice questions about my personality, one by one, and then tell me what famous artist or designer I am most like.",
        category: "Creative & Personal",
        url: "https://aiskillshouse.com/student/qr-mediator.html?uid=914&promptId=17",
    },
    LessonDraft {
        id: 2,
        title: "Event Planning Prompts",
        description: "Master comprehensive prompting for multi-faceted planning tasks with specific requirements.",
        duration: "30 sec",
        difficulty: Difficulty::Beginner,
        skills: &["Task Planning", "Structured Prompting"],
        prompt: "Help me plan a small, festive get-together for 5 friends at home. Suggest a simple menu, a music playlist theme, and one fun game we can play",
        category: "Planning & Organization",
        url: "https://aiskillshouse.com/student/qr-mediator.html?uid=914&promptId=16",
    },
    LessonDraft {
        id: 3,
        title: "Educational & Critical Analysis",
        description: "Craft prompts that encourage critical thinking and fact-checking in an entertaining way.",
        duration: "30 sec",
        difficulty: Difficulty::Intermediate,
        skills: &["Critical Analysis", "Educational Prompting"],
        prompt: "Pick a popular historical movie (Bollywood/Tollywood etc.) and point out three major historical inaccuracies in a fun, myth-busting way.",
        category: "Education & Analysis",
        url: "https://aiskillshouse.com/student/qr-mediator.html?uid=914&promptId=15",
    },
    LessonDraft {
        id: 4,
        title: "Travel & Recommendation Prompts",
        description: "Learn to create prompts that generate personalized recommendations based on context.",
        duration: "30 sec",
        difficulty: Difficulty::Beginner,
        skills: &["Recommendation Systems", "Contextual Prompting"],
        prompt: "I have a week-long break. Suggest a location were I can go with my friends for a weekend getaway.",
        category: "Travel & Lifestyle",
        url: "https://aiskillshouse.com/student/qr-mediator.html?uid=914&promptId=14",
    },
    LessonDraft {
        id: 5,
        title: "Sustainable & Creative Solutions",
        description: "Master prompts that combine creativity with specific constraints and values.",
        duration: "30 sec",
        difficulty: Difficulty::Intermediate,
        skills: &["Constraint-based Prompting", "Creative Solutions"],
        prompt: "The festive season is here. Suggest 5 creative and eco-friendly ways to decorate my home or hostel room to give it a festive vibe.",
        category: "Creativity & Sustainability",
        url: "https://aiskillshouse.com/student/qr-mediator.html?uid=914&promptId=13",
    },
];

/// Ordered, read-only list of lessons shipped with the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCatalog {
    lessons: Vec<LessonDescriptor>,
}

impl LessonCatalog {
    /// Build a catalog, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the list is empty or two lessons share an id.
    pub fn new(lessons: Vec<LessonDescriptor>) -> Result<Self, CatalogError> {
        if lessons.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(lessons.len());
        for lesson in &lessons {
            if !seen.insert(lesson.id()) {
                return Err(CatalogError::DuplicateId(lesson.id()));
            }
        }
        Ok(Self { lessons })
    }

    /// The five lessons of the AI prompting course.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in lesson fails validation.
    pub fn builtin() -> Result<Self, crate::Error> {
        let lessons = BUILTIN_LESSONS
            .into_iter()
            .map(LessonDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(lessons)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LessonDescriptor> {
        self.lessons.iter()
    }

    #[must_use]
    pub fn get(&self, id: LessonId) -> Option<&LessonDescriptor> {
        self.lessons.iter().find(|lesson| lesson.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: LessonId) -> bool {
        self.get(id).is_some()
    }

    /// Number of catalog lessons present in `completed`. Ids unknown to the
    /// catalog are ignored.
    #[must_use]
    pub fn completed_count(&self, completed: &BTreeSet<LessonId>) -> usize {
        self.lessons
            .iter()
            .filter(|lesson| completed.contains(&lesson.id()))
            .count()
    }

    #[must_use]
    pub fn all_completed(&self, completed: &BTreeSet<LessonId>) -> bool {
        self.completed_count(completed) == self.lessons.len()
    }

    /// Whole-number completion percentage in `0..=100`.
    #[must_use]
    pub fn progress_percent(&self, completed: &BTreeSet<LessonId>) -> u8 {
        if self.lessons.is_empty() {
            return 0;
        }
        let pct = self.completed_count(completed) * 100 / self.lessons.len();
        u8::try_from(pct).unwrap_or(100)
    }
}
