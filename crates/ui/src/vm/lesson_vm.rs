use std::collections::BTreeSet;

use course_core::model::{Difficulty, LessonCatalog, LessonDescriptor, LessonId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: LessonId,
    pub number: usize,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: String,
    pub difficulty_class: &'static str,
    pub category: String,
    pub skills: Vec<String>,
    pub prompt: String,
    pub completed: bool,
}

impl LessonCardVm {
    #[must_use]
    pub fn from_descriptor(number: usize, lesson: &LessonDescriptor, completed: bool) -> Self {
        Self {
            id: lesson.id(),
            number,
            title: lesson.title().to_string(),
            description: lesson.description().to_string(),
            duration: lesson.duration().to_string(),
            difficulty: lesson.difficulty().label().to_string(),
            difficulty_class: difficulty_class(lesson.difficulty()),
            category: lesson.category().to_string(),
            skills: lesson.skills().to_vec(),
            prompt: lesson.prompt().to_string(),
            completed,
        }
    }

    #[must_use]
    pub fn action_label(&self) -> &'static str {
        if self.completed {
            "Review Lesson"
        } else {
            "Start Lesson"
        }
    }

    #[must_use]
    pub fn card_class(&self) -> &'static str {
        if self.completed {
            "lesson-card lesson-card--done"
        } else {
            "lesson-card"
        }
    }
}

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "tag tag--beginner",
        Difficulty::Intermediate => "tag tag--intermediate",
        Difficulty::Advanced => "tag tag--advanced",
    }
}

#[must_use]
pub fn map_lesson_cards(
    catalog: &LessonCatalog,
    completed: &BTreeSet<LessonId>,
) -> Vec<LessonCardVm> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, lesson)| {
            LessonCardVm::from_descriptor(index + 1, lesson, completed.contains(&lesson.id()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_follow_catalog_order_and_completion() {
        let catalog = LessonCatalog::builtin().unwrap();
        let completed = [LessonId::new(2)].into_iter().collect();
        let cards = map_lesson_cards(&catalog, &completed);

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].number, 1);
        assert_eq!(cards[0].action_label(), "Start Lesson");
        assert!(cards[1].completed);
        assert_eq!(cards[1].action_label(), "Review Lesson");
        assert_eq!(cards[1].card_class(), "lesson-card lesson-card--done");
        assert_eq!(cards[2].difficulty, "Intermediate");
        assert_eq!(cards[2].difficulty_class, "tag tag--intermediate");
    }
}
