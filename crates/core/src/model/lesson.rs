use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::model::ids::LessonId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson {0} has an empty title")]
    EmptyTitle(LessonId),

    #[error("lesson {id} has an invalid url: {raw}")]
    InvalidUrl { id: LessonId, raw: String },

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(LessonError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Unvalidated lesson data as written in the catalog source.
#[derive(Debug, Clone)]
pub struct LessonDraft {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub skills: &'static [&'static str],
    pub prompt: &'static str,
    pub category: &'static str,
    pub url: &'static str,
}

impl LessonDraft {
    /// Validate the draft into an immutable descriptor.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` if the title is blank or the URL is not absolute.
    pub fn validate(self) -> Result<LessonDescriptor, LessonError> {
        let id = LessonId::new(self.id);
        let title = self.title.trim();
        if title.is_empty() {
            return Err(LessonError::EmptyTitle(id));
        }
        let url = Url::parse(self.url).map_err(|_| LessonError::InvalidUrl {
            id,
            raw: self.url.to_string(),
        })?;

        Ok(LessonDescriptor {
            id,
            title: title.to_string(),
            url,
            duration: self.duration.to_string(),
            difficulty: self.difficulty,
            category: self.category.to_string(),
            skills: self.skills.iter().map(|s| (*s).to_string()).collect(),
            description: self.description.to_string(),
            prompt: self.prompt.to_string(),
        })
    }
}

/// Static metadata for one lesson, including its external content URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonDescriptor {
    id: LessonId,
    title: String,
    url: Url,
    duration: String,
    difficulty: Difficulty,
    category: String,
    skills: Vec<String>,
    description: String,
    prompt: String,
}

impl LessonDescriptor {
    #[must_use]
    pub fn id(&self) -> LessonId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}
