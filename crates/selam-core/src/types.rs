use serde::{Deserialize, Serialize};

/// A single translation pair belonging to one topic and one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub native: String,
    pub learning: String,
}

impl VocabularyEntry {
    pub fn new(native: impl Into<String>, learning: impl Into<String>) -> Self {
        Self {
            native: native.into(),
            learning: learning.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Translation,
    MultipleChoice,
    FillBlank,
    Matching,
    ReverseTranslation,
}

impl ExerciseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Translation => "translation",
            ExerciseKind::MultipleChoice => "multiple_choice",
            ExerciseKind::FillBlank => "fill_blank",
            ExerciseKind::Matching => "matching",
            ExerciseKind::ReverseTranslation => "reverse_translation",
        }
    }
}

/// Exercise with one correct answer among shuffled options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceExercise {
    pub id: String,
    pub prompt: String,
    pub answer: String,
    pub options: Vec<String>,
}

/// Exercise pairing learning-language words with their translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingExercise {
    pub id: String,
    pub prompt: String,
    pub pairs: Vec<MatchingPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingPair {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Exercise {
    Translation(ChoiceExercise),
    MultipleChoice(ChoiceExercise),
    FillBlank(ChoiceExercise),
    Matching(MatchingExercise),
    ReverseTranslation(ChoiceExercise),
}

const NO_OPTIONS: &[String] = &[];
const NO_PAIRS: &[MatchingPair] = &[];

impl Exercise {
    pub fn kind(&self) -> ExerciseKind {
        match self {
            Exercise::Translation(_) => ExerciseKind::Translation,
            Exercise::MultipleChoice(_) => ExerciseKind::MultipleChoice,
            Exercise::FillBlank(_) => ExerciseKind::FillBlank,
            Exercise::Matching(_) => ExerciseKind::Matching,
            Exercise::ReverseTranslation(_) => ExerciseKind::ReverseTranslation,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Exercise::Translation(ex)
            | Exercise::MultipleChoice(ex)
            | Exercise::FillBlank(ex)
            | Exercise::ReverseTranslation(ex) => &ex.id,
            Exercise::Matching(ex) => &ex.id,
        }
    }

    pub fn set_id(&mut self, id: String) {
        match self {
            Exercise::Translation(ex)
            | Exercise::MultipleChoice(ex)
            | Exercise::FillBlank(ex)
            | Exercise::ReverseTranslation(ex) => ex.id = id,
            Exercise::Matching(ex) => ex.id = id,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Exercise::Translation(ex)
            | Exercise::MultipleChoice(ex)
            | Exercise::FillBlank(ex)
            | Exercise::ReverseTranslation(ex) => &ex.prompt,
            Exercise::Matching(ex) => &ex.prompt,
        }
    }

    /// Correct answer value, None for matching exercises
    pub fn answer(&self) -> Option<&str> {
        match self {
            Exercise::Translation(ex)
            | Exercise::MultipleChoice(ex)
            | Exercise::FillBlank(ex)
            | Exercise::ReverseTranslation(ex) => Some(&ex.answer),
            Exercise::Matching(_) => None,
        }
    }

    /// Answer options, empty for matching exercises
    pub fn options(&self) -> &[String] {
        match self {
            Exercise::Translation(ex)
            | Exercise::MultipleChoice(ex)
            | Exercise::FillBlank(ex)
            | Exercise::ReverseTranslation(ex) => &ex.options,
            Exercise::Matching(_) => NO_OPTIONS,
        }
    }

    /// Word/translation pairs, empty for choice exercises
    pub fn pairs(&self) -> &[MatchingPair] {
        match self {
            Exercise::Matching(ex) => &ex.pairs,
            _ => NO_PAIRS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub unit_id: u32,
    pub title: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: u32,
    pub section_id: u32,
    pub title: String,
    pub description: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub units: Vec<Unit>,
}
