pub mod curriculum;
pub mod error;
pub mod exercise;
pub mod practice;
pub mod schedule;
pub mod types;
pub mod vocabulary;

pub use curriculum::{Curriculum, CurriculumGenerator};
pub use practice::{DEFAULT_PRACTICE_SIZE, practice_set, practice_set_with_size};
pub use types::{
    ChoiceExercise, Exercise, ExerciseKind, Lesson, MatchingExercise, MatchingPair, Section, Unit,
    VocabularyEntry,
};
pub use vocabulary::{TableVocabulary, VocabularyCatalog, VocabularyProvider};
