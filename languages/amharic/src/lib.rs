pub mod vocabulary;

pub use vocabulary::AmharicVocabulary;
