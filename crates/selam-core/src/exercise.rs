//! Exercise synthesis: one vocabulary entry plus its topic's entry list
//! becomes the five exercises of a lesson.
//!
//! Generation never fails. Missing entries, sparse topics, and exhausted
//! distractor pools all degrade to placeholder text so that every lesson
//! renders a full set of exercises.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::{
    ChoiceExercise, Exercise, MatchingExercise, MatchingPair, VocabularyEntry,
};

/// Distractors per choice exercise
pub const DISTRACTOR_COUNT: usize = 3;
/// Pairs per matching exercise
pub const MATCHING_PAIRS: usize = 4;

/// Which side of a vocabulary entry an answer is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerField {
    Native,
    Learning,
}

impl AnswerField {
    fn of<'a>(&self, entry: &'a VocabularyEntry) -> &'a str {
        match self {
            AnswerField::Native => &entry.native,
            AnswerField::Learning => &entry.learning,
        }
    }
}

/// Draw `count` distinct distractor values from the topic's other entries.
///
/// Candidates equal to the correct answer are excluded up front; each pick
/// removes its entry from the pool. If the pool runs dry the remaining slots
/// are filled with `"Option N"` placeholders.
pub fn pick_distractors<R: Rng>(
    entries: &[VocabularyEntry],
    correct: &str,
    field: AnswerField,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut pool: Vec<&str> = entries
        .iter()
        .map(|entry| field.of(entry))
        .filter(|value| *value != correct)
        .collect();

    let mut distractors = Vec::with_capacity(count);
    while distractors.len() < count && !pool.is_empty() {
        let index = rng.gen_range(0..pool.len());
        distractors.push(pool.swap_remove(index).to_string());
    }
    while distractors.len() < count {
        distractors.push(format!("Option {}", distractors.len() + 1));
    }

    distractors
}

/// Build the five exercises of one lesson.
///
/// `lesson_index` selects the vocabulary entry (0-based); an index past the
/// topic's entry count substitutes a synthetic placeholder entry.
pub fn synthesize_exercises<R: Rng>(
    lesson_id: &str,
    lesson_index: usize,
    topic: &str,
    entries: &[VocabularyEntry],
    native: &str,
    learning: &str,
    rng: &mut R,
) -> Vec<Exercise> {
    let entry = entries
        .get(lesson_index)
        .cloned()
        .unwrap_or_else(|| placeholder_entry(topic, learning, lesson_index + 1));

    let native_label = capitalize(native);
    let learning_label = capitalize(learning);

    vec![
        Exercise::Translation(ChoiceExercise {
            id: exercise_id(lesson_id, 1),
            prompt: format!("How do you say \"{}\" in {}?", entry.native, learning_label),
            answer: entry.learning.clone(),
            options: options_around(entries, &entry.learning, AnswerField::Learning, rng),
        }),
        Exercise::MultipleChoice(ChoiceExercise {
            id: exercise_id(lesson_id, 2),
            prompt: format!("Which of these means \"{}\"?", entry.native),
            answer: entry.learning.clone(),
            options: options_around(entries, &entry.learning, AnswerField::Learning, rng),
        }),
        Exercise::FillBlank(ChoiceExercise {
            id: exercise_id(lesson_id, 3),
            prompt: format!("Fill in the blank: \"____\" means \"{}\".", entry.native),
            answer: entry.learning.clone(),
            options: options_around(entries, &entry.learning, AnswerField::Learning, rng),
        }),
        Exercise::Matching(MatchingExercise {
            id: exercise_id(lesson_id, 4),
            prompt: format!("Match the {} words to their translations", learning_label),
            pairs: matching_pairs(entries),
        }),
        Exercise::ReverseTranslation(ChoiceExercise {
            id: exercise_id(lesson_id, 5),
            prompt: format!("What does \"{}\" mean in {}?", entry.learning, native_label),
            answer: entry.native.clone(),
            options: options_around(entries, &entry.native, AnswerField::Native, rng),
        }),
    ]
}

/// Correct answer plus distractors, shuffled
fn options_around<R: Rng>(
    entries: &[VocabularyEntry],
    correct: &str,
    field: AnswerField,
    rng: &mut R,
) -> Vec<String> {
    let mut options = pick_distractors(entries, correct, field, DISTRACTOR_COUNT, rng);
    options.push(correct.to_string());
    options.shuffle(rng);
    options
}

/// First four topic entries as pairs, padded with placeholders when fewer exist
fn matching_pairs(entries: &[VocabularyEntry]) -> Vec<MatchingPair> {
    let mut pairs: Vec<MatchingPair> = entries
        .iter()
        .take(MATCHING_PAIRS)
        .map(|entry| MatchingPair {
            left: entry.learning.clone(),
            right: entry.native.clone(),
        })
        .collect();

    while pairs.len() < MATCHING_PAIRS {
        let n = pairs.len() + 1;
        pairs.push(MatchingPair {
            left: format!("Word {n}"),
            right: format!("Translation {n}"),
        });
    }

    pairs
}

fn placeholder_entry(topic: &str, learning: &str, n: usize) -> VocabularyEntry {
    VocabularyEntry::new(
        format!("{topic} phrase {n}"),
        format!("Sample {learning} translation"),
    )
}

fn exercise_id(lesson_id: &str, n: usize) -> String {
    format!("{lesson_id}-{n}")
}

pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn greetings() -> Vec<VocabularyEntry> {
        vec![
            VocabularyEntry::new("Hello", "Selam (ሰላም)"),
            VocabularyEntry::new("Goodbye", "Dehna hun (ደህና ሁን)"),
            VocabularyEntry::new("Thank you", "Ameseginalehu (አመሰግናለሁ)"),
            VocabularyEntry::new("Please", "Ebakih (እባክህ)"),
            VocabularyEntry::new("Good morning", "Endemin aderk (እንደምን አደርክ)"),
        ]
    }

    #[test]
    fn distractors_exclude_the_correct_answer() {
        let entries = greetings();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..50 {
            let distractors =
                pick_distractors(&entries, "Selam (ሰላም)", AnswerField::Learning, 3, &mut rng);
            assert_eq!(distractors.len(), 3);
            assert!(!distractors.iter().any(|d| d == "Selam (ሰላም)"));
        }
    }

    #[test]
    fn distractors_are_distinct() {
        let entries = greetings();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for _ in 0..50 {
            let mut distractors =
                pick_distractors(&entries, "Hello", AnswerField::Native, 3, &mut rng);
            distractors.sort();
            distractors.dedup();
            assert_eq!(distractors.len(), 3);
        }
    }

    #[test]
    fn exhausted_pool_pads_with_option_placeholders() {
        let entries = vec![
            VocabularyEntry::new("Hello", "Selam (ሰላም)"),
            VocabularyEntry::new("Goodbye", "Dehna hun (ደህና ሁን)"),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let distractors =
            pick_distractors(&entries, "Selam (ሰላም)", AnswerField::Learning, 3, &mut rng);
        assert_eq!(distractors[0], "Dehna hun (ደህና ሁን)");
        assert_eq!(distractors[1], "Option 2");
        assert_eq!(distractors[2], "Option 3");
    }

    #[test]
    fn lesson_gets_five_exercises_in_fixed_kind_order() {
        let entries = greetings();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let exercises =
            synthesize_exercises("1-1", 0, "Greetings", &entries, "english", "amharic", &mut rng);

        let kinds: Vec<&str> = exercises.iter().map(|e| e.kind().as_str()).collect();
        assert_eq!(
            kinds,
            [
                "translation",
                "multiple_choice",
                "fill_blank",
                "matching",
                "reverse_translation"
            ]
        );
        assert_eq!(exercises[0].answer(), Some("Selam (ሰላም)"));
        assert_eq!(exercises[0].options().len(), 4);
        assert!(exercises[0].prompt().contains("Amharic"));
        assert_eq!(exercises[4].answer(), Some("Hello"));
    }

    #[test]
    fn options_always_contain_the_answer() {
        let entries = greetings();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        for _ in 0..20 {
            let exercises =
                synthesize_exercises("1-1", 2, "Greetings", &entries, "english", "amharic", &mut rng);
            for exercise in &exercises {
                if let Some(answer) = exercise.answer() {
                    assert!(exercise.options().iter().any(|o| o == answer));
                }
            }
        }
    }

    #[test]
    fn matching_pads_sparse_topics_to_four_pairs() {
        let entries = vec![
            VocabularyEntry::new("Hello", "Selam (ሰላም)"),
            VocabularyEntry::new("Goodbye", "Dehna hun (ደህና ሁን)"),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let exercises =
            synthesize_exercises("9-2", 1, "Greetings", &entries, "english", "amharic", &mut rng);
        let pairs = exercises[3].pairs();

        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0].left, "Selam (ሰላም)");
        assert_eq!(pairs[0].right, "Hello");
        assert_eq!(pairs[2].left, "Word 3");
        assert_eq!(pairs[2].right, "Translation 3");
        assert_eq!(pairs[3].left, "Word 4");
    }

    #[test]
    fn missing_entry_degrades_to_placeholder_content() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let exercises =
            synthesize_exercises("3-4", 3, "Proverbs", &[], "english", "amharic", &mut rng);

        assert_eq!(exercises.len(), 5);
        assert_eq!(exercises[0].answer(), Some("Sample amharic translation"));
        assert!(exercises[0].prompt().contains("Proverbs phrase 4"));
        assert_eq!(exercises[3].pairs().len(), 4);
    }

    #[test]
    fn rich_topics_produce_no_placeholder_text() {
        let entries = greetings();
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        for lesson_index in 0..5 {
            let exercises = synthesize_exercises(
                "1-1",
                lesson_index,
                "Greetings",
                &entries,
                "english",
                "amharic",
                &mut rng,
            );
            for exercise in &exercises {
                for option in exercise.options() {
                    assert!(!option.starts_with("Option "), "placeholder in {option}");
                }
                for pair in exercise.pairs() {
                    assert!(!pair.left.starts_with("Word "));
                    assert!(!pair.right.starts_with("Translation "));
                }
            }
        }
    }
}
