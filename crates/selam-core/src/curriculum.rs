//! Curriculum tree assembly and lookup.
//!
//! For a language pair the generator materializes the full 10x15x5 tree in
//! one pass over the static schedule. Structure (ids, titles, counts) is
//! deterministic; distractor picks and option order come from the supplied
//! random source.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::exercise::synthesize_exercises;
use crate::schedule::{LESSONS_PER_UNIT, SECTION_THEMES, TOPICS, UNITS_PER_SECTION};
use crate::types::{Exercise, Lesson, Section, Unit};
use crate::vocabulary::VocabularyCatalog;

/// A fully materialized section tree for one language pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curriculum {
    sections: Vec<Section>,
}

impl Curriculum {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: u32) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn unit(&self, id: u32) -> Option<&Unit> {
        self.sections
            .iter()
            .flat_map(|section| section.units.iter())
            .find(|unit| unit.id == id)
    }

    pub fn lesson(&self, unit_id: u32, lesson_id: &str) -> Option<&Lesson> {
        self.unit(unit_id)?
            .lessons
            .iter()
            .find(|lesson| lesson.id == lesson_id)
    }

    /// All exercises of all lessons, in tree order
    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.sections
            .iter()
            .flat_map(|section| section.units.iter())
            .flat_map(|unit| unit.lessons.iter())
            .flat_map(|lesson| lesson.exercises.iter())
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }
}

/// Generates curriculum trees from a vocabulary catalog.
///
/// Generation is a total function: unknown languages and missing topics
/// degrade to placeholder content, they never error.
pub struct CurriculumGenerator<'a> {
    catalog: &'a VocabularyCatalog,
}

impl<'a> CurriculumGenerator<'a> {
    pub fn new(catalog: &'a VocabularyCatalog) -> Self {
        Self { catalog }
    }

    /// Generate with an unseeded thread-local random source
    pub fn generate(&self, native: &str, learning: &str) -> Curriculum {
        self.generate_with_rng(native, learning, &mut rand::thread_rng())
    }

    /// Generate with an injected random source (deterministic when seeded)
    pub fn generate_with_rng<R: Rng>(
        &self,
        native: &str,
        learning: &str,
        rng: &mut R,
    ) -> Curriculum {
        tracing::debug!("Generating curriculum for {native} -> {learning}");

        let sections = SECTION_THEMES
            .iter()
            .enumerate()
            .map(|(s, theme)| {
                let section_id = (s + 1) as u32;
                let units = (0..UNITS_PER_SECTION)
                    .map(|u| {
                        let unit_id = (s * UNITS_PER_SECTION + u + 1) as u32;
                        self.build_unit(unit_id, section_id, TOPICS[s][u], native, learning, rng)
                    })
                    .collect();

                Section {
                    id: section_id,
                    name: theme.name.to_string(),
                    description: theme.description.to_string(),
                    units,
                }
            })
            .collect();

        Curriculum { sections }
    }

    fn build_unit<R: Rng>(
        &self,
        unit_id: u32,
        section_id: u32,
        topic: &str,
        native: &str,
        learning: &str,
        rng: &mut R,
    ) -> Unit {
        let entries = self.catalog.entries(learning, topic);

        let lessons = (0..LESSONS_PER_UNIT)
            .map(|l| {
                let lesson_id = format!("{unit_id}-{}", l + 1);
                let exercises =
                    synthesize_exercises(&lesson_id, l, topic, entries, native, learning, rng);
                Lesson {
                    id: lesson_id,
                    unit_id,
                    title: format!("Lesson {}: {topic}", l + 1),
                    exercises,
                }
            })
            .collect();

        Unit {
            id: unit_id,
            section_id,
            title: topic.to_string(),
            description: format!("Essential words and phrases for {}", topic.to_lowercase()),
            lessons,
        }
    }
}
