//! Fixed section/unit schedule: 10 sections of 15 topic slots each.
//!
//! Topic names may repeat across slots (later sections deliberately revisit
//! earlier themes).

pub const SECTION_COUNT: usize = 10;
pub const UNITS_PER_SECTION: usize = 15;
pub const LESSONS_PER_UNIT: usize = 5;
pub const EXERCISES_PER_LESSON: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct SectionTheme {
    pub name: &'static str,
    pub description: &'static str,
}

pub(crate) const SECTION_THEMES: [SectionTheme; SECTION_COUNT] = [
    SectionTheme {
        name: "Foundations",
        description: "Greetings and everyday essentials to get you speaking",
    },
    SectionTheme {
        name: "Daily Life",
        description: "Vocabulary for home, town, and daily routines",
    },
    SectionTheme {
        name: "Getting Around",
        description: "Travel, navigation, and situations away from home",
    },
    SectionTheme {
        name: "People and Relationships",
        description: "Talking about family, friends, and the people you meet",
    },
    SectionTheme {
        name: "Food and Cooking",
        description: "From the market to the table",
    },
    SectionTheme {
        name: "Nature and Environment",
        description: "Landscapes, weather, plants, and animals",
    },
    SectionTheme {
        name: "Work and School",
        description: "Language for the office, the classroom, and careers",
    },
    SectionTheme {
        name: "Culture and Society",
        description: "Traditions, celebrations, and public life",
    },
    SectionTheme {
        name: "Advanced Conversation",
        description: "Expressing opinions, feelings, and nuance",
    },
    SectionTheme {
        name: "Review and Mastery",
        description: "Revisit core themes and consolidate what you know",
    },
];

pub(crate) const TOPICS: [[&str; UNITS_PER_SECTION]; SECTION_COUNT] = [
    [
        "Greetings",
        "Numbers",
        "Family",
        "Colors",
        "Days of the Week",
        "Food",
        "Animals",
        "Body Parts",
        "Clothing",
        "Weather",
        "Time",
        "Common Verbs",
        "Common Phrases",
        "Questions",
        "Introductions",
    ],
    [
        "Home",
        "School",
        "Work",
        "Shopping",
        "Money",
        "Transportation",
        "Directions",
        "Places in Town",
        "Daily Routine",
        "Hobbies",
        "Sports",
        "Music",
        "Health",
        "Emotions",
        "Celebrations",
    ],
    [
        "Travel",
        "Hotel",
        "Restaurant",
        "Ordering Food",
        "Airport",
        "Train Station",
        "Asking Directions",
        "City Landmarks",
        "Countryside",
        "Maps",
        "Tickets",
        "Luggage",
        "Border Crossing",
        "Taxis",
        "Emergencies",
    ],
    [
        "Friends",
        "Extended Family",
        "Describing People",
        "Personality",
        "Professions",
        "Age",
        "Marriage",
        "Children",
        "Neighbors",
        "Community",
        "Invitations",
        "Visiting",
        "Gifts",
        "Manners",
        "Small Talk",
    ],
    [
        "Fruits",
        "Vegetables",
        "Spices",
        "Cooking",
        "Kitchen",
        "Meals",
        "Drinks",
        "Traditional Dishes",
        "At the Market",
        "Recipes",
        "Tastes",
        "Utensils",
        "Baking",
        "Street Food",
        "Table Manners",
    ],
    [
        "Landscape",
        "Mountains",
        "Rivers",
        "Plants",
        "Trees",
        "Wild Animals",
        "Farm Animals",
        "Insects",
        "Seasons",
        "Sky",
        "Lakes",
        "Desert",
        "Forest",
        "Gardening",
        "Weather",
    ],
    [
        "Office",
        "Meetings",
        "Computers",
        "Documents",
        "Studying",
        "Exams",
        "Subjects",
        "Teachers",
        "Classroom",
        "Homework",
        "Careers",
        "Interviews",
        "Salaries",
        "Colleagues",
        "Deadlines",
    ],
    [
        "Holidays",
        "Religion",
        "History",
        "Traditions",
        "Art",
        "Literature",
        "Proverbs",
        "Ceremonies",
        "Festivals",
        "Coffee Ceremony",
        "Clothing",
        "Government",
        "News",
        "Neighborhood",
        "Music",
    ],
    [
        "Opinions",
        "Agreement",
        "Disagreement",
        "Feelings",
        "Plans",
        "Memories",
        "Storytelling",
        "Jokes",
        "Idioms",
        "Comparisons",
        "Hypotheticals",
        "Advice",
        "Complaints",
        "Apologies",
        "Debate",
    ],
    [
        "Greetings",
        "Numbers",
        "Family",
        "Food",
        "Travel",
        "Work",
        "Health",
        "Emotions",
        "Holidays",
        "Proverbs",
        "Shopping",
        "Weather",
        "Time",
        "Common Phrases",
        "Questions",
    ],
];

/// Theme for a section position, None past the schedule's end
pub fn section_theme(section_index: usize) -> Option<SectionTheme> {
    SECTION_THEMES.get(section_index).copied()
}

/// Topic for a (section, unit) slot, None past the schedule's end
pub fn topic(section_index: usize, unit_index: usize) -> Option<&'static str> {
    TOPICS
        .get(section_index)
        .and_then(|row| row.get(unit_index))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_resolves_to_a_topic() {
        for s in 0..SECTION_COUNT {
            for u in 0..UNITS_PER_SECTION {
                let topic = topic(s, u).unwrap();
                assert!(!topic.is_empty(), "empty topic at ({s}, {u})");
            }
        }
    }

    #[test]
    fn first_slot_is_greetings() {
        assert_eq!(topic(0, 0), Some("Greetings"));
    }

    #[test]
    fn out_of_range_slots_are_none() {
        assert!(topic(SECTION_COUNT, 0).is_none());
        assert!(topic(0, UNITS_PER_SECTION).is_none());
        assert!(section_theme(SECTION_COUNT).is_none());
    }

    #[test]
    fn themes_are_named_and_described() {
        for s in 0..SECTION_COUNT {
            let theme = section_theme(s).unwrap();
            assert!(!theme.name.is_empty());
            assert!(!theme.description.is_empty());
        }
    }
}
