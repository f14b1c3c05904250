use std::path::Path;

use selam_core::types::VocabularyEntry;
use selam_core::vocabulary::{TableVocabulary, VocabularyProvider};

pub const LANGUAGE_CODE: &str = "amharic";

// Embedded starter vocabulary, grouped by curriculum topic. Entry order
// matters: lesson N of a unit teaches entry N of its topic.
const TABLE: &[(&str, &[(&str, &str)])] = &[
    (
        "Greetings",
        &[
            ("Hello", "Selam (ሰላም)"),
            ("Good morning", "Endemin aderk (እንደምን አደርክ)"),
            ("Good night", "Dehna eder (ደህና እደር)"),
            ("Goodbye", "Dehna hun (ደህና ሁን)"),
            ("Thank you", "Ameseginalehu (አመሰግናለሁ)"),
            ("Please", "Ebakih (እባክህ)"),
            ("How are you?", "Endemin neh? (እንደምን ነህ?)"),
            ("I am fine", "Dehna negn (ደህና ነኝ)"),
        ],
    ),
    (
        "Numbers",
        &[
            ("One", "And (አንድ)"),
            ("Two", "Hulet (ሁለት)"),
            ("Three", "Sost (ሶስት)"),
            ("Four", "Arat (አራት)"),
            ("Five", "Amist (አምስት)"),
            ("Six", "Sidist (ስድስት)"),
            ("Seven", "Sebat (ሰባት)"),
            ("Eight", "Simint (ስምንት)"),
            ("Nine", "Zetegn (ዘጠኝ)"),
            ("Ten", "Asir (አስር)"),
        ],
    ),
    (
        "Family",
        &[
            ("Mother", "Enat (እናት)"),
            ("Father", "Abat (አባት)"),
            ("Brother", "Wendim (ወንድም)"),
            ("Sister", "Ehit (እህት)"),
            ("Child", "Lij (ልጅ)"),
            ("Grandparent", "Ayat (አያት)"),
            ("Aunt", "Akist (አክስት)"),
            ("Uncle", "Agot (አጎት)"),
        ],
    ),
    (
        "Colors",
        &[
            ("Red", "Qey (ቀይ)"),
            ("Blue", "Semayawi (ሰማያዊ)"),
            ("Green", "Arenguade (አረንጓዴ)"),
            ("Yellow", "Bicha (ቢጫ)"),
            ("Black", "Tiqur (ጥቁር)"),
            ("White", "Nech (ነጭ)"),
        ],
    ),
    (
        "Days of the Week",
        &[
            ("Monday", "Segno (ሰኞ)"),
            ("Tuesday", "Maksegno (ማክሰኞ)"),
            ("Wednesday", "Rebu (ረቡዕ)"),
            ("Thursday", "Hamus (ሐሙስ)"),
            ("Friday", "Arb (አርብ)"),
            ("Saturday", "Kidame (ቅዳሜ)"),
            ("Sunday", "Ehud (እሁድ)"),
        ],
    ),
    (
        "Food",
        &[
            ("Bread", "Dabo (ዳቦ)"),
            ("Water", "Wuha (ውሃ)"),
            ("Milk", "Wetet (ወተት)"),
            ("Coffee", "Buna (ቡና)"),
            ("Injera", "Injera (እንጀራ)"),
            ("Meat", "Siga (ስጋ)"),
            ("Egg", "Enqulal (እንቁላል)"),
        ],
    ),
    (
        "Animals",
        &[
            ("Dog", "Wusha (ውሻ)"),
            ("Cat", "Dimet (ድመት)"),
            ("Lion", "Anbessa (አንበሳ)"),
            ("Horse", "Feres (ፈረስ)"),
            ("Bird", "Wef (ወፍ)"),
            ("Cow", "Lam (ላም)"),
            ("Goat", "Fiyel (ፍየል)"),
        ],
    ),
    (
        "Body Parts",
        &[
            ("Head", "Ras (ራስ)"),
            ("Eye", "Ayn (ዓይን)"),
            ("Hand", "Ej (እጅ)"),
            ("Leg", "Egir (እግር)"),
            ("Mouth", "Af (አፍ)"),
            ("Ear", "Joro (ጆሮ)"),
            ("Nose", "Afincha (አፍንጫ)"),
        ],
    ),
    (
        "Clothing",
        &[
            ("Clothes", "Libs (ልብስ)"),
            ("Shoe", "Chama (ጫማ)"),
            ("Hat", "Barneta (ባርኔጣ)"),
            ("Shirt", "Shemiz (ሸሚዝ)"),
            ("Dress", "Qemis (ቀሚስ)"),
        ],
    ),
    (
        "Weather",
        &[
            ("Sun", "Tsehay (ፀሐይ)"),
            ("Rain", "Zinab (ዝናብ)"),
            ("Wind", "Nefas (ነፋስ)"),
            ("Cloud", "Demena (ደመና)"),
            ("Cold", "Birid (ብርድ)"),
            ("Heat", "Muqet (ሙቀት)"),
        ],
    ),
    (
        "Time",
        &[
            ("Today", "Zare (ዛሬ)"),
            ("Tomorrow", "Nege (ነገ)"),
            ("Yesterday", "Tilant (ትላንት)"),
            ("Now", "Ahun (አሁን)"),
            ("Morning", "Twat (ጠዋት)"),
            ("Night", "Lelit (ሌሊት)"),
            ("Hour", "Se'at (ሰዓት)"),
        ],
    ),
    (
        "Common Verbs",
        &[
            ("To eat", "Mebilat (መብላት)"),
            ("To drink", "Metetat (መጠጣት)"),
            ("To go", "Mehed (መሄድ)"),
            ("To come", "Memtat (መምጣት)"),
            ("To see", "Mayet (ማየት)"),
            ("To sleep", "Metegnat (መተኛት)"),
        ],
    ),
    (
        "Common Phrases",
        &[
            ("Yes", "Awo (አዎ)"),
            ("No", "Aydelem (አይደለም)"),
            ("Excuse me", "Yiqirta (ይቅርታ)"),
            ("I do not understand", "Algebagnem (አልገባኝም)"),
            ("What is your name?", "Simih man new? (ስምህ ማን ነው?)"),
            ("My name is...", "Sime ... new (ስሜ ... ነው)"),
        ],
    ),
    (
        "Questions",
        &[
            ("What?", "Min? (ምን?)"),
            ("Who?", "Man? (ማን?)"),
            ("Where?", "Yet? (የት?)"),
            ("When?", "Meche? (መቼ?)"),
            ("Why?", "Lemin? (ለምን?)"),
            ("How?", "Endet? (እንዴት?)"),
        ],
    ),
    (
        "Introductions",
        &[
            ("I am...", "Ine ... negn (እኔ ... ነኝ)"),
            ("Where are you from?", "Keyet neh? (ከየት ነህ?)"),
            ("I am from Ethiopia", "Ke Ityopiya negn (ከኢትዮጵያ ነኝ)"),
            ("Nice to meet you", "Des bilognal (ደስ ብሎኛል)"),
            ("Welcome", "Enkwan dehna metah (እንኳን ደህና መጣህ)"),
        ],
    ),
    (
        "Shopping",
        &[
            ("Market", "Gebeya (ገበያ)"),
            ("Money", "Genzeb (ገንዘብ)"),
            ("Price", "Waga (ዋጋ)"),
            ("How much is it?", "Sint new? (ስንት ነው?)"),
            ("Cheap", "Rikash (ርካሽ)"),
            ("Expensive", "Wid (ውድ)"),
        ],
    ),
    (
        "Transportation",
        &[
            ("Car", "Mekina (መኪና)"),
            ("Bus", "Awtobus (አውቶቡስ)"),
            ("Airplane", "Ayroplan (አይሮፕላን)"),
            ("Train", "Babur (ባቡር)"),
            ("Bicycle", "Bisiklet (ብስክሌት)"),
        ],
    ),
    (
        "Places in Town",
        &[
            ("House", "Bet (ቤት)"),
            ("School", "Timhirt bet (ትምህርት ቤት)"),
            ("Church", "Bete kristiyan (ቤተ ክርስቲያን)"),
            ("Hospital", "Hospital (ሆስፒታል)"),
            ("Road", "Menged (መንገድ)"),
            ("City", "Ketema (ከተማ)"),
        ],
    ),
    (
        "Emotions",
        &[
            ("Happy", "Destegna (ደስተኛ)"),
            ("Love", "Fiqir (ፍቅር)"),
            ("Fear", "Firhat (ፍርሃት)"),
            ("Tired", "Dekemegn (ደከመኝ)"),
            ("Hungry", "Rabegn (ራበኝ)"),
        ],
    ),
    // Sparse on purpose: proverbs are slow to collect and translate well.
    (
        "Proverbs",
        &[
            (
                "Slowly, slowly, the egg walks on its feet",
                "Kes bekes inkulal be egru yihedal (ቀስ በቀስ እንቁላል በእግሩ ይሄዳል)",
            ),
            (
                "When spiderwebs unite, they can tie up a lion",
                "Dir biyabir anbessa yasir (ድር ቢያብር አንበሳ ያስር)",
            ),
        ],
    ),
];

/// Embedded Amharic vocabulary with optional TSV extensions
pub struct AmharicVocabulary {
    table: TableVocabulary,
}

impl AmharicVocabulary {
    /// Embedded table only
    pub fn new() -> Self {
        Self::with_additional_files(&[])
    }

    /// Embedded table plus supplemental TSV files.
    ///
    /// Files that fail to load are skipped with a warning; vocabulary must
    /// exist even when an operator points at a bad path.
    pub fn with_additional_files(paths: &[String]) -> Self {
        let mut table = Self::embedded_table();

        for path in paths {
            match TableVocabulary::load_from_file(LANGUAGE_CODE, Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional Amharic vocabulary from: {path}");
                    table.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load vocabulary from {path}: {e}");
                }
            }
        }

        Self { table }
    }

    fn embedded_table() -> TableVocabulary {
        let mut table = TableVocabulary::new(LANGUAGE_CODE);
        for (topic, entries) in TABLE {
            for (native, learning) in *entries {
                table.push(topic, native, learning);
            }
        }
        table
    }
}

impl Default for AmharicVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularyProvider for AmharicVocabulary {
    fn language_code(&self) -> &str {
        LANGUAGE_CODE
    }

    fn topics(&self) -> Vec<&str> {
        self.table.topics()
    }

    fn entries(&self, topic: &str) -> &[VocabularyEntry] {
        self.table.entries(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_start_with_selam() {
        let vocab = AmharicVocabulary::new();
        let greetings = vocab.entries("Greetings");

        assert_eq!(greetings[0].native, "Hello");
        assert_eq!(greetings[0].learning, "Selam (ሰላም)");
    }

    #[test]
    fn first_section_topics_are_fully_stocked() {
        let vocab = AmharicVocabulary::new();
        for topic in [
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
        ] {
            assert!(
                vocab.entries(topic).len() >= 5,
                "topic {topic} has fewer than 5 entries"
            );
        }
    }

    #[test]
    fn unknown_topic_is_empty_not_an_error() {
        let vocab = AmharicVocabulary::new();
        assert!(vocab.entries("Quantum Mechanics").is_empty());
    }

    #[test]
    fn bad_additional_file_is_ignored() {
        let vocab =
            AmharicVocabulary::with_additional_files(&["/nonexistent/vocab.tsv".to_string()]);
        assert!(!vocab.entries("Greetings").is_empty());
    }
}
