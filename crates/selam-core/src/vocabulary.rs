use std::collections::HashMap;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::error::LoadError;
use crate::types::VocabularyEntry;

const NO_ENTRIES: &[VocabularyEntry] = &[];

/// Vocabulary source for one learning language
pub trait VocabularyProvider: Send + Sync {
    /// Language identifier as used by the curriculum generator ("amharic", "tigrinya", ...)
    fn language_code(&self) -> &str;

    /// Topic names with at least one entry
    fn topics(&self) -> Vec<&str>;

    /// Entries for a topic, in authored order; empty slice if the topic is unknown
    fn entries(&self, topic: &str) -> &[VocabularyEntry];
}

/// In-memory vocabulary table: topic name -> ordered entry list
pub struct TableVocabulary {
    language: String,
    table: HashMap<String, Vec<VocabularyEntry>>,
}

impl TableVocabulary {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_lowercase(),
            table: HashMap::new(),
        }
    }

    /// Add one entry; text is trimmed and NFC-normalized on ingestion
    pub fn push(&mut self, topic: &str, native: &str, learning: &str) {
        self.table
            .entry(topic.trim().to_string())
            .or_default()
            .push(VocabularyEntry::new(normalize(native), normalize(learning)));
    }

    /// Parse TSV lines in `topic\tnative\tlearning` format.
    ///
    /// Blank lines and lines starting with `#` are skipped; short lines are
    /// dropped with a warning. A file that yields no entries at all is an error.
    pub fn from_tsv(language: &str, data: &str) -> Result<Self, LoadError> {
        let mut table = Self::new(language);
        let mut skipped = 0usize;

        for line in data.lines() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() >= 3 {
                table.push(parts[0], parts[1], parts[2]);
            } else {
                skipped += 1;
            }
        }

        if skipped > 0 {
            tracing::warn!("Skipped {skipped} malformed vocabulary lines");
        }
        if table.entry_count() == 0 {
            return Err(LoadError::InvalidFormat(
                "no vocabulary entries found".to_string(),
            ));
        }

        Ok(table)
    }

    /// Load a TSV vocabulary file
    pub fn load_from_file(language: &str, path: &Path) -> Result<Self, LoadError> {
        let data = std::fs::read_to_string(path)?;
        let table = Self::from_tsv(language, &data)?;
        tracing::info!(
            "Loaded {} vocabulary entries from {}",
            table.entry_count(),
            path.display()
        );
        Ok(table)
    }

    /// Append another table's entries after this one's
    pub fn merge(&mut self, other: TableVocabulary) {
        for (topic, entries) in other.table {
            self.table.entry(topic).or_default().extend(entries);
        }
    }

    pub fn entry_count(&self) -> usize {
        self.table.values().map(Vec::len).sum()
    }
}

impl VocabularyProvider for TableVocabulary {
    fn language_code(&self) -> &str {
        &self.language
    }

    fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = self.table.keys().map(String::as_str).collect();
        topics.sort_unstable();
        topics
    }

    fn entries(&self, topic: &str) -> &[VocabularyEntry] {
        self.table
            .get(topic)
            .map(Vec::as_slice)
            .unwrap_or(NO_ENTRIES)
    }
}

/// Registry of vocabulary providers keyed by learning language.
///
/// Lookups are total: an unknown language or topic yields an empty entry
/// list, never an error.
#[derive(Default)]
pub struct VocabularyCatalog {
    providers: HashMap<String, Box<dyn VocabularyProvider>>,
}

impl VocabularyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, provider: Box<dyn VocabularyProvider>) {
        let key = provider.language_code().to_lowercase();
        self.providers.insert(key, provider);
    }

    pub fn provider(&self, language: &str) -> Option<&dyn VocabularyProvider> {
        self.providers
            .get(&language.to_lowercase())
            .map(|provider| provider.as_ref())
    }

    pub fn entries(&self, language: &str, topic: &str) -> &[VocabularyEntry] {
        self.provider(language)
            .map(|p| p.entries(topic))
            .unwrap_or(NO_ENTRIES)
    }

    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }
}

fn normalize(text: &str) -> String {
    text.trim().nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_and_topic_yield_empty() {
        let mut catalog = VocabularyCatalog::new();
        catalog.register(Box::new(TableVocabulary::new("amharic")));

        assert!(catalog.entries("klingon", "Greetings").is_empty());
        assert!(catalog.entries("amharic", "Starships").is_empty());
    }

    #[test]
    fn catalog_lookup_is_case_insensitive() {
        let mut table = TableVocabulary::new("Amharic");
        table.push("Greetings", "Hello", "Selam (ሰላም)");

        let mut catalog = VocabularyCatalog::new();
        catalog.register(Box::new(table));

        assert_eq!(catalog.entries("AMHARIC", "Greetings").len(), 1);
    }

    #[test]
    fn from_tsv_skips_comments_and_short_lines() {
        let data = "# header\nGreetings\tHello\tSelam (ሰላም)\nbroken line\n\nNumbers\tOne\tAnd (አንድ)\n";
        let table = TableVocabulary::from_tsv("amharic", data).unwrap();

        assert_eq!(table.entry_count(), 2);
        assert_eq!(table.entries("Greetings")[0].learning, "Selam (ሰላም)");
    }

    #[test]
    fn from_tsv_rejects_entry_free_input() {
        assert!(TableVocabulary::from_tsv("amharic", "# only a comment\n").is_err());
    }

    #[test]
    fn entries_are_trimmed_and_normalized() {
        let mut table = TableVocabulary::new("amharic");
        table.push("Greetings", "  Hello ", " Selam (ሰላም)");

        let entry = &table.entries("Greetings")[0];
        assert_eq!(entry.native, "Hello");
        assert_eq!(entry.learning, "Selam (ሰላም)");
    }

    #[test]
    fn merge_appends_after_existing_entries() {
        let mut base = TableVocabulary::new("amharic");
        base.push("Greetings", "Hello", "Selam (ሰላም)");

        let mut extra = TableVocabulary::new("amharic");
        extra.push("Greetings", "Goodbye", "Dehna hun (ደህና ሁን)");
        extra.push("Weather", "Rain", "Zinab (ዝናብ)");

        base.merge(extra);
        assert_eq!(base.entries("Greetings").len(), 2);
        assert_eq!(base.entries("Greetings")[0].native, "Hello");
        assert_eq!(base.entries("Weather").len(), 1);
    }
}
