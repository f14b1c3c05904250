use selam_config::Config;
use selam_core::VocabularyCatalog;
use selam_lang_amharic::AmharicVocabulary;

/// Registered learning languages plus operator-supplied vocabulary extensions
pub fn build_catalog(config: &Config) -> VocabularyCatalog {
    let mut catalog = VocabularyCatalog::new();
    catalog.register(Box::new(AmharicVocabulary::with_additional_files(
        &config.content.additional_vocabulary_paths,
    )));
    catalog
}
