//! Entry enrichment: generic phrasings appended to an entry's synonyms.

use campus_core::knowledge::KnowledgeEntry;

/// Keyword fragment and the phrasings added when the keyword contains it.
const EXPANSIONS: &[(&str, &[&str])] = &[
    ("admission", &["how to apply", "application process", "entry procedure"]),
    ("fee", &["cost", "payment", "tuition payment"]),
    ("library", &["book location", "study area", "reading room"]),
    ("contact", &["reach university", "get in touch", "contact details"]),
];

/// Append expansion phrases for every fragment found in the keyword.
/// Existing synonyms keep their order; duplicates are not added.
pub fn expand_entry(mut entry: KnowledgeEntry) -> KnowledgeEntry {
    let keyword = entry.keyword.to_lowercase();
    for (fragment, phrases) in EXPANSIONS {
        if !keyword.contains(fragment) {
            continue;
        }
        for phrase in *phrases {
            if !entry.synonyms.iter().any(|s| s.eq_ignore_ascii_case(phrase)) {
                entry.synonyms.push((*phrase).to_string());
            }
        }
    }
    entry
}
