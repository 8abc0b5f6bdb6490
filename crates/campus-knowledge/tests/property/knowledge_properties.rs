//! Property tests for document chunking.

use campus_knowledge::chunk_text;
use proptest::prelude::*;

proptest! {
    #[test]
    fn chunks_respect_size_and_cover_text(
        text in "[a-z ]{1,400}",
        size in 1usize..120,
        overlap in 0usize..150,
    ) {
        let chunks = chunk_text(&text, size, overlap);
        let chars: Vec<char> = text.chars().collect();
        let step = size.saturating_sub(overlap).max(1);

        prop_assert!(!chunks.is_empty());
        prop_assert!(chunks.iter().all(|c| c.chars().count() <= size));
        for (i, chunk) in chunks.iter().enumerate() {
            let start = i * step;
            let expected: String = chars[start..(start + size).min(chars.len())].iter().collect();
            prop_assert_eq!(chunk, &expected);
        }
        let last_start = (chunks.len() - 1) * step;
        prop_assert!(last_start < chars.len());
        prop_assert!(last_start + step >= chars.len());
    }
}
