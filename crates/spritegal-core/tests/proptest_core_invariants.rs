//! Property-based invariant tests for pagination and slider geometry.
//!
//! 1. Page ranges partition the samples in order, each page full except the last.
//! 2. Exactly the pages `0..total_pages` are addressable; edges agree with them.
//! 3. The fill fraction stays in `[0, 1]` and grows with the frame.
//! 4. Valid catalogs survive a JSON round trip through `parse_catalog`.

use proptest::prelude::*;
use spritegal_core::{Pager, fill_fraction, parse_catalog, track_gradient};

// ═════════════════════════════════════════════════════════════════════════
// 1. Page partition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pages_partition_samples(len in 0usize..200, per_page in 1usize..10) {
        let pager = Pager::new(len, per_page);
        let mut next = 0;
        for page in 0..pager.total_pages() {
            let range = pager.page_range(page);
            prop_assert_eq!(range.start, next);
            prop_assert!(!range.is_empty());
            prop_assert!(range.len() <= per_page);
            if page + 1 < pager.total_pages() {
                prop_assert_eq!(range.len(), per_page);
            }
            next = range.end;
        }
        prop_assert_eq!(next, len);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Addressable pages
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn only_existing_pages_are_addressable(len in 0usize..200, per_page in 1usize..10, page in 0usize..100) {
        let pager = Pager::new(len, per_page);
        prop_assert_eq!(pager.contains(page), page < pager.total_pages());
        if !pager.contains(page) {
            prop_assert!(pager.page_range(page).is_empty());
        }
        if len > 0 {
            let last = pager.total_pages() - 1;
            prop_assert!(pager.is_first(0));
            prop_assert!(pager.is_last(last));
            prop_assert_eq!(pager.is_last(page), page >= last);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Fill fraction
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fill_fraction_is_monotonic(n in 1u32..=64, seed in any::<u32>()) {
        let f = seed % n;
        let fraction = fill_fraction(f, n);
        prop_assert!((0.0..=1.0).contains(&fraction));
        if f + 1 < n {
            prop_assert!(fill_fraction(f + 1, n) > fraction);
        }
        if n > 1 {
            prop_assert_eq!(fill_fraction(n - 1, n), 1.0);
        }
        let css = track_gradient(fraction, "F", "R");
        prop_assert!(css.starts_with("linear-gradient(to right, F 0%, "));
        prop_assert!(css.ends_with("R 100%)"));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Catalog parsing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn valid_catalogs_parse(entries in proptest::collection::vec(("[a-z]{1,8}", "[a-z ]{0,12}", 1u32..40), 0..10)) {
        let json = catalog_json(&entries);
        let samples = parse_catalog(&json).unwrap();
        prop_assert_eq!(samples.len(), entries.len());
        for (sample, (path, prompt, frames)) in samples.iter().zip(&entries) {
            prop_assert_eq!(sample.image_path(), format!("{path}.jpg"));
            prop_assert_eq!(sample.prompt(), prompt.as_str());
            prop_assert_eq!(sample.num_frames(), *frames);
        }
    }
}

fn catalog_json(entries: &[(String, String, u32)]) -> String {
    let items: Vec<String> = entries
        .iter()
        .map(|(path, prompt, frames)| {
            format!(r#"{{"imagePath":"{path}.jpg","prompt":"{prompt}","numFrames":{frames}}}"#)
        })
        .collect();
    format!("[{}]", items.join(","))
}
