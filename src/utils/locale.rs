//! Name collation through the browser's `String.prototype.localeCompare`.

use std::cmp::Ordering;

use js_sys::{Array, JsString, Object};

/// Case-insensitive, locale-aware order of two display names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    JsString::from(a.to_lowercase())
        .locale_compare(&b.to_lowercase(), &Array::new(), &Object::new())
        .cmp(&0)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use glance_core::{DirectoryEntry, RenderPass};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_accents_and_symbols_follow_locale() {
        let pass = RenderPass::new(
            1,
            vec![
                DirectoryEntry::file("zebra.txt", "/zebra.txt"),
                DirectoryEntry::file("Éclair.txt", "/Éclair.txt"),
                DirectoryEntry::file("~backup.txt", "/~backup.txt"),
                DirectoryEntry::file("apple.txt", "/apple.txt"),
            ],
            compare_names,
        );
        let names: Vec<&str> = pass.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["~backup.txt", "apple.txt", "Éclair.txt", "zebra.txt"]);
    }

    #[wasm_bindgen_test]
    fn test_case_insensitive() {
        assert_eq!(compare_names("README", "readme"), Ordering::Equal);
        assert_eq!(compare_names("B", "a"), Ordering::Greater);
    }
}
