use crate::locale::{HreflangMap, LocaleSelection};

/// Picks the preferred alternate from an `hreflang` map
///
/// Walks `priority` in order. For each code it tries the code itself, then the
/// doubled form `code-code` (`ja` → `ja-ja`), and returns the first entry found
/// together with the key that matched. When nothing in `priority` matches, the
/// entry with the lexicographically smallest code is returned. An empty map
/// yields an empty selection.
///
/// The doubled form is not a real region code: `ja-jp` is never tried.
///
/// # Examples
///
/// ```
/// use docpack::locale::{select_preferred_locale_url, HreflangMap, LocaleSelection};
///
/// let mut map = HreflangMap::new();
/// map.insert("ja".to_string(), "u1".to_string());
/// map.insert("en".to_string(), "u2".to_string());
///
/// let picked = select_preferred_locale_url(&map, &["en", "ja"]);
/// assert_eq!(picked, LocaleSelection::new("en", "u2"));
/// ```
pub fn select_preferred_locale_url<S: AsRef<str>>(
    map: &HreflangMap,
    priority: &[S],
) -> LocaleSelection {
    for candidate in priority {
        let code = candidate.as_ref().to_lowercase();
        if code.is_empty() {
            continue;
        }

        if let Some(url) = map.get(&code) {
            return LocaleSelection::new(code, url.as_str());
        }

        let doubled = format!("{}-{}", code, code);
        if let Some(url) = map.get(&doubled) {
            return LocaleSelection::new(doubled, url.as_str());
        }
    }

    map.iter()
        .next()
        .map(|(locale, url)| LocaleSelection::new(locale.as_str(), url.as_str()))
        .unwrap_or_default()
}
