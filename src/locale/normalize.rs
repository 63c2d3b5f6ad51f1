/// Normalizes a locale code for comparison
///
/// Lowercases the code and folds common aliases onto one spelling:
///
/// | input | output |
/// |-------|--------|
/// | `ja-jp` | `ja` |
/// | `en-us`, `en-gb` | `en` |
/// | `zh-hans`, `zh-cn` | `zh-cn` |
/// | `zh-hant`, `zh-tw` | `zh-tw` |
///
/// Anything else is returned lowercased.
///
/// # Examples
///
/// ```
/// use docpack::locale::normalize_locale;
///
/// assert_eq!(normalize_locale("ja-JP"), "ja");
/// assert_eq!(normalize_locale("EN-US"), "en");
/// assert_eq!(normalize_locale("fr"), "fr");
/// ```
pub fn normalize_locale(locale: &str) -> String {
    let lowered = locale.to_lowercase();
    match lowered.as_str() {
        "ja-jp" => "ja".to_string(),
        "en-us" | "en-gb" => "en".to_string(),
        "zh-hans" | "zh-cn" => "zh-cn".to_string(),
        "zh-hant" | "zh-tw" => "zh-tw".to_string(),
        _ => lowered,
    }
}
