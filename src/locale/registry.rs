/// Locale codes recognized as path segments
///
/// Path detection only accepts segments listed here, so that two-letter
/// segments which merely look like locales (`/v2/`, `/js/`) are left alone.
#[rustfmt::skip]
pub const KNOWN_LOCALES: &[&str] = &[
    "en", "en-us", "en-gb",
    "ja", "ja-jp",
    "zh", "zh-cn", "zh-tw", "zh-hk",
    "ko", "ko-kr",
    "de", "de-de",
    "fr", "fr-fr",
    "es", "es-es",
    "it", "it-it",
    "pt", "pt-br",
    "ru", "ru-ru",
    "ar", "nl", "pl", "tr",
    "vi", "th", "id", "ms",
];

/// Checks whether a lowercase locale code is in the registry
pub fn is_known_locale(code: &str) -> bool {
    KNOWN_LOCALES.contains(&code)
}
