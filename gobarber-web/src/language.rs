use std::collections::HashMap;

use shared::dashboard::DateLocale;

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
    pub locale: DateLocale,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Locale of the date labels for a translation code; unknown codes get the
/// default locale.
pub fn date_locale(code: &str) -> DateLocale {
    get_language_info(code).map_or_else(
        || DateLocale::from_tag(code).unwrap_or_default(),
        |info| info.locale,
    )
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "pt-BR",
            LanguageInfo {
                code: "pt-BR",
                flag: "🇧🇷",
                translation: include_str!("../translations/pt-BR.json"),
                native_name: "Português",
                locale: DateLocale::PtBr,
            },
        ),
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
                locale: DateLocale::En,
            },
        ),
    ])
}
