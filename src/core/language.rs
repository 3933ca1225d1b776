//! Language catalog shared by all engines
//!
//! The catalog is closed and ordered; every language carries a canonical wire
//! code that engines use by default. Engine-specific overrides (alternate
//! codes, unsupported languages) live in [`crate::engines`].

use serde::{Deserialize, Serialize};

/// Identifier over the closed language catalog
///
/// `Auto` requests source-language detection from the engine. Unknown or
/// unsupported codes decode to `None` rather than a sentinel variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Language {
    /// Let the engine detect the language
    Auto,
    Afrikaans,
    Albanian,
    Amharic,
    Arabic,
    Armenian,
    Azerbaijani,
    Basque,
    Bashkir,
    Belarusian,
    Bengali,
    Bosnian,
    Bulgarian,
    Catalan,
    Cebuano,
    SimplifiedChinese,
    TraditionalChinese,
    Corsican,
    Croatian,
    Czech,
    Danish,
    Dutch,
    English,
    Esperanto,
    Estonian,
    Finnish,
    French,
    Frisian,
    Galician,
    Georgian,
    German,
    Greek,
    Gujarati,
    HaitianCreole,
    Hausa,
    Hawaiian,
    Hebrew,
    HillMari,
    Hindi,
    Hmong,
    Hungarian,
    Icelandic,
    Igbo,
    Indonesian,
    Irish,
    Italian,
    Japanese,
    Javanese,
    Kannada,
    Kazakh,
    Khmer,
    Korean,
    Kurdish,
    Kyrgyz,
    Lao,
    Latin,
    Latvian,
    Lithuanian,
    Luxembourgish,
    Macedonian,
    Malagasy,
    Malay,
    Malayalam,
    Maltese,
    Maori,
    Marathi,
    Mari,
    Mongolian,
    Myanmar,
    Nepali,
    Norwegian,
    Chichewa,
    Papiamento,
    Pashto,
    Persian,
    Polish,
    Portuguese,
    Punjabi,
    Romanian,
    Russian,
    Samoan,
    ScotsGaelic,
    Serbian,
    Sesotho,
    Shona,
    Sindhi,
    Sinhala,
    Slovak,
    Slovenian,
    Somali,
    Spanish,
    Sundanese,
    Swahili,
    Swedish,
    Tagalog,
    Tajik,
    Tamil,
    Tatar,
    Telugu,
    Thai,
    Turkish,
    Udmurt,
    Ukrainian,
    Urdu,
    Uzbek,
    Vietnamese,
    Welsh,
    Xhosa,
    Yiddish,
    Yoruba,
    Zulu,
}

/// Ordered catalog of canonical wire codes
const CATALOG: &[(Language, &str)] = &[
    (Language::Auto, "auto"),
    (Language::Afrikaans, "af"),
    (Language::Albanian, "sq"),
    (Language::Amharic, "am"),
    (Language::Arabic, "ar"),
    (Language::Armenian, "hy"),
    (Language::Azerbaijani, "az"),
    (Language::Basque, "eu"),
    (Language::Bashkir, "ba"),
    (Language::Belarusian, "be"),
    (Language::Bengali, "bn"),
    (Language::Bosnian, "bs"),
    (Language::Bulgarian, "bg"),
    (Language::Catalan, "ca"),
    (Language::Cebuano, "ceb"),
    (Language::SimplifiedChinese, "zh-CN"),
    (Language::TraditionalChinese, "zh-TW"),
    (Language::Corsican, "co"),
    (Language::Croatian, "hr"),
    (Language::Czech, "cs"),
    (Language::Danish, "da"),
    (Language::Dutch, "nl"),
    (Language::English, "en"),
    (Language::Esperanto, "eo"),
    (Language::Estonian, "et"),
    (Language::Finnish, "fi"),
    (Language::French, "fr"),
    (Language::Frisian, "fy"),
    (Language::Galician, "gl"),
    (Language::Georgian, "ka"),
    (Language::German, "de"),
    (Language::Greek, "el"),
    (Language::Gujarati, "gu"),
    (Language::HaitianCreole, "ht"),
    (Language::Hausa, "ha"),
    (Language::Hawaiian, "haw"),
    (Language::Hebrew, "he"),
    (Language::HillMari, "mrj"),
    (Language::Hindi, "hi"),
    (Language::Hmong, "hmn"),
    (Language::Hungarian, "hu"),
    (Language::Icelandic, "is"),
    (Language::Igbo, "ig"),
    (Language::Indonesian, "id"),
    (Language::Irish, "ga"),
    (Language::Italian, "it"),
    (Language::Japanese, "ja"),
    (Language::Javanese, "jw"),
    (Language::Kannada, "kn"),
    (Language::Kazakh, "kk"),
    (Language::Khmer, "km"),
    (Language::Korean, "ko"),
    (Language::Kurdish, "ku"),
    (Language::Kyrgyz, "ky"),
    (Language::Lao, "lo"),
    (Language::Latin, "la"),
    (Language::Latvian, "lv"),
    (Language::Lithuanian, "lt"),
    (Language::Luxembourgish, "lb"),
    (Language::Macedonian, "mk"),
    (Language::Malagasy, "mg"),
    (Language::Malay, "ms"),
    (Language::Malayalam, "ml"),
    (Language::Maltese, "mt"),
    (Language::Maori, "mi"),
    (Language::Marathi, "mr"),
    (Language::Mari, "mhr"),
    (Language::Mongolian, "mn"),
    (Language::Myanmar, "my"),
    (Language::Nepali, "ne"),
    (Language::Norwegian, "no"),
    (Language::Chichewa, "ny"),
    (Language::Papiamento, "pap"),
    (Language::Pashto, "ps"),
    (Language::Persian, "fa"),
    (Language::Polish, "pl"),
    (Language::Portuguese, "pt"),
    (Language::Punjabi, "pa"),
    (Language::Romanian, "ro"),
    (Language::Russian, "ru"),
    (Language::Samoan, "sm"),
    (Language::ScotsGaelic, "gd"),
    (Language::Serbian, "sr"),
    (Language::Sesotho, "st"),
    (Language::Shona, "sn"),
    (Language::Sindhi, "sd"),
    (Language::Sinhala, "si"),
    (Language::Slovak, "sk"),
    (Language::Slovenian, "sl"),
    (Language::Somali, "so"),
    (Language::Spanish, "es"),
    (Language::Sundanese, "su"),
    (Language::Swahili, "sw"),
    (Language::Swedish, "sv"),
    (Language::Tagalog, "tl"),
    (Language::Tajik, "tg"),
    (Language::Tamil, "ta"),
    (Language::Tatar, "tt"),
    (Language::Telugu, "te"),
    (Language::Thai, "th"),
    (Language::Turkish, "tr"),
    (Language::Udmurt, "udm"),
    (Language::Ukrainian, "uk"),
    (Language::Urdu, "ur"),
    (Language::Uzbek, "uz"),
    (Language::Vietnamese, "vi"),
    (Language::Welsh, "cy"),
    (Language::Xhosa, "xh"),
    (Language::Yiddish, "yi"),
    (Language::Yoruba, "yo"),
    (Language::Zulu, "zu"),
];

impl Language {
    /// Canonical wire code from the catalog
    pub fn code(self) -> &'static str {
        CATALOG
            .iter()
            .find(|(lang, _)| *lang == self)
            .map(|(_, code)| *code)
            .expect("language is always present in the catalog")
    }

    /// Decode a canonical wire code
    pub fn from_code(code: &str) -> Option<Language> {
        CATALOG
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(lang, _)| *lang)
    }

    /// Iterate over every concrete language (excludes `Auto`)
    pub fn all() -> impl Iterator<Item = Language> {
        CATALOG
            .iter()
            .map(|(lang, _)| *lang)
            .filter(|lang| *lang != Language::Auto)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_auto_code() {
        assert_eq!(Language::Auto.code(), "auto");
        assert_eq!(Language::from_code("auto"), Some(Language::Auto));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_codes_are_unambiguous() {
        let mut codes: Vec<&str> = CATALOG.iter().map(|(_, c)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), CATALOG.len());
    }
}
