use std::fmt;

/// A target language for translation, identified by its catalog tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLanguage {
    tag: String,
}

impl TargetLanguage {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Tag used in file names and the `Language` header, e.g. `pt_BR`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// English name handed to the translator. Unknown tags fall back to the tag.
    pub fn name(&self) -> &str {
        let primary = self
            .tag
            .split(['_', '-'])
            .next()
            .unwrap_or(&self.tag)
            .to_ascii_lowercase();

        match self.tag.replace('-', "_").as_str() {
            "pt_BR" => return "Brazilian Portuguese",
            "zh_CN" | "zh_Hans" => return "Simplified Chinese",
            "zh_TW" | "zh_Hant" => return "Traditional Chinese",
            _ => {}
        }

        match primary.as_str() {
            "ar" => "Arabic",
            "bg" => "Bulgarian",
            "cs" => "Czech",
            "da" => "Danish",
            "de" => "German",
            "el" => "Greek",
            "en" => "English",
            "es" => "Spanish",
            "fi" => "Finnish",
            "fr" => "French",
            "he" => "Hebrew",
            "hi" => "Hindi",
            "hu" => "Hungarian",
            "id" => "Indonesian",
            "it" => "Italian",
            "ja" => "Japanese",
            "ko" => "Korean",
            "nb" => "Norwegian",
            "nl" => "Dutch",
            "pl" => "Polish",
            "pt" => "Portuguese",
            "ro" => "Romanian",
            "ru" => "Russian",
            "sk" => "Slovak",
            "sv" => "Swedish",
            "th" => "Thai",
            "tr" => "Turkish",
            "uk" => "Ukrainian",
            "vi" => "Vietnamese",
            "zh" => "Chinese",
            _ => &self.tag,
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}
