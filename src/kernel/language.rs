use crate::models::extension_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LanguageId {
    Rust,
    Toml,
    JavaScript,
    PlainText,
}

impl LanguageId {
    pub fn from_name(name: &str) -> Self {
        Self::from_extension(extension_of(name))
    }

    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "rs" => Self::Rust,
            "toml" => Self::Toml,
            "js" => Self::JavaScript,
            _ => Self::PlainText,
        }
    }

    /// Hint handed to the text editing widget.
    pub fn language_id(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Toml => "toml",
            Self::JavaScript => "javascript",
            Self::PlainText => "plaintext",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Rust => "Rust",
            Self::Toml => "TOML",
            Self::JavaScript => "JavaScript",
            Self::PlainText => "Plain Text",
        }
    }
}

pub fn language_hint(name: &str) -> &'static str {
    LanguageId::from_name(name).language_id()
}

/// Explorer glyph for a file extension.
pub fn file_icon(extension: &str) -> &'static str {
    match extension {
        "rs" => "🦀",
        "toml" => "⚙",
        "md" => "📝",
        "js" => "🟨",
        "ts" => "🔷",
        "json" => "🔧",
        _ => "📄",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
