//! Language detection and tree-sitter grammar loading.

use crate::signature::SignatureDialect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Editor languages with a call-site extractor. Serialized as the editor's
/// language id (`"typescriptreact"`, `"php"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    JavaScriptReact,
    TypeScript,
    TypeScriptReact,
    Php,
    Lua,
    Java,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::JavaScript,
        Language::JavaScriptReact,
        Language::TypeScript,
        Language::TypeScriptReact,
        Language::Php,
        Language::Lua,
        Language::Java,
    ];

    /// The editor language id.
    pub fn name(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::JavaScriptReact => "javascriptreact",
            Self::TypeScript => "typescript",
            Self::TypeScriptReact => "typescriptreact",
            Self::Php => "php",
            Self::Lua => "lua",
            Self::Java => "java",
        }
    }

    pub fn from_language_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.name() == id)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::JavaScriptReact),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::TypeScriptReact),
            "php" | "phtml" => Some(Self::Php),
            "lua" => Some(Self::Lua),
            "java" => Some(Self::Java),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Tree-sitter grammar for this language.
    pub fn ts_language(self) -> tree_sitter::Language {
        match self {
            Self::JavaScript | Self::JavaScriptReact => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::TypeScriptReact => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::Php => tree_sitter_php::LANGUAGE_PHP.into(),
            Self::Lua => tree_sitter_lua::LANGUAGE.into(),
            Self::Java => tree_sitter_java::LANGUAGE.into(),
        }
    }

    /// Sigil carried by declared parameter names (`$name` in PHP).
    pub fn parameter_sigil(self) -> Option<char> {
        match self {
            Self::Php => Some('$'),
            _ => None,
        }
    }

    /// How hover text for this language spells a signature.
    pub fn signature_dialect(self) -> SignatureDialect {
        match self {
            Self::JavaScript | Self::JavaScriptReact | Self::TypeScript | Self::TypeScriptReact => {
                SignatureDialect::Bracketed
            }
            Self::Php => SignatureDialect::PhpDocblock,
            Self::Lua => SignatureDialect::LuaFunction,
            Self::Java => SignatureDialect::JavaMethod,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
