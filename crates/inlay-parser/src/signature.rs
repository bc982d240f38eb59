//! Recover declared parameter names from hover text.
//!
//! Hover providers describe a callee as free-form (usually markdown) text.
//! Each language's provider spells signatures differently, so parsing is split
//! into dialects selected by [`Language::signature_dialect`].

use crate::languages::Language;
use inlay_core::model::ParsedSignature;
use regex::Regex;
use std::sync::OnceLock;

/// Rest-parameter marker in JS/TS and Java signatures.
const REST_MARKER: &str = "...";

/// How a hover provider spells a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureDialect {
    /// `function foo(a: number, ...rest: string[]): void` (TypeScript server).
    Bracketed,
    /// `@param string $name` docblock tags, else `function foo($a, $b)`.
    PhpDocblock,
    /// `function foo(a, b)` on its own line (Lua language server).
    LuaFunction,
    /// `void pkg.Cls.foo(int a, String... rest)` (Java language server).
    JavaMethod,
}

impl SignatureDialect {
    pub fn parse(self, raw: &str) -> Option<ParsedSignature> {
        match self {
            Self::Bracketed => parse_bracketed(raw),
            Self::PhpDocblock => parse_php(raw),
            Self::LuaFunction => parse_lua(raw),
            Self::JavaMethod => parse_java(raw),
        }
    }
}

/// Parse hover text for a callee written in `language`.
pub fn parse_signature(language: Language, raw: &str) -> Option<ParsedSignature> {
    language.signature_dialect().parse(raw)
}

fn js_identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z_$][0-9a-zA-Z_$]*").unwrap())
}

fn php_variable_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\.{3})?(\$[a-zA-Z0-9_]+)").unwrap())
}

// ---------------------------------------------------------------------------
// JavaScript / TypeScript
// ---------------------------------------------------------------------------

/// Find the parameter list of the signature in `text`: the leftmost `(...)`
/// pair at nesting depth 0 that is followed (through spaces) by `:` or `=`.
/// Scanning from the right keeps a return type's own parentheses, e.g.
/// `(): (a: string) => void`, from being mistaken for the parameter list.
///
/// Returns the text between the parentheses.
pub fn locate_parameter_list(text: &str) -> Option<&str> {
    let mut open = None;
    let mut close = None;
    let mut depth: i32 = 0;
    let mut finding = false;

    for (i, c) in text.char_indices().rev() {
        match c {
            ')' => {
                if depth == 0 && finding {
                    close = Some(i);
                }
                depth += 1;
            }
            '(' => {
                depth -= 1;
                if depth == 0 && finding {
                    open = Some(i);
                    finding = false;
                }
            }
            ':' | '=' => {
                if depth == 0 {
                    finding = true;
                }
            }
            ' ' => {}
            _ => {
                if depth == 0 {
                    finding = false;
                }
            }
        }
    }

    let (open, close) = (open?, close?);
    (open < close).then(|| &text[open + 1..close])
}

fn parse_bracketed(raw: &str) -> Option<ParsedSignature> {
    static GENERICS_RE: OnceLock<Regex> = OnceLock::new();
    static PARENS_RE: OnceLock<Regex> = OnceLock::new();
    let generics_re = GENERICS_RE.get_or_init(|| Regex::new(r"<.*?>").unwrap());
    let parens_re = PARENS_RE.get_or_init(|| Regex::new(r"\(.*?\)").unwrap());

    let list = locate_parameter_list(raw)?;
    let list = generics_re.replace_all(list, "");
    let list = parens_re.replace_all(&list, "");

    let mut is_variadic = false;
    let mut names: Vec<String> = list
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let piece = match piece.strip_prefix(REST_MARKER) {
                Some(rest) => {
                    is_variadic = true;
                    rest
                }
                None => piece,
            };
            js_identifier_re()
                .find(piece)
                .map_or(piece, |m| m.as_str())
                .to_string()
        })
        .collect();

    // TypeScript's `this:` pseudo-parameter types the receiver; it is not passed.
    if names.first().is_some_and(|first| first == "this") {
        names.remove(0);
    }

    Some(ParsedSignature::new(names, is_variadic))
}

// ---------------------------------------------------------------------------
// PHP
// ---------------------------------------------------------------------------

fn parse_php(raw: &str) -> Option<ParsedSignature> {
    parse_php_docblock(raw).or_else(|| parse_php_declaration(raw))
}

/// Names from `@param` tags. Docblock names win over the declaration.
fn parse_php_docblock(raw: &str) -> Option<ParsedSignature> {
    let mut names = Vec::new();
    let mut is_variadic = false;
    for line in raw.lines() {
        let Some(at) = line.find("@param") else {
            continue;
        };
        let tag = &line[at + "@param".len()..];
        if let Some(caps) = php_variable_re().captures(tag) {
            is_variadic |= caps.get(1).is_some();
            names.push(caps[2].to_string());
        }
    }
    (!names.is_empty()).then(|| ParsedSignature::new(names, is_variadic))
}

fn parse_php_declaration(raw: &str) -> Option<ParsedSignature> {
    static DECL_RE: OnceLock<Regex> = OnceLock::new();
    let decl_re = DECL_RE.get_or_init(|| Regex::new(r"function\b[^(\n]*\((.*)\)").unwrap());

    let caps = decl_re.captures(raw)?;
    let mut names = Vec::new();
    let mut is_variadic = false;
    for piece in caps[1].split(',') {
        // Default values like `array(1, 2)` split into pieces without a variable.
        if let Some(var) = php_variable_re().captures(piece) {
            is_variadic |= var.get(1).is_some();
            names.push(var[2].to_string());
        }
    }
    Some(ParsedSignature::new(names, is_variadic))
}

// ---------------------------------------------------------------------------
// Lua
// ---------------------------------------------------------------------------

fn parse_lua(raw: &str) -> Option<ParsedSignature> {
    static FUNCTION_RE: OnceLock<Regex> = OnceLock::new();
    static NAME_RE: OnceLock<Regex> = OnceLock::new();
    let function_re = FUNCTION_RE.get_or_init(|| Regex::new(r"(?m)^function .*\((.*)\)").unwrap());
    let name_re = NAME_RE.get_or_init(|| Regex::new(r"^[a-zA-Z_][0-9a-zA-Z_]*").unwrap());

    let caps = function_re.captures(raw)?;
    let list = caps[1].replace(['[', ']'], "");

    // `...` has no name to show; arguments it absorbs stay unlabelled, so the
    // signature is not marked variadic (that would relabel the last fixed name).
    let names = list
        .split(',')
        .map(str::trim)
        .filter_map(|piece| name_re.find(piece))
        .map(|m| m.as_str().to_string())
        .collect();
    Some(ParsedSignature::new(names, false))
}

// ---------------------------------------------------------------------------
// Java
// ---------------------------------------------------------------------------

fn parse_java(raw: &str) -> Option<ParsedSignature> {
    static METHOD_RE: OnceLock<Regex> = OnceLock::new();
    static GENERIC_RE: OnceLock<Regex> = OnceLock::new();
    static TRAILING_NAME_RE: OnceLock<Regex> = OnceLock::new();
    let method_re = METHOD_RE.get_or_init(|| Regex::new(r"[^ ]\((.*)\)").unwrap());
    let generic_re = GENERIC_RE.get_or_init(|| Regex::new(r"<[^<>]*>").unwrap());
    let trailing_name_re =
        TRAILING_NAME_RE.get_or_init(|| Regex::new(r"[a-zA-Z_$][0-9a-zA-Z_$]*$").unwrap());

    let caps = method_re.captures(raw)?;
    // Innermost first so Map<String, List<Integer>> collapses fully.
    let mut list = caps[1].to_string();
    while generic_re.is_match(&list) {
        list = generic_re.replace_all(&list, "").into_owned();
    }

    let mut is_variadic = false;
    let names = list
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            if piece.contains(REST_MARKER) {
                is_variadic = true;
            }
            trailing_name_re
                .find(piece)
                .map_or(piece, |m| m.as_str())
                .to_string()
        })
        .collect();
    Some(ParsedSignature::new(names, is_variadic))
}
