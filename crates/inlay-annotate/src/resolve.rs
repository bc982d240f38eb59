//! Reconcile extracted arguments with the callee's declared parameter names.

use inlay_core::config::{InlayConfig, ParameterCase};
use inlay_core::model::{CallSiteGroup, ExtractedArgument, ParsedSignature};
use inlay_parser::languages::Language;

/// Rendering rules for one language, read once per pass.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub hide_redundant_annotations: bool,
    pub show_variadic_numbers: bool,
    /// Keep `sigil` on displayed names.
    pub show_sigil: bool,
    pub sigil: Option<char>,
    pub parameter_case: ParameterCase,
}

impl ResolveOptions {
    pub fn for_language(config: &InlayConfig, language: Language) -> Self {
        let show_sigil = match language {
            Language::Php => config.languages.show_php_dollar,
            _ => true,
        };
        Self {
            hide_redundant_annotations: config.annotations.hide_redundant_annotations,
            show_variadic_numbers: config.annotations.show_variadic_numbers,
            show_sigil,
            sigil: language.parameter_sigil(),
            parameter_case: config.annotations.parameter_case,
        }
    }

    fn strip_sigil<'a>(&self, name: &'a str) -> &'a str {
        match self.sigil {
            Some(sigil) => name.strip_prefix(sigil).unwrap_or(name),
            None => name,
        }
    }
}

/// One entry per argument of `group`, in order. `None` means the argument
/// gets no annotation.
pub fn resolve(
    group: &CallSiteGroup,
    signature: &ParsedSignature,
    options: &ResolveOptions,
) -> Vec<Option<String>> {
    group
        .arguments
        .iter()
        .map(|argument| resolve_argument(argument, signature, options))
        .collect()
}

fn resolve_argument(
    argument: &ExtractedArgument,
    signature: &ParsedSignature,
    options: &ResolveOptions,
) -> Option<String> {
    let names = &signature.parameter_names;
    let index = argument.argument_index;
    let last = names.len().checked_sub(1);

    let (declared, variadic_slot) = match last {
        Some(last) if signature.is_variadic && index >= last => (&names[last], Some(index - last)),
        _ => (names.get(index)?, None),
    };

    if declared.is_empty() {
        return None;
    }
    let bare = options.strip_sigil(declared);
    if options.hide_redundant_annotations && argument.literal_name.as_deref() == Some(bare) {
        return None;
    }

    let shown = if options.show_sigil { declared.as_str() } else { bare };
    if shown.is_empty() {
        return None;
    }
    let mut name = options.parameter_case.apply(shown);
    if let Some(slot) = variadic_slot
        && options.show_variadic_numbers
    {
        name.push_str(&format!("[{}]", slot));
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inlay_core::position::{SourcePosition, Span};

    fn group(literals: &[Option<&str>], first_index: usize) -> CallSiteGroup {
        let anchor = SourcePosition::new(0, 0);
        let arguments = literals
            .iter()
            .enumerate()
            .map(|(i, literal)| ExtractedArgument {
                callee_anchor: anchor,
                argument_index: first_index + i,
                literal_name: literal.map(str::to_string),
                span: Span::new(SourcePosition::new(0, i * 3), SourcePosition::new(0, i * 3 + 1)),
            })
            .collect();
        CallSiteGroup { anchor, arguments }
    }

    fn signature(names: &[&str], is_variadic: bool) -> ParsedSignature {
        ParsedSignature::new(names.iter().map(|n| n.to_string()).collect(), is_variadic)
    }

    fn options() -> ResolveOptions {
        ResolveOptions {
            hide_redundant_annotations: true,
            show_variadic_numbers: true,
            show_sigil: true,
            ..ResolveOptions::default()
        }
    }

    fn shown(resolved: &[Option<String>]) -> Vec<Option<&str>> {
        resolved.iter().map(|n| n.as_deref()).collect()
    }

    #[test]
    fn positional_names() {
        let sig = signature(&["a", "b"], false);
        let resolved = resolve(&group(&[None, None], 0), &sig, &options());
        assert_eq!(shown(&resolved), [Some("a"), Some("b")]);
    }

    #[test]
    fn extra_arguments_without_rest_parameter() {
        let sig = signature(&["a"], false);
        let resolved = resolve(&group(&[None, None, None], 0), &sig, &options());
        assert_eq!(shown(&resolved), [Some("a"), None, None]);
    }

    #[test]
    fn variadic_numbering() {
        let sig = signature(&["items"], true);
        let resolved = resolve(&group(&[None, None, None], 0), &sig, &options());
        assert_eq!(shown(&resolved), [Some("items[0]"), Some("items[1]"), Some("items[2]")]);

        let plain = ResolveOptions {
            show_variadic_numbers: false,
            ..options()
        };
        let resolved = resolve(&group(&[None, None, None], 0), &sig, &plain);
        assert_eq!(shown(&resolved), [Some("items"), Some("items"), Some("items")]);
    }

    #[test]
    fn variadic_after_fixed_parameters() {
        let sig = signature(&["format", "args"], true);
        let resolved = resolve(&group(&[None, None, None], 0), &sig, &options());
        assert_eq!(shown(&resolved), [Some("format"), Some("args[0]"), Some("args[1]")]);
    }

    #[test]
    fn redundant_names_are_hidden() {
        let sig = signature(&["to", "subject"], false);
        let resolved = resolve(&group(&[Some("to"), Some("title")], 0), &sig, &options());
        assert_eq!(shown(&resolved), [None, Some("subject")]);

        let keep = ResolveOptions {
            hide_redundant_annotations: false,
            ..options()
        };
        let resolved = resolve(&group(&[Some("to"), Some("title")], 0), &sig, &keep);
        assert_eq!(shown(&resolved), [Some("to"), Some("subject")]);
    }

    #[test]
    fn redundant_variadic_compares_base_name() {
        let sig = signature(&["items"], true);
        let resolved = resolve(&group(&[Some("items"), None, Some("items")], 0), &sig, &options());
        assert_eq!(shown(&resolved), [None, Some("items[1]"), None]);
    }

    #[test]
    fn case_transform() {
        let upper = ResolveOptions {
            parameter_case: ParameterCase::Uppercase,
            ..options()
        };
        let resolved = resolve(&group(&[None], 0), &signature(&["items"], true), &upper);
        assert_eq!(shown(&resolved), [Some("ITEMS[0]")]);

        let lower = ResolveOptions {
            parameter_case: ParameterCase::Lowercase,
            ..options()
        };
        let resolved = resolve(&group(&[None], 0), &signature(&["maxLen"], false), &lower);
        assert_eq!(shown(&resolved), [Some("maxlen")]);
    }

    #[test]
    fn php_sigil_handling() {
        let config = InlayConfig::default();
        let php = ResolveOptions::for_language(&config, Language::Php);
        assert!(!php.show_sigil);
        let sig = signature(&["$haystack", "$needle"], false);

        let resolved = resolve(&group(&[None, Some("needle")], 0), &sig, &php);
        assert_eq!(shown(&resolved), [Some("haystack"), None]);

        let with_dollar = ResolveOptions {
            show_sigil: true,
            ..php
        };
        let resolved = resolve(&group(&[None, Some("other")], 0), &sig, &with_dollar);
        assert_eq!(shown(&resolved), [Some("$haystack"), Some("$needle")]);
    }

    #[test]
    fn lua_receiver_slot_shifts_lookup() {
        // obj:move(dx, dy) against `function Obj.move(self, dx, dy)`
        let sig = signature(&["self", "dx", "dy"], false);
        let resolved = resolve(&group(&[None, Some("dy")], 1), &sig, &options());
        assert_eq!(shown(&resolved), [Some("dx"), None]);
    }

    #[test]
    fn empty_names_are_not_annotated() {
        let resolved = resolve(&group(&[None, None], 0), &signature(&["", "b"], false), &options());
        assert_eq!(shown(&resolved), [None, Some("b")]);
    }

    #[test]
    fn empty_signature_annotates_nothing() {
        let resolved = resolve(&group(&[None], 0), &signature(&[], true), &options());
        assert_eq!(shown(&resolved), [None]);
    }

    #[test]
    fn options_follow_config() {
        let mut config = InlayConfig::default();
        config.annotations.show_variadic_numbers = false;
        config.annotations.parameter_case = ParameterCase::Uppercase;
        config.languages.show_php_dollar = true;
        let php = ResolveOptions::for_language(&config, Language::Php);
        assert!(php.show_sigil);
        assert_eq!(php.sigil, Some('$'));
        assert!(!php.show_variadic_numbers);

        let ts = ResolveOptions::for_language(&config, Language::TypeScript);
        assert_eq!(ts.sigil, None);
        assert_eq!(ts.parameter_case, ParameterCase::Uppercase);
    }
}
