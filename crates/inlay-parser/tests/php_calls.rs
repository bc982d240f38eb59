use inlay_core::model::CallSiteGroup;
use inlay_core::position::SourcePosition;
use inlay_parser::calls::{ExtractOptions, extract_call_sites};
use inlay_parser::languages::Language;

fn extract(source: &str) -> Vec<CallSiteGroup> {
    extract_call_sites(source, Language::Php, &ExtractOptions::default())
}

fn pos(line: usize, character: usize) -> SourcePosition {
    SourcePosition::new(line, character)
}

const SAMPLE: &str = "<?php
starts_with('Foo', $needle);
$obj->send($to, 'x');
Str::of($a, $b);
$p = new Point(1, 2);
";

#[test]
fn php_function_call() {
    let groups = extract(SAMPLE);
    let call = &groups[0];
    assert_eq!(call.anchor, pos(1, 0));
    assert_eq!(call.arguments[0].span.start, pos(1, 12));
    assert_eq!(call.arguments[0].span.end, pos(1, 17));
    assert!(call.arguments[0].literal_name.is_none());
}

#[test]
fn php_variable_argument_literal_drops_dollar() {
    let groups = extract(SAMPLE);
    assert_eq!(
        groups[0].arguments[1].literal_name.as_deref(),
        Some("needle"),
        "literal names are compared without the sigil"
    );
    assert_eq!(groups[0].arguments[1].span.start, pos(1, 19));
}

#[test]
fn php_member_scoped_and_construction_anchors() {
    let groups = extract(SAMPLE);
    let anchors: Vec<SourcePosition> = groups.iter().map(|g| g.anchor).collect();
    assert_eq!(anchors, [pos(1, 0), pos(2, 6), pos(3, 5), pos(4, 9)]);
    assert_eq!(groups[1].arguments[0].literal_name.as_deref(), Some("to"));
    assert_eq!(groups[2].arguments[1].literal_name.as_deref(), Some("b"));
}

#[test]
fn php_nested_call_in_condition() {
    let source = "<?php
if (substr($haystack, 0, strlen($needle)) === $needle) {
    echo 'yes';
}
";
    let groups = extract(source);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 3);
    assert_eq!(groups[1].len(), 1);

    let options = ExtractOptions {
        hide_single_parameters: true,
        ..ExtractOptions::default()
    };
    let visible = extract_call_sites(source, Language::Php, &options);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].len(), 3);
}

#[test]
fn php_named_argument_keeps_value_literal() {
    let groups = extract("<?php\nfind(needle: $needle, limit: 3);\n");
    assert_eq!(groups[0].len(), 2);
    assert_eq!(groups[0].arguments[0].literal_name.as_deref(), Some("needle"));
    assert!(groups[0].arguments[1].literal_name.is_none());
}

#[test]
fn php_anonymous_class_is_skipped() {
    let groups = extract("<?php\n$h = new class($a, $b) {};\n");
    assert!(groups.is_empty());
}

#[test]
fn php_syntax_error_yields_nothing() {
    assert!(extract("<?php\nfoo($a, ;\n").is_empty());
}
