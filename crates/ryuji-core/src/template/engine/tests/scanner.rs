//! Directive scanner tests

use super::scan::{scan, DirectiveKind};

#[test]
fn test_scan_no_directives() {
    assert!(scan("").is_empty());
    assert!(scan("<p>plain text</p>").is_empty());
}

#[test]
fn test_scan_single_variable() {
    let directives = scan("Hi [[ name ]]!");
    assert_eq!(directives.len(), 1);
    let d = &directives[0];
    assert_eq!(d.kind, DirectiveKind::Variable);
    assert_eq!(d.keyword, "name");
    assert!(d.args.is_empty());
    assert_eq!(d.start, 3);
    assert_eq!(d.end, 13);
    assert_eq!(d.line, 1);
}

#[test]
fn test_scan_classifies_kinds() {
    let text = "[[ component:nav ]][[ for:items:item ]][[ endfor ]][[ if:x ]][[ endif ]][[ html:body ]][[ a.b ]]";
    let kinds: Vec<_> = scan(text).iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DirectiveKind::Component,
            DirectiveKind::For,
            DirectiveKind::EndFor,
            DirectiveKind::If,
            DirectiveKind::EndIf,
            DirectiveKind::Html,
            DirectiveKind::Variable,
        ]
    );
}

#[test]
fn test_scan_splits_arguments() {
    let directives = scan("[[ for:items:item ]]");
    assert_eq!(directives[0].args, vec!["items", "item"]);
    assert_eq!(directives[0].argument(0), Some("items"));
    assert_eq!(directives[0].argument(1), Some("item"));
    assert_eq!(directives[0].argument(2), None);
}

#[test]
fn test_scan_empty_argument_is_absent() {
    let directives = scan("[[ html: ]]");
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].kind, DirectiveKind::Html);
    assert_eq!(directives[0].argument(0), None);
}

#[test]
fn test_scan_unknown_keyword_is_variable() {
    let directives = scan("[[ user:extra ]]");
    assert_eq!(directives[0].kind, DirectiveKind::Variable);
    assert_eq!(directives[0].keyword, "user");
}

#[test]
fn test_scan_rejects_malformed_brackets() {
    for text in [
        "[[name]]",
        "[[ name]]",
        "[[name ]]",
        "[[  name ]]",
        "[[ name  ]]",
        "[[ na me ]]",
        "[[ name! ]]",
        "[[ ]]",
        "[ [ name ] ]",
        "[[ name ]",
    ] {
        assert!(scan(text).is_empty(), "{:?} should not be a directive", text);
    }
}

#[test]
fn test_scan_extra_brackets_around_directive() {
    let directives = scan("[[[ a ]]]");
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].keyword, "a");
    assert_eq!(directives[0].start, 1);
    assert_eq!(directives[0].end, 8);
}

#[test]
fn test_scan_failed_candidate_does_not_hide_next() {
    let directives = scan("[[ bad! [[ good ]]");
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].keyword, "good");
}

#[test]
fn test_scan_adjacent_directives() {
    let directives = scan("[[ a ]][[ b ]]");
    assert_eq!(directives.len(), 2);
    assert_eq!(directives[0].end, directives[1].start);
}

#[test]
fn test_scan_line_numbers() {
    let text = "line1 [[ a ]]\nline2\nline3 [[ b ]] [[ c ]]\n[[ d ]]";
    let lines: Vec<_> = scan(text).iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![1, 3, 3, 4]);
}

#[test]
fn test_scan_multibyte_text() {
    let text = "日本語 [[ name ]] — ok";
    let directives = scan(text);
    assert_eq!(directives.len(), 1);
    assert_eq!(&text[directives[0].start..directives[0].end], "[[ name ]]");
}

#[test]
fn test_scan_allows_hyphen_in_body() {
    let directives = scan("[[ my-var ]]");
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].keyword, "my-var");
}
