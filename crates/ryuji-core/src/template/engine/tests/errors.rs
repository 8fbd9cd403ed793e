//! Error handling tests for template engine

use super::helpers::{blog_context, ctx};
use super::*;
use serde_json::json;

#[test]
fn test_error_undefined_variable() {
    let mut context = Context::new();
    match render("[[ nope ]]", &mut context) {
        Err(TemplateError::UndefinedVariable { name }) => assert_eq!(name, "nope"),
        other => panic!("Expected UndefinedVariable, got {:?}", other),
    }
}

#[test]
fn test_error_undefined_nested_variable() {
    let mut context = blog_context();
    match render("[[ author.email ]]", &mut context) {
        Err(TemplateError::UndefinedVariable { name }) => assert_eq!(name, "author.email"),
        other => panic!("Expected UndefinedVariable, got {:?}", other),
    }
}

#[test]
fn test_error_missing_arguments() {
    let mut context = blog_context();
    for (template, kind) in [
        ("[[ component ]]", "component"),
        ("[[ for ]][[ endfor ]]", "for"),
        ("[[ if ]][[ endif ]]", "if"),
        ("[[ html ]]", "html"),
        ("[[ html: ]]", "html"),
        ("[[ component: ]]", "component"),
    ] {
        match render(template, &mut context) {
            Err(TemplateError::MissingArgument { kind: k, line }) => {
                assert_eq!(k, kind);
                assert_eq!(line, 1);
            }
            other => panic!("Expected MissingArgument for {}, got {:?}", template, other),
        }
    }
}

#[test]
fn test_error_missing_argument_message_names_kind() {
    let mut context = Context::new();
    let err = render("\n\n[[ for ]]", &mut context).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("for"), "{}", message);
    assert!(message.contains("line 3"), "{}", message);
}

#[test]
fn test_error_illegal_variable_name() {
    let mut context = blog_context();
    match render("[[ my-var ]]", &mut context) {
        Err(TemplateError::IllegalVariableName { name }) => assert_eq!(name, "my-var"),
        other => panic!("Expected IllegalVariableName, got {:?}", other),
    }
}

#[test]
fn test_error_dotted_binding_name() {
    let mut context = blog_context();
    match render("[[ for:tags:t.x ]][[ endfor ]]", &mut context) {
        Err(TemplateError::IllegalVariableName { name }) => assert_eq!(name, "t.x"),
        other => panic!("Expected IllegalVariableName, got {:?}", other),
    }
}

#[test]
fn test_error_unterminated_if() {
    let mut context = ctx(json!({"show": true}));
    match render("a\n[[ if:show ]]never closed", &mut context) {
        Err(TemplateError::UnterminatedBlock { kind, line }) => {
            assert_eq!(kind, "if");
            assert_eq!(line, 2);
        }
        other => panic!("Expected UnterminatedBlock, got {:?}", other),
    }
}

#[test]
fn test_error_unterminated_for() {
    let mut context = blog_context();
    for template in [
        "[[ for:tags:t ]][[ t ]]",
        "[[ for:none:t ]][[ t ]]",
        "[[ for:tags:a ]][[ for:tags:b ]][[ endfor ]]",
    ] {
        assert!(
            matches!(
                render(template, &mut context),
                Err(TemplateError::UnterminatedBlock { .. })
            ),
            "{} should be unterminated",
            template
        );
    }
}

#[test]
fn test_error_endfor_hidden_by_skipped_if() {
    let mut context = ctx(json!({"items": [1], "no": false}));
    match render("[[ for:items ]][[ if:no ]][[ endfor ]][[ endif ]]", &mut context) {
        Err(TemplateError::UnterminatedBlock { kind, .. }) => assert_eq!(kind, "for"),
        other => panic!("Expected UnterminatedBlock, got {:?}", other),
    }
}

#[test]
fn test_error_stray_endfor() {
    let mut context = Context::new();
    match render("x\n[[ endfor ]]", &mut context) {
        Err(TemplateError::UnmatchedClose { kind, line }) => {
            assert_eq!(kind, "endfor");
            assert_eq!(line, 2);
        }
        other => panic!("Expected UnmatchedClose, got {:?}", other),
    }
}

#[test]
fn test_error_for_over_scalar() {
    let mut context = blog_context();
    match render("[[ for:title:c ]][[ endfor ]]", &mut context) {
        Err(TemplateError::NotASequence { name, .. }) => assert_eq!(name, "title"),
        other => panic!("Expected NotASequence, got {:?}", other),
    }
}

#[test]
fn test_error_for_over_mapping() {
    let mut context = blog_context();
    assert!(matches!(
        render("[[ for:author ]][[ endfor ]]", &mut context),
        Err(TemplateError::NotASequence { .. })
    ));
}

#[test]
fn test_error_mapping_in_placeholder() {
    let mut context = blog_context();
    match render("[[ author ]]", &mut context) {
        Err(TemplateError::UnprintableValue { name }) => assert_eq!(name, "author"),
        other => panic!("Expected UnprintableValue, got {:?}", other),
    }
    assert!(matches!(
        render("[[ html:posts ]]", &mut context),
        Err(TemplateError::UnprintableValue { .. })
    ));
}

#[test]
fn test_error_null_in_placeholder() {
    let mut context = blog_context();
    for template in ["[[ nothing ]]", "[[ html:nothing ]]"] {
        match render(template, &mut context) {
            Err(TemplateError::UnprintableValue { name }) => assert_eq!(name, "nothing"),
            other => panic!("Expected UnprintableValue for {}, got {:?}", template, other),
        }
    }
    // Null as a condition is just falsy
    assert_eq!(
        render("[[ if:nothing ]][[ nothing ]][[ endif ]]ok", &mut context).unwrap(),
        "ok"
    );
}

#[test]
fn test_error_aborts_without_partial_output() {
    let mut context = ctx(json!({"a": "ok"}));
    let result = render("[[ a ]] then [[ b ]]", &mut context);
    assert!(result.is_err());
}
