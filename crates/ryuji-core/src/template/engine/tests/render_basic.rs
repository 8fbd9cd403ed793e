//! Basic rendering tests for template engine

use super::helpers::{blog_context, ctx};
use super::*;
use crate::template::source::MemoryLoader;
use serde_json::json;

#[test]
fn test_render_without_directives_is_identity() {
    let mut context = blog_context();
    for text in [
        "",
        "plain text",
        "<html><body>[[not a directive]]</body></html>",
        "[ [ x ] ] and [[  spaced  ]]",
        "multi\nline\n",
    ] {
        assert_eq!(render(text, &mut context).unwrap(), text);
    }
}

#[test]
fn test_render_identity_with_empty_context() {
    let mut context = Context::new();
    assert_eq!(render("nothing here", &mut context).unwrap(), "nothing here");
}

#[test]
fn test_render_greeting() {
    let mut context = ctx(json!({"name": "Amy"}));
    assert_eq!(render("Hi [[ name ]]!", &mut context).unwrap(), "Hi Amy!");
}

#[test]
fn test_render_keeps_surrounding_text() {
    let mut context = blog_context();
    let result = render("<h1>[[ title ]]</h1>\n<p>[[ count ]] posts</p>\n", &mut context).unwrap();
    assert_eq!(result, "<h1>My Blog</h1>\n<p>42 posts</p>\n");
}

#[test]
fn test_render_scalar_types() {
    let mut context = blog_context();
    let result = render(
        "[[ count ]]|[[ price ]]|[[ published ]]|[[ draft ]]",
        &mut context,
    )
    .unwrap();
    assert_eq!(result, "42|9.5|true|false");
}

#[test]
fn test_render_nested_key() {
    let mut context = blog_context();
    assert_eq!(render("by [[ author.name ]]", &mut context).unwrap(), "by Amy");
}

#[test]
fn test_render_indexed_key() {
    let mut context = blog_context();
    assert_eq!(
        render("[[ tags.1 ]] / [[ posts.0.title ]]", &mut context).unwrap(),
        "web / First"
    );
}

#[test]
fn test_render_sequence_joins_with_commas() {
    let mut context = blog_context();
    assert_eq!(render("[[ tags ]]", &mut context).unwrap(), "rust,web,templates");
}

#[test]
fn test_render_adjacent_directives() {
    let mut context = ctx(json!({"a": "x", "b": "y"}));
    assert_eq!(render("[[ a ]][[ b ]][[ a ]]", &mut context).unwrap(), "xyx");
}

#[test]
fn test_render_stray_endif_is_noop() {
    let mut context = ctx(json!({}));
    assert_eq!(render("a[[ endif ]]b", &mut context).unwrap(), "ab");
}

#[test]
fn test_render_named_template() {
    let mut loader = MemoryLoader::new();
    loader.insert("pages/home.tmpl", "<title>[[ title ]]</title>");
    let config = RenderConfig {
        templates_root: "pages/".to_string(),
        components_root: "parts".to_string(),
        file_extension: ".tmpl".to_string(),
    };
    let renderer = Renderer::with_loader(config, loader);
    let mut context = blog_context();
    assert_eq!(
        renderer.render_named("home", &mut context).unwrap(),
        "<title>My Blog</title>"
    );
}

#[test]
fn test_render_named_missing_template() {
    let renderer = Renderer::with_loader(RenderConfig::default(), MemoryLoader::new());
    let mut context = Context::new();
    match renderer.render_named("absent", &mut context) {
        Err(TemplateError::SourceUnavailable { path, .. }) => {
            assert_eq!(path, "templates/absent.html");
        }
        other => panic!("Expected SourceUnavailable, got {:?}", other),
    }
}

#[test]
fn test_render_named_from_filesystem() {
    let temp = ryuji_testkit::temp_dir_in_workspace();
    let site = ryuji_testkit::SiteFixture::new(temp.path())
        .template("index", "<h1>[[ title ]]</h1>[[ component:footer ]]")
        .component("footer", "<footer>[[ author.name ]]</footer>");

    let config = RenderConfig {
        templates_root: site.templates_root(),
        components_root: site.components_root(),
        file_extension: ".html".to_string(),
    };
    let renderer = Renderer::new(config);
    let mut context = blog_context();
    assert_eq!(
        renderer.render_named("index", &mut context).unwrap(),
        "<h1>My Blog</h1><footer>Amy</footer>"
    );
}
