//! Shared test helpers for template engine tests

use crate::template::context::Context;
use crate::template::engine::{RenderConfig, Renderer};
use crate::template::source::MemoryLoader;
use serde_json::json;

/// Context from a JSON object literal
pub(super) fn ctx(json: serde_json::Value) -> Context {
    Context::from_json(json).unwrap()
}

/// A blog-like context with scalars, nesting and sequences
pub(super) fn blog_context() -> Context {
    ctx(json!({
        "title": "My Blog",
        "count": 42,
        "price": 9.5,
        "published": true,
        "draft": false,
        "empty": "",
        "zero": 0,
        "nothing": null,
        "author": {"name": "Amy", "bio": "<em>writer</em>"},
        "tags": ["rust", "web", "templates"],
        "posts": [
            {"title": "First", "body": "<p>one</p>"},
            {"title": "Second", "body": "<p>two</p>"}
        ],
        "none": []
    }))
}

/// Renderer over in-memory components registered as `components/<name>.html`
pub(super) fn renderer_with_components(components: &[(&str, &str)]) -> Renderer<MemoryLoader> {
    let mut loader = MemoryLoader::new();
    for (name, text) in components {
        loader.insert(format!("components/{}.html", name), *text);
    }
    Renderer::with_loader(RenderConfig::default(), loader)
}
