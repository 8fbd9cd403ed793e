//! Template module - bracket-directive template renderer
//!
//! Renders markup templates by interpreting `[[ ... ]]` directives against a
//! mutable variable context.
//!
//! ## Syntax
//!
//! A directive is `[[ body ]]`: double brackets, exactly one space of padding,
//! and a body made of `A-Z a-z 0-9 . : _ -`. Anything else is literal text.
//!
//! - Interpolation (escaped): `[[ user.name ]]`
//! - Interpolation (raw): `[[ html:user.bio ]]`
//! - Conditional: `[[ if:show ]] ... [[ endif ]]`
//! - Iteration: `[[ for:posts:post ]] ... [[ endfor ]]` (binding name optional)
//! - Inclusion: `[[ component:header ]]`
//!
//! ## Scoping
//!
//! Loop bindings are written straight into the [`Context`] and stay there after
//! the loop finishes. There is no lexical scope: a binding named `post` remains
//! visible to every later directive, including directives in components.

pub mod context;
pub mod engine;
pub mod error;
pub mod source;
pub mod value;

pub use context::Context;
pub use engine::{
    render, scan, strip_blank_lines, Directive, DirectiveKind, RenderConfig, Renderer,
};
pub use error::TemplateError;
pub use source::{FsLoader, MemoryLoader, SourceLoader};
pub use value::Value;
