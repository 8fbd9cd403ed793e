//! Template engine implementation
//!
//! Rendering scans the text once into a flat list of directives and walks it
//! with an explicit cursor. `for` loops are realized by rewinding the cursor to
//! the opening directive; skipped `if`/`for` bodies are jumped over using the
//! block matcher. Open loops live on an owned [`frames::LoopStack`].

mod blocks;
mod frames;
mod resolve;
mod sanitize;
mod scan;

use crate::config::consts::{
    DEFAULT_COMPONENTS_ROOT, DEFAULT_FILE_EXTENSION, DEFAULT_TEMPLATES_ROOT, MAX_DISPATCH_STEPS,
    MAX_RECURSION_LAYER,
};
use crate::path::{concat_path, source_file_name};
use crate::template::context::Context;
use crate::template::error::TemplateError;
use crate::template::source::{FsLoader, SourceLoader};
use crate::template::value::Value;

use blocks::find_matching_close;
use frames::{Advance, LoopFrame, LoopStack};
use resolve::{check_var_name, resolve, Dots};
use sanitize::sanitize;

pub use sanitize::strip_blank_lines;
pub use scan::{scan, Directive, DirectiveKind};

/// Where the renderer looks up named templates and components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Base directory for top-level templates
    pub templates_root: String,
    /// Base directory for `[[ component:... ]]` sources
    pub components_root: String,
    /// Appended to every template/component name (e.g. `.html`)
    pub file_extension: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            templates_root: DEFAULT_TEMPLATES_ROOT.to_string(),
            components_root: DEFAULT_COMPONENTS_ROOT.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
        }
    }
}

/// What the cursor does after a directive has been dispatched
#[derive(Debug)]
enum Flow {
    /// Emit the literal after this directive and move on
    Next,
    /// Continue as if the directive at this index had just been dispatched
    SkipTo(usize),
    /// Dispatch the directive at this index next, emitting nothing
    Rewind(usize),
}

/// Template renderer bound to a configuration and a source loader
pub struct Renderer<L = FsLoader> {
    config: RenderConfig,
    loader: L,
}

impl Renderer<FsLoader> {
    /// Renderer reading sources from the filesystem
    pub fn new(config: RenderConfig) -> Self {
        Self::with_loader(config, FsLoader::new())
    }
}

impl<L: SourceLoader> Renderer<L> {
    /// Renderer reading sources through `loader`
    pub fn with_loader(config: RenderConfig, loader: L) -> Self {
        Self { config, loader }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render template text at the top level (recursion layer 0)
    pub fn render(&self, text: &str, context: &mut Context) -> Result<String, TemplateError> {
        self.render_at(text, context, 0)
    }

    /// Load `templates_root/<name><extension>` and render it at layer 0
    pub fn render_named(&self, name: &str, context: &mut Context) -> Result<String, TemplateError> {
        self.render_named_at(name, context, 0)
    }

    /// Load a named template and render it at `recursion_layer`
    pub fn render_named_at(
        &self,
        name: &str,
        context: &mut Context,
        recursion_layer: usize,
    ) -> Result<String, TemplateError> {
        let path = concat_path(
            &self.config.templates_root,
            &source_file_name(name, &self.config.file_extension),
        );
        let text = self.loader.load(&path)?;
        self.render_at(&text, context, recursion_layer)
    }

    /// Render template text at `recursion_layer`
    ///
    /// Text without directives is returned unchanged. `for` bindings written
    /// during the render remain in `context` afterwards.
    pub fn render_at(
        &self,
        text: &str,
        context: &mut Context,
        recursion_layer: usize,
    ) -> Result<String, TemplateError> {
        let directives = scan(text);
        let Some(first) = directives.first() else {
            return Ok(text.to_string());
        };
        log::debug!(
            "rendering {} directive(s) at layer {}",
            directives.len(),
            recursion_layer
        );

        let mut output = String::with_capacity(text.len());
        output.push_str(&text[..first.start]);

        let mut loops = LoopStack::new();
        let mut cursor = 0;
        let mut steps = 0;

        // Only advancing steps count; rewinds to a `for` are free
        while cursor < directives.len() {
            if steps > MAX_DISPATCH_STEPS {
                return Err(TemplateError::IterationLimitExceeded {
                    limit: MAX_DISPATCH_STEPS,
                });
            }

            let flow = self.dispatch(
                &directives,
                cursor,
                context,
                &mut loops,
                &mut output,
                recursion_layer,
            )?;
            match flow {
                Flow::Next => {}
                Flow::SkipTo(index) => cursor = index,
                Flow::Rewind(index) => {
                    cursor = index;
                    continue;
                }
            }

            let literal_end = directives
                .get(cursor + 1)
                .map_or(text.len(), |next| next.start);
            output.push_str(&text[directives[cursor].end..literal_end]);
            cursor += 1;
            steps += 1;
        }

        // A skipped `if` body can hide the `endfor` of a loop opened outside it
        if let Some(origin) = loops.innermost_origin() {
            let opener = &directives[origin];
            return Err(TemplateError::UnterminatedBlock {
                kind: opener.keyword.clone(),
                line: opener.line,
            });
        }
        Ok(output)
    }

    /// Execute one directive
    fn dispatch(
        &self,
        directives: &[Directive],
        cursor: usize,
        context: &mut Context,
        loops: &mut LoopStack,
        output: &mut String,
        recursion_layer: usize,
    ) -> Result<Flow, TemplateError> {
        let directive = &directives[cursor];
        log::trace!(
            "directive {} ({:?}) at line {}",
            cursor,
            directive.kind,
            directive.line
        );

        match directive.kind {
            DirectiveKind::Component => {
                let name = directive.required_argument(0)?;
                output.push_str(&self.render_component(name, context, recursion_layer)?);
                Ok(Flow::Next)
            }
            DirectiveKind::For => start_loop(directives, cursor, context, loops),
            DirectiveKind::EndFor => {
                match loops.advance(|binding, item| {
                    context.set(binding, item);
                }) {
                    Some(Advance::Done) => Ok(Flow::Next),
                    Some(Advance::Repeat { origin }) => Ok(Flow::Rewind(origin)),
                    None => Err(TemplateError::UnmatchedClose {
                        kind: directive.keyword.clone(),
                        line: directive.line,
                    }),
                }
            }
            DirectiveKind::If => {
                let name = directive.required_argument(0)?;
                let close =
                    find_matching_close(directives, cursor, DirectiveKind::If, DirectiveKind::EndIf)?;
                if resolve(name, context)?.is_truthy() {
                    Ok(Flow::Next)
                } else {
                    Ok(Flow::SkipTo(close))
                }
            }
            DirectiveKind::EndIf => Ok(Flow::Next),
            DirectiveKind::Html => {
                let name = directive.required_argument(0)?;
                output.push_str(&printable(name, resolve(name, context)?)?);
                Ok(Flow::Next)
            }
            DirectiveKind::Variable => {
                let name = directive.keyword.as_str();
                output.push_str(&sanitize(&printable(name, resolve(name, context)?)?));
                Ok(Flow::Next)
            }
        }
    }

    /// Render `components_root/<name><extension>` one layer deeper
    fn render_component(
        &self,
        name: &str,
        context: &mut Context,
        recursion_layer: usize,
    ) -> Result<String, TemplateError> {
        let layer = recursion_layer + 1;
        if layer > MAX_RECURSION_LAYER {
            return Err(TemplateError::ExcessiveRecursion {
                component: name.to_string(),
                layer,
                max: MAX_RECURSION_LAYER,
            });
        }

        let path = concat_path(
            &self.config.components_root,
            &source_file_name(name, &self.config.file_extension),
        );
        log::debug!("including component '{}' from {} at layer {}", name, path, layer);
        let text = self.loader.load(&path)?;
        self.render_at(&text, context, layer)
    }
}

/// Handle a `for` directive
///
/// Re-entry after a rewind is a no-op. On first encounter the sequence is
/// resolved, the binding (if any) set to the first item and a frame pushed;
/// an empty sequence jumps past the matching `endfor` without a frame.
fn start_loop(
    directives: &[Directive],
    cursor: usize,
    context: &mut Context,
    loops: &mut LoopStack,
) -> Result<Flow, TemplateError> {
    if loops.is_open_at(cursor) {
        return Ok(Flow::Next);
    }

    let directive = &directives[cursor];
    let name = directive.required_argument(0)?;
    let binding = directive.argument(1);
    if let Some(binding) = binding {
        check_var_name(binding, Dots::Forbidden)?;
    }
    let close = find_matching_close(directives, cursor, DirectiveKind::For, DirectiveKind::EndFor)?;

    let items = resolve(name, context)?
        .as_sequence()
        .ok_or_else(|| TemplateError::NotASequence {
            name: name.to_string(),
            line: directive.line,
        })?
        .to_vec();

    let Some(first) = items.first() else {
        return Ok(Flow::SkipTo(close));
    };
    if let Some(binding) = binding {
        context.set(binding, first.clone());
    }
    loops.push(LoopFrame {
        origin: cursor,
        items,
        current: 0,
        binding: binding.map(str::to_string),
    });
    Ok(Flow::Next)
}

/// Text form of a resolved value, or `UnprintableValue`
fn printable(name: &str, value: &Value) -> Result<String, TemplateError> {
    value
        .to_text()
        .ok_or_else(|| TemplateError::UnprintableValue {
            name: name.to_string(),
        })
}

/// Convenience function to render template text with the default configuration
pub fn render(text: &str, context: &mut Context) -> Result<String, TemplateError> {
    Renderer::new(RenderConfig::default()).render(text, context)
}

#[cfg(test)]
mod tests;
