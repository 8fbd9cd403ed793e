//! Template error types

use thiserror::Error;

/// Template rendering errors
///
/// Every error aborts the render; no partial output is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A directive that needs an argument was written without one
    #[error("`{kind}:` directive at line {line} is missing its argument")]
    MissingArgument {
        /// Directive kind (`component`, `for`, `if`, `html`)
        kind: String,
        /// Line number of the directive
        line: usize,
    },

    /// Variable or binding name with characters outside `[A-Za-z0-9_.]`
    #[error("Variable name \"{name}\" has illegal characters")]
    IllegalVariableName {
        /// The offending name
        name: String,
    },

    /// Name did not resolve to a value in the context
    #[error("Variable \"{name}\" is undefined")]
    UndefinedVariable {
        /// The dotted name that failed to resolve
        name: String,
    },

    /// `for` or `if` without its closing directive
    #[error("`{kind}` block opened at line {line} is missing an `[[ end{kind} ]]`")]
    UnterminatedBlock {
        /// Block kind (`for` or `if`)
        kind: String,
        /// Line number of the opening directive
        line: usize,
    },

    /// Closing directive with no open block
    #[error("`[[ {kind} ]]` at line {line} has no open block to close")]
    UnmatchedClose {
        /// Closing kind (`endfor`)
        kind: String,
        /// Line number of the closing directive
        line: usize,
    },

    /// `for` over a value that is not a sequence
    #[error("`for` at line {line} cannot iterate \"{name}\": value is not a sequence")]
    NotASequence {
        /// The iterated variable
        name: String,
        /// Line number of the directive
        line: usize,
    },

    /// Interpolated value is null or a mapping
    #[error("Variable \"{name}\" is null or a mapping and cannot be printed")]
    UnprintableValue {
        /// The interpolated variable
        name: String,
    },

    /// Component nesting went past the recursion limit
    #[error(
        "Component \"{component}\" would render at layer {layer} (max {max}); components may be referencing each other in an infinite loop"
    )]
    ExcessiveRecursion {
        /// Component that would have been rendered
        component: String,
        /// Layer it would have rendered at
        layer: usize,
        /// Maximum allowed layer
        max: usize,
    },

    /// Dispatch step safeguard tripped
    #[error("Template rendering exceeded {limit} directive steps. Check for runaway loops.")]
    IterationLimitExceeded {
        /// Maximum allowed steps
        limit: usize,
    },

    /// Template or component source could not be read
    #[error("Cannot read template source '{path}': {reason}")]
    SourceUnavailable {
        /// Resolved source path
        path: String,
        /// Underlying failure
        reason: String,
    },
}
