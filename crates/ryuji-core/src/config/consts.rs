//! Constants used across the engine

/// Deepest recursion layer a component render may run at
///
/// The top-level render is layer 0; every nested `component` directive adds one.
pub const MAX_RECURSION_LAYER: usize = 5;

/// Advancing dispatch steps past which a render call fails (runaway-loop breaker)
pub const MAX_DISPATCH_STEPS: usize = 200;

/// Extension appended to template and component names
pub const DEFAULT_FILE_EXTENSION: &str = ".html";

/// Default base directory for top-level templates
pub const DEFAULT_TEMPLATES_ROOT: &str = "templates";

/// Default base directory for includable components
pub const DEFAULT_COMPONENTS_ROOT: &str = "components";

/// Config file looked up in the working directory by the CLI
pub const CONFIG_FILE_NAME: &str = "ryuji.toml";
