//! Tests for template engine
//!
//! Organized by concern: scanning, plain rendering, escaping, loops,
//! conditionals, components, errors and the step/recursion limits.

use super::*;

// Test helper functions
mod helpers;

// Scanner tests
mod scanner;

// Rendering tests
mod render_basic;


// Error and limit tests
mod errors;
