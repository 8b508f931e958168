//! Domain layer constants
//!
//! Reserved characters of the binding syntax and limits shared by the
//! resolver and the plan format.

// ============================================================================
// BINDING SYNTAX
// ============================================================================

/// Prefix marking a symlink binding (`@name`)
pub const SYMLINK_SIGIL: char = '@';

/// Prefix marking a variable binding (`$name`)
pub const VARIABLE_SIGIL: char = '$';

/// Separator between identifier path segments
pub const PATH_SEPARATOR: char = '.';

/// Separator between segments of a type path (`module::Type`)
pub const TYPE_PATH_SEPARATOR: &str = "::";

// ============================================================================
// RESOLUTION LIMITS
// ============================================================================

/// Default maximum nesting depth of a single token build
pub const DEFAULT_MAX_BUILD_DEPTH: usize = 128;

// ============================================================================
// PLAN FORMAT
// ============================================================================

/// Version tag written into every rendered plan document
pub const PLAN_FORMAT_VERSION: u32 = 1;
