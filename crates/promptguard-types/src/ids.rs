//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_FILE_SYNTAX: &str = "file.syntax";
pub const CHECK_PROMPT_STRUCTURE: &str = "prompt.structure";
pub const CHECK_FILE_NAMING: &str = "file.naming";
pub const CHECK_LAYOUT_MIRROR: &str = "layout.yaml_mirror";

// Codes: file.syntax
pub const CODE_INVALID_JSON: &str = "invalid_json";
pub const CODE_UNREADABLE_FILE: &str = "unreadable_file";

// Codes: prompt.structure
pub const CODE_MISSING_RECOMMENDED_FIELD: &str = "missing_recommended_field";
pub const CODE_TASK_NOT_STRING: &str = "task_not_string";
pub const CODE_OVERSIZED_STRING: &str = "oversized_string";
pub const CODE_TOP_LEVEL_NOT_OBJECT: &str = "top_level_not_object";

// Codes: file.naming
pub const CODE_MISSING_VERSION_SEPARATOR: &str = "missing_version_separator";
pub const CODE_MULTIPLE_VERSION_SEPARATORS: &str = "multiple_version_separators";
pub const CODE_NON_NUMERIC_VERSION: &str = "non_numeric_version";
pub const CODE_SHORT_ACRONYM: &str = "short_acronym";

// Codes: layout.yaml_mirror
pub const CODE_MISSING_MIRROR_DIR: &str = "missing_mirror_dir";
pub const CODE_ORPHANED_MIRROR_DIR: &str = "orphaned_mirror_dir";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
