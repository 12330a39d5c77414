//! Stable identifiers for documentation sections and schemas.
//!
//! Section ids are snake_case symbols. Anchors are the fixed fragment strings
//! appended to the user manual location by whoever resolves links.

// Sections: not yet implemented
pub const SECTION_NOT_YET_IMPLEMENTED: &str = "not_yet_implemented";
pub const SECTION_NOT_YET_IMPLEMENTED_SOURCE_DEPENDENCIES: &str =
    "not_yet_implemented_source_dependencies";
pub const SECTION_NOT_YET_IMPLEMENTED_JAVA_SERIALIZATION: &str =
    "not_yet_implemented_java_serialization";
pub const SECTION_NOT_YET_IMPLEMENTED_TESTKIT_JAVA_AGENT: &str =
    "not_yet_implemented_testkit_java_agent";

// Sections: requirements
pub const SECTION_REQUIREMENTS_BUILD_LISTENERS: &str = "requirements_build_listeners";
pub const SECTION_REQUIREMENTS_DISALLOWED_TYPES: &str = "requirements_disallowed_types";
pub const SECTION_REQUIREMENTS_EXTERNAL_PROCESS: &str = "requirements_external_process";
pub const SECTION_REQUIREMENTS_SYS_PROP_ENV_VAR_READ: &str = "requirements_sys_prop_env_var_read";
pub const SECTION_REQUIREMENTS_TASK_ACCESS: &str = "requirements_task_access";
pub const SECTION_REQUIREMENTS_USE_PROJECT_DURING_EXECUTION: &str =
    "requirements_use_project_during_execution";

// Anchors
pub const ANCHOR_NOT_YET_IMPLEMENTED: &str = "config_cache:not_yet_implemented";
pub const ANCHOR_NOT_YET_IMPLEMENTED_SOURCE_DEPENDENCIES: &str =
    "config_cache:not_yet_implemented:source_dependencies";
pub const ANCHOR_NOT_YET_IMPLEMENTED_JAVA_SERIALIZATION: &str =
    "config_cache:not_yet_implemented:java_serialization";
pub const ANCHOR_NOT_YET_IMPLEMENTED_TESTKIT_JAVA_AGENT: &str =
    "config_cache:not_yet_implemented:testkit_build_environment";
pub const ANCHOR_REQUIREMENTS_BUILD_LISTENERS: &str = "config_cache:requirements:build_listeners";
pub const ANCHOR_REQUIREMENTS_DISALLOWED_TYPES: &str =
    "config_cache:requirements:disallowed_types";
pub const ANCHOR_REQUIREMENTS_EXTERNAL_PROCESS: &str =
    "config_cache:requirements:external_processes";
pub const ANCHOR_REQUIREMENTS_SYS_PROP_ENV_VAR_READ: &str =
    "config_cache:requirements:reading_sys_props_and_env_vars";
pub const ANCHOR_REQUIREMENTS_TASK_ACCESS: &str = "config_cache:requirements:task_access";
pub const ANCHOR_REQUIREMENTS_USE_PROJECT_DURING_EXECUTION: &str =
    "config_cache:requirements:use_project_during_execution";

// Schemas
pub const SCHEMA_CONFIG_V1: &str = "configtrace.config.v1";
