//! Documentation section catalog.
//!
//! Maps each section to the fixed anchor of the user manual chapter that explains it, plus a
//! short title and summary used by `configtrace explain`.

use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A section of the configuration cache chapter of the user manual.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DocumentationSection {
    NotYetImplemented,
    NotYetImplementedSourceDependencies,
    NotYetImplementedJavaSerialization,
    #[serde(rename = "not_yet_implemented_testkit_java_agent")]
    NotYetImplementedTestKitJavaAgent,
    RequirementsBuildListeners,
    RequirementsDisallowedTypes,
    RequirementsExternalProcess,
    RequirementsSysPropEnvVarRead,
    RequirementsTaskAccess,
    RequirementsUseProjectDuringExecution,
}

impl DocumentationSection {
    pub const ALL: [DocumentationSection; 10] = [
        DocumentationSection::NotYetImplemented,
        DocumentationSection::NotYetImplementedSourceDependencies,
        DocumentationSection::NotYetImplementedJavaSerialization,
        DocumentationSection::NotYetImplementedTestKitJavaAgent,
        DocumentationSection::RequirementsBuildListeners,
        DocumentationSection::RequirementsDisallowedTypes,
        DocumentationSection::RequirementsExternalProcess,
        DocumentationSection::RequirementsSysPropEnvVarRead,
        DocumentationSection::RequirementsTaskAccess,
        DocumentationSection::RequirementsUseProjectDuringExecution,
    ];

    /// Symbolic identifier, identical to the serde representation.
    pub const fn id(self) -> &'static str {
        match self {
            Self::NotYetImplemented => ids::SECTION_NOT_YET_IMPLEMENTED,
            Self::NotYetImplementedSourceDependencies => {
                ids::SECTION_NOT_YET_IMPLEMENTED_SOURCE_DEPENDENCIES
            }
            Self::NotYetImplementedJavaSerialization => {
                ids::SECTION_NOT_YET_IMPLEMENTED_JAVA_SERIALIZATION
            }
            Self::NotYetImplementedTestKitJavaAgent => {
                ids::SECTION_NOT_YET_IMPLEMENTED_TESTKIT_JAVA_AGENT
            }
            Self::RequirementsBuildListeners => ids::SECTION_REQUIREMENTS_BUILD_LISTENERS,
            Self::RequirementsDisallowedTypes => ids::SECTION_REQUIREMENTS_DISALLOWED_TYPES,
            Self::RequirementsExternalProcess => ids::SECTION_REQUIREMENTS_EXTERNAL_PROCESS,
            Self::RequirementsSysPropEnvVarRead => ids::SECTION_REQUIREMENTS_SYS_PROP_ENV_VAR_READ,
            Self::RequirementsTaskAccess => ids::SECTION_REQUIREMENTS_TASK_ACCESS,
            Self::RequirementsUseProjectDuringExecution => {
                ids::SECTION_REQUIREMENTS_USE_PROJECT_DURING_EXECUTION
            }
        }
    }

    /// Fixed anchor within the user manual.
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::NotYetImplemented => ids::ANCHOR_NOT_YET_IMPLEMENTED,
            Self::NotYetImplementedSourceDependencies => {
                ids::ANCHOR_NOT_YET_IMPLEMENTED_SOURCE_DEPENDENCIES
            }
            Self::NotYetImplementedJavaSerialization => {
                ids::ANCHOR_NOT_YET_IMPLEMENTED_JAVA_SERIALIZATION
            }
            Self::NotYetImplementedTestKitJavaAgent => {
                ids::ANCHOR_NOT_YET_IMPLEMENTED_TESTKIT_JAVA_AGENT
            }
            Self::RequirementsBuildListeners => ids::ANCHOR_REQUIREMENTS_BUILD_LISTENERS,
            Self::RequirementsDisallowedTypes => ids::ANCHOR_REQUIREMENTS_DISALLOWED_TYPES,
            Self::RequirementsExternalProcess => ids::ANCHOR_REQUIREMENTS_EXTERNAL_PROCESS,
            Self::RequirementsSysPropEnvVarRead => ids::ANCHOR_REQUIREMENTS_SYS_PROP_ENV_VAR_READ,
            Self::RequirementsTaskAccess => ids::ANCHOR_REQUIREMENTS_TASK_ACCESS,
            Self::RequirementsUseProjectDuringExecution => {
                ids::ANCHOR_REQUIREMENTS_USE_PROJECT_DURING_EXECUTION
            }
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::NotYetImplemented => "Not Yet Implemented",
            Self::NotYetImplementedSourceDependencies => "Source Dependencies",
            Self::NotYetImplementedJavaSerialization => "Java Object Serialization",
            Self::NotYetImplementedTestKitJavaAgent => "TestKit Build Environment",
            Self::RequirementsBuildListeners => "Build Listeners",
            Self::RequirementsDisallowedTypes => "Disallowed Types",
            Self::RequirementsExternalProcess => "Running External Processes",
            Self::RequirementsSysPropEnvVarRead => "Reading System Properties and Environment Variables",
            Self::RequirementsTaskAccess => "Accessing Tasks From Another Task",
            Self::RequirementsUseProjectDuringExecution => "Using the Project at Execution Time",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::NotYetImplemented => "\
The build uses a feature that cannot be stored in the configuration cache yet.
The feature is supported by the build tool but has no cache support; the cache
entry is discarded and configuration runs again on the next invocation.",
            Self::NotYetImplementedSourceDependencies => "\
Source dependencies are resolved by cloning and configuring other builds during
configuration. Their state cannot be captured yet, so builds using them do not
reuse cached configuration.",
            Self::NotYetImplementedJavaSerialization => "\
Some Java serialization hooks (such as `writeReplace` returning a different
object graph) are not honoured when storing task state. Replace them with
plain fields or a dedicated value type.",
            Self::NotYetImplementedTestKitJavaAgent => "\
Builds started through TestKit with a Java agent for coverage cannot be cached.
Run those builds without the agent, or disable the cache for the affected test.",
            Self::RequirementsBuildListeners => "\
Listeners registered on the build at configuration time run during execution
and capture configuration state. Use build services and flow actions instead
of registering listeners.",
            Self::RequirementsDisallowedTypes => "\
Tasks must not reference configuration-time model types (projects, the build,
settings, configurations, source sets) from fields. Capture the values you need
during configuration and keep only those.",
            Self::RequirementsExternalProcess => "\
Starting an external process at configuration time makes the result an
undeclared input. Use a value source or the providers API to run it so its
output becomes part of the cache key.",
            Self::RequirementsSysPropEnvVarRead => "\
Reading system properties or environment variables at configuration time makes
them configuration inputs. Read them through providers so the cache can detect
changes and invalidate the entry.",
            Self::RequirementsTaskAccess => "\
A task must not access another task's instance at execution time. Wire the
values it needs as task inputs, connecting outputs to inputs through providers.",
            Self::RequirementsUseProjectDuringExecution => "\
The project object is not available when tasks run from the cache. Move the
lookups into configuration time and pass the results into task properties.",
        }
    }
}

impl fmt::Display for DocumentationSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Look up a section by its symbolic id or its anchor.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_section(identifier: &str) -> Option<DocumentationSection> {
    DocumentationSection::ALL
        .into_iter()
        .find(|section| section.id() == identifier || section.anchor() == identifier)
}

/// List all known section ids.
pub fn all_section_ids() -> Vec<&'static str> {
    DocumentationSection::ALL
        .iter()
        .map(|section| section.id())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn lookup_by_id() {
        assert_eq!(
            lookup_section(ids::SECTION_REQUIREMENTS_TASK_ACCESS),
            Some(DocumentationSection::RequirementsTaskAccess)
        );
        assert_eq!(
            lookup_section(ids::SECTION_NOT_YET_IMPLEMENTED),
            Some(DocumentationSection::NotYetImplemented)
        );
    }

    #[test]
    fn lookup_by_anchor() {
        assert_eq!(
            lookup_section("config_cache:requirements:external_processes"),
            Some(DocumentationSection::RequirementsExternalProcess)
        );
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_section("unknown_section").is_none());
        assert!(lookup_section("").is_none());
    }

    #[test]
    fn anchors_are_stable_constants() {
        for section in DocumentationSection::ALL {
            assert_eq!(section.anchor(), section.anchor());
            assert!(section.anchor().starts_with("config_cache:"));
        }
        assert_eq!(
            DocumentationSection::RequirementsSysPropEnvVarRead.anchor(),
            "config_cache:requirements:reading_sys_props_and_env_vars"
        );
    }

    #[test]
    fn ids_and_anchors_are_unique() {
        let ids: BTreeSet<_> = DocumentationSection::ALL.iter().map(|s| s.id()).collect();
        let anchors: BTreeSet<_> = DocumentationSection::ALL
            .iter()
            .map(|s| s.anchor())
            .collect();
        assert_eq!(ids.len(), DocumentationSection::ALL.len());
        assert_eq!(anchors.len(), DocumentationSection::ALL.len());
    }

    #[test]
    fn serde_name_matches_id() {
        for section in DocumentationSection::ALL {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.id()));
        }
    }

    #[test]
    fn all_section_ids_are_valid() {
        for id in all_section_ids() {
            let section = lookup_section(id);
            assert!(section.is_some(), "section {} should be in catalog", id);
            let section = section.unwrap();
            assert!(!section.title().is_empty());
            assert!(!section.summary().is_empty());
        }
    }
}
