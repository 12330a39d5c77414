use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of property a Property frame points at.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Field,
    PropertyUsage,
    InputProperty,
    OutputProperty,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 4] = [
        PropertyKind::Field,
        PropertyKind::PropertyUsage,
        PropertyKind::InputProperty,
        PropertyKind::OutputProperty,
    ];

    /// Lower-case phrase used when rendering a provenance chain.
    pub const fn phrase(self) -> &'static str {
        match self {
            PropertyKind::Field => "field",
            PropertyKind::PropertyUsage => "property usage",
            PropertyKind::InputProperty => "input property",
            PropertyKind::OutputProperty => "output property",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}
