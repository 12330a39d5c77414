use std::fmt;

/// Fully-qualified name of a type, kept as a plain string so it serializes and compares
/// the same way regardless of where it came from.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeIdentity(String);

impl TypeIdentity {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Identity of a Rust type, as reported by [`std::any::type_name`].
    pub fn of<T: ?Sized>() -> Self {
        Self(std::any::type_name::<T>().to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Last path segment, ignoring generic arguments when locating it.
    ///
    /// Both `::` and `.` count as separators, so `org.example.Compile` and
    /// `alloc::string::String` shorten to `Compile` and `String`.
    pub fn simple_name(&self) -> &str {
        let head = match self.0.find('<') {
            Some(idx) => &self.0[..idx],
            None => &self.0,
        };
        let after_colons = head.rfind("::").map(|idx| idx + 2);
        let after_dot = head.rfind('.').map(|idx| idx + 1);
        let start = after_colons.max(after_dot).unwrap_or(0);
        &self.0[start..]
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeIdentity {
    fn from(value: &str) -> Self {
        TypeIdentity::new(value)
    }
}

impl From<String> for TypeIdentity {
    fn from(value: String) -> Self {
        TypeIdentity::new(value)
    }
}

impl From<&TypeIdentity> for TypeIdentity {
    fn from(value: &TypeIdentity) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn of_uses_fully_qualified_name() {
        let id = TypeIdentity::of::<Marker>();
        assert!(id.name().ends_with("identity::tests::Marker"));
        assert_eq!(id.simple_name(), "Marker");
    }

    #[test]
    fn simple_name_handles_dotted_names() {
        assert_eq!(
            TypeIdentity::new("org.example.tasks.Compile").simple_name(),
            "Compile"
        );
        assert_eq!(TypeIdentity::new("Compile").simple_name(), "Compile");
    }

    #[test]
    fn simple_name_ignores_generic_arguments() {
        let id = TypeIdentity::of::<Vec<String>>();
        assert_eq!(id.simple_name(), "Vec<alloc::string::String>");
    }
}
