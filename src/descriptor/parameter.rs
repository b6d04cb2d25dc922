use crate::base::Name;

/// How a parameter was declared.
///
/// Typed parameters carry their declared data type and are only the "same"
/// parameter across edits when both name and type match. Untyped
/// parameters are matched by name alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterStyle {
    /// `parameter int W = 8`, `parameter logic [3:0] MODE = 2`
    Typed { ty: Name },
    /// `parameter W = 8`
    Untyped,
}

/// One parameter of a module interface
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterDescriptor {
    name: Name,
    style: ParameterStyle,
    default_value: i64,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<Name>, style: ParameterStyle, default_value: i64) -> Self {
        Self {
            name: name.into(),
            style,
            default_value,
        }
    }

    pub fn untyped(name: impl Into<Name>, default_value: i64) -> Self {
        Self::new(name, ParameterStyle::Untyped, default_value)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn style(&self) -> &ParameterStyle {
        &self.style
    }

    /// Declared type, if any
    pub fn ty(&self) -> Option<&Name> {
        match &self.style {
            ParameterStyle::Typed { ty } => Some(ty),
            ParameterStyle::Untyped => None,
        }
    }

    pub fn default_value(&self) -> i64 {
        self.default_value
    }

    /// Whether `other` denotes the same parameter for the purpose of keeping
    /// its attribute across a re-parse. The default value never matters.
    pub fn same_identity(&self, other: &Self) -> bool {
        self.name == other.name && self.style == other.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(name: &str, ty: &str, value: i64) -> ParameterDescriptor {
        ParameterDescriptor::new(name, ParameterStyle::Typed { ty: ty.into() }, value)
    }

    #[test]
    fn test_identity_ignores_default_value() {
        let narrow = ParameterDescriptor::untyped("W", 8);
        assert!(narrow.same_identity(&ParameterDescriptor::untyped("W", 16)));
    }

    #[test]
    fn test_identity_compares_names() {
        let w = ParameterDescriptor::untyped("W", 8);
        assert!(!w.same_identity(&ParameterDescriptor::untyped("W2", 8)));
    }

    #[test]
    fn test_typed_identity_compares_types() {
        assert!(typed("W", "int", 8).same_identity(&typed("W", "int", 4)));
        assert!(!typed("W", "int", 8).same_identity(&typed("W", "longint", 8)));
        assert!(!typed("W", "int", 8).same_identity(&ParameterDescriptor::untyped("W", 8)));
    }

    #[test]
    fn test_ty_accessor() {
        assert_eq!(typed("W", "int", 1).ty().map(|t| t.as_str()), Some("int"));
        assert_eq!(ParameterDescriptor::untyped("W", 1).ty(), None);
    }
}
