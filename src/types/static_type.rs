use smol_str::SmolStr;

use super::PrimitiveType;

/// The static type of an expression, as exported by the host.
///
/// `Unknown` is the explicit absent-information value. Every consumer in
/// this crate treats it as "cannot prove safety", never as a wildcard.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaticType {
    /// A primitive type.
    Primitive(PrimitiveType),
    /// A class or interface type, by qualified or simple name.
    Reference(SmolStr),
    /// A generic type variable such as `T`. Kept distinct from plain
    /// references: unboxing under a cast to one changes which erasure the
    /// compiler checks against.
    TypeParameter(SmolStr),
    /// No type information available.
    Unknown,
}

impl StaticType {
    /// A reference type from any string-ish name.
    pub fn reference(name: impl Into<SmolStr>) -> Self {
        StaticType::Reference(name.into())
    }

    /// A type variable from any string-ish name.
    pub fn type_parameter(name: impl Into<SmolStr>) -> Self {
        StaticType::TypeParameter(name.into())
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, StaticType::Primitive(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, StaticType::Unknown)
    }

    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            StaticType::Primitive(prim) => Some(*prim),
            _ => None,
        }
    }

    /// The primitive counterpart when this is a wrapper class reference
    /// (`java.lang.Integer` or `Integer` becomes `int`).
    pub fn unboxed(&self) -> Option<PrimitiveType> {
        match self {
            StaticType::Reference(name) => PrimitiveType::from_wrapper_name(name),
            _ => None,
        }
    }

    /// The type name as written in Java source.
    pub fn display_name(&self) -> &str {
        match self {
            StaticType::Primitive(prim) => prim.java_name(),
            StaticType::Reference(name) => name,
            StaticType::TypeParameter(name) => name,
            StaticType::Unknown => "<unknown>",
        }
    }
}

impl From<PrimitiveType> for StaticType {
    fn from(prim: PrimitiveType) -> Self {
        StaticType::Primitive(prim)
    }
}

impl std::fmt::Display for StaticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
