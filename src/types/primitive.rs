//! The eight primitive types and their wrapper classes.
//!
//! The wrapper mapping is a fixed bijection: every wrapper class has exactly
//! one primitive counterpart and vice versa. All tables here are compile-time
//! constants, so concurrent analyses can consult them without coordination.

/// A Java primitive type.
///
/// Variant order follows the widening chain for the numeric types
/// (`byte < short < char < int < long < float < double`); `Boolean`
/// participates in no widening at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    /// All eight primitives.
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Char,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
    ];

    /// The Java keyword for this primitive (`int`, `boolean`, ...).
    pub const fn java_name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Char => "char",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    /// Parse a Java primitive keyword.
    pub fn from_java_name(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(PrimitiveType::Boolean),
            "byte" => Some(PrimitiveType::Byte),
            "short" => Some(PrimitiveType::Short),
            "char" => Some(PrimitiveType::Char),
            "int" => Some(PrimitiveType::Int),
            "long" => Some(PrimitiveType::Long),
            "float" => Some(PrimitiveType::Float),
            "double" => Some(PrimitiveType::Double),
            _ => None,
        }
    }

    /// The fully qualified name of the wrapper class
    /// (`java.lang.Integer`, ...).
    pub const fn wrapper_name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "java.lang.Boolean",
            PrimitiveType::Byte => "java.lang.Byte",
            PrimitiveType::Short => "java.lang.Short",
            PrimitiveType::Char => "java.lang.Character",
            PrimitiveType::Int => "java.lang.Integer",
            PrimitiveType::Long => "java.lang.Long",
            PrimitiveType::Float => "java.lang.Float",
            PrimitiveType::Double => "java.lang.Double",
        }
    }

    /// The simple name of the wrapper class (`Integer`, ...).
    pub const fn wrapper_simple_name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Byte => "Byte",
            PrimitiveType::Short => "Short",
            PrimitiveType::Char => "Character",
            PrimitiveType::Int => "Integer",
            PrimitiveType::Long => "Long",
            PrimitiveType::Float => "Float",
            PrimitiveType::Double => "Double",
        }
    }

    /// Look up the primitive counterpart of a wrapper class.
    ///
    /// Accepts both the fully qualified and the simple class name, the two
    /// spellings a host's type facts can produce.
    pub fn from_wrapper_name(name: &str) -> Option<Self> {
        let simple = name.strip_prefix("java.lang.").unwrap_or(name);
        match simple {
            "Boolean" => Some(PrimitiveType::Boolean),
            "Byte" => Some(PrimitiveType::Byte),
            "Short" => Some(PrimitiveType::Short),
            "Character" => Some(PrimitiveType::Char),
            "Integer" => Some(PrimitiveType::Int),
            "Long" => Some(PrimitiveType::Long),
            "Float" => Some(PrimitiveType::Float),
            "Double" => Some(PrimitiveType::Double),
            _ => None,
        }
    }

    /// Position in the numeric widening chain, `None` for `boolean`.
    const fn numeric_rank(self) -> Option<u8> {
        match self {
            PrimitiveType::Boolean => None,
            PrimitiveType::Byte => Some(0),
            PrimitiveType::Short => Some(1),
            PrimitiveType::Char => Some(2),
            PrimitiveType::Int => Some(3),
            PrimitiveType::Long => Some(4),
            PrimitiveType::Float => Some(5),
            PrimitiveType::Double => Some(6),
        }
    }

    /// Steps from `source` up the widening chain to `self`: `Some(0)` for
    /// equal types, `None` when `source` does not widen into `self`.
    /// Overload selection uses the distance to rank applicable signatures.
    pub fn widening_distance(self, source: PrimitiveType) -> Option<u8> {
        if self == source {
            return Some(0);
        }
        match (self.numeric_rank(), source.numeric_rank()) {
            (Some(target), Some(source)) if source < target => Some(target - source),
            _ => None,
        }
    }

    /// Whether a value of type `source` can stand where `self` is required
    /// without an explicit cast: the types are equal, or `source` sits
    /// strictly below `self` in the widening chain.
    ///
    /// `boolean` only ever accepts `boolean`.
    pub fn accepts_widened(self, source: PrimitiveType) -> bool {
        self.widening_distance(source).is_some()
    }
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.java_name())
    }
}
