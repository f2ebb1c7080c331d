//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Qualified name of the universal reference type.
///
/// Every non-primitive type is a subtype of it, so a subtype-inclusive slot
/// on this name accepts any reference type.
pub const UNIVERSAL_TYPE: &str = "java.lang.Object";

/// A fully qualified type name, compared literally.
///
/// Names are shared (`Arc<str>`) because the same handful of framework types
/// is repeated across every rule and parameter of a processing round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(Arc<str>);

impl TypeName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Literal equality against another qualified name.
    pub fn is(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&TypeName> for TypeName {
    fn from(name: &TypeName) -> Self {
        name.clone()
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Primitive classification of a parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Keyword spelling of the primitive, e.g. `boolean`.
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Upper-case kind label used in diagnostics, e.g. `BOOLEAN`.
    pub fn label(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "BOOLEAN",
            PrimitiveKind::Byte => "BYTE",
            PrimitiveKind::Short => "SHORT",
            PrimitiveKind::Int => "INT",
            PrimitiveKind::Long => "LONG",
            PrimitiveKind::Char => "CHAR",
            PrimitiveKind::Float => "FLOAT",
            PrimitiveKind::Double => "DOUBLE",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword {
            "boolean" => PrimitiveKind::Boolean,
            "byte" => PrimitiveKind::Byte,
            "short" => PrimitiveKind::Short,
            "int" => PrimitiveKind::Int,
            "long" => PrimitiveKind::Long,
            "char" => PrimitiveKind::Char,
            "float" => PrimitiveKind::Float,
            "double" => PrimitiveKind::Double,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved type: its qualified name plus its primitive classification.
///
/// Produced by a [`TypeOracle`](crate::oracle::TypeOracle) for expected
/// names, and carried by every actual [`Parameter`](super::Parameter).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeEntity {
    pub name: TypeName,
    pub primitive: Option<PrimitiveKind>,
}

impl TypeEntity {
    /// A reference (class or interface) type.
    pub fn reference(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            primitive: None,
        }
    }

    /// A primitive type, named by its keyword.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self {
            name: TypeName::new(kind.keyword()),
            primitive: Some(kind),
        }
    }

    /// Classify a textual type name: primitive keywords become primitives,
    /// everything else is a reference type.
    pub fn parse(name: &str) -> Self {
        match PrimitiveKind::from_keyword(name) {
            Some(kind) => Self::primitive(kind),
            None => Self::reference(name),
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive.is_some()
    }
}

/// Location in source code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}
