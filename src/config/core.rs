use serde::{Deserialize, Serialize};

use super::catalog::TypeCatalog;
use crate::checks::ShapeChecks;
use crate::core::{TypeName, UNIVERSAL_TYPE};
use crate::oracle::HierarchyOracle;

/// Root configuration structure for paramshape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamShapeConfig {
    /// Framework type names used by the preset checks
    #[serde(default)]
    pub types: TypeCatalog,

    /// Supertype declarations for the in-memory oracle
    #[serde(default)]
    pub hierarchy: Vec<TypeDeclaration>,

    /// Oracle settings
    #[serde(default)]
    pub oracle: OracleConfig,
}

/// One type and its direct supertypes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: TypeName,
    #[serde(default)]
    pub supertypes: Vec<TypeName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Universal supertype of every reference type
    #[serde(default = "default_root_type")]
    pub root_type: TypeName,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            root_type: default_root_type(),
        }
    }
}

pub fn default_root_type() -> TypeName {
    TypeName::new(UNIVERSAL_TYPE)
}

impl ParamShapeConfig {
    /// Build an oracle answering from the declared hierarchy.
    pub fn build_oracle(&self) -> HierarchyOracle {
        let mut oracle = HierarchyOracle::new(self.oracle.root_type.clone());
        for declaration in &self.hierarchy {
            oracle.insert(
                declaration.name.clone(),
                declaration.supertypes.iter().cloned(),
            );
        }
        oracle
    }

    /// Preset shape checks bound to the configured type names.
    pub fn shape_checks(&self) -> ShapeChecks<'_> {
        ShapeChecks::new(&self.types)
    }
}
