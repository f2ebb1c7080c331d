use crate::core::{Parameter, TypeName};
use crate::oracle::{extends_type, is_exact_type, TypeOracle};
use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// How an actual parameter type is compared against an expected slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Type names must be equal literally.
    Exact,
    /// The expected type or any of its subtypes, per the oracle.
    SubtypeInclusive,
}

/// One expected parameter slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub expected_type: TypeName,
    pub required: bool,
    pub match_mode: MatchMode,
}

impl ParameterDescriptor {
    /// A required slot accepting exactly `expected_type`.
    pub fn exact(expected_type: impl Into<TypeName>) -> Self {
        Self {
            expected_type: expected_type.into(),
            required: true,
            match_mode: MatchMode::Exact,
        }
    }

    /// A required slot accepting `expected_type` or any subtype.
    pub fn extending(expected_type: impl Into<TypeName>) -> Self {
        Self {
            expected_type: expected_type.into(),
            required: true,
            match_mode: MatchMode::SubtypeInclusive,
        }
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn is_extending(&self) -> bool {
        self.match_mode == MatchMode::SubtypeInclusive
    }

    /// Whether `parameter` satisfies this slot's match mode.
    pub fn accepts(&self, parameter: &Parameter, oracle: &dyn TypeOracle) -> bool {
        match self.match_mode {
            MatchMode::Exact => is_exact_type(parameter, self.expected_type.as_str()),
            MatchMode::SubtypeInclusive => {
                extends_type(oracle, parameter, self.expected_type.as_str())
            }
        }
    }
}

impl fmt::Display for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_extending() {
            f.write_str("extending ")?;
        }
        let presence = if self.required { "required" } else { "optional" };
        write!(f, "{} ({})", self.expected_type, presence)
    }
}

/// Ordered slots declared by one rule.
///
/// Backed by a persistent vector, so cloning a rule to reuse it at another
/// call site shares the slots instead of copying them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    slots: Vector<ParameterDescriptor>,
}

impl RequirementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slot and return its index.
    pub fn push(&mut self, descriptor: ParameterDescriptor) -> usize {
        self.slots.push_back(descriptor);
        self.slots.len() - 1
    }

    pub(crate) fn set_required(&mut self, slot: usize, required: bool) {
        if let Some(descriptor) = self.slots.get_mut(slot) {
            descriptor.required = required;
        }
    }

    pub fn get(&self, slot: usize) -> Option<&ParameterDescriptor> {
        self.slots.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterDescriptor> + '_ {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn required_count(&self) -> usize {
        self.slots.iter().filter(|d| d.required).count()
    }
}

impl Index<usize> for RequirementSet {
    type Output = ParameterDescriptor;

    fn index(&self, slot: usize) -> &ParameterDescriptor {
        &self.slots[slot]
    }
}

impl FromIterator<ParameterDescriptor> for RequirementSet {
    fn from_iter<T: IntoIterator<Item = ParameterDescriptor>>(iter: T) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for RequirementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<String> = self.slots.iter().map(ToString::to_string).collect();
        write!(f, "[ {} ]", slots.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_display() {
        assert_eq!(
            ParameterDescriptor::extending("android.view.View").to_string(),
            "extending android.view.View (required)"
        );
        assert_eq!(
            ParameterDescriptor::exact("int").optional().to_string(),
            "int (optional)"
        );
    }

    #[test]
    fn test_set_display() {
        let set: RequirementSet = vec![
            ParameterDescriptor::extending("android.view.View"),
            ParameterDescriptor::exact("boolean").optional(),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            set.to_string(),
            "[ extending android.view.View (required), boolean (optional) ]"
        );
        assert_eq!(set.required_count(), 1);
    }

    #[test]
    fn test_set_required_touches_only_its_slot() {
        let mut set = RequirementSet::new();
        let first = set.push(ParameterDescriptor::exact("int"));
        let second = set.push(ParameterDescriptor::exact("long"));
        set.set_required(second, false);
        assert!(set[first].required);
        assert!(!set[second].required);
    }

    #[test]
    fn test_clones_are_independent() {
        let mut original = RequirementSet::new();
        original.push(ParameterDescriptor::exact("int"));
        let mut copy = original.clone();
        copy.set_required(0, false);
        assert!(original[0].required);
        assert!(!copy[0].required);
    }
}
