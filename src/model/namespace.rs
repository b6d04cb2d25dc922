use parking_lot::RwLock;
use rustc_hash::FxHashSet;

use crate::base::Name;

/// The set of module names already used in the owning design
pub trait ModuleNamespace: Send + Sync {
    fn contains_module_named(&self, name: &str) -> bool;
}

/// In-memory [`ModuleNamespace`]; names compare exactly
#[derive(Debug, Default)]
pub struct ModuleNames {
    names: RwLock<FxHashSet<Name>>,
}

impl ModuleNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the name was already present
    pub fn insert(&self, name: impl Into<Name>) -> bool {
        self.names.write().insert(name.into())
    }

    pub fn remove(&self, name: &str) -> bool {
        self.names.write().remove(name)
    }

    /// Move `old` to `new`; returns false if `old` was not present
    pub fn rename(&self, old: &str, new: impl Into<Name>) -> bool {
        let mut names = self.names.write();
        if !names.remove(old) {
            return false;
        }
        names.insert(new.into());
        true
    }

    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.read().is_empty()
    }
}

impl<S: Into<Name>> FromIterator<S> for ModuleNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: RwLock::new(iter.into_iter().map(Into::into).collect()),
        }
    }
}

impl ModuleNamespace for ModuleNames {
    fn contains_module_named(&self, name: &str) -> bool {
        self.names.read().contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let names = ModuleNames::new();
        assert!(names.insert("alu"));
        assert!(!names.insert("alu"));
        assert!(names.contains_module_named("alu"));
        assert!(!names.contains_module_named("ALU"));
    }

    #[test]
    fn test_rename() {
        let names: ModuleNames = ["alu", "fifo"].into_iter().collect();
        assert!(names.rename("alu", "alu2"));
        assert!(!names.rename("missing", "x"));
        assert!(names.contains_module_named("alu2"));
        assert!(!names.contains_module_named("alu"));
        assert_eq!(names.len(), 2);
    }
}
