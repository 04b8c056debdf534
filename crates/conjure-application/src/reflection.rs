//! In-memory reflection host
//!
//! [`ClassTable`] answers the introspection ports from class definitions
//! registered up front.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use conjure_domain::ports::{SignatureProvider, TypeHierarchy, TypeSystem};
use conjure_domain::{ClassDef, Constructor, Method, TypeTag};

/// Class definitions keyed by class name
#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    classes: HashMap<String, ClassDef>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class, replacing any previous definition of the same name
    pub fn define(&mut self, class: ClassDef) -> Option<ClassDef> {
        self.classes.insert(class.name().to_string(), class)
    }

    /// Builder form of [`define`](Self::define)
    pub fn with_class(mut self, class: ClassDef) -> Self {
        self.define(class);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ClassDef> {
        self.classes.get(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Freeze the table for use by an injector
    pub fn into_shared(self) -> Arc<dyn TypeSystem> {
        Arc::new(self)
    }

    /// `class` followed by its known ancestors, nearest first
    ///
    /// Cyclic declarations are visited once.
    fn lineage<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a ClassDef> + 'a {
        let mut queue = VecDeque::from([class]);
        let mut seen = HashSet::new();
        std::iter::from_fn(move || {
            while let Some(name) = queue.pop_front() {
                if !seen.insert(name) {
                    continue;
                }
                if let Some(def) = self.classes.get(name) {
                    queue.extend(def.parents().iter().filter_map(TypeTag::class_name));
                    return Some(def);
                }
            }
            None
        })
    }
}

impl SignatureProvider for ClassTable {
    fn constructor(&self, tag: &TypeTag) -> Option<Constructor> {
        self.classes.get(tag.class_name()?)?.instantiator()
    }

    fn method(&self, class: &str, name: &str) -> Option<Method> {
        self.lineage(class)
            .find_map(|def| def.own_method(name))
            .cloned()
    }

    fn is_known(&self, tag: &TypeTag) -> bool {
        tag.class_name()
            .is_some_and(|name| self.classes.contains_key(name))
    }
}

impl TypeHierarchy for ClassTable {
    fn is_subtype_of(&self, class: &str, candidate: &TypeTag) -> bool {
        let Some(candidate) = candidate.class_name() else {
            return false;
        };
        class == candidate
            || self.lineage(class).any(|def| {
                def.parents()
                    .iter()
                    .any(|parent| parent.class_name() == Some(candidate))
            })
    }
}
