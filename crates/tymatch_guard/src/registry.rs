//! Registry of class schemas, populated as classes are defined.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tymatch_ir::ClassName;

use crate::{ClassSchema, ClassSchemaBuilder, GuardedObject, RegistryError};

/// Class schemas by name.
///
/// A class can only be registered once, and only after the class it
/// extends, so every parent chain in the registry is made of registered
/// schemas.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    classes: FxHashMap<ClassName, Arc<ClassSchema>>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        ClassRegistry::default()
    }

    /// Start a schema for a new class, extending the registered `parent`.
    pub fn builder(
        &self,
        name: impl Into<ClassName>,
        parent: Option<&str>,
    ) -> Result<ClassSchemaBuilder, RegistryError> {
        let name = name.into();
        if self.classes.contains_key(&name) {
            return Err(RegistryError::DuplicateClass(name));
        }
        let builder = ClassSchema::builder(name.clone());
        let Some(parent) = parent else {
            return Ok(builder);
        };
        match self.classes.get(parent) {
            Some(schema) => Ok(builder.extends(schema)),
            None => Err(RegistryError::UnknownParent {
                class: name,
                parent: ClassName::new(parent),
            }),
        }
    }

    /// Add a built schema.
    pub fn register(&mut self, schema: Arc<ClassSchema>) -> Result<Arc<ClassSchema>, RegistryError> {
        let name = schema.name().clone();
        if self.classes.contains_key(&name) {
            return Err(RegistryError::DuplicateClass(name));
        }
        if let Some(parent) = schema.parent() {
            match self.classes.get(parent.name()) {
                Some(registered) if Arc::ptr_eq(registered, parent) => {}
                Some(_) => {
                    return Err(RegistryError::ForeignParent {
                        class: name,
                        parent: parent.name().clone(),
                    })
                }
                None => {
                    return Err(RegistryError::UnknownParent {
                        class: name,
                        parent: parent.name().clone(),
                    })
                }
            }
        }

        tracing::debug!(class = %name, "class registered");
        self.classes.insert(name, Arc::clone(&schema));
        Ok(schema)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ClassSchema>> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// A fresh, unassigned instance of a registered class.
    pub fn instantiate(&self, name: &str) -> Option<GuardedObject> {
        self.get(name)
            .map(|schema| GuardedObject::new(Arc::clone(schema)))
    }
}
