//! Guarded instances.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tymatch_ir::ClassName;
use tymatch_value::{Instance, Value};

use crate::{check_assignment, ClassSchema, TypeMismatch};

/// An instance of a schema-described class whose attribute assignments are
/// type-checked.
///
/// Check and commit happen under one write lock, so a rejected assignment
/// leaves every attribute untouched and concurrent writers to the same
/// instance are serialized. Wrap the object in an `Arc` and pass it to
/// [`Value::object`] to store it in another object's attribute.
pub struct GuardedObject {
    schema: Arc<ClassSchema>,
    slots: RwLock<FxHashMap<String, Value>>,
}

impl GuardedObject {
    pub fn new(schema: Arc<ClassSchema>) -> Self {
        GuardedObject {
            schema,
            slots: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create an instance and assign each initial value in order, as a
    /// constructor would.
    pub fn with_values<I, N>(schema: Arc<ClassSchema>, values: I) -> Result<Self, TypeMismatch>
    where
        I: IntoIterator<Item = (N, Value)>,
        N: AsRef<str>,
    {
        let object = GuardedObject::new(schema);
        for (attr, value) in values {
            object.set(attr.as_ref(), value)?;
        }
        Ok(object)
    }

    #[inline]
    pub fn schema(&self) -> &Arc<ClassSchema> {
        &self.schema
    }

    /// Assign `value` to `attr` if its type matches the declaration.
    ///
    /// Assigning to a property stores into the property's backing
    /// attribute.
    pub fn set(&self, attr: &str, value: impl Into<Value>) -> Result<(), TypeMismatch> {
        let value = value.into();
        let mut slots = self.slots.write();
        check_assignment(&*self.schema, attr, &value)?;
        let slot = self.schema.storage_name(attr);
        slots.insert(slot.to_owned(), value);
        Ok(())
    }

    /// Current value of `attr`.
    ///
    /// Reads through a property to its backing attribute. A field that was
    /// never assigned reports its declared default, if it has one.
    pub fn get(&self, attr: &str) -> Option<Value> {
        let slot = self.schema.storage_name(attr);
        if let Some(value) = self.slots.read().get(slot) {
            return Some(value.clone());
        }
        self.schema
            .field(attr)
            .and_then(|field| field.meta.as_ref())
            .map(|meta| meta.default_value().clone())
    }

    /// Whether `attr` holds an assigned value on this instance.
    pub fn has_own(&self, attr: &str) -> bool {
        let slot = self.schema.storage_name(attr);
        self.slots.read().contains_key(slot)
    }

    /// Assign the declared default of `attr` through the guard.
    ///
    /// Returns `Ok(false)` when the field declares no default. A default
    /// that does not match the declared type is rejected like any other
    /// value.
    pub fn restore_default(&self, attr: &str) -> Result<bool, TypeMismatch> {
        let Some(default) = self
            .schema
            .field(attr)
            .and_then(|field| field.meta.as_ref())
            .map(|meta| meta.default_value().clone())
        else {
            return Ok(false);
        };
        self.set(attr, default)?;
        Ok(true)
    }

    /// Drop the assigned value of `attr`. Deletion is never checked.
    pub fn remove(&self, attr: &str) -> Option<Value> {
        let slot = self.schema.storage_name(attr);
        self.slots.write().remove(slot)
    }

    /// Names of the attributes assigned on this instance, sorted.
    pub fn assigned(&self) -> Vec<String> {
        let mut names: Vec<String> = self.slots.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl Instance for GuardedObject {
    fn class_name(&self) -> &ClassName {
        self.schema.name()
    }
}

impl fmt::Debug for GuardedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardedObject")
            .field("class", self.schema.name())
            .field("assigned", &self.assigned())
            .finish()
    }
}
