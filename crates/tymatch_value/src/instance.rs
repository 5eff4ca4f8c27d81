//! Instances of user-defined classes.

use std::fmt;

use tymatch_ir::ClassName;

/// An object stored inside a [`Value::Object`](crate::Value::Object).
///
/// Inference only needs the runtime class of an instance; everything else
/// about the object stays behind this trait.
pub trait Instance: fmt::Debug + Send + Sync {
    fn class_name(&self) -> &ClassName;
}
