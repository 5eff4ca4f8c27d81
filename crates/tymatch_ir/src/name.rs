//! Nominal class identities.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Name of a user-defined class.
///
/// Two class atoms are the same type iff their names are equal. The name is
/// shared, so cloning a `ClassName` is a reference-count bump.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassName(Arc<str>);

impl ClassName {
    pub fn new(name: &str) -> Self {
        ClassName(Arc::from(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        ClassName::new(name)
    }
}

impl From<String> for ClassName {
    fn from(name: String) -> Self {
        ClassName(Arc::from(name))
    }
}

/// Lets maps keyed by `ClassName` be queried with a `&str`.
impl Borrow<str> for ClassName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassName({:?})", &*self.0)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
