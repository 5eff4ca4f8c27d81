//! Class schemas: the declarations an attribute guard checks against.
//!
//! A schema lists the annotated fields and setter-backed properties one
//! class declares, and optionally the schema of the class it extends.
//! Lookups walk the parent chain, so a subclass sees every inherited
//! declaration and may redeclare a field to shadow it.
//!
//! ```text
//! let a = ClassSchema::builder("A")
//!     .field_with("first", TypeExpr::INT, FieldMeta::required(0, "first attr"))
//!     .parse_field("complex_type", "list[int | float | str] | dict[int | float, str]")?
//!     .property("prop", SetterSignature::new([SetterParam::typed("v", TypeExpr::INT)]), "_xyz")
//!     .build();
//! let c = ClassSchema::builder("C").extends(&a).field("forth", TypeExpr::FLOAT).build();
//! ```

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tymatch_ir::{ClassName, TypeExpr};
use tymatch_parse::{parse_annotation, ParseError};
use tymatch_value::Value;

use crate::DeclaredTypeResolver;

// Field metadata

/// Default value and description attached to a declared field.
///
/// The guard never reads the description. The default is what an instance
/// reports for the field before anything is assigned to it; it is a
/// class-level value and is not checked against the declared type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldMeta {
    default: Value,
    description: Option<String>,
    required: bool,
}

impl FieldMeta {
    /// A field callers are expected to set.
    pub fn required(default: impl Into<Value>, description: impl Into<String>) -> Self {
        FieldMeta {
            default: default.into(),
            description: Some(description.into()),
            required: true,
        }
    }

    /// A field that may be left at its default.
    pub fn optional(default: impl Into<Value>, description: impl Into<String>) -> Self {
        FieldMeta {
            default: default.into(),
            description: Some(description.into()),
            required: false,
        }
    }

    /// A bare default with no description.
    pub fn with_default(default: impl Into<Value>) -> Self {
        FieldMeta {
            default: default.into(),
            description: None,
            required: false,
        }
    }

    #[inline]
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// An annotated field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDecl {
    pub declared: TypeExpr,
    pub meta: Option<FieldMeta>,
}

// Property setters

/// One parameter of a property setter, excluding the receiver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetterParam {
    pub name: String,
    pub declared: Option<TypeExpr>,
}

impl SetterParam {
    pub fn typed(name: impl Into<String>, declared: TypeExpr) -> Self {
        SetterParam {
            name: name.into(),
            declared: Some(declared),
        }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        SetterParam {
            name: name.into(),
            declared: None,
        }
    }
}

/// Signature of a property setter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetterSignature {
    pub params: Vec<SetterParam>,
    /// Declared return type. Never used for checking.
    pub returns: Option<TypeExpr>,
}

impl SetterSignature {
    pub fn new(params: impl IntoIterator<Item = SetterParam>) -> Self {
        SetterSignature {
            params: params.into_iter().collect(),
            returns: None,
        }
    }

    #[must_use]
    pub fn returning(mut self, returns: TypeExpr) -> Self {
        self.returns = Some(returns);
        self
    }

    /// Type an assignment through this setter is checked against: the
    /// declared type of its only typed parameter.
    ///
    /// `None` when zero or several parameters carry a type, in which case
    /// the assignment is not checked.
    pub fn accepted_type(&self) -> Option<&TypeExpr> {
        let mut typed = self.params.iter().filter_map(|param| param.declared.as_ref());
        match (typed.next(), typed.next()) {
            (Some(declared), None) => Some(declared),
            _ => None,
        }
    }
}

/// A setter-backed property and the attribute its setter stores into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDecl {
    pub setter: SetterSignature,
    pub backing: String,
}

// ClassSchema

/// Declarations of one class.
#[derive(Clone, PartialEq)]
pub struct ClassSchema {
    name: ClassName,
    parent: Option<Arc<ClassSchema>>,
    fields: FxHashMap<String, FieldDecl>,
    properties: FxHashMap<String, PropertyDecl>,
}

impl ClassSchema {
    pub fn builder(name: impl Into<ClassName>) -> ClassSchemaBuilder {
        ClassSchemaBuilder {
            schema: ClassSchema {
                name: name.into(),
                parent: None,
                fields: FxHashMap::default(),
                properties: FxHashMap::default(),
            },
        }
    }

    #[inline]
    pub fn name(&self) -> &ClassName {
        &self.name
    }

    #[inline]
    pub fn parent(&self) -> Option<&Arc<ClassSchema>> {
        self.parent.as_ref()
    }

    /// This class, then each ancestor up to the root.
    pub fn lineage(&self) -> impl Iterator<Item = &ClassSchema> {
        std::iter::successors(Some(self), |schema| schema.parent.as_deref())
    }

    /// Whether `ancestor` is this class or one of its ancestors, by name.
    pub fn is_subclass_of(&self, ancestor: &ClassName) -> bool {
        self.lineage().any(|schema| schema.name == *ancestor)
    }

    /// Nearest declaration of `attr` as a field.
    pub fn field(&self, attr: &str) -> Option<&FieldDecl> {
        self.lineage().find_map(|schema| schema.fields.get(attr))
    }

    /// Nearest declaration of `attr` as a property.
    pub fn property(&self, attr: &str) -> Option<&PropertyDecl> {
        self.lineage().find_map(|schema| schema.properties.get(attr))
    }

    /// Slot an assignment to `attr` is stored in: a property's backing
    /// attribute, or `attr` itself. Field declarations take precedence.
    pub fn storage_name<'a>(&'a self, attr: &'a str) -> &'a str {
        if self.field(attr).is_some() {
            return attr;
        }
        self.property(attr)
            .map_or(attr, |property| property.backing.as_str())
    }

    /// Names of every declared field, inherited ones included, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .lineage()
            .flat_map(|schema| schema.fields.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl DeclaredTypeResolver for ClassSchema {
    fn declared_type(&self, attr: &str) -> Option<&TypeExpr> {
        self.field(attr).map(|field| &field.declared)
    }

    fn property_setter(&self, attr: &str) -> Option<&SetterSignature> {
        self.property(attr).map(|property| &property.setter)
    }
}

impl fmt::Debug for ClassSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<_> = self.fields.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));
        let mut properties: Vec<_> = self.properties.keys().collect();
        properties.sort();
        f.debug_struct("ClassSchema")
            .field("name", &self.name)
            .field("parent", &self.parent.as_ref().map(|parent| parent.name()))
            .field("fields", &fields)
            .field("properties", &properties)
            .finish()
    }
}

/// Builder for [`ClassSchema`]. Later declarations of the same name
/// replace earlier ones.
#[derive(Clone, Debug)]
pub struct ClassSchemaBuilder {
    schema: ClassSchema,
}

impl ClassSchemaBuilder {
    #[must_use]
    pub fn extends(mut self, parent: &Arc<ClassSchema>) -> Self {
        self.schema.parent = Some(Arc::clone(parent));
        self
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, declared: TypeExpr) -> Self {
        self.schema
            .fields
            .insert(name.into(), FieldDecl { declared, meta: None });
        self
    }

    #[must_use]
    pub fn field_with(mut self, name: impl Into<String>, declared: TypeExpr, meta: FieldMeta) -> Self {
        self.schema.fields.insert(
            name.into(),
            FieldDecl {
                declared,
                meta: Some(meta),
            },
        );
        self
    }

    /// Declare a field from its annotation text.
    pub fn parse_field(self, name: impl Into<String>, annotation: &str) -> Result<Self, ParseError> {
        let declared = parse_annotation(annotation)?;
        Ok(self.field(name, declared))
    }

    #[must_use]
    pub fn property(
        mut self,
        name: impl Into<String>,
        setter: SetterSignature,
        backing: impl Into<String>,
    ) -> Self {
        self.schema.properties.insert(
            name.into(),
            PropertyDecl {
                setter,
                backing: backing.into(),
            },
        );
        self
    }

    pub fn build(self) -> Arc<ClassSchema> {
        Arc::new(self.schema)
    }
}
