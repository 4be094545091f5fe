// Type descriptor types
//
// These mirror what a reflection pass over the compiled library exposes for
// each public type. They are deserialized from the type manifest and read by
// the extractor; nothing here is rendered directly.

use serde::{Deserialize, Serialize};

/// Kind of a described type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

/// A reference to a type by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeRef {
    /// Fully-qualified name, e.g. `System.Int32` or `System.Int32[]&`
    pub full_name: Option<String>,
    /// Simple name, e.g. `Int32`
    pub name: Option<String>,
}

impl TypeRef {
    /// A reference carrying only a fully-qualified name
    pub fn full(full_name: &str) -> Self {
        Self {
            full_name: Some(full_name.to_string()),
            name: full_name.rsplit('.').next().map(str::to_string),
        }
    }
}

/// One type of the library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeDescriptor {
    pub name: String,
    pub namespace: Option<String>,
    /// Identifier of the module the type was loaded from, e.g. `AltV.Net.dll`
    pub module: String,
    pub kind: TypeKind,
    pub is_public: bool,
    pub is_special_name: bool,
    /// Declaration order
    pub methods: Vec<MethodDescriptor>,
    /// Declaration order
    pub properties: Vec<PropertyDescriptor>,
    /// Declaration order
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Delegates are reference types deriving from a class, so they count
    pub fn is_class(&self) -> bool {
        matches!(self.kind, TypeKind::Class | TypeKind::Delegate)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodDescriptor {
    pub name: String,
    pub is_public: bool,
    pub is_static: bool,
    pub is_special_name: bool,
    pub return_type: TypeRef,
    pub parameters: Vec<ParameterDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDescriptor {
    pub name: Option<String>,
    pub position: usize,
    pub parameter_type: TypeRef,
    pub is_optional: bool,
    pub is_out: bool,
    /// Stringified default of an optional parameter; `None` when the default is null
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDescriptor {
    pub name: String,
    pub property_type: TypeRef,
    pub is_special_name: bool,
    pub can_read: bool,
    pub can_write: bool,
    pub getter: Option<AccessorDescriptor>,
    pub setter: Option<AccessorDescriptor>,
}

impl PropertyDescriptor {
    pub fn has_public_getter(&self) -> bool {
        self.getter.as_ref().is_some_and(|a| a.is_public)
    }

    pub fn has_public_setter(&self) -> bool {
        self.setter.as_ref().is_some_and(|a| a.is_public)
    }
}

/// A property's get or set method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorDescriptor {
    pub is_public: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: TypeRef,
    pub is_public: bool,
    pub is_static: bool,
    pub is_special_name: bool,
}
