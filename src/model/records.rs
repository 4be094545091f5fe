// In-memory documentation model
//
// One ClassRecord per documented class, built once by the extractor and
// consumed by the page synthesizer. Member vectors keep declaration order.

use serde::{Deserialize, Serialize};

/// A documented class
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub namespace: String,
    pub parent_name: Option<String>,
    pub child_name: Option<String>,
    /// Reserved for pinning classes to the top of listings; never set by
    /// extraction and ignored by rendering.
    pub is_pinned: bool,
    pub methods: Vec<MethodRecord>,
    pub properties: Vec<PropertyRecord>,
    pub fields: Vec<FieldRecord>,
    /// Reserved; nothing populates it yet.
    pub enums: Vec<EnumRecord>,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// `Namespace.Name`, or just the name for the global namespace
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Whether a method with this name is already recorded
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }

    /// Properties that get a page: at least one public accessor
    pub fn documented_properties(&self) -> impl Iterator<Item = &PropertyRecord> {
        self.properties.iter().filter(|p| p.is_documented())
    }

    pub fn signature(&self) -> String {
        format!("{} {}", self.namespace, self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    pub parameters: Vec<ParameterRecord>,
    pub return_type: String,
    pub is_static: bool,
    /// A method of the same name was recorded earlier on the same class
    pub is_overload: bool,
}

impl MethodRecord {
    /// One-line signature, e.g. `\tstatic void Emit(string eventName, optional object[] args)`
    pub fn signature(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(ParameterRecord::signature)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "\t{}{} {}({})",
            if self.is_static { "static " } else { "" },
            self.return_type,
            self.name,
            params
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub is_optional: bool,
    pub is_out: bool,
    /// Stringified default of an optional parameter; `None` means null
    pub default_value: Option<String>,
}

impl ParameterRecord {
    pub fn signature(&self) -> String {
        format!(
            "{}{}{} {}",
            if self.is_optional { "optional " } else { "" },
            if self.is_out { "out " } else { "" },
            self.type_name,
            self.name
        )
    }

    /// Default value as written in a declaration: `null`, `""` or the value
    pub fn default_literal(&self) -> String {
        match self.default_value.as_deref() {
            None => "null".to_string(),
            Some("") => "\"\"".to_string(),
            Some(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    /// Readable, whatever the getter's visibility
    pub is_getter: bool,
    /// Writable, whatever the setter's visibility
    pub is_setter: bool,
    pub has_public_getter: bool,
    pub has_public_setter: bool,
}

impl PropertyRecord {
    pub fn is_documented(&self) -> bool {
        self.has_public_getter || self.has_public_setter
    }

    /// e.g. `\tint Id { get; }`
    pub fn signature(&self) -> String {
        format!(
            "\t{} {} {{{} {}}}",
            self.type_name,
            self.name,
            if self.is_getter { " get;" } else { "" },
            if self.is_setter { "set; " } else { "" }
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub is_static: bool,
}

impl FieldRecord {
    pub fn signature(&self) -> String {
        format!(
            "\t{}{} {}",
            if self.is_static { "static " } else { "" },
            self.type_name,
            self.name
        )
    }
}

/// Reserved; no extraction logic produces enum records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumRecord {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
}
