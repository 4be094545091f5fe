// Template engine for markdown pages

use crate::model::{ClassRecord, MethodRecord, PropertyRecord};
use crate::error::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Renders the markdown pages of one class and the root index
pub struct PageRenderer {
    tera: Tera,
}

/// One line of the root index
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    /// Link to the class index, relative to the output root
    pub link: String,
    /// `Namespace.Class`
    pub label: String,
}

impl PageRenderer {
    /// Create a renderer with the embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("class_index.md", include_str!("../../templates/class_index.md.tera")),
            ("property.md", include_str!("../../templates/property.md.tera")),
            ("method.md", include_str!("../../templates/method.md.tera")),
            ("root_index.md", include_str!("../../templates/root_index.md.tera")),
        ])?;

        Ok(Self { tera })
    }

    /// Render `index.md` of a class: property and method links in declaration order
    pub fn render_class_index(&self, class: &ClassRecord) -> Result<String> {
        let properties: Vec<&str> = class
            .documented_properties()
            .map(|p| p.name.as_str())
            .collect();
        let methods: Vec<&str> = class.methods.iter().map(|m| m.name.as_str()).collect();

        let mut context = Context::new();
        context.insert("class_name", &class.name);
        context.insert("properties", &properties);
        context.insert("methods", &methods);

        Ok(self.tera.render("class_index.md", &context)?)
    }

    /// Render the page of a property
    pub fn render_property(&self, property: &PropertyRecord) -> Result<String> {
        let mut context = Context::new();
        context.insert("name", &property.name);
        context.insert("declaration", &property_declaration(property));

        Ok(self.tera.render("property.md", &context)?)
    }

    /// Render the page of a method
    pub fn render_method(&self, class: &ClassRecord, method: &MethodRecord) -> Result<String> {
        let arguments: Vec<String> = method
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.type_name, p.name))
            .collect();

        let mut context = Context::new();
        context.insert("name", &method.name);
        context.insert("declaration", &method_declaration(class, method));
        context.insert("arguments", &arguments);
        context.insert("returns", &method.return_type);

        Ok(self.tera.render("method.md", &context)?)
    }

    /// Render the root `index.md`
    pub fn render_root_index(&self, entries: &[IndexEntry]) -> Result<String> {
        let mut context = Context::new();
        context.insert("entries", entries);

        Ok(self.tera.render("root_index.md", &context)?)
    }
}

/// `<Type> <Name> { get; set; }`, listing only public accessors
pub fn property_declaration(property: &PropertyRecord) -> String {
    let mut decl = format!("{} {} {{ ", property.type_name, property.name);
    if property.has_public_getter {
        decl.push_str("get; ");
    }
    if property.has_public_setter {
        decl.push_str("set; ");
    }
    decl.push('}');
    decl
}

/// `<Return> <Class>.<Method> (<Type> <name>[ = <default>], ...);`
pub fn method_declaration(class: &ClassRecord, method: &MethodRecord) -> String {
    let params = method
        .parameters
        .iter()
        .map(|p| {
            if p.is_optional {
                format!("{} {} = {}", p.type_name, p.name, p.default_literal())
            } else {
                format!("{} {}", p.type_name, p.name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} {}.{} ({});",
        method.return_type, class.name, method.name, params
    )
}
