// Type-model extraction
//
// Walks the catalog's descriptors and builds ClassRecords for the public
// classes of the configured library.

use super::records::*;
use super::typename::TypeNames;
use crate::catalog::{
    FieldDescriptor, MethodDescriptor, PropertyDescriptor, TypeCatalog, TypeDescriptor, TypeRef,
};
use tracing::debug;

/// Builds the documentation model from a type catalog
#[derive(Debug, Clone)]
pub struct Extractor {
    library_filter: String,
    type_names: TypeNames,
}

impl Extractor {
    /// Create an extractor keeping types whose module contains `library_filter`
    pub fn new(library_filter: impl Into<String>) -> Self {
        Self {
            library_filter: library_filter.into(),
            type_names: TypeNames::new(),
        }
    }

    pub fn library_filter(&self) -> &str {
        &self.library_filter
    }

    /// Build one record per selected class, in catalog order
    pub fn extract(&self, catalog: &dyn TypeCatalog) -> Vec<ClassRecord> {
        catalog
            .list_public_types()
            .into_iter()
            .filter(|t| self.is_selected(t))
            .map(|t| self.extract_class(t))
            .collect()
    }

    /// Public, non-special classes from a module matching the library filter
    pub fn is_selected(&self, desc: &TypeDescriptor) -> bool {
        desc.is_public
            && desc.is_class()
            && !desc.is_special_name
            && desc.module.contains(&self.library_filter)
    }

    fn extract_class(&self, desc: &TypeDescriptor) -> ClassRecord {
        let mut class = ClassRecord::new(
            desc.name.clone(),
            desc.namespace.clone().unwrap_or_default(),
        );
        debug!(target: "surfacedoc::extract", "{}", class.signature());

        for method in desc.methods.iter().filter(|m| m.is_public && !m.is_special_name) {
            let record = self.extract_method(method, &class);
            debug!(target: "surfacedoc::extract", "{}", record.signature());
            class.methods.push(record);
        }

        for property in desc.properties.iter().filter(|p| !p.is_special_name) {
            let record = self.extract_property(property);
            debug!(target: "surfacedoc::extract", "{}", record.signature());
            class.properties.push(record);
        }

        for field in desc.fields.iter().filter(|f| f.is_public && !f.is_special_name) {
            let record = self.extract_field(field);
            debug!(target: "surfacedoc::extract", "{}", record.signature());
            class.fields.push(record);
        }

        class
    }

    fn extract_method(&self, desc: &MethodDescriptor, class: &ClassRecord) -> MethodRecord {
        let mut parameters: Vec<_> = desc.parameters.iter().collect();
        parameters.sort_by_key(|p| p.position);

        MethodRecord {
            name: desc.name.clone(),
            parameters: parameters
                .into_iter()
                .map(|p| ParameterRecord {
                    type_name: self.convert(&p.parameter_type),
                    name: p.name.clone().unwrap_or_default(),
                    is_optional: p.is_optional,
                    is_out: p.is_out,
                    default_value: p.default_value.clone(),
                })
                .collect(),
            return_type: self.convert(&desc.return_type),
            is_static: desc.is_static,
            is_overload: class.has_method(&desc.name),
        }
    }

    fn extract_property(&self, desc: &PropertyDescriptor) -> PropertyRecord {
        PropertyRecord {
            type_name: self.convert(&desc.property_type),
            name: desc.name.clone(),
            is_getter: desc.can_read,
            is_setter: desc.can_write,
            has_public_getter: desc.has_public_getter(),
            has_public_setter: desc.has_public_setter(),
        }
    }

    fn extract_field(&self, desc: &FieldDescriptor) -> FieldRecord {
        FieldRecord {
            type_name: self.convert(&desc.field_type),
            name: desc.name.clone(),
            is_static: desc.is_static,
        }
    }

    fn convert(&self, type_ref: &TypeRef) -> String {
        self.type_names
            .convert(type_ref.full_name.as_deref(), type_ref.name.as_deref())
    }
}
