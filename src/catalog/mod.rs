// Type catalog: the boundary between the compiled library and the extractor

pub mod descriptor;
pub mod manifest;

pub use descriptor::*;
pub use manifest::*;

/// Source of type descriptors for one library
pub trait TypeCatalog {
    /// All described types, in the order the catalog yields them
    fn types(&self) -> &[TypeDescriptor];

    /// Types flagged public
    fn list_public_types(&self) -> Vec<&TypeDescriptor> {
        self.types().iter().filter(|t| t.is_public).collect()
    }
}

impl TypeCatalog for Vec<TypeDescriptor> {
    fn types(&self) -> &[TypeDescriptor] {
        self
    }
}
