// Display names for well-known runtime types

use std::collections::HashMap;

/// Fully-qualified name to short display name.
///
/// `&` marks a by-reference type, `[]` an array.
const CONVERSIONS: &[(&str, &str)] = &[
    // Numeric types
    ("System.SByte", "sbyte"),
    ("System.SByte&", "sbyte&"),
    ("System.SByte[]", "sbyte[]"),
    ("System.SByte[]&", "sbyte[]&"),
    ("System.Byte", "byte"),
    ("System.Byte&", "byte&"),
    ("System.Byte[]", "byte[]"),
    ("System.Byte[]&", "byte[]&"),
    ("System.Int16", "short"),
    ("System.Int16&", "short&"),
    ("System.Int16[]", "short[]"),
    ("System.Int16[]&", "short[]&"),
    ("System.UInt16", "ushort"),
    ("System.UInt16&", "ushort&"),
    ("System.UInt16[]", "ushort[]"),
    ("System.UInt16[]&", "ushort[]&"),
    ("System.Int32", "int"),
    ("System.Int32&", "int&"),
    ("System.Int32[]", "int[]"),
    ("System.Int32[]&", "int[]&"),
    ("System.UInt32", "uint"),
    ("System.UInt32&", "uint&"),
    ("System.UInt32[]", "uint[]"),
    ("System.UInt32[]&", "uint[]&"),
    ("System.Int64", "long"),
    ("System.Int64&", "long&"),
    ("System.Int64[]", "long[]"),
    ("System.Int64[]&", "long[]&"),
    ("System.UInt64", "ulong"),
    ("System.UInt64&", "ulong&"),
    ("System.UInt64[]", "ulong[]"),
    ("System.UInt64[]&", "ulong[]&"),
    ("System.Single", "float"),
    ("System.Single&", "float&"),
    ("System.Single[]", "float[]"),
    ("System.Single[]&", "float[]&"),
    ("System.Double", "double"),
    ("System.Double&", "double&"),
    ("System.Double[]", "double[]"),
    ("System.Double[]&", "double[]&"),
    // Vector types
    ("System.Numerics.Vector2", "Vector2"),
    ("System.Numerics.Vector2[]", "Vector2[]"),
    ("System.Numerics.Vector3", "Vector3"),
    ("System.Numerics.Vector3[]", "Vector3[]"),
    ("System.Numerics.Vector4", "Vector4"),
    ("System.Numerics.Vector4[]", "Vector4[]"),
    // Other types
    ("System.Void", "void"),
    ("System.String", "string"),
    ("System.Boolean", "bool"),
    ("System.Boolean&", "bool&"),
    ("System.Boolean[]", "bool[]"),
    ("System.Boolean[]&", "bool[]&"),
    ("System.Object", "object"),
    ("System.Object&", "object&"),
    ("System.Object[]", "object[]"),
    ("System.Object[]&", "object[]&"),
];

/// Immutable lookup from fully-qualified type names to display names
#[derive(Debug, Clone)]
pub struct TypeNames {
    table: HashMap<&'static str, &'static str>,
}

impl Default for TypeNames {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeNames {
    pub fn new() -> Self {
        Self {
            table: CONVERSIONS.iter().copied().collect(),
        }
    }

    /// Display name for a type.
    ///
    /// Table hit gives the short form, a miss gives the full name unchanged.
    /// Without a full name the simple name is used, and without either the
    /// result is empty.
    pub fn convert(&self, full_name: Option<&str>, name: Option<&str>) -> String {
        match full_name {
            Some(full) => match self.table.get(full) {
                Some(short) => short.to_string(),
                None => full.to_string(),
            },
            None => name.unwrap_or_default().to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
