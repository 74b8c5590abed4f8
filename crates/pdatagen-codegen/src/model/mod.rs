//! Descriptor model: packages, struct descriptors and their fields.

pub(crate) mod context;
pub mod descriptor;
pub mod field;
pub mod package;
pub mod scope;

pub use descriptor::{MessageStruct, SliceStruct, StructDescriptor, StructVariant};
pub use field::{Field, NestedField, PrimitiveField, TypeRef};
pub use package::{ImportLine, Package, PackageBuilder};
pub use scope::GenerationScope;
