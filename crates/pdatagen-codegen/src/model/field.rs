//! Fields of message structs.
//!
//! A field knows how to render its accessor, its `CopyTo` line, its unit
//! test and its line in the fill-test helper. The Go expressions differ
//! depending on whether the referenced type lives in the owning package,
//! and on whether the owning package is the shared one.

use super::scope::GenerationScope;
use crate::model::context::FieldContext;
use pdatagen_core::{PackageName, StructName};
use serde::Serialize;

/// A reference to a generated struct, possibly in another package.
///
/// # Examples
///
/// ```
/// use pdatagen_codegen::TypeRef;
///
/// let resource = TypeRef::new("pcommon", "Resource");
/// assert_eq!(resource.package().as_str(), "pcommon");
/// assert_eq!(resource.name().as_str(), "Resource");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeRef {
    package: PackageName,
    name: StructName,
}

impl TypeRef {
    /// Creates a reference to struct `name` declared in `package`.
    #[must_use]
    pub fn new(package: impl Into<PackageName>, name: impl Into<StructName>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Returns the package declaring the referenced struct.
    #[must_use]
    pub const fn package(&self) -> &PackageName {
        &self.package
    }

    /// Returns the referenced struct name.
    #[must_use]
    pub const fn name(&self) -> &StructName {
        &self.name
    }
}

/// A scalar field exposed through a getter and a setter.
///
/// When `raw_type` is set, the public type is a named conversion of the
/// wire type (`pcommon.Timestamp` over `uint64`) and both accessors
/// convert.
///
/// # Examples
///
/// ```
/// use pdatagen_codegen::PrimitiveField;
///
/// let field = PrimitiveField::new("StartTimestamp", "pcommon.Timestamp")
///     .orig_field("StartTimeUnixNano")
///     .raw_type("uint64")
///     .values("0", "1234567890");
///
/// assert_eq!(field.name(), "StartTimestamp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveField {
    name: String,
    orig_field: String,
    return_type: String,
    raw_type: Option<String>,
    default_value: String,
    test_value: String,
}

impl PrimitiveField {
    /// Creates a field whose wire name equals its public name.
    ///
    /// Default and test literals start as the Go zero value and a fixed
    /// non-zero literal for the type; override them with [`Self::values`].
    #[must_use]
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        let name = name.into();
        let return_type = return_type.into();
        let (default_value, test_value) = if return_type == "string" {
            ("\"\"", "\"test_value\"")
        } else if return_type == "bool" {
            ("false", "true")
        } else {
            ("0", "1")
        };

        Self {
            orig_field: name.clone(),
            name,
            return_type,
            raw_type: None,
            default_value: default_value.to_string(),
            test_value: test_value.to_string(),
        }
    }

    /// Sets the field name on the wire struct.
    #[must_use]
    pub fn orig_field(mut self, orig_field: impl Into<String>) -> Self {
        self.orig_field = orig_field.into();
        self
    }

    /// Sets the wire type the public type converts from.
    #[must_use]
    pub fn raw_type(mut self, raw_type: impl Into<String>) -> Self {
        self.raw_type = Some(raw_type.into());
        self
    }

    /// Sets the untyped Go literals for the zero value and the test value.
    #[must_use]
    pub fn values(mut self, default_value: impl Into<String>, test_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self.test_value = test_value.into();
        self
    }

    /// Returns the public field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A field holding another generated struct (a message or a slice).
///
/// # Examples
///
/// ```
/// use pdatagen_codegen::{NestedField, TypeRef};
///
/// let field = NestedField::new("Resource", TypeRef::new("pcommon", "Resource"));
/// assert_eq!(field.target().name().as_str(), "Resource");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedField {
    name: String,
    orig_field: String,
    target: TypeRef,
}

impl NestedField {
    /// Creates a field whose wire name equals its public name.
    #[must_use]
    pub fn new(name: impl Into<String>, target: TypeRef) -> Self {
        let name = name.into();
        Self {
            orig_field: name.clone(),
            name,
            target,
        }
    }

    /// Sets the field name on the wire struct.
    #[must_use]
    pub fn orig_field(mut self, orig_field: impl Into<String>) -> Self {
        self.orig_field = orig_field.into();
        self
    }

    /// Returns the public field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the referenced struct.
    #[must_use]
    pub const fn target(&self) -> &TypeRef {
        &self.target
    }
}

/// One field of a message struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Scalar value with getter and setter.
    Primitive(PrimitiveField),
    /// Nested message struct.
    Message(NestedField),
    /// Nested slice struct.
    Slice(NestedField),
}

impl Field {
    /// Shorthand for a nested message field.
    #[must_use]
    pub fn message(name: impl Into<String>, target: TypeRef) -> Self {
        Self::Message(NestedField::new(name, target))
    }

    /// Shorthand for a nested slice field.
    #[must_use]
    pub fn slice(name: impl Into<String>, target: TypeRef) -> Self {
        Self::Slice(NestedField::new(name, target))
    }

    /// Returns the public field name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(field) => field.name(),
            Self::Message(field) | Self::Slice(field) => field.name(),
        }
    }

    /// Returns the referenced struct for nested fields.
    #[must_use]
    pub const fn target(&self) -> Option<&TypeRef> {
        match self {
            Self::Primitive(_) => None,
            Self::Message(field) | Self::Slice(field) => Some(&field.target),
        }
    }

    /// Builds the template context for this field of `struct_name`.
    pub(crate) fn context(&self, struct_name: &StructName, scope: &GenerationScope<'_>) -> FieldContext {
        let oa = scope.orig_access();
        match self {
            Self::Primitive(field) => {
                let wire = format!("ms.{oa}.{}", field.orig_field);
                let (getter_expr, setter_stmt) = match &field.raw_type {
                    Some(raw) => (
                        format!("{}({wire})", field.return_type),
                        format!("{wire} = {raw}(v)"),
                    ),
                    None => (wire.clone(), format!("{wire} = v")),
                };

                FieldContext {
                    struct_name: struct_name.to_string(),
                    name: field.name.clone(),
                    lower_name: field.name.to_lowercase(),
                    primitive: true,
                    return_type: field.return_type.clone(),
                    getter_expr,
                    setter_stmt,
                    default_expr: format!("{}({})", field.return_type, field.default_value),
                    test_expr: format!("{}({})", field.return_type, field.test_value),
                    fill_stmt: String::new(),
                    generate_expr: String::new(),
                    copy_line: format!("dest.Set{0}(ms.{0}())", field.name),
                }
            }
            Self::Message(field) | Self::Slice(field) => {
                let target = Target::resolve(&field.target, scope);
                let accessor = format!("ms.{}()", field.name);

                FieldContext {
                    struct_name: struct_name.to_string(),
                    name: field.name.clone(),
                    lower_name: field.name.to_lowercase(),
                    primitive: false,
                    return_type: target.public_type(),
                    getter_expr: target.wrap(&format!("&ms.{oa}.{}", field.orig_field)),
                    setter_stmt: String::new(),
                    default_expr: String::new(),
                    test_expr: String::new(),
                    fill_stmt: target.fill(&accessor),
                    generate_expr: target.generate(),
                    copy_line: format!("{accessor}.CopyTo(dest.{}())", field.name),
                }
            }
        }
    }

    /// Returns the statement filling this field inside a fill-test helper.
    ///
    /// The helper's receiver is always named `tv` and always holds `orig`
    /// directly, both in ordinary packages and in the internal package.
    pub(crate) fn helper_fill_line(&self, scope: &GenerationScope<'_>) -> String {
        match self {
            Self::Primitive(field) => format!("tv.orig.{} = {}", field.orig_field, field.test_value),
            Self::Message(field) | Self::Slice(field) => {
                Target::resolve(&field.target, scope).helper_fill(&format!("&tv.orig.{}", field.orig_field))
            }
        }
    }
}

impl From<PrimitiveField> for Field {
    fn from(field: PrimitiveField) -> Self {
        Self::Primitive(field)
    }
}

/// Where a referenced struct lives relative to the package being generated.
enum Target<'a> {
    /// Same package, ordinary owner.
    Local(&'a str),
    /// Same package, and that package is the shared one.
    SharedLocal(&'a str),
    /// The shared package, seen from another package.
    Foreign { package: &'a str, name: &'a str },
}

impl<'a> Target<'a> {
    fn resolve(target: &'a TypeRef, scope: &GenerationScope<'_>) -> Self {
        let name = target.name.as_str();
        if target.package != *scope.package() {
            Self::Foreign {
                package: target.package.as_str(),
                name,
            }
        } else if scope.is_shared() {
            Self::SharedLocal(name)
        } else {
            Self::Local(name)
        }
    }

    fn public_type(&self) -> String {
        match self {
            Self::Local(name) | Self::SharedLocal(name) => (*name).to_string(),
            Self::Foreign { package, name } => format!("{package}.{name}"),
        }
    }

    /// Wraps a pointer to the wire value in the public type.
    fn wrap(&self, arg: &str) -> String {
        match self {
            Self::Local(name) | Self::SharedLocal(name) => format!("new{name}({arg})"),
            Self::Foreign { package, name } => format!("{package}.{name}(internal.New{name}({arg}))"),
        }
    }

    /// Expression producing a filled test value of the public type.
    fn generate(&self) -> String {
        match self {
            Self::Local(name) => format!("generateTest{name}()"),
            Self::SharedLocal(name) => format!("{name}(internal.GenerateTest{name}())"),
            Self::Foreign { package, name } => {
                format!("{package}.{name}(internal.GenerateTest{name}())")
            }
        }
    }

    /// Statement filling an existing public value.
    fn fill(&self, value: &str) -> String {
        match self {
            Self::Local(name) => format!("fillTest{name}({value})"),
            Self::SharedLocal(name) | Self::Foreign { name, .. } => {
                format!("internal.FillTest{name}(internal.{name}({value}))")
            }
        }
    }

    /// Statement filling a wire value from inside a fill-test helper.
    fn helper_fill(&self, arg: &str) -> String {
        match self {
            Self::Local(name) => format!("fillTest{name}(new{name}({arg}))"),
            Self::SharedLocal(name) => format!("FillTest{name}(New{name}({arg}))"),
            Self::Foreign { name, .. } => format!("internal.FillTest{name}(internal.New{name}({arg}))"),
        }
    }
}
