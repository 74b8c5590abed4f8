//! Struct descriptors: one generation recipe per Go type.
//!
//! A descriptor is one of four shapes. Each shape supplies the same four
//! fragments (implementation, tests, internal wrapper, test-value
//! helpers); only the fragment bodies differ, never how the files around
//! them are assembled.

use super::context::{HelperContext, MessageContext, SliceContext, WrapperContext};
use super::field::Field;
use super::scope::GenerationScope;
use crate::template_engine::TemplateEngine;
use pdatagen_core::{Result, StructName};
use serde::Serialize;
use std::fmt;

/// Structural shape of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StructVariant {
    /// Slice of pointers to wire messages (`[]*T`).
    SliceOfPtrs,
    /// Slice of wire messages held by value (`[]T`).
    SliceOfValues,
    /// Struct wrapping a message embedded by value in its parent.
    MessageValue,
    /// Struct wrapping a message held by pointer.
    MessagePtr,
}

impl StructVariant {
    /// Returns `true` for the two slice shapes.
    #[must_use]
    pub const fn is_slice(self) -> bool {
        matches!(self, Self::SliceOfPtrs | Self::SliceOfValues)
    }
}

impl fmt::Display for StructVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SliceOfPtrs => "sliceOfPtrs",
            Self::SliceOfValues => "sliceOfValues",
            Self::MessageValue => "messageValueStruct",
            Self::MessagePtr => "messagePtrStruct",
        };
        f.write_str(name)
    }
}

/// A message struct: a Go type wrapping one wire message and its fields.
///
/// # Examples
///
/// ```
/// use pdatagen_codegen::{MessageStruct, PrimitiveField};
///
/// let status = MessageStruct::new("Status", "otlptrace.Status")
///     .description("Status is an optional final status for this span.")
///     .field(PrimitiveField::new("Message", "string"));
///
/// assert_eq!(status.name().as_str(), "Status");
/// assert_eq!(status.fields().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStruct {
    name: StructName,
    description: String,
    orig_name: String,
    fields: Vec<Field>,
}

impl MessageStruct {
    /// Creates a message struct over the wire type `orig_name`.
    #[must_use]
    pub fn new(name: impl Into<StructName>, orig_name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: format!("{name} is a pdata message."),
            name,
            orig_name: orig_name.into(),
            fields: Vec::new(),
        }
    }

    /// Sets the Go doc comment line.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a field. Declaration order is emission order.
    #[must_use]
    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Returns the struct name.
    #[must_use]
    pub const fn name(&self) -> &StructName {
        &self.name
    }

    /// Returns the wire type.
    #[must_use]
    pub fn orig_name(&self) -> &str {
        &self.orig_name
    }

    /// Returns the declared fields.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn context(&self, pointer: bool, scope: &GenerationScope<'_>) -> MessageContext {
        MessageContext {
            name: self.name.to_string(),
            description: self.description.clone(),
            orig_name: self.orig_name.clone(),
            pointer,
            shared: scope.is_shared(),
            oa: scope.orig_access(),
            generate_self: generate_expr(&self.name, scope),
            fields: self
                .fields
                .iter()
                .map(|field| field.context(&self.name, scope))
                .collect(),
        }
    }

    fn helper_context(&self, scope: &GenerationScope<'_>) -> HelperContext {
        let names = HelperNames::new(&self.name, scope);
        HelperContext {
            name: self.name.to_string(),
            generate_fn: names.generate_fn,
            fill_fn: names.fill_fn,
            new_fn: names.new_fn,
            orig_name: self.orig_name.clone(),
            fill_lines: self
                .fields
                .iter()
                .map(|field| field.helper_fill_line(scope))
                .collect(),
            star: "",
            elem_orig: String::new(),
            elem_init: "",
            elem_ref: "",
            element_fill_fn: String::new(),
            element_new_fn: String::new(),
        }
    }
}

/// A slice struct: a Go type wrapping a slice of wire messages.
///
/// The element is a message struct declared in the same package.
///
/// # Examples
///
/// ```
/// use pdatagen_codegen::{MessageStruct, SliceStruct};
///
/// let span = MessageStruct::new("Span", "otlptrace.Span");
/// let spans = SliceStruct::new("SpanSlice", &span);
///
/// assert_eq!(spans.element_name().as_str(), "Span");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceStruct {
    name: StructName,
    element_name: StructName,
    element_orig: String,
}

impl SliceStruct {
    /// Creates a slice of `element`.
    #[must_use]
    pub fn new(name: impl Into<StructName>, element: &MessageStruct) -> Self {
        Self::with_element(name, element.name.clone(), element.orig_name.clone())
    }

    /// Creates a slice from an element name and its wire type.
    #[must_use]
    pub fn with_element(
        name: impl Into<StructName>,
        element_name: impl Into<StructName>,
        element_orig: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            element_name: element_name.into(),
            element_orig: element_orig.into(),
        }
    }

    /// Returns the slice name.
    #[must_use]
    pub const fn name(&self) -> &StructName {
        &self.name
    }

    /// Returns the element struct name.
    #[must_use]
    pub const fn element_name(&self) -> &StructName {
        &self.element_name
    }

    fn context(&self, pointer: bool, scope: &GenerationScope<'_>) -> SliceContext {
        let shape = SliceShape::new(pointer);
        let element = self.element_name.as_str();
        let fill_element = if scope.is_shared() {
            format!("internal.FillTest{element}(internal.{element}(el))")
        } else {
            format!("fillTest{element}(el)")
        };

        SliceContext {
            name: self.name.to_string(),
            element: element.to_string(),
            elem_orig: self.element_orig.clone(),
            star: shape.star,
            elem_init: shape.elem_init,
            elem_ref: shape.elem_ref,
            pointer,
            shared: scope.is_shared(),
            oa: scope.orig_access(),
            generate_self: generate_expr(&self.name, scope),
            generate_element: generate_expr(&self.element_name, scope),
            fill_element,
        }
    }

    fn helper_context(&self, pointer: bool, scope: &GenerationScope<'_>) -> HelperContext {
        let shape = SliceShape::new(pointer);
        let names = HelperNames::new(&self.name, scope);
        let element = HelperNames::new(&self.element_name, scope);
        HelperContext {
            name: self.name.to_string(),
            generate_fn: names.generate_fn,
            fill_fn: names.fill_fn,
            new_fn: names.new_fn,
            orig_name: String::new(),
            fill_lines: Vec::new(),
            star: shape.star,
            elem_orig: self.element_orig.clone(),
            elem_init: shape.elem_init,
            elem_ref: shape.elem_ref,
            element_fill_fn: element.fill_fn,
            element_new_fn: element.new_fn,
        }
    }

    fn orig_type(&self, pointer: bool) -> String {
        format!("[]{}{}", SliceShape::new(pointer).star, self.element_orig)
    }
}

/// Go spelling differences between pointer and value slices.
struct SliceShape {
    star: &'static str,
    elem_init: &'static str,
    elem_ref: &'static str,
}

impl SliceShape {
    const fn new(pointer: bool) -> Self {
        if pointer {
            Self {
                star: "*",
                elem_init: "&",
                elem_ref: "",
            }
        } else {
            Self {
                star: "",
                elem_init: "",
                elem_ref: "&",
            }
        }
    }
}

/// Names of the test-value helpers and constructor for one type.
///
/// Exported when the helpers are emitted into the internal package.
struct HelperNames {
    generate_fn: String,
    fill_fn: String,
    new_fn: String,
}

impl HelperNames {
    fn new(name: &StructName, scope: &GenerationScope<'_>) -> Self {
        if scope.is_shared() {
            Self {
                generate_fn: format!("GenerateTest{name}"),
                fill_fn: format!("FillTest{name}"),
                new_fn: format!("New{name}"),
            }
        } else {
            Self {
                generate_fn: format!("generateTest{name}"),
                fill_fn: format!("fillTest{name}"),
                new_fn: format!("new{name}"),
            }
        }
    }
}

/// Expression producing a filled test value of a public type declared in
/// the scope's own package.
fn generate_expr(name: &StructName, scope: &GenerationScope<'_>) -> String {
    if scope.is_shared() {
        format!("{name}(internal.GenerateTest{name}())")
    } else {
        format!("generateTest{name}()")
    }
}

/// A generation recipe for one Go type, tagged with its shape.
///
/// # Examples
///
/// ```
/// use pdatagen_codegen::{GenerationScope, MessageStruct, StructDescriptor};
/// use pdatagen_codegen::template_engine::TemplateEngine;
/// use pdatagen_core::PackageName;
///
/// let engine = TemplateEngine::new()?;
/// let package = PackageName::new("ptrace");
/// let scope = GenerationScope::new(&package);
/// let link = StructDescriptor::MessagePtr(MessageStruct::new("SpanLink", "otlptrace.Span_Link"));
///
/// let mut buf = String::new();
/// link.generate_struct(&engine, &scope, &mut buf)?;
/// assert!(buf.contains("type SpanLink struct"));
/// # Ok::<(), pdatagen_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructDescriptor {
    /// Slice of pointers to wire messages.
    SliceOfPtrs(SliceStruct),
    /// Slice of wire messages held by value.
    SliceOfValues(SliceStruct),
    /// Message embedded by value.
    MessageValue(MessageStruct),
    /// Message held by pointer.
    MessagePtr(MessageStruct),
}

impl StructDescriptor {
    /// Returns the struct name, used for output file names and Go symbols.
    #[must_use]
    pub const fn name(&self) -> &StructName {
        match self {
            Self::SliceOfPtrs(s) | Self::SliceOfValues(s) => &s.name,
            Self::MessageValue(m) | Self::MessagePtr(m) => &m.name,
        }
    }

    /// Returns the shape tag.
    #[must_use]
    pub const fn variant(&self) -> StructVariant {
        match self {
            Self::SliceOfPtrs(_) => StructVariant::SliceOfPtrs,
            Self::SliceOfValues(_) => StructVariant::SliceOfValues,
            Self::MessageValue(_) => StructVariant::MessageValue,
            Self::MessagePtr(_) => StructVariant::MessagePtr,
        }
    }

    /// Returns the message fields; empty for slices.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        match self {
            Self::SliceOfPtrs(_) | Self::SliceOfValues(_) => &[],
            Self::MessageValue(m) | Self::MessagePtr(m) => m.fields(),
        }
    }

    /// Returns the element name for slices.
    #[must_use]
    pub const fn element_name(&self) -> Option<&StructName> {
        match self {
            Self::SliceOfPtrs(s) | Self::SliceOfValues(s) => Some(&s.element_name),
            Self::MessageValue(_) | Self::MessagePtr(_) => None,
        }
    }

    const fn is_pointer(&self) -> bool {
        matches!(self, Self::SliceOfPtrs(_) | Self::MessagePtr(_))
    }

    /// Appends the public type definition and its methods.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if a built-in template fails to render.
    pub fn generate_struct(
        &self,
        engine: &TemplateEngine<'_>,
        scope: &GenerationScope<'_>,
        buf: &mut String,
    ) -> Result<()> {
        let pointer = self.is_pointer();
        let rendered = match self {
            Self::SliceOfPtrs(s) | Self::SliceOfValues(s) => {
                engine.render("slice/struct", &s.context(pointer, scope))?
            }
            Self::MessageValue(m) | Self::MessagePtr(m) => {
                engine.render("message/struct", &m.context(pointer, scope))?
            }
        };
        buf.push_str(rendered.trim_end());
        Ok(())
    }

    /// Appends the unit tests for the public type.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if a built-in template fails to render.
    pub fn generate_tests(
        &self,
        engine: &TemplateEngine<'_>,
        scope: &GenerationScope<'_>,
        buf: &mut String,
    ) -> Result<()> {
        let pointer = self.is_pointer();
        let rendered = match self {
            Self::SliceOfPtrs(s) | Self::SliceOfValues(s) => {
                engine.render("slice/tests", &s.context(pointer, scope))?
            }
            Self::MessageValue(m) | Self::MessagePtr(m) => {
                engine.render("message/tests", &m.context(pointer, scope))?
            }
        };
        buf.push_str(rendered.trim_end());
        Ok(())
    }

    /// Appends the internal data-holding type with its `GetOrig`/`New`
    /// functions, preceded by a blank line separating it from the import
    /// block.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if a built-in template fails to render.
    pub fn generate_internal(&self, engine: &TemplateEngine<'_>, buf: &mut String) -> Result<()> {
        let orig_type = match self {
            Self::SliceOfPtrs(s) | Self::SliceOfValues(s) => s.orig_type(self.is_pointer()),
            Self::MessageValue(m) | Self::MessagePtr(m) => m.orig_name.clone(),
        };
        let context = WrapperContext {
            name: self.name().to_string(),
            orig_type,
        };

        buf.push_str("\n\n");
        buf.push_str(engine.render("internal/wrapper", &context)?.trim_end());
        Ok(())
    }

    /// Appends the `generateTest`/`fillTest` helpers (exported when the
    /// scope is the shared package).
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if a built-in template fails to render.
    pub fn generate_test_value_helpers(
        &self,
        engine: &TemplateEngine<'_>,
        scope: &GenerationScope<'_>,
        buf: &mut String,
    ) -> Result<()> {
        let rendered = match self {
            Self::SliceOfPtrs(s) | Self::SliceOfValues(s) => engine.render(
                "slice/test_helpers",
                &s.helper_context(self.is_pointer(), scope),
            )?,
            Self::MessageValue(m) | Self::MessagePtr(m) => {
                engine.render("message/test_helpers", &m.helper_context(scope))?
            }
        };
        buf.push_str(rendered.trim_end());
        Ok(())
    }
}
