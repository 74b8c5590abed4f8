//! Template contexts for the built-in Go templates.
//!
//! Every Go expression that depends on the owning package is computed in
//! Rust; the templates only place strings.

use serde::Serialize;

/// Context for the `slice/*` templates.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SliceContext {
    /// Slice type name
    pub name: String,
    /// Element struct name
    pub element: String,
    /// Wire type of one element
    pub elem_orig: String,
    /// `"*"` for pointer slices
    pub star: &'static str,
    /// Prefix turning a new wire element into a slice entry
    pub elem_init: &'static str,
    /// Prefix turning a slice entry into an element pointer
    pub elem_ref: &'static str,
    /// Pointer-slice variant
    pub pointer: bool,
    /// Owner is the shared package
    pub shared: bool,
    /// Receiver access to the wire slice (`orig` or `getOrig()`)
    pub oa: &'static str,
    /// Expression producing a filled slice
    pub generate_self: String,
    /// Expression producing a filled element
    pub generate_element: String,
    /// Statement filling the element `el`
    pub fill_element: String,
}

/// Context for the `message/struct` and `message/tests` templates.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MessageContext {
    pub name: String,
    pub description: String,
    pub orig_name: String,
    pub pointer: bool,
    pub shared: bool,
    pub oa: &'static str,
    pub generate_self: String,
    pub fields: Vec<FieldContext>,
}

/// One field inside a [`MessageContext`].
///
/// Keys unused by a field kind are empty strings so strict mode never
/// trips over a missing key.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct FieldContext {
    pub struct_name: String,
    pub name: String,
    pub lower_name: String,
    pub primitive: bool,
    pub return_type: String,
    pub getter_expr: String,
    pub setter_stmt: String,
    pub default_expr: String,
    pub test_expr: String,
    pub fill_stmt: String,
    pub generate_expr: String,
    pub copy_line: String,
}

/// Context for the `*/test_helpers` templates.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct HelperContext {
    pub name: String,
    pub generate_fn: String,
    pub fill_fn: String,
    pub new_fn: String,
    /// Message helpers: wire struct type
    pub orig_name: String,
    /// Message helpers: one statement per field
    pub fill_lines: Vec<String>,
    /// Slice helpers
    pub star: &'static str,
    pub elem_orig: String,
    pub elem_init: &'static str,
    pub elem_ref: &'static str,
    pub element_fill_fn: String,
    pub element_new_fn: String,
}

/// Context for the `internal/wrapper` template.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct WrapperContext {
    pub name: String,
    pub orig_type: String,
}
