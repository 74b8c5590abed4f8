//! Template engine for Go source generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in pdata body
//! templates pre-registered. Output is Go source, so HTML escaping is
//! disabled and strict mode rejects any context key a template expects
//! but does not receive.
//!
//! # Examples
//!
//! ```
//! use pdatagen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({"name": "Resource", "orig_type": "otlpresource.Resource"});
//! let body = engine.render("internal/wrapper", &context).unwrap();
//! assert!(body.contains("func GetOrigResource(ms Resource) *otlpresource.Resource"));
//! ```

use handlebars::Handlebars;
use pdatagen_core::{Error, Result};
use serde::Serialize;

/// Built-in templates, registered under their name.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "slice/struct",
        include_str!("../templates/slice/struct.go.hbs"),
    ),
    ("slice/tests", include_str!("../templates/slice/tests.go.hbs")),
    (
        "slice/test_helpers",
        include_str!("../templates/slice/test_helpers.go.hbs"),
    ),
    (
        "message/struct",
        include_str!("../templates/message/struct.go.hbs"),
    ),
    (
        "message/tests",
        include_str!("../templates/message/tests.go.hbs"),
    ),
    (
        "message/test_helpers",
        include_str!("../templates/message/test_helpers.go.hbs"),
    ),
    (
        "internal/wrapper",
        include_str!("../templates/internal/wrapper.go.hbs"),
    ),
];

/// Template engine for Go source generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with all built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if a built-in template fails to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_codegen::template_engine::TemplateEngine;
    ///
    /// let engine = TemplateEngine::new().unwrap();
    /// assert!(engine.has_template("slice/struct"));
    /// ```
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        // Go source, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        let mut engine = Self { handlebars };
        for (name, template) in BUILTIN_TEMPLATES {
            engine.register_template_string(name, template)?;
        }

        Ok(engine)
    }

    /// Returns `true` if a template is registered under `name`.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - The context lacks a key the template uses
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: e.to_string(),
            })
    }

    /// Registers a custom template, replacing any template of the same name.
    ///
    /// # Errors
    ///
    /// Returns `Error::TemplateError` if the template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdatagen_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine.register_template_string("custom", "// {{name}}").unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                template: name.to_string(),
                message: format!("registration failed: {e}"),
            })
    }
}
