//! The package a descriptor is rendered for.

use pdatagen_core::PackageName;

/// Owning package of the struct being rendered.
///
/// Descriptors are pure recipes; the scope supplies the one piece of
/// package state their output depends on. When the owning package is
/// shared, public types are declared over the internal wrapper and reach
/// their data through `getOrig()`, and test-value helpers are emitted with
/// exported names into the internal package.
///
/// # Examples
///
/// ```
/// use pdatagen_codegen::GenerationScope;
/// use pdatagen_core::PackageName;
///
/// let pcommon = PackageName::new("pcommon");
/// let scope = GenerationScope::new(&pcommon);
/// assert!(scope.is_shared());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GenerationScope<'a> {
    package: &'a PackageName,
    shared: bool,
}

impl<'a> GenerationScope<'a> {
    /// Creates a scope for `package`, deriving the shared flag from its name.
    #[must_use]
    pub fn new(package: &'a PackageName) -> Self {
        Self::with_policy(package, package.is_used_by_other_data_types())
    }

    /// Creates a scope with an explicit shared flag.
    #[must_use]
    pub const fn with_policy(package: &'a PackageName, shared: bool) -> Self {
        Self { package, shared }
    }

    /// Returns the owning package.
    #[must_use]
    pub const fn package(&self) -> &'a PackageName {
        self.package
    }

    /// Returns `true` if the owning package is consumed by other packages.
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        self.shared
    }

    /// Go expression reaching the wire value from a public receiver.
    pub(crate) const fn orig_access(&self) -> &'static str {
        if self.shared { "getOrig()" } else { "orig" }
    }
}
