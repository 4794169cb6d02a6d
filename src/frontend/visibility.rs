//! Visibility and scope rules for the public surface.
//!
//! Decides which declarations, and which members of a declaration, are part of a package's public API.
//! Pure predicates over the resolved model: nothing here renders or records output.
//!
//! ## Rules
//!
//! - A top-level declaration counts only if it is exported **and** declared at package scope.
//! - Struct fields and interface methods count only if exported.
//! - A method is hidden when its receiver (through any pointer indirection) is an interface type, whose methods
//!   already appear via the interface declaration, or an unexported named type.

use apisurface_core::devendor;
use apisurface_model::{DeclScope, Declaration, Field, Method, NamedType, ResolvedPackage, ResolvedType};

/// The package currently being rendered, with its normalized path.
///
/// Everything that compares or prints package paths goes through this type so that vendored and non-vendored
/// copies of a package agree.
#[derive(Debug, Clone, Copy)]
pub struct PackageScope<'a> {
    package: &'a ResolvedPackage,
    vendor_segment: &'a str,
}

impl<'a> PackageScope<'a> {
    pub fn new(package: &'a ResolvedPackage, vendor_segment: &'a str) -> Self {
        Self {
            package,
            vendor_segment,
        }
    }

    pub fn package(&self) -> &'a ResolvedPackage {
        self.package
    }

    /// Normalized path of the current package.
    pub fn path(&self) -> &'a str {
        self.package.devendored_path(self.vendor_segment)
    }

    /// Normalize a foreign package path the same way as [`PackageScope::path`].
    pub fn normalize<'p>(&self, path: &'p str) -> &'p str {
        devendor(path, self.vendor_segment)
    }

    /// Whether `package` (a named type's owner) is the current package.
    pub fn is_local(&self, package: Option<&str>) -> bool {
        package.is_some_and(|p| self.normalize(p) == self.path())
    }

    /// Structure behind a named type: the loader's expansion, else the local type declaration.
    pub fn underlying_of(&self, named: &'a NamedType) -> Option<&'a ResolvedType> {
        named.underlying.as_deref().or_else(|| {
            if self.is_local(named.package.as_deref()) {
                self.package.lookup_type(&named.name)
            } else {
                None
            }
        })
    }

    /// Structural form of `ty`: named types are expanded, everything else is already structural.
    ///
    /// Returns `None` for a named type whose structure nobody supplied.
    pub fn resolve_underlying(&self, ty: &'a ResolvedType) -> Option<&'a ResolvedType> {
        match ty {
            ResolvedType::Named(named) => self.underlying_of(named),
            other => Some(other),
        }
    }
}

/// Exported and declared directly at package scope.
pub fn is_surface_declaration(decl: &Declaration) -> bool {
    decl.is_exported() && decl.scope == DeclScope::Package
}

/// Declarations of `package` that pass the top-level filter, in input order.
pub fn surface_declarations(package: &ResolvedPackage) -> impl Iterator<Item = &Declaration> {
    package.declarations.iter().filter(|d| is_surface_declaration(d))
}

/// Whether a method with this receiver type stays out of the surface.
pub fn is_hidden_receiver<'a>(recv: &'a ResolvedType, scope: &PackageScope<'a>) -> bool {
    match recv {
        ResolvedType::Named(named) => {
            if matches!(scope.underlying_of(named), Some(ResolvedType::Interface { .. })) {
                return true;
            }
            !named.is_exported()
        }
        ResolvedType::Pointer { elem } => is_hidden_receiver(elem, scope),
        _ => false,
    }
}

pub fn exported_fields(fields: &[Field]) -> impl Iterator<Item = &Field> {
    fields.iter().filter(|f| f.is_exported())
}

pub fn exported_methods(methods: &[Method]) -> impl Iterator<Item = &Method> {
    methods.iter().filter(|m| m.is_exported())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apisurface_model::{ConstKind, Signature};

    fn package() -> ResolvedPackage {
        ResolvedPackage::new("example.com/app/vendor/example.com/p", "p")
            .with_declaration(Declaration::type_decl("T", ResolvedType::Struct { fields: vec![] }))
            .with_declaration(Declaration::type_decl("t", ResolvedType::Struct { fields: vec![] }))
            .with_declaration(Declaration::type_decl("I", ResolvedType::empty_interface()))
    }

    fn local(name: &str) -> ResolvedType {
        ResolvedType::named(Some("example.com/p"), name)
    }

    #[test]
    fn test_scope_path_is_devendored() {
        let pkg = package();
        let scope = PackageScope::new(&pkg, "/vendor/");
        assert_eq!(scope.path(), "example.com/p");
        assert!(scope.is_local(Some("example.com/p")));
        assert!(scope.is_local(Some("other/vendor/example.com/p")));
        assert!(!scope.is_local(Some("example.com/q")));
        assert!(!scope.is_local(None));
    }

    #[test]
    fn test_surface_declaration_requires_export_and_package_scope() {
        assert!(is_surface_declaration(&Declaration::constant("C", ConstKind::Int)));
        assert!(!is_surface_declaration(&Declaration::constant("c", ConstKind::Int)));
        assert!(!is_surface_declaration(
            &Declaration::constant("C", ConstKind::Int).in_scope(DeclScope::Local)
        ));
    }

    #[test]
    fn test_hidden_receiver_exported_struct() {
        let pkg = package();
        let scope = PackageScope::new(&pkg, "/vendor/");
        assert!(!is_hidden_receiver(&local("T"), &scope));
        assert!(!is_hidden_receiver(&ResolvedType::pointer(local("T")), &scope));
    }

    #[test]
    fn test_hidden_receiver_unexported_through_pointer() {
        let pkg = package();
        let scope = PackageScope::new(&pkg, "/vendor/");
        assert!(is_hidden_receiver(&local("t"), &scope));
        assert!(is_hidden_receiver(&ResolvedType::pointer(local("t")), &scope));
    }

    #[test]
    fn test_hidden_receiver_interface_via_lookup() {
        let pkg = package();
        let scope = PackageScope::new(&pkg, "/vendor/");
        assert!(is_hidden_receiver(&local("I"), &scope));
    }

    #[test]
    fn test_hidden_receiver_interface_via_loader_underlying() {
        let pkg = ResolvedPackage::new("p", "p");
        let scope = PackageScope::new(&pkg, "/vendor/");
        let recv = ResolvedType::Named(NamedType::new(Some("p"), "Doer").with_underlying(ResolvedType::Interface {
            methods: vec![Method::new("Do", Signature::default())],
        }));
        assert!(is_hidden_receiver(&recv, &scope));
    }

    #[test]
    fn test_non_named_receiver_is_visible() {
        let pkg = package();
        let scope = PackageScope::new(&pkg, "/vendor/");
        assert!(!is_hidden_receiver(&ResolvedType::basic("int"), &scope));
    }

    #[test]
    fn test_exported_members() {
        let fields = vec![
            Field::new("A", ResolvedType::basic("int")),
            Field::new("b", ResolvedType::basic("int")),
        ];
        let names: Vec<&str> = exported_fields(&fields).map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);

        let methods = vec![
            Method::new("close", Signature::default()),
            Method::new("Close", Signature::default()),
        ];
        let names: Vec<&str> = exported_methods(&methods).map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Close"]);
    }

    #[test]
    fn test_resolve_underlying_foreign_unknown() {
        let pkg = package();
        let scope = PackageScope::new(&pkg, "/vendor/");
        let foreign = ResolvedType::named(Some("net/http"), "Client");
        assert_eq!(scope.resolve_underlying(&foreign), None);
        let basic = ResolvedType::basic("int");
        assert_eq!(scope.resolve_underlying(&basic), Some(&basic));
    }
}
