//! Core surface extraction.
//!
//! Walks the declarations of one package and emits canonical lines for everything the visibility rules admit.

use apisurface_core::lang::const_kinds;
use apisurface_model::{DeclKind, Declaration, Field, Method, ResolvedPackage, ResolvedType, Signature};

use super::config::FormatConfig;
use super::errors::RenderError;
use super::types::TypeRenderer;
use super::writer::SurfaceWriter;
use crate::frontend::visibility::{self, PackageScope};

/// Formatter that turns one resolved package into its canonical surface document
pub struct Formatter<'a> {
    scope: PackageScope<'a>,
    types: TypeRenderer<'a>,
    writer: SurfaceWriter,
    line_prefix: &'a str,
}

impl<'a> Formatter<'a> {
    /// Create a formatter for `package`. Each formatter renders exactly one package once.
    pub fn new(package: &'a ResolvedPackage, config: &'a FormatConfig) -> Self {
        let scope = PackageScope::new(package, &config.vendor_segment);
        Self {
            scope,
            types: TypeRenderer::new(scope),
            writer: SurfaceWriter::new(),
            line_prefix: &config.line_prefix,
        }
    }

    /// Render the package. All-or-nothing: the first contract violation aborts with no output.
    #[tracing::instrument(skip_all, fields(package = %self.scope.path(), decl_count = self.scope.package().declarations.len()))]
    pub fn format(mut self) -> Result<String, RenderError> {
        for decl in visibility::surface_declarations(self.scope.package()) {
            self.format_declaration(decl)?;
        }
        tracing::debug!(lines = self.writer.len(), "rendered package surface");
        Ok(self.writer.finish(self.line_prefix, self.scope.path()))
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn format_declaration(&mut self, decl: &'a Declaration) -> Result<(), RenderError> {
        let name = decl.name.as_str();
        match &decl.kind {
            DeclKind::Const { kind } => {
                self.writer
                    .line(format!("const {} {}", name, const_kinds::as_str((*kind).into())));
            }
            DeclKind::Var { field: true, .. } => {
                // Emitted through the owning struct's type declaration.
                tracing::trace!(decl = name, "skipping struct field recorded as variable");
            }
            DeclKind::Var { ty, field: false } => self.format_var(name, ty)?,
            DeclKind::Type { underlying } => match underlying {
                ResolvedType::Struct { fields } => self.format_struct(name, fields)?,
                ResolvedType::Interface { methods } => self.format_interface(name, methods)?,
                other => {
                    let rendered = self.types.render_type(other)?;
                    self.writer.line(format!("type {} {}", name, rendered));
                }
            },
            DeclKind::Func {
                signature,
                receiver: Some(recv),
            } => self.format_method(name, recv, signature)?,
            DeclKind::Func {
                signature,
                receiver: None,
            } => {
                let sig = self.types.render_signature(signature)?;
                self.writer.line(format!("func {}{}", name, sig));
            }
            DeclKind::Label | DeclKind::PackageName { .. } => {
                return Err(RenderError::UnsupportedDeclaration {
                    name: name.to_string(),
                    kind: decl.kind.kind_name(),
                });
            }
        }
        Ok(())
    }

    fn format_var(&mut self, name: &str, ty: &'a ResolvedType) -> Result<(), RenderError> {
        // Variables show their structure, not the name of their type.
        let underlying = self.scope.resolve_underlying(ty).ok_or_else(|| match ty {
            ResolvedType::Named(named) => RenderError::UnresolvedUnderlying {
                name: self.types.render_named(named),
            },
            other => RenderError::UnsupportedType {
                shape: other.shape_name(),
            },
        })?;
        let rendered = self.types.render_type(underlying)?;
        self.writer.line(format!("var {} {}", name, rendered));
        Ok(())
    }

    fn format_struct(&mut self, name: &str, fields: &[Field]) -> Result<(), RenderError> {
        self.writer.line(format!("type {} struct", name));
        for field in visibility::exported_fields(fields) {
            let rendered = self.types.render_type(&field.ty)?;
            self.writer
                .line(format!("type {} struct, {} {}", name, field.name, rendered));
        }
        Ok(())
    }

    fn format_interface(&mut self, name: &str, methods: &[Method]) -> Result<(), RenderError> {
        let mut method_names = Vec::new();
        for method in visibility::exported_methods(methods) {
            let sig = self.types.render_signature(&method.signature)?;
            self.writer
                .line(format!("type {} interface, {}{}", name, method.name, sig));
            method_names.push(method.name.as_str());
        }

        if method_names.is_empty() {
            self.writer.line(format!("type {} interface {{}}", name));
        } else {
            method_names.sort_unstable();
            self.writer
                .line(format!("type {} interface {{ {} }}", name, method_names.join(", ")));
        }
        Ok(())
    }

    fn format_method(&mut self, name: &str, recv: &'a ResolvedType, sig: &Signature) -> Result<(), RenderError> {
        if visibility::is_hidden_receiver(recv, &self.scope) {
            tracing::debug!(decl = name, "skipping method on interface or unexported receiver");
            return Ok(());
        }
        let recv = self.types.render_type(recv)?;
        let sig = self.types.render_signature(sig)?;
        self.writer.line(format!("method ({}) {}{}", recv, name, sig));
        Ok(())
    }
}
