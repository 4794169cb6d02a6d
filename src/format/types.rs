//! Canonical type rendering.
//!
//! One total function per type shape. The result depends only on the type's structure and the current package
//! path, so identical types always render identically within one run.
//!
//! ## Examples of rendered types
//!
//! | Type                              | Rendered                                   |
//! |-----------------------------------|--------------------------------------------|
//! | named type in current package     | `Client`                                   |
//! | named type in `net/http`          | `net/http.Client`                          |
//! | receive-only channel of `int`     | `<- chan int`                              |
//! | `func(string, ...int) (T, error)` | `func(string, ...int) (T, error)`          |
//! | inline struct                     | `struct{A int; B *T "json:\"b\""}`         |
//! | inline interface                  | `interface{Read(p []uint8) (n int, err error)}` |

use apisurface_core::lang::chan_dirs;
use apisurface_core::quote;
use apisurface_core::lang::conventions::VARIADIC_MARKER;
use apisurface_model::{Field, Method, NamedType, Param, ResolvedType, Signature};

use super::errors::RenderError;
use crate::frontend::visibility::PackageScope;

/// Whether signatures show parameter names.
///
/// Top-level lines never do. Inline struct and interface descriptions are structural and keep whatever names the
/// loader supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Canonical,
    Structural,
}

/// Renders resolved types relative to one package.
#[derive(Debug, Clone, Copy)]
pub struct TypeRenderer<'a> {
    scope: PackageScope<'a>,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(scope: PackageScope<'a>) -> Self {
        Self { scope }
    }

    /// Render a type in its canonical inline form.
    pub fn render_type(&self, ty: &ResolvedType) -> Result<String, RenderError> {
        self.render(ty, Mode::Canonical)
    }

    /// Render the parameter and result lists of a signature, e.g. `(string, int) (bool, error)`.
    pub fn render_signature(&self, sig: &Signature) -> Result<String, RenderError> {
        self.signature(sig, Mode::Canonical)
    }

    /// Render a named type: bare inside its own package or when predeclared, path-qualified otherwise.
    pub fn render_named(&self, named: &NamedType) -> String {
        match named.package.as_deref() {
            Some(pkg) if !self.scope.is_local(Some(pkg)) => {
                format!("{}.{}", self.scope.normalize(pkg), named.name)
            }
            _ => named.name.clone(),
        }
    }

    fn render(&self, ty: &ResolvedType, mode: Mode) -> Result<String, RenderError> {
        let rendered = match ty {
            ResolvedType::Basic { name } => name.clone(),
            ResolvedType::Named(named) => self.render_named(named),
            ResolvedType::Pointer { elem } => format!("*{}", self.render(elem, mode)?),
            ResolvedType::Slice { elem } => format!("[]{}", self.render(elem, mode)?),
            ResolvedType::Array { len, elem } => format!("[{}]{}", len, self.render(elem, mode)?),
            ResolvedType::Map { key, elem } => {
                format!("map[{}]{}", self.render(key, mode)?, self.render(elem, mode)?)
            }
            ResolvedType::Chan { dir, elem } => {
                format!("{}{}", chan_dirs::render_prefix((*dir).into()), self.render(elem, mode)?)
            }
            // Not a top-level declaration, so there is never a receiver here.
            ResolvedType::Signature(sig) => format!("func{}", self.signature(sig, mode)?),
            ResolvedType::Interface { methods } => self.interface_literal(methods)?,
            ResolvedType::Struct { fields } => self.struct_literal(fields)?,
            ResolvedType::Tuple { .. } => {
                return Err(RenderError::UnsupportedType { shape: ty.shape_name() });
            }
        };
        Ok(rendered)
    }

    fn signature(&self, sig: &Signature, mode: Mode) -> Result<String, RenderError> {
        let mut out = String::from("(");
        out.push_str(&self.params(&sig.params, sig.variadic, mode)?);
        out.push(')');

        let named_results = mode == Mode::Structural && sig.results.iter().any(|r| has_name(r));
        match sig.results.as_slice() {
            [] => {}
            // A single result is not parenthesized.
            [single] if !named_results => {
                out.push(' ');
                out.push_str(&self.render(&single.ty, mode)?);
            }
            results => {
                out.push_str(" (");
                out.push_str(&self.params(results, false, mode)?);
                out.push(')');
            }
        }
        Ok(out)
    }

    fn params(&self, params: &[Param], variadic: bool, mode: Mode) -> Result<String, RenderError> {
        if variadic && params.is_empty() {
            return Err(RenderError::InvalidVariadic { found: "no parameters" });
        }

        let last = params.len().saturating_sub(1);
        let mut parts = Vec::with_capacity(params.len());
        for (i, param) in params.iter().enumerate() {
            let ty = if variadic && i == last {
                // `...T` is carried as `[]T`; render the element.
                match &param.ty {
                    ResolvedType::Slice { elem } => format!("{}{}", VARIADIC_MARKER, self.render(elem, mode)?),
                    other => return Err(RenderError::InvalidVariadic { found: other.shape_name() }),
                }
            } else {
                self.render(&param.ty, mode)?
            };
            match (&param.name, mode) {
                (Some(name), Mode::Structural) if !name.is_empty() => parts.push(format!("{name} {ty}")),
                _ => parts.push(ty),
            }
        }
        Ok(parts.join(", "))
    }

    fn struct_literal(&self, fields: &[Field]) -> Result<String, RenderError> {
        let mut parts = Vec::with_capacity(fields.len());
        for field in fields {
            let ty = self.render(&field.ty, Mode::Structural)?;
            let mut part = if field.embedded { ty } else { format!("{} {}", field.name, ty) };
            // Untagged and empty-tagged fields look the same.
            if let Some(tag) = field.tag.as_deref().filter(|t| !t.is_empty()) {
                part.push(' ');
                part.push_str(&quote(tag));
            }
            parts.push(part);
        }
        Ok(format!("struct{{{}}}", parts.join("; ")))
    }

    fn interface_literal(&self, methods: &[Method]) -> Result<String, RenderError> {
        let mut sorted: Vec<&Method> = methods.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let mut parts = Vec::with_capacity(sorted.len());
        for method in sorted {
            parts.push(format!("{}{}", method.name, self.signature(&method.signature, Mode::Structural)?));
        }
        Ok(format!("interface{{{}}}", parts.join("; ")))
    }
}

fn has_name(param: &Param) -> bool {
    param.name.as_deref().is_some_and(|n| !n.is_empty())
}
