//! Resolved package model.
//!
//! This is the hand-off between a type-checking front-end and the surface formatter. Everything here is already
//! resolved: named types know their defining package, constants know their value kind, and every declaration knows
//! whether it lives at package scope.
//!
//! The JSON shape mirrors the Rust types one-to-one (`serde` derives), with `"decl"` tagging declarations and
//! `"type"` tagging resolved types:
//!
//! ```json
//! {
//!   "path": "example.com/p",
//!   "name": "p",
//!   "declarations": [
//!     { "name": "C", "decl": "const", "kind": "string" },
//!     { "name": "B", "decl": "var", "type": { "type": "basic", "name": "int" } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use apisurface_core::devendor;
use apisurface_core::lang::chan_dirs::{self, ChanDirId};
use apisurface_core::lang::const_kinds::{self, ConstKindId};
use apisurface_core::lang::conventions;

// ============================================================================
// Program / package
// ============================================================================

/// One loader hand-off: every package the front-end resolved in a single load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub packages: Vec<ResolvedPackage>,
}

/// A fully type-checked package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPackage {
    /// Import path as loaded. May still contain a `/vendor/` segment.
    pub path: String,
    /// Package clause name (`main` for program entry points).
    #[serde(default)]
    pub name: String,
    /// Every declaration the front-end recorded, in no particular order.
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl ResolvedPackage {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn with_declaration(mut self, decl: Declaration) -> Self {
        self.declarations.push(decl);
        self
    }

    /// Import path with everything up to the last `vendor_segment` removed.
    pub fn devendored_path(&self, vendor_segment: &str) -> &str {
        devendor(&self.path, vendor_segment)
    }

    /// Whether this package is a program entry point (its package clause is `entry_name`).
    pub fn is_entry_point(&self, entry_name: &str) -> bool {
        self.name == entry_name
    }

    /// Underlying type of the package-scope type declaration called `name`.
    pub fn lookup_type(&self, name: &str) -> Option<&ResolvedType> {
        self.declarations.iter().find_map(|d| match &d.kind {
            DeclKind::Type { underlying } if d.name == name && d.scope == DeclScope::Package => Some(underlying),
            _ => None,
        })
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// Where a declaration was introduced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclScope {
    #[default]
    Package,
    /// Function body, block, label scope, or file scope (imports).
    Local,
}

/// A named declaration recorded by the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    #[serde(default)]
    pub scope: DeclScope,
    #[serde(flatten)]
    pub kind: DeclKind,
}

/// Declaration payload, tagged by `"decl"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decl", rename_all = "snake_case")]
pub enum DeclKind {
    Const {
        kind: ConstKind,
    },
    Var {
        #[serde(rename = "type")]
        ty: ResolvedType,
        /// Set when the front-end recorded a struct field as a variable.
        #[serde(default)]
        field: bool,
    },
    Type {
        underlying: ResolvedType,
    },
    Func {
        signature: Signature,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        receiver: Option<ResolvedType>,
    },
    /// Statement label. Never part of a surface.
    Label,
    /// Named import. Never part of a surface.
    PackageName {
        path: String,
    },
}

impl DeclKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            DeclKind::Const { .. } => "const",
            DeclKind::Var { .. } => "var",
            DeclKind::Type { .. } => "type",
            DeclKind::Func { .. } => "func",
            DeclKind::Label => "label",
            DeclKind::PackageName { .. } => "package name",
        }
    }
}

impl Declaration {
    pub fn new(name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            scope: DeclScope::Package,
            kind,
        }
    }

    pub fn constant(name: impl Into<String>, kind: ConstKind) -> Self {
        Self::new(name, DeclKind::Const { kind })
    }

    pub fn var(name: impl Into<String>, ty: ResolvedType) -> Self {
        Self::new(name, DeclKind::Var { ty, field: false })
    }

    pub fn type_decl(name: impl Into<String>, underlying: ResolvedType) -> Self {
        Self::new(name, DeclKind::Type { underlying })
    }

    pub fn func(name: impl Into<String>, signature: Signature) -> Self {
        Self::new(
            name,
            DeclKind::Func {
                signature,
                receiver: None,
            },
        )
    }

    pub fn method(name: impl Into<String>, receiver: ResolvedType, signature: Signature) -> Self {
        Self::new(
            name,
            DeclKind::Func {
                signature,
                receiver: Some(receiver),
            },
        )
    }

    pub fn in_scope(mut self, scope: DeclScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn is_exported(&self) -> bool {
        conventions::is_exported(&self.name)
    }
}

/// Kind of a constant's value (not its declared type).
///
/// Spellings (including aliases such as `"integer"`) are resolved through the `const_kinds` registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ConstKind {
    Bool,
    String,
    Int,
    Float,
    Complex,
}

impl From<ConstKind> for ConstKindId {
    fn from(kind: ConstKind) -> Self {
        match kind {
            ConstKind::Bool => ConstKindId::Bool,
            ConstKind::String => ConstKindId::String,
            ConstKind::Int => ConstKindId::Int,
            ConstKind::Float => ConstKindId::Float,
            ConstKind::Complex => ConstKindId::Complex,
        }
    }
}

impl From<ConstKindId> for ConstKind {
    fn from(id: ConstKindId) -> Self {
        match id {
            ConstKindId::Bool => ConstKind::Bool,
            ConstKindId::String => ConstKind::String,
            ConstKindId::Int => ConstKind::Int,
            ConstKindId::Float => ConstKind::Float,
            ConstKindId::Complex => ConstKind::Complex,
        }
    }
}

impl TryFrom<String> for ConstKind {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        const_kinds::from_str(&name)
            .map(ConstKind::from)
            .ok_or_else(|| format!("unknown constant kind `{name}`"))
    }
}

impl From<ConstKind> for String {
    fn from(kind: ConstKind) -> Self {
        const_kinds::as_str(kind.into()).to_string()
    }
}

// ============================================================================
// Resolved types
// ============================================================================

/// A fully resolved type, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedType {
    Basic {
        name: String,
    },
    Named(NamedType),
    Pointer {
        elem: Box<ResolvedType>,
    },
    Slice {
        elem: Box<ResolvedType>,
    },
    Array {
        len: u64,
        elem: Box<ResolvedType>,
    },
    Map {
        key: Box<ResolvedType>,
        elem: Box<ResolvedType>,
    },
    Chan {
        dir: ChanDir,
        elem: Box<ResolvedType>,
    },
    Signature(Signature),
    Interface {
        #[serde(default)]
        methods: Vec<Method>,
    },
    Struct {
        #[serde(default)]
        fields: Vec<Field>,
    },
    /// Multi-value result list. Only valid inside a signature, never as a standalone type.
    Tuple {
        #[serde(default)]
        elems: Vec<ResolvedType>,
    },
}

impl ResolvedType {
    pub fn basic(name: impl Into<String>) -> Self {
        ResolvedType::Basic { name: name.into() }
    }

    /// A named type declared in `package` (or a predeclared one such as `error` when `package` is `None`).
    pub fn named(package: Option<&str>, name: impl Into<String>) -> Self {
        ResolvedType::Named(NamedType::new(package, name))
    }

    pub fn pointer(elem: ResolvedType) -> Self {
        ResolvedType::Pointer { elem: Box::new(elem) }
    }

    pub fn slice(elem: ResolvedType) -> Self {
        ResolvedType::Slice { elem: Box::new(elem) }
    }

    pub fn array(len: u64, elem: ResolvedType) -> Self {
        ResolvedType::Array {
            len,
            elem: Box::new(elem),
        }
    }

    pub fn map(key: ResolvedType, elem: ResolvedType) -> Self {
        ResolvedType::Map {
            key: Box::new(key),
            elem: Box::new(elem),
        }
    }

    pub fn chan(dir: ChanDir, elem: ResolvedType) -> Self {
        ResolvedType::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    pub fn empty_interface() -> Self {
        ResolvedType::Interface { methods: Vec::new() }
    }

    /// Short name of the shape, for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            ResolvedType::Basic { .. } => "basic",
            ResolvedType::Named(_) => "named",
            ResolvedType::Pointer { .. } => "pointer",
            ResolvedType::Slice { .. } => "slice",
            ResolvedType::Array { .. } => "array",
            ResolvedType::Map { .. } => "map",
            ResolvedType::Chan { .. } => "chan",
            ResolvedType::Signature(_) => "signature",
            ResolvedType::Interface { .. } => "interface",
            ResolvedType::Struct { .. } => "struct",
            ResolvedType::Tuple { .. } => "tuple",
        }
    }
}

/// Reference to a declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedType {
    /// Import path of the defining package; `None` for predeclared types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    pub name: String,
    /// Explicit exportedness; derived from the name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported: Option<bool>,
    /// One-level expansion of the type's structure, when the loader supplied it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlying: Option<Box<ResolvedType>>,
}

impl NamedType {
    pub fn new(package: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            package: package.map(str::to_string),
            name: name.into(),
            exported: None,
            underlying: None,
        }
    }

    pub fn with_underlying(mut self, underlying: ResolvedType) -> Self {
        self.underlying = Some(Box::new(underlying));
        self
    }

    pub fn is_exported(&self) -> bool {
        self.exported.unwrap_or_else(|| conventions::is_exported(&self.name))
    }
}

/// Channel direction, spelled as in the `chan_dirs` registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChanDir {
    SendRecv,
    SendOnly,
    RecvOnly,
}

impl From<ChanDir> for ChanDirId {
    fn from(dir: ChanDir) -> Self {
        match dir {
            ChanDir::SendRecv => ChanDirId::SendRecv,
            ChanDir::SendOnly => ChanDirId::SendOnly,
            ChanDir::RecvOnly => ChanDirId::RecvOnly,
        }
    }
}

impl From<ChanDirId> for ChanDir {
    fn from(id: ChanDirId) -> Self {
        match id {
            ChanDirId::SendRecv => ChanDir::SendRecv,
            ChanDirId::SendOnly => ChanDir::SendOnly,
            ChanDirId::RecvOnly => ChanDir::RecvOnly,
        }
    }
}

impl TryFrom<String> for ChanDir {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        chan_dirs::from_str(&name)
            .map(ChanDir::from)
            .ok_or_else(|| format!("unknown channel direction `{name}`"))
    }
}

impl From<ChanDir> for String {
    fn from(dir: ChanDir) -> Self {
        chan_dirs::as_str(dir.into()).to_string()
    }
}

/// Function signature without receiver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub params: Vec<Param>,
    /// The last parameter is a `...T` parameter carried as `[]T`.
    #[serde(default)]
    pub variadic: bool,
    #[serde(default)]
    pub results: Vec<Param>,
}

impl Signature {
    pub fn new(params: Vec<ResolvedType>, results: Vec<ResolvedType>) -> Self {
        Self {
            params: params.into_iter().map(Param::unnamed).collect(),
            variadic: false,
            results: results.into_iter().map(Param::unnamed).collect(),
        }
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }
}

/// Signature parameter or result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: ResolvedType,
}

impl Param {
    pub fn unnamed(ty: ResolvedType) -> Self {
        Self { name: None, ty }
    }

    pub fn named(name: impl Into<String>, ty: ResolvedType) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }
}

/// Struct field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ResolvedType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported: Option<bool>,
    /// Embedded field (`struct { io.Reader }`); `name` is then the type's name.
    #[serde(default)]
    pub embedded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: ResolvedType) -> Self {
        Self {
            name: name.into(),
            ty,
            exported: None,
            embedded: false,
            tag: None,
        }
    }

    pub fn is_exported(&self) -> bool {
        self.exported.unwrap_or_else(|| conventions::is_exported(&self.name))
    }
}

/// Interface method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub signature: Signature,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported: Option<bool>,
}

impl Method {
    pub fn new(name: impl Into<String>, signature: Signature) -> Self {
        Self {
            name: name.into(),
            signature,
            exported: None,
        }
    }

    pub fn is_exported(&self) -> bool {
        self.exported.unwrap_or_else(|| conventions::is_exported(&self.name))
    }
}
