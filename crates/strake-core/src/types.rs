use serde::{Deserialize, Serialize};

/// Identifier of a registered type. Dense, assigned by the registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Parameter kinds in a member's call shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Positional,
    Keyword,
    Variadic,
    VariadicKeyword,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Positional => "positional",
            ParamKind::Keyword => "keyword",
            ParamKind::Variadic => "variadic",
            ParamKind::VariadicKeyword => "variadic_keyword",
        }
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared parameter: name plus kind. Types are not modeled; signature
/// compatibility is about call shape only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
}

impl Param {
    pub fn positional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ParamKind::Positional,
        }
    }

    pub fn keyword(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ParamKind::Keyword,
        }
    }

    pub fn variadic(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ParamKind::Variadic,
        }
    }

    pub fn variadic_keyword(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ParamKind::VariadicKeyword,
        }
    }

    /// Compact rendering used in canonical forms and messages.
    pub fn render(&self) -> String {
        match self.kind {
            ParamKind::Positional => self.name.clone(),
            ParamKind::Keyword => format!("{}=", self.name),
            ParamKind::Variadic => format!("*{}", self.name),
            ParamKind::VariadicKeyword => format!("**{}", self.name),
        }
    }
}

/// Member kinds a type can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    InstanceMethod,
    ClassMethod,
    StaticMethod,
    Property,
    Data,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::InstanceMethod => "instance_method",
            MemberKind::ClassMethod => "class_method",
            MemberKind::StaticMethod => "static_method",
            MemberKind::Property => "property",
            MemberKind::Data => "data",
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member declared directly on a type.
///
/// `params` carries the call shape for the three method kinds. For a class
/// method the leading parameter is the receiver and is bound out during
/// signature classification. `Property` and `Data` members ignore `params`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDecl {
    pub name: String,
    pub kind: MemberKind,
    pub params: Vec<Param>,
    pub is_abstract: bool,
}

impl MemberDecl {
    pub fn instance_method(name: &str, params: Vec<Param>) -> Self {
        Self {
            name: name.to_string(),
            kind: MemberKind::InstanceMethod,
            params,
            is_abstract: false,
        }
    }

    pub fn class_method(name: &str, params: Vec<Param>) -> Self {
        Self {
            name: name.to_string(),
            kind: MemberKind::ClassMethod,
            params,
            is_abstract: false,
        }
    }

    pub fn static_method(name: &str, params: Vec<Param>) -> Self {
        Self {
            name: name.to_string(),
            kind: MemberKind::StaticMethod,
            params,
            is_abstract: false,
        }
    }

    pub fn property(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: MemberKind::Property,
            params: vec![],
            is_abstract: false,
        }
    }

    pub fn data(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: MemberKind::Data,
            params: vec![],
            is_abstract: false,
        }
    }

    /// Mark this declaration abstract: a covering override is required
    /// before any type in the hierarchy is treated as concrete.
    pub fn mark_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Canonical one-line form, input to fingerprinting.
    pub fn canonical(&self) -> String {
        match self.kind {
            MemberKind::Property | MemberKind::Data => {
                format!("{} {}", self.kind.as_str(), self.name)
            }
            _ => {
                let params: Vec<String> = self.params.iter().map(Param::render).collect();
                format!("{} {}({})", self.kind.as_str(), self.name, params.join(", "))
            }
        }
    }
}

/// Declaration of a new type, submitted to the registry exactly once.
///
/// Base order is significant: it seeds the linearization the same way a
/// direct base list seeds a cooperative method-resolution order. Member
/// order is significant too; the validator walks members in declaration
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub name: String,
    pub bases: Vec<TypeId>,
    pub members: Vec<MemberDecl>,
    /// Member names supplied by an external mechanism; skipped by both the
    /// conflict and completeness checks.
    pub assumed_concrete: Vec<String>,
}

impl TypeSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            bases: vec![],
            members: vec![],
            assumed_concrete: vec![],
        }
    }

    pub fn extend(mut self, base: TypeId) -> Self {
        self.bases.push(base);
        self
    }

    pub fn member(mut self, decl: MemberDecl) -> Self {
        self.members.push(decl);
        self
    }

    pub fn assume_concrete(mut self, name: &str) -> Self {
        self.assumed_concrete.push(name.to_string());
        self
    }
}

/// A registered type. Immutable once committed to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub id: TypeId,
    pub name: String,
    pub bases: Vec<TypeId>,
    pub members: Vec<MemberDecl>,
    pub assumed_concrete: Vec<String>,
    /// Linearized ancestor chain, most-derived-first, starting with `id`.
    pub linearization: Vec<TypeId>,
}

/// Errors produced while resolving a type declaration against the registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown base {base} on `{type_name}`")]
    UnknownBase { type_name: String, base: TypeId },

    #[error("base {base} listed more than once on `{type_name}`")]
    DuplicateBase { type_name: String, base: TypeId },

    #[error("type `{0}` is already registered")]
    DuplicateType(String),

    #[error("cannot linearize bases of `{type_name}`: no consistent ancestor order")]
    InconsistentHierarchy { type_name: String },

    #[error("member `{member}` on `{type_name}` has no classifiable signature")]
    UnclassifiableMember { type_name: String, member: String },
}
