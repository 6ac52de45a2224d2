use crate::message::rust_message;
use copyctor_core::{
    diagnostic::Diagnostic,
    prelude::*,
    validate::{TargetKind, check_annotation_target},
};
use darling::{
    FromDeriveInput, FromField, FromMeta,
    ast::{Data, Style},
    util::{Flag, Ignored},
};
use syn::{Generics, Ident, Path, Type, ext::IdentExt};

///
/// CopyOpts
///

#[derive(Clone, FromMeta)]
pub struct CopyOpts {
    pub using: Path,
}

///
/// ContainerOpts
///
/// Field-level options are accepted here only so their misplacement can be
/// reported through the engine's target check.
///

#[derive(FromDeriveInput)]
#[darling(attributes(copy_constructor))]
pub struct ContainerOpts {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<Ignored, FieldOpts>,

    #[darling(default)]
    pub depth: Depth,

    #[darling(default)]
    pub exclude: Flag,

    #[darling(default)]
    pub reference: Flag,

    #[darling(default)]
    pub copy: Option<CopyOpts>,
}

///
/// FieldOpts
///

#[derive(FromField)]
#[darling(attributes(copy_constructor))]
pub struct FieldOpts {
    pub ident: Option<Ident>,
    pub ty: Type,

    #[darling(default)]
    pub exclude: Flag,

    #[darling(default)]
    pub reference: Flag,

    #[darling(default)]
    pub copy: Option<CopyOpts>,

    #[darling(default)]
    pub depth: Option<Depth>,
}

///
/// DeriveClass
///
/// A derive input seen through the engine's host interface.
///

pub struct DeriveClass {
    pub ident: Ident,
    pub generics: Generics,
    pub fields: Vec<DeriveField>,
    pub misplaced: Vec<Diagnostic>,
    name: String,
    modifiers: Modifiers,
    request: CopyConstructorRequest,
}

impl DeriveClass {
    pub fn from_opts(opts: ContainerOpts) -> Result<Self, darling::Error> {
        let mut misplaced = Vec::new();

        // policy options written on the type itself
        let container_policies = [
            (AnnotationKind::Exclude, opts.exclude.is_present()),
            (AnnotationKind::Reference, opts.reference.is_present()),
            (AnnotationKind::Copy, opts.copy.is_some()),
        ];
        for (kind, present) in container_policies {
            if present {
                misplaced.extend(check_annotation_target(kind, TargetKind::Type, None));
            }
        }

        let (modifiers, fields) = match opts.data {
            Data::Enum(_) => (Modifiers::ENUM, Vec::new()),
            Data::Struct(fields) if fields.style == Style::Tuple => {
                return Err(darling::Error::custom(
                    "CopyConstructor can only be derived for structs with named fields",
                )
                .with_span(&opts.ident));
            }
            Data::Struct(fields) => {
                let fields = fields
                    .fields
                    .into_iter()
                    .filter_map(DeriveField::from_opts)
                    .collect::<Vec<_>>();

                (Modifiers::PUBLIC, fields)
            }
        };

        for field in &fields {
            if field.has_depth {
                misplaced.extend(check_annotation_target(
                    AnnotationKind::CopyConstructor,
                    TargetKind::Field,
                    Some(field.name.as_str()),
                ));
            }
        }

        Ok(Self {
            name: opts.ident.unraw().to_string(),
            ident: opts.ident,
            generics: opts.generics,
            fields,
            misplaced,
            modifiers,
            request: CopyConstructorRequest::with_depth(opts.depth),
        })
    }

    // get
    pub fn get(&self, name: &str) -> Option<&DeriveField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Map an engine diagnostic onto a compile error at its anchor.
    pub fn to_error(&self, diagnostic: &Diagnostic) -> darling::Error {
        let error = darling::Error::custom(rust_message(diagnostic));

        match diagnostic.anchor.field_name().and_then(|name| self.get(name)) {
            Some(field) => error.with_span(&field.ident),
            None => error.with_span(&self.ident),
        }
    }
}

impl ClassSource for DeriveClass {
    type Field = DeriveField;

    fn name(&self) -> &str {
        &self.name
    }

    fn type_params(&self) -> Vec<String> {
        self.generics
            .type_params()
            .map(|param| param.ident.to_string())
            .collect()
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn fields(&self) -> &[DeriveField] {
        &self.fields
    }

    // deriving is the request
    fn copy_constructor(&self) -> Option<&CopyConstructorRequest> {
        Some(&self.request)
    }
}

///
/// DeriveField
///

pub struct DeriveField {
    pub ident: Ident,
    pub ty: Type,
    pub copy_using: Option<Path>,
    name: String,
    annotations: Vec<PolicyAnnotation>,
    is_boolean: bool,
    has_depth: bool,
}

impl DeriveField {
    // unnamed fields never get here; tuple structs are rejected first
    fn from_opts(opts: FieldOpts) -> Option<Self> {
        let ident = opts.ident?;

        let mut annotations = Vec::new();
        if opts.exclude.is_present() {
            annotations.push(PolicyAnnotation::Exclude);
        }
        if opts.reference.is_present() {
            annotations.push(PolicyAnnotation::Reference);
        }
        if let Some(copy) = &opts.copy {
            annotations.push(PolicyAnnotation::copy(path_name(&copy.using)));
        }

        Some(Self {
            name: ident.unraw().to_string(),
            is_boolean: is_bool(&opts.ty),
            has_depth: opts.depth.is_some(),
            copy_using: opts.copy.map(|copy| copy.using),
            ident,
            ty: opts.ty,
            annotations,
        })
    }
}

impl FieldSource for DeriveField {
    fn name(&self) -> &str {
        &self.name
    }

    // Rust fields have no static, final, or null-initializer shape
    fn is_static(&self) -> bool {
        false
    }

    fn is_final(&self) -> bool {
        false
    }

    fn is_null_initialized(&self) -> bool {
        false
    }

    fn is_boolean(&self) -> bool {
        self.is_boolean
    }

    fn annotations(&self) -> &[PolicyAnnotation] {
        &self.annotations
    }
}

fn path_name(path: &Path) -> String {
    path.segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

fn is_bool(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };

    path.qself.is_none() && path.path.is_ident("bool")
}
