use proc_macro2::Span;
use syn::{Error, Generics, Ident, Index, Member, Result, Type};

use crate::attr::{self, CauseKind, Marker, Role};

/// The deriving type, reduced to what the impl reads.
pub struct Input<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub body: Body<'a>,
}

pub enum Body<'a> {
    Struct(Shape<'a>),
    Enum(Vec<Variant<'a>>),
}

pub struct Variant<'a> {
    pub ident: &'a Ident,
    pub shape: Shape<'a>,
}

/// The stack field and the cause field of one struct or variant.
pub struct Shape<'a> {
    pub named: bool,
    pub len: usize,
    pub stack_trace: Option<Slot<'a>>,
    pub cause: Option<(Slot<'a>, CauseKind)>,
}

/// A field picked for a role.
pub struct Slot<'a> {
    pub index: usize,
    pub member: Member,
    pub ty: &'a Type,
}

impl<'a> Input<'a> {
    pub fn from_syn(input: &'a syn::DeriveInput) -> Result<Self> {
        let body = match &input.data {
            syn::Data::Struct(data) => {
                Body::Struct(Shape::from_fields(&input.ident, &data.fields, "struct")?)
            }
            syn::Data::Enum(data) => {
                // report every broken variant at once
                let mut variants = Vec::with_capacity(data.variants.len());
                let mut errors: Option<Error> = None;
                for variant in &data.variants {
                    match Shape::from_fields(&variant.ident, &variant.fields, "variant") {
                        Ok(shape) => variants.push(Variant {
                            ident: &variant.ident,
                            shape,
                        }),
                        Err(err) => errors = combine_error(errors, err),
                    }
                }
                if let Some(err) = errors {
                    return Err(err);
                }
                Body::Enum(variants)
            }
            syn::Data::Union(data) => {
                return Err(Error::new(
                    data.union_token.span,
                    "`StackError` cannot be derived for unions",
                ));
            }
        };

        Ok(Input {
            ident: &input.ident,
            generics: &input.generics,
            body,
        })
    }
}

impl<'a> Shape<'a> {
    /// Picks the stack and cause fields: marked fields win over fields named `stack` and `source`.
    fn from_fields(ident: &Ident, fields: &'a syn::Fields, kind: &str) -> Result<Self> {
        let named = match fields {
            syn::Fields::Named(_) => true,
            syn::Fields::Unnamed(_) => false,
            syn::Fields::Unit => {
                return Err(Error::new(
                    ident.span(),
                    format!("unit {kind} `{ident}` cannot derive `StackError`, write `{ident} {{}}`"),
                ));
            }
        };

        let mut marked_stack = None;
        let mut marked_cause = None;
        let mut named_stack = None;
        let mut named_cause = None;

        for (index, field) in fields.iter().enumerate() {
            let slot = Slot {
                index,
                member: match &field.ident {
                    Some(ident) => Member::Named(ident.clone()),
                    None => Member::Unnamed(Index {
                        index: index as u32,
                        span: Span::call_site(),
                    }),
                },
                ty: &field.ty,
            };

            match attr::parse_marker(&field.attrs)? {
                Some(Marker {
                    role: Role::StackTrace,
                    attr,
                }) => {
                    if marked_stack.replace(slot).is_some() {
                        return Err(Error::new_spanned(attr, "duplicate stack trace field"));
                    }
                }
                Some(Marker {
                    role: Role::Cause(cause),
                    attr,
                }) => {
                    if marked_cause.replace((slot, cause)).is_some() {
                        return Err(Error::new_spanned(attr, "duplicate cause field"));
                    }
                }
                None if slot.is_named("stack") => named_stack = Some(slot),
                None if slot.is_named("source") => named_cause = Some((slot, CauseKind::Stacked)),
                None => {}
            }
        }

        Ok(Shape {
            named,
            len: fields.len(),
            stack_trace: marked_stack.or(named_stack),
            cause: marked_cause.or(named_cause),
        })
    }
}

impl Slot<'_> {
    fn is_named(&self, name: &str) -> bool {
        matches!(&self.member, Member::Named(ident) if ident == name)
    }
}

fn combine_error(acc: Option<Error>, next: Error) -> Option<Error> {
    match acc {
        Some(mut err) => {
            err.combine(next);
            Some(err)
        }
        None => Some(next),
    }
}
