use syn::{Attribute, Error, Ident, Result, parse::ParseStream};

/// How the cause field continues the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CauseKind {
    /// The cause implements `StackError`.
    Stacked,
    /// The cause is a plain `core::error::Error`, the chain keeps following `source()` from there.
    Std,
}

/// The role a field declares through its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    StackTrace,
    Cause(CauseKind),
}

/// A declared role and the attribute that declared it, kept for error spans.
pub struct Marker<'a> {
    pub role: Role,
    pub attr: &'a Attribute,
}

/// Reads `#[stack_trace]`, `#[source]` and `#[stack_error(..)]` off one field.
///
/// `#[stack_error(..)]` refines a `#[source]` on the same field, so thiserror's `#[source]` can stay.
pub fn parse_marker(attrs: &[Attribute]) -> Result<Option<Marker<'_>>> {
    let mut stack_trace = None;
    let mut source = None;
    let mut stack_error = None;

    for attr in attrs {
        let path = attr.path();
        if path.is_ident("stack_trace") {
            attr.meta.require_path_only()?;
            set_once(&mut stack_trace, attr, attr, "stack_trace")?;
        } else if path.is_ident("source") {
            attr.meta.require_path_only()?;
            set_once(&mut source, attr, attr, "source")?;
        } else if path.is_ident("stack_error") {
            let kind = attr.parse_args_with(parse_cause_kind)?;
            set_once(&mut stack_error, (attr, kind), attr, "stack_error")?;
        }
    }

    let marker = match (stack_trace, source, stack_error) {
        (Some(_), Some(cause), _) | (Some(_), None, Some((cause, _))) => {
            return Err(Error::new_spanned(
                cause,
                "a field cannot be both the stack trace and the cause",
            ));
        }
        (Some(attr), None, None) => Some(Marker {
            role: Role::StackTrace,
            attr,
        }),
        (None, _, Some((attr, kind))) => Some(Marker {
            role: Role::Cause(kind),
            attr,
        }),
        (None, Some(attr), None) => Some(Marker {
            role: Role::Cause(CauseKind::Stacked),
            attr,
        }),
        (None, None, None) => None,
    };

    Ok(marker)
}

fn set_once<T>(slot: &mut Option<T>, value: T, attr: &Attribute, name: &str) -> Result<()> {
    if slot.is_some() {
        return Err(Error::new_spanned(
            attr,
            format!("duplicate `#[{name}]` attribute"),
        ));
    }
    *slot = Some(value);
    Ok(())
}

fn parse_cause_kind(input: ParseStream) -> Result<CauseKind> {
    let ident: Ident = input.parse()?;
    if ident == "stacked" {
        Ok(CauseKind::Stacked)
    } else if ident == "std" || ident == "end" {
        Ok(CauseKind::Std)
    } else {
        Err(Error::new(
            ident.span(),
            format!("unknown `stack_error` argument `{ident}`, expected `stacked`, `std` or `end`"),
        ))
    }
}
