use validator::{ValidationErrors, ValidationErrorsKind};

use crate::shared::types::FieldError;

/// Flatten `validator` errors into a stable list of field/message pairs.
///
/// Field names are converted to camelCase so they match the JSON and path
/// parameter names clients send. Nested structs produce dotted paths
/// (`center.latitude`). The result is sorted by field, then message.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    collect(errors, None, &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    out
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldError>) {
    for (name, kind) in errors.errors() {
        let field = match prefix {
            Some(prefix) => format!("{}.{}", prefix, to_camel_case(name)),
            None => to_camel_case(name),
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid ({})", field, err.code));
                    out.push(FieldError {
                        field: field.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, Some(&field), out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, Some(&format!("{}[{}]", field, index)), out);
                }
            }
        }
    }
}

fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
