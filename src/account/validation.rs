//! Field rules of an [`Account`].
//!
//! Rules are declared on the entity with `validator` and reduced here to the
//! first broken one. Fields are checked as name, document then phone. Inside
//! a field, blankness comes before length.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::account::{
    Account, MIN_DOCUMENT_LENGTH, MIN_NAME_LENGTH, MIN_PHONE_LENGTH,
};

const BLANK: &str = "blank";
const LENGTH: &str = "length";

/// Fields in checking order with their minimum length.
const FIELDS: [(&str, u64); 3] = [
    ("name", MIN_NAME_LENGTH),
    ("document", MIN_DOCUMENT_LENGTH),
    ("phone", MIN_PHONE_LENGTH),
];

/// A broken field constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("[{field}] não pode estar em branco")]
    Blank { field: &'static str },
    #[error("[{field}] deve ter no mínimo {min} caracteres!")]
    TooShort { field: &'static str, min: u64 },
    /// Rule without a dedicated message.
    #[error("[{field}] inválido ({code})")]
    Invalid { field: String, code: String },
}

/// Reject empty or whitespace-only strings.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(BLANK));
    }

    Ok(())
}

/// Check every rule of `account` and return the first violation.
pub fn check(account: &Account) -> Result<(), Violation> {
    account.validate().map_err(|errors| first_violation(&errors))
}

fn first_violation(errors: &ValidationErrors) -> Violation {
    let field_errors = errors.field_errors();

    let known = FIELDS.iter().find_map(|&(field, min)| {
        let issues = field_errors.get(field)?;

        if issues.iter().any(|issue| issue.code == BLANK) {
            Some(Violation::Blank { field })
        } else if issues.iter().any(|issue| issue.code == LENGTH) {
            Some(Violation::TooShort { field, min })
        } else {
            None
        }
    });

    known.unwrap_or_else(|| {
        // Smallest field name keeps the report stable across runs.
        let (field, issues) = field_errors
            .iter()
            .map(|(field, issues)| (field.to_string(), issues))
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .unzip();

        Violation::Invalid {
            code: issues
                .and_then(|issues| issues.first())
                .map(|issue| issue.code.to_string())
                .unwrap_or_default(),
            field: field.unwrap_or_default(),
        }
    })
}
