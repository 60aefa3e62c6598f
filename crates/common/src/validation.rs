//! Reusable field validators for request schemas

use validator::ValidationError;

/// Rejects strings that are empty or whitespace only, or that carry a NUL
/// character Postgres text columns cannot store
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    if value.contains('\0') {
        return Err(ValidationError::new("nul"));
    }
    Ok(())
}
