use crate::error::{Error, Result};
use crate::utils::time::parse_applied_date;
use validator::Validate;

pub fn validate<T: Validate>(val: &T) -> std::result::Result<(), validator::ValidationErrors> {
    val.validate()
}

/// Enforces the documented `DD.MM.YYYY` format when strict dates are on.
/// Otherwise the applied date stays free text.
pub fn check_date_applied(date_applied: &str, strict: bool) -> Result<()> {
    if strict && parse_applied_date(date_applied).is_none() {
        return Err(Error::InvalidField(format!(
            "date_applied must be a calendar date in DD.MM.YYYY format, got {:?}",
            date_applied
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_free_text_unless_strict() {
        assert!(check_date_applied("sometime in May", false).is_ok());
        assert!(check_date_applied("31.02.2024", true).is_err());
        assert!(check_date_applied("29.02.2024", true).is_ok());
    }
}
