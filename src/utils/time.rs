use chrono::NaiveDate;

pub const APPLIED_DATE_FORMAT: &str = "%d.%m.%Y";

pub fn parse_applied_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), APPLIED_DATE_FORMAT).ok()
}

pub fn format_applied_date(date: NaiveDate) -> String {
    date.format(APPLIED_DATE_FORMAT).to_string()
}
