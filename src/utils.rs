use chrono::Month;

pub(crate) const MONTHS_PER_YEAR: usize = 12;

/// Short English name ("Jan".."Dec") of a zero-based month index.
pub(crate) fn short_month_label(month0: usize) -> Option<&'static str> {
    let month = Month::try_from(u8::try_from(month0.checked_add(1)?).ok()?).ok()?;
    month.name().get(..3)
}

/// Trims `input` and returns it unless nothing is left.
pub(crate) fn non_blank(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
