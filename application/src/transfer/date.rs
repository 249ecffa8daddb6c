use error_stack::Report;
use kernel::prelude::availability::parse_calendar_date;
use kernel::prelude::entity::{CandidateInterval, RentalPeriod};
use kernel::KernelError;
use time::Date;

/// Blank input means "not chosen yet"; anything else has to be a calendar date.
pub(crate) fn parse_optional_date(
    field: &'static str,
    raw: Option<&str>,
) -> error_stack::Result<Option<Date>, KernelError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_calendar_date(text).map(Some).ok_or_else(|| {
            Report::new(KernelError::Invalid)
                .attach_printable(format!("`{field}` is not a calendar date: {text}"))
        }),
    }
}

pub(crate) fn parse_candidate(
    from: Option<&str>,
    to: Option<&str>,
) -> error_stack::Result<CandidateInterval, KernelError> {
    Ok(CandidateInterval::new(
        parse_optional_date("from", from)?,
        parse_optional_date("to", to)?,
    ))
}

pub(crate) fn parse_required_period(
    from: &str,
    to: &str,
) -> error_stack::Result<RentalPeriod, KernelError> {
    parse_candidate(Some(from), Some(to))?
        .period()
        .ok_or_else(|| {
            Report::new(KernelError::Invalid).attach_printable("both rental dates are required")
        })
}
