//! Filter criteria collected from the filter panel.

use chrono::NaiveDate;

/// Conjunctive constraints for narrowing the flood event table.
///
/// `None` in any dimension means "no constraint". The default value (all
/// `None`) matches every record, so Reset is just `FilterCriteria::default()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Keep records whose start date is on or after this date.
    pub start_date: Option<NaiveDate>,
    /// Keep records whose end date is on or before this date.
    pub end_date: Option<NaiveDate>,
    /// Keep records for exactly this state.
    pub state: Option<String>,
    /// Keep records for exactly this district.
    pub district: Option<String>,
}

impl FilterCriteria {
    /// True when no dimension constrains anything.
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.state.is_none()
            && self.district.is_none()
    }

    /// Build criteria from raw form values.
    ///
    /// Empty strings mean "unset". A date input that fails to parse is
    /// treated the same as unset — the offending predicate constrains
    /// nothing and the user sees no error, it is only logged.
    pub fn from_form(start: &str, end: &str, state: &str, district: &str) -> Self {
        let parse = |raw: &str, which: &str| {
            let parsed = ifi_utils::dates::parse_picker_date(raw);
            if parsed.is_none() && !raw.trim().is_empty() {
                log::warn!(
                    "[IFI Debug] criteria: ignoring unparseable {} date input {:?}",
                    which,
                    raw
                );
            }
            parsed
        };
        let non_empty = |raw: &str| {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Self {
            start_date: parse(start, "start"),
            end_date: parse(end, "end"),
            state: non_empty(state),
            district: non_empty(district),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn default_is_empty() {
        assert!(FilterCriteria::default().is_empty());
    }

    #[test]
    fn from_form_parses_dates_and_names() {
        let c = FilterCriteria::from_form("2011-01-01", "", " Assam ", "Kamrup");
        assert_eq!(c.start_date, NaiveDate::from_ymd_opt(2011, 1, 1));
        assert_eq!(c.end_date, None);
        assert_eq!(c.state.as_deref(), Some("Assam"));
        assert_eq!(c.district.as_deref(), Some("Kamrup"));
    }

    #[test]
    fn unparseable_date_input_does_not_constrain() {
        let c = FilterCriteria::from_form("01/13/2011", "garbage", "", "");
        assert!(c.is_empty());
    }
}
