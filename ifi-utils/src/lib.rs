//! Shared utility functions for IFI crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format (IFI dataset format)
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Parse a date from an HTML `<input type="date">` value.
    ///
    /// Browsers emit "YYYY-MM-DD" for a filled picker and "" when cleared.
    /// Returns None for the empty string or anything unparseable, so a bad
    /// filter input never constrains the result set.
    pub fn parse_picker_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        parse_date(s).ok()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2010, 1, 5).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2010-01-05");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_rejects_other_formats() {
            assert!(parse_date("05/01/2010").is_err());
            assert!(parse_date("2010-13-01").is_err());
        }

        #[test]
        fn test_picker_date_empty_and_invalid() {
            assert_eq!(parse_picker_date(""), None);
            assert_eq!(parse_picker_date("   "), None);
            assert_eq!(parse_picker_date("not-a-date"), None);
            assert_eq!(
                parse_picker_date("2011-01-01"),
                NaiveDate::from_ymd_opt(2011, 1, 1)
            );
        }
    }
}

/// Geographic-name normalization.
///
/// Map rendering matches state/district names from flood records against the
/// boundary GeoJSON by exact string comparison. The two sources disagree on
/// case, spacing, and diacritics ("Kamrūp" vs "Kamrup"), so both sides are
/// normalized before comparison.
pub mod names {
    /// Normalize a geographic unit name: trim, collapse internal whitespace,
    /// fold common Latin diacritics to ASCII, and title-case each word.
    pub fn normalize_unit_name(name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        for (i, word) in name.split_whitespace().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            for (j, c) in word.chars().enumerate() {
                let folded = fold_diacritic(c);
                if j == 0 {
                    out.extend(folded.to_uppercase());
                } else {
                    out.extend(folded.to_lowercase());
                }
            }
        }
        out
    }

    /// Fold a Latin-1/Latin Extended character with a diacritic to its ASCII
    /// base letter. Characters outside the table pass through unchanged.
    fn fold_diacritic(c: char) -> char {
        match c {
            'á' | 'à' | 'â' | 'ä' | 'ã' | 'ā' => 'a',
            'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Ā' => 'A',
            'é' | 'è' | 'ê' | 'ë' | 'ē' => 'e',
            'É' | 'È' | 'Ê' | 'Ë' | 'Ē' => 'E',
            'í' | 'ì' | 'î' | 'ï' | 'ī' => 'i',
            'Í' | 'Ì' | 'Î' | 'Ï' | 'Ī' => 'I',
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' => 'o',
            'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' | 'Ō' => 'O',
            'ú' | 'ù' | 'û' | 'ü' | 'ū' => 'u',
            'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ū' => 'U',
            'ñ' | 'ṅ' | 'ṇ' => 'n',
            'Ñ' | 'Ṅ' | 'Ṇ' => 'N',
            'ś' | 'ṣ' => 's',
            'Ś' | 'Ṣ' => 'S',
            'ṭ' => 't',
            'Ṭ' => 'T',
            'ḍ' => 'd',
            'Ḍ' => 'D',
            _ => c,
        }
    }

}
