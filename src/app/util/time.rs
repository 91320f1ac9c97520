use chrono::Utc;

/// UTC calendar date, `YYYY-MM-DD`.
pub fn current_date() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_date_is_iso_formatted() {
        let date = current_date();

        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }
}
