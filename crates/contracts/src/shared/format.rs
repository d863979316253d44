//! Utilities for date and number formatting
//!
//! Одни и те же строки показываются в таблицах и участвуют в поиске,
//! поэтому форматирование живёт здесь, а не во фронтенде.

use chrono::NaiveDate;

/// Format date as DD/MM/YYYY
/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format accounting period as MM/YYYY
pub fn format_period(date: NaiveDate) -> String {
    date.format("%m/%Y").to_string()
}

/// Форматирует число с разделителем тысяч (пробел) и запятой перед дробной частью.
///
/// # Примеры
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежная сумма в евро
///
/// ```
/// use contracts::shared::format::format_money;
/// assert_eq!(format_money(1234567.89), "1 234 567,89 €");
/// ```
pub fn format_money(value: f64) -> String {
    format!("{} €", format_number_with_decimals(value, 2))
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15/03/2024");
        assert_eq!(format_period(date), "03/2024");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234,56 €");
        assert_eq!(format_money(0.0), "0,00 €");
        assert_eq!(format_money(-1234.56), "-1 234,56 €");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234,6");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(-1234.0), "-1 234");
    }
}
