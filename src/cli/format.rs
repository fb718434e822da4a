//! Text formatting for CLI output: currency, percentages as bars, dates and
//! small tables.

use chrono::{NaiveDate, NaiveTime};

/// Formats an amount as US dollars with thousands separators: `$75,000.00`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Generates a progress bar string for a percentage: `[████████░░] 80%`
#[must_use]
pub fn format_progress_bar(percent: u32, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped = percent.min(100) as usize;
    let filled = (clamped * length + 50) / 100;
    let empty = length.saturating_sub(filled);

    format!("[{}{}] {percent}%", "█".repeat(filled), "░".repeat(empty))
}

/// `HH:MM`, or `--:--` when there is no time.
#[must_use]
pub fn format_time(time: Option<NaiveTime>) -> String {
    time.map_or_else(|| "--:--".to_string(), |t| t.format("%H:%M").to_string())
}

/// `Mon 02 Mar 2026`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %d %b %Y").to_string()
}

/// Left-aligned columns sized to the widest cell, header underlined.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = vec![render_row(headers, &widths)];
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let separators: Vec<&str> = separators.iter().map(String::as_str).collect();
    out.push(render_row(&separators, &widths));
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(render_row(&cells, &widths));
    }
    out.join("\n")
}

fn render_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(75_000.0), "$75,000.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(999.5), "$999.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-1500.0), "-$1,500.00");
    }

    #[test]
    fn test_format_progress_bar() {
        assert_eq!(format_progress_bar(100, Some(10)), "[██████████] 100%");
        assert_eq!(format_progress_bar(50, Some(10)), "[█████░░░░░] 50%");
        assert_eq!(format_progress_bar(0, Some(10)), "[░░░░░░░░░░] 0%");
        assert_eq!(format_progress_bar(95, None), "[██████████] 95%");
    }

    #[test]
    fn test_format_time_and_date() {
        assert_eq!(format_time(NaiveTime::from_hms_opt(9, 5, 0)), "09:05");
        assert_eq!(format_time(None), "--:--");
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()),
            "Mon 02 Mar 2026"
        );
    }

    #[test]
    fn test_render_table() {
        let table = render_table(
            &["Name", "Days"],
            &[
                vec!["John Smith".to_string(), "21".to_string()],
                vec!["Ann".to_string(), "3".to_string()],
            ],
        );
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "Name        Days");
        assert_eq!(lines[1], "----------  ----");
        assert_eq!(lines[2], "John Smith  21");
        assert_eq!(lines[3], "Ann         3");
    }
}
