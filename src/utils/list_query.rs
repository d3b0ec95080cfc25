//! Shared pieces of the filtered list queries used by the admin endpoints.
//!
//! Every list endpoint takes the same page of UI state (search text, equality
//! filters, a date window, sort field and direction) and turns it into one
//! bounded, ordered, counted query. The helpers here append predicates to a
//! `QueryBuilder` whose base clause ends in `WHERE TRUE`, so each present
//! filter becomes an `AND ...` and absent filters are omitted entirely.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::{Postgres, QueryBuilder};

/// Resolves a requested sort field against a per-resource whitelist. Unknown
/// fields silently fall back to the default rather than erroring, and the
/// returned value is always one of the whitelisted literals (never the raw
/// request input).
pub fn resolve_sort<'a>(requested: Option<&str>, allowed: &[&'a str], default: &'a str) -> &'a str {
    match requested {
        Some(field) => allowed
            .iter()
            .find(|allowed_field| **allowed_field == field)
            .copied()
            .unwrap_or(default),
        None => default,
    }
}

pub fn resolve_order(requested: Option<&str>) -> &'static str {
    match requested {
        Some(order) if order.eq_ignore_ascii_case("asc") => "ASC",
        _ => "DESC",
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateWindow {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid end-of-day time"),
    )
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Computes the effective `created_at` window from either a named preset or
/// an explicit start/end pair. An explicit pair always overrides the preset;
/// the end bound is padded to 23:59:59.999 so the final day is inclusive.
pub fn date_window(
    preset: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
    now: NaiveDateTime,
) -> Option<DateWindow> {
    let explicit_start = start_date.and_then(parse_date).map(start_of_day);
    let explicit_end = end_date.and_then(parse_date).map(end_of_day);

    if explicit_start.is_some() || explicit_end.is_some() {
        return Some(DateWindow {
            start: explicit_start,
            end: explicit_end,
        });
    }

    match preset {
        Some("today") => Some(DateWindow {
            start: Some(start_of_day(now.date())),
            end: None,
        }),
        Some("yesterday") => {
            let yesterday = now.date() - Duration::days(1);
            Some(DateWindow {
                start: Some(start_of_day(yesterday)),
                end: Some(end_of_day(yesterday)),
            })
        }
        Some("last7days") => Some(DateWindow {
            start: Some(now - Duration::days(7)),
            end: None,
        }),
        Some("last30days") => Some(DateWindow {
            start: Some(now - Duration::days(30)),
            end: None,
        }),
        Some("thisMonth") => Some(DateWindow {
            start: now
                .date()
                .with_day(1)
                .map(start_of_day),
            end: None,
        }),
        Some("lastMonth") => {
            let first_of_this_month = now.date().with_day(1)?;
            let end_of_last_month = first_of_this_month - Duration::days(1);
            Some(DateWindow {
                start: end_of_last_month.with_day(1).map(start_of_day),
                end: Some(end_of_day(end_of_last_month)),
            })
        }
        _ => None,
    }
}

/// Case-insensitive substring OR across the resource's search columns.
pub fn push_search(qb: &mut QueryBuilder<Postgres>, term: Option<&str>, columns: &[&str]) {
    let term = match term {
        Some(term) if !term.trim().is_empty() => term.trim(),
        _ => return,
    };
    let pattern = format!("%{}%", term);

    qb.push(" AND (");
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            qb.push(" OR ");
        }
        qb.push(*column);
        qb.push(" ILIKE ");
        qb.push_bind(pattern.clone());
    }
    qb.push(")");
}

/// Exact-match predicate for a present, non-empty filter value.
pub fn push_eq(qb: &mut QueryBuilder<Postgres>, column: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        qb.push(" AND ");
        qb.push(column);
        qb.push(" = ");
        qb.push_bind(value.to_string());
    }
}

/// Boolean filter carried as the literal strings "true"/"false"; anything
/// else leaves the predicate out.
pub fn push_bool_eq(qb: &mut QueryBuilder<Postgres>, column: &str, value: Option<&str>) {
    match value {
        Some("true") => {
            qb.push(" AND ");
            qb.push(column);
            qb.push(" = TRUE");
        }
        Some("false") => {
            qb.push(" AND ");
            qb.push(column);
            qb.push(" = FALSE");
        }
        _ => (),
    }
}

pub fn push_date_window(qb: &mut QueryBuilder<Postgres>, column: &str, window: Option<DateWindow>) {
    let Some(window) = window else { return };

    if let Some(start) = window.start {
        qb.push(" AND ");
        qb.push(column);
        qb.push(" >= ");
        qb.push_bind(start);
    }
    if let Some(end) = window.end {
        qb.push(" AND ");
        qb.push(column);
        qb.push(" <= ");
        qb.push_bind(end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn unknown_sort_field_falls_back_to_default() {
        let allowed = ["created_at", "name"];
        assert_eq!(
            resolve_sort(Some("unknown_field"), &allowed, "created_at"),
            "created_at"
        );
        assert_eq!(resolve_sort(Some("name"), &allowed, "created_at"), "name");
        assert_eq!(resolve_sort(None, &allowed, "created_at"), "created_at");
    }

    #[test]
    fn sort_order_defaults_to_desc() {
        assert_eq!(resolve_order(Some("asc")), "ASC");
        assert_eq!(resolve_order(Some("ASC")), "ASC");
        assert_eq!(resolve_order(Some("desc")), "DESC");
        assert_eq!(resolve_order(Some("sideways")), "DESC");
        assert_eq!(resolve_order(None), "DESC");
    }

    #[test]
    fn today_preset_starts_at_midnight() {
        let window = date_window(Some("today"), None, None, noon(2024, 6, 15)).unwrap();
        assert_eq!(window.start, Some(noon(2024, 6, 15).date().and_time(NaiveTime::MIN)));
        assert_eq!(window.end, None);
    }

    #[test]
    fn last7days_preset_is_a_trailing_window() {
        let now = noon(2024, 6, 15);
        let window = date_window(Some("last7days"), None, None, now).unwrap();
        assert_eq!(window.start, Some(now - Duration::days(7)));
    }

    #[test]
    fn explicit_range_overrides_preset_and_pads_end_of_day() {
        let window = date_window(
            Some("last30days"),
            Some("2024-06-01"),
            Some("2024-06-10"),
            noon(2024, 6, 15),
        )
        .unwrap();

        assert_eq!(
            window.start,
            Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_time(NaiveTime::MIN))
        );
        assert_eq!(
            window.end,
            Some(
                NaiveDate::from_ymd_opt(2024, 6, 10)
                    .unwrap()
                    .and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap())
            )
        );
    }

    #[test]
    fn yesterday_preset_is_fully_bounded() {
        let window = date_window(Some("yesterday"), None, None, noon(2024, 6, 15)).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        assert_eq!(window.start, Some(yesterday.and_time(NaiveTime::MIN)));
        assert_eq!(
            window.end,
            Some(yesterday.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap()))
        );
    }

    #[test]
    fn last_month_preset_spans_the_previous_calendar_month() {
        let window = date_window(Some("lastMonth"), None, None, noon(2024, 3, 15)).unwrap();
        assert_eq!(
            window.start,
            Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_time(NaiveTime::MIN))
        );
        assert_eq!(
            window.end,
            Some(
                NaiveDate::from_ymd_opt(2024, 2, 29)
                    .unwrap()
                    .and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap())
            )
        );
    }

    #[test]
    fn unknown_preset_yields_no_window() {
        assert_eq!(date_window(Some("fortnight"), None, None, noon(2024, 6, 15)), None);
        assert_eq!(date_window(None, None, None, noon(2024, 6, 15)), None);
    }

    #[test]
    fn search_ors_across_columns() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM contacts WHERE TRUE");
        push_search(&mut qb, Some("kumar"), &["name", "email", "phone"]);
        let sql = qb.into_sql();
        assert!(sql.contains("name ILIKE $1 OR email ILIKE $2 OR phone ILIKE $3"));
    }

    #[test]
    fn blank_search_is_omitted() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM contacts WHERE TRUE");
        push_search(&mut qb, Some("   "), &["name"]);
        assert_eq!(qb.into_sql(), "SELECT * FROM contacts WHERE TRUE");
    }

    #[test]
    fn empty_equality_filter_is_omitted() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM leads WHERE TRUE");
        push_eq(&mut qb, "status", None);
        push_eq(&mut qb, "stage", Some(""));
        push_eq(&mut qb, "campaign", Some("summer"));
        let sql = qb.into_sql();
        assert!(!sql.contains("status"));
        assert!(!sql.contains("stage"));
        assert!(sql.contains("campaign = $1"));
    }
}
