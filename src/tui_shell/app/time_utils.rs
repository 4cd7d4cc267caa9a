use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// `HH:MM:SS` of an RFC 3339 timestamp, or the input unchanged.
pub(in crate::tui_shell) fn fmt_ts_ui(ts: &str) -> String {
    match OffsetDateTime::parse(ts, &Rfc3339) {
        Ok(dt) => format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second()),
        Err(_) => ts.to_string(),
    }
}

pub(in crate::tui_shell) fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}
