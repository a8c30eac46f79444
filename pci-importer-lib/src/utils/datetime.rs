use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Convert an Excel serial date (days since 1899-12-30, fractional part = time of day)
/// into a naive datetime. Returns `None` for serials chrono cannot represent.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }

    let excel_base = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let days = serial.trunc() as i64;
    let seconds = ((serial - days as f64) * 86400.0).round() as i64;

    excel_base
        .checked_add_signed(Duration::try_days(days)?)?
        .checked_add_signed(Duration::try_seconds(seconds)?)
}
