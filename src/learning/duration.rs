/// Human-readable course/lecture length: "Xh Ym" or "Ym".
///
/// Any positive duration shorter than a minute shows as "1m" so short
/// lectures never read as empty.
pub fn format_duration(secs: Option<u64>) -> String {
    let secs = match secs {
        None | Some(0) => return "0m".to_string(),
        Some(s) => s,
    };

    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else if mins == 0 {
        "1m".to_string()
    } else {
        format!("{}m", mins)
    }
}

/// Player clock: "mm:ss", or "h:mm:ss" from one hour up.
pub fn format_clock(secs: u64) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let s = secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, s)
    } else {
        format!("{:02}:{:02}", mins, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_hours_and_mins() {
        assert_eq!(format_duration(Some(3661)), "1h 1m");
        assert_eq!(format_duration(Some(7200)), "2h 0m");
    }

    #[test]
    fn test_format_duration_only_mins() {
        assert_eq!(format_duration(Some(300)), "5m");
        assert_eq!(format_duration(Some(3599)), "59m");
    }

    #[test]
    fn test_format_duration_zero_and_missing() {
        assert_eq!(format_duration(Some(0)), "0m");
        assert_eq!(format_duration(None), "0m");
    }

    #[test]
    fn test_format_duration_under_a_minute_rounds_up() {
        for s in 1..60 {
            assert_eq!(format_duration(Some(s)), "1m", "seconds = {}", s);
        }
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(323), "05:23");
        assert_eq!(format_clock(3725), "1:02:05");
    }
}
