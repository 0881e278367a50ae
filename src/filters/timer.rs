use crate::walkthrough::format_time;

/// Countdown text for a number of seconds, empty once time is up.
pub fn countdown_filter(seconds: u32) -> String {
    format_time(seconds).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown() {
        assert_eq!(countdown_filter(92), "1 min 32 sec left");
        assert_eq!(countdown_filter(0), "");
    }
}
