use crate::chronometer::Chronometer;
use std::fmt::Display;

/// Progress lines on stderr, stamped with the time elapsed since startup.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled,
        }
    }

    pub fn line(&self, value: impl Display) -> String {
        format!("{} ({} elapsed)", value, self.chronometer.elapsed())
    }

    pub fn log(&self, value: impl Display) {
        if self.enabled {
            eprintln!("{}", self.line(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Logger;

    #[test]
    fn line() {
        let line = Logger::new(false).line("Decoded 3 bytes");
        assert!(line.starts_with("Decoded 3 bytes (00:00."));
        assert!(line.ends_with(" elapsed)"));
    }
}
