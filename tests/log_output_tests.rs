use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use newton_screen::util::display::{DisplayError, DisplayMetrics, DisplayMetricsSource};
use newton_screen::util::preferences::{MemoryPreferences, Preferences};
use newton_screen::{
    init_host_screen_dimensions, init_newton_screen_dimensions, ScreenDimensions,
    SCREEN_PRESETS_KEY,
};

// One logger per process, so everything is checked from a single test
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn take_records() -> Vec<(Level, String)> {
    std::mem::take(&mut *LOGGER.records.lock().unwrap())
}

fn has_record(records: &[(Level, String)], level: Level, needle: &str) -> bool {
    records
        .iter()
        .any(|(l, msg)| *l == level && msg.contains(needle))
}

struct BrokenDisplay;

impl DisplayMetricsSource for BrokenDisplay {
    fn display_metrics(&self) -> Result<DisplayMetrics, DisplayError> {
        Err(DisplayError::Unavailable("no video driver".to_string()))
    }
}

#[cfg(test)]
mod diagnostic_log_tests {
    use super::*;

    #[test]
    fn test_every_fallback_branch_logs_a_warning() {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);

        let mut dims = ScreenDimensions::new();
        take_records();

        init_host_screen_dimensions(None, &mut dims);
        let records = take_records();
        assert!(
            has_record(&records, Level::Warn, "no display available"),
            "missing display should warn, got {:?}",
            records
        );
        assert!(!dims.is_host_known());

        init_host_screen_dimensions(Some(&BrokenDisplay), &mut dims);
        let records = take_records();
        assert!(
            has_record(&records, Level::Warn, "no video driver"),
            "failed display query should warn, got {:?}",
            records
        );
        assert!(!dims.is_host_known());

        let mut prefs = MemoryPreferences::new();
        prefs.set_string(SCREEN_PRESETS_KEY, "abc x 480");
        init_newton_screen_dimensions(&prefs, &mut dims);
        let records = take_records();
        assert!(
            has_record(&records, Level::Debug, "\"abc\""),
            "width token should be logged before parsing, got {:?}",
            records
        );
        assert!(
            has_record(&records, Level::Debug, "\"480\""),
            "height token should be logged before parsing, got {:?}",
            records
        );
        assert!(
            has_record(&records, Level::Warn, "using 320 x 480"),
            "malformed preset should warn, got {:?}",
            records
        );
        assert!(has_record(&records, Level::Info, "Newton window size is 320x480"));
    }
}
