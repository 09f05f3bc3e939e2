use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the graph on stdout.
/// Warnings and completion messages are colored unless coloring is disabled.
pub struct StderrProgressReporter {
    quiet: bool,
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            quiet: false,
            colored: true,
        }
    }

    /// Suppresses every message when `quiet` is set
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn paint_warning(&self, message: &str) -> String {
        if self.colored {
            message.yellow().to_string()
        } else {
            message.to_string()
        }
    }

    fn paint_success(&self, message: &str) -> String {
        if self.colored {
            message.green().to_string()
        } else {
            message.to_string()
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{}", self.paint_warning(message));
    }

    fn report_completion(&self, message: &str) {
        if self.quiet {
            return;
        }
        eprintln!();
        eprintln!("{}", self.paint_success(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_progress_reporter_new() {
        let reporter = StderrProgressReporter::new();
        assert!(!reporter.is_quiet());
    }

    #[test]
    fn test_stderr_progress_reporter_default() {
        let reporter = StderrProgressReporter::default();
        assert!(!reporter.is_quiet());
    }

    #[test]
    fn test_with_quiet() {
        let reporter = StderrProgressReporter::new().with_quiet(true);
        assert!(reporter.is_quiet());
    }

    #[test]
    fn test_paint_without_color_is_plain() {
        let reporter = StderrProgressReporter::new().with_color(false);
        assert_eq!(reporter.paint_warning("careful"), "careful");
        assert_eq!(reporter.paint_success("done"), "done");
    }

    #[test]
    fn test_paint_with_color_wraps_message() {
        let reporter = StderrProgressReporter::new();
        let painted = reporter.paint_warning("careful");
        assert!(painted.contains("careful"));
        assert_ne!(painted, "careful");
    }

    #[test]
    fn test_report_methods_do_not_panic() {
        let reporter = StderrProgressReporter::new().with_color(false);
        reporter.report("Test message");
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");

        let quiet = StderrProgressReporter::new().with_quiet(true);
        quiet.report("hidden");
        quiet.report_error("hidden");
        quiet.report_completion("hidden");
    }
}
