/// ProgressReporter port for reporting progress during operations
///
/// Progress goes to a side channel (e.g. stderr) so the rendered graph on
/// stdout stays deterministic.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
