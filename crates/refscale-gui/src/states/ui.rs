/// State shared by every screen.
#[derive(Default)]
pub struct UIState {
    pub log_messages: Vec<String>,
    /// A detection job is running on the worker.
    pub busy: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        tracing::debug!("{msg}");
        self.log_messages.push(msg);
    }

    /// Log a failure. Only a failed detection job clears `busy`.
    pub fn report_error(&mut self, message: &str, detection_failed: bool) {
        if detection_failed {
            self.busy = false;
        }
        tracing::warn!("{message}");
        self.add_log(format!("ERROR: {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrelated_error_keeps_detection_running() {
        let mut state = UIState {
            busy: true,
            ..Default::default()
        };
        state.report_error("Failed to save out.png", false);
        assert!(state.busy);
        assert_eq!(state.log_messages, ["ERROR: Failed to save out.png"]);
    }

    #[test]
    fn test_detection_failure_clears_busy() {
        let mut state = UIState {
            busy: true,
            ..Default::default()
        };
        state.report_error("Detection failed: empty image", true);
        assert!(!state.busy);
        assert_eq!(state.log_messages.len(), 1);
    }
}
