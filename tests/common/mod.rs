#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Write;
use twsconf::ports::log_port::LogPort;

/// Log sink that keeps every line so tests can inspect what was reported.
#[derive(Default)]
pub struct RecordingLog {
    pub info: RefCell<Vec<String>>,
    pub warn: RefCell<Vec<String>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all_lines(&self) -> Vec<String> {
        self.info
            .borrow()
            .iter()
            .chain(self.warn.borrow().iter())
            .cloned()
            .collect()
    }
}

impl LogPort for RecordingLog {
    fn info(&self, message: &str) {
        self.info.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warn.borrow_mut().push(message.to_string());
    }
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
