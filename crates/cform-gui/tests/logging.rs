//! Log output of the form path.
//!
//! The global subscriber can only be installed once per process, so this
//! file holds a single test.

use std::io;
use std::sync::{Arc, Mutex};

use cform_gui::logging::{LogConfig, LogFormat, init_logging_with_writer};
use cform_gui::{App, Message};
use cform_model::Field;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_submission_is_logged_with_values_redacted() {
    let writer = CaptureWriter::default();
    let config = LogConfig::default()
        .with_level(tracing::Level::INFO)
        .with_format(LogFormat::Json);
    init_logging_with_writer(&config, writer.clone());

    let mut app = App::default();
    for (field, value) in [
        (Field::FirstName, "William"),
        (Field::LastName, "Williams"),
        (Field::Email, "wmoon@yahoo.com"),
    ] {
        let _ = app.update(Message::field_changed(field, value.to_string()));
    }
    let _ = app.update(Message::submit());

    let output = writer.contents();
    let submitted: serde_json::Value = output
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|event| event["fields"]["message"] == "contact form submitted")
        .expect("submission event logged");

    assert_eq!(submitted["level"], "INFO");
    assert_eq!(submitted["fields"]["email"], "[REDACTED]");
    assert_eq!(submitted["fields"]["has_message"], false);
    assert!(!output.contains("wmoon@yahoo.com"));
}
