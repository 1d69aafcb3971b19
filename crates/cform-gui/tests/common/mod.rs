//! User-level test harness for the contact form.
//!
//! `Screen` drives the application the way a user would (keystroke by
//! keystroke, clicking the button) and answers queries against the rendered
//! document: by visible text, by input label, by test id.

#![allow(dead_code)]

use cform_gui::view::{Document, Node};
use cform_gui::{App, ContactFormMessage, Message, Settings};
use cform_model::Field;
use regex::Regex;

/// How a text query matches a text node.
pub enum TextMatch {
    /// Whole text equals the string, ignoring surrounding whitespace.
    Exact(String),
    /// Regex matches anywhere in the text.
    Pattern(Regex),
}

impl TextMatch {
    fn matches(&self, text: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => text.trim() == expected.as_str(),
            TextMatch::Pattern(re) => re.is_match(text),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(s: &str) -> Self {
        TextMatch::Exact(s.to_string())
    }
}

/// Case-insensitive pattern matcher.
pub fn re(pattern: &str) -> TextMatch {
    TextMatch::Pattern(Regex::new(&format!("(?i){pattern}")).unwrap())
}

pub struct Screen {
    app: App,
}

impl Screen {
    /// Mount the form with default settings.
    pub fn render() -> Self {
        Self::render_with(Settings::default())
    }

    /// Mount the form with the given settings.
    pub fn render_with(settings: Settings) -> Self {
        let (app, _task) = App::with_settings(settings);
        Self { app }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn document(&self) -> Document {
        Document::render(&self.app.state.contact_form)
    }

    /// The single input whose label matches `pattern` (case-insensitive).
    pub fn get_by_label(&self, pattern: &str) -> Field {
        let matcher = re(pattern);
        let matches: Vec<Field> = self
            .document()
            .nodes()
            .iter()
            .filter_map(|node| match node {
                Node::Input { field, label, .. } if matcher.matches(label) => Some(*field),
                _ => None,
            })
            .collect();
        assert_eq!(
            matches.len(),
            1,
            "expected one input labeled /{pattern}/i, found {matches:?}"
        );
        matches[0]
    }

    /// Current value shown in an input.
    pub fn value(&self, field: Field) -> String {
        match self.document().input(field) {
            Some(Node::Input { value, .. }) => value.clone(),
            _ => panic!("no input for {field}"),
        }
    }

    /// Type into an input one character at a time, appending to its value.
    pub fn type_text(&mut self, field: Field, text: &str) {
        let mut value = self.value(field);
        for ch in text.chars() {
            value.push(ch);
            self.dispatch(Message::ContactForm(ContactFormMessage::FieldChanged {
                field,
                value: value.clone(),
            }));
        }
    }

    /// Click the form's only button.
    pub fn click_button(&mut self) {
        let buttons = self
            .document()
            .nodes()
            .iter()
            .filter(|node| matches!(node, Node::Button { .. }))
            .count();
        assert_eq!(buttons, 1, "expected exactly one button");
        self.dispatch(Message::submit());
    }

    pub fn dispatch(&mut self, message: Message) {
        let _ = self.app.update(message);
    }

    /// Every text node matching.
    pub fn query_all_by_text(&self, matcher: impl Into<TextMatch>) -> Vec<String> {
        let matcher = matcher.into();
        self.document()
            .texts()
            .filter(|text| matcher.matches(text))
            .map(str::to_string)
            .collect()
    }

    /// The matching text node, if any; panics on more than one.
    pub fn query_by_text(&self, matcher: impl Into<TextMatch>) -> Option<String> {
        let mut found = self.query_all_by_text(matcher);
        assert!(found.len() <= 1, "multiple text nodes matched: {found:?}");
        found.pop()
    }

    /// The matching text node; panics unless exactly one matches.
    pub fn get_by_text(&self, matcher: impl Into<TextMatch>) -> String {
        self.query_by_text(matcher).expect("no text node matched")
    }

    pub fn query_by_test_id(&self, test_id: &str) -> Option<Node> {
        self.document().by_test_id(test_id).cloned()
    }
}
