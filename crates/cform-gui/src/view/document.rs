//! Document tree for the contact form.
//!
//! The view is derived in two steps: [`Document::render`] turns state into a
//! flat list of [`Node`]s, and `view_contact_form` turns nodes into iced
//! widgets. The document is what tests and automation query: it exposes
//! the same labels, texts and test ids a user or screen reader would see.

use std::fmt;

use cform_model::Field;

use crate::state::ContactFormState;

/// Page header text.
pub const HEADER_TEXT: &str = "Contact Form";

/// Submit button label.
pub const SUBMIT_LABEL: &str = "Submit";

/// Heading above the submitted-values summary.
pub const SUMMARY_HEADING: &str = "You Submitted:";

/// One visible element of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Page header.
    Heading(String),
    /// Labeled text input.
    Input {
        field: Field,
        label: String,
        value: String,
        placeholder: String,
        invalid: bool,
    },
    /// Inline validation message shown under an input.
    ErrorText { field: Field, text: String },
    /// The submit button.
    Button { label: String },
    /// Heading of the summary view.
    SummaryHeading(String),
    /// One submitted value, shown as a label and a value.
    SummaryEntry {
        field: Field,
        label: String,
        value: String,
        test_id: String,
    },
}

impl Node {
    /// Text nodes this element contributes, in reading order.
    ///
    /// Inputs contribute their label only; typed values are not text.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Node::Heading(text) | Node::SummaryHeading(text) => vec![text.as_str()],
            Node::Input { label, .. } | Node::Button { label } => vec![label.as_str()],
            Node::ErrorText { text, .. } => vec![text.as_str()],
            Node::SummaryEntry { label, value, .. } => vec![label.as_str(), value.as_str()],
        }
    }

    /// Test id of a summary entry.
    pub fn test_id(&self) -> Option<&str> {
        match self {
            Node::SummaryEntry { test_id, .. } => Some(test_id.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Heading(text) => write!(f, "# {text}"),
            Node::Input {
                label,
                value,
                invalid,
                ..
            } => {
                let marker = if *invalid { " !" } else { "" };
                write!(f, "[{label}] {value:?}{marker}")
            }
            Node::ErrorText { text, .. } => write!(f, "  {text}"),
            Node::Button { label } => write!(f, "<{label}>"),
            Node::SummaryHeading(text) => write!(f, "## {text}"),
            Node::SummaryEntry {
                label,
                value,
                test_id,
                ..
            } => write!(f, "{label} {value} ({test_id})"),
        }
    }
}

/// Rendered contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Render the form.
    ///
    /// Inputs appear in field order, each followed by its error (if any);
    /// then the button; then the summary when a submission exists.
    pub fn render(state: &ContactFormState) -> Self {
        let mut nodes = vec![Node::Heading(HEADER_TEXT.to_string())];

        for &field in Field::all() {
            let issue = state.error_for(field);
            nodes.push(Node::Input {
                field,
                label: field.label().to_string(),
                value: state.form.value(field).to_string(),
                placeholder: field.placeholder().to_string(),
                invalid: issue.is_some(),
            });
            if let Some(issue) = issue {
                nodes.push(Node::ErrorText {
                    field,
                    text: issue.display_text(),
                });
            }
        }

        nodes.push(Node::Button {
            label: SUBMIT_LABEL.to_string(),
        });

        if let Some(submitted) = &state.submitted {
            nodes.push(Node::SummaryHeading(SUMMARY_HEADING.to_string()));
            for (field, value) in submitted.entries() {
                nodes.push(Node::SummaryEntry {
                    field,
                    label: format!("{}:", field.label()),
                    value: value.to_string(),
                    test_id: summary_test_id(field),
                });
            }
        }

        Self { nodes }
    }

    /// All nodes in render order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Consume the document, yielding its nodes.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Every text node, in reading order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().flat_map(Node::texts)
    }

    /// Rendered error messages.
    pub fn error_texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|node| match node {
            Node::ErrorText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Input node for a field.
    pub fn input(&self, field: Field) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|node| matches!(node, Node::Input { field: f, .. } if *f == field))
    }

    /// Node carrying the given test id.
    pub fn by_test_id(&self, test_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.test_id() == Some(test_id))
    }

    /// Whether the summary view is present.
    pub fn has_summary(&self) -> bool {
        self.nodes
            .iter()
            .any(|node| matches!(node, Node::SummaryHeading(_)))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}

/// Test id of a summary entry (`firstnameDisplay`, `messageDisplay`, ...).
pub fn summary_test_id(field: Field) -> String {
    format!("{}Display", field.name().to_lowercase())
}
