//! Human-readable throw summaries and the chat card built from them.

use core::fmt;

use serde::Serialize;

/// One `Label: value` row of a summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

/// Ordered rendering of a resolved throw.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ThrowSummary {
    pub title: String,
    pub lines: Vec<SummaryLine>,
}

impl ThrowSummary {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, label: &'static str, value: impl Into<String>) {
        self.lines.push(SummaryLine {
            label,
            value: value.into(),
        });
    }

    /// Value of the first line with the given label.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }

    /// Chat card markup. All interpolated text is escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"repugnant-chat\">\n");
        html.push_str(&format!("  <h3>{}</h3>\n", escape_html(&self.title)));
        for line in &self.lines {
            html.push_str(&format!(
                "  <p><strong>{}:</strong> {}</p>\n",
                line.label,
                escape_html(&line.value)
            ));
        }
        html.push_str("</div>");
        html
    }
}

impl fmt::Display for ThrowSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for line in &self.lines {
            write!(f, "\n{}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
