use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::Color;

/// Action taken by the client when a span is clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickAction {
    RunCommand,
    SuggestCommand,
    OpenUrl,
}

/// A click binding attached to a span
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum HoverAction {
    ShowText,
}

/// A hover tooltip attached to a span. Serialized in the `value` form,
/// which every client version in circulation accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct HoverEvent {
    action: HoverAction,
    value: String,
}

/// A run of text with one set of styling and interaction hints.
///
/// Construction is builder-style, mirroring how the host's own text API
/// chains style calls:
///
/// ```
/// use motd_text::{ClickAction, Color, Span};
///
/// let span = Span::colored("[Main]", Color::Yellow)
///     .hover("the main server")
///     .click(ClickAction::RunCommand, "/server Main");
/// assert_eq!(span.to_legacy(), "§e[Main]§r");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    click_event: Option<ClickEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hover_event: Option<HoverEvent>,
}

impl Span {
    /// An unstyled span
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            click_event: None,
            hover_event: None,
        }
    }

    /// A span rendered in the given color
    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self::plain(text).color(color)
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Attach a hover tooltip
    pub fn hover(mut self, text: impl Into<String>) -> Self {
        self.hover_event = Some(HoverEvent {
            action: HoverAction::ShowText,
            value: text.into(),
        });
        self
    }

    /// Attach a click binding
    pub fn click(mut self, action: ClickAction, value: impl Into<String>) -> Self {
        self.click_event = Some(ClickEvent {
            action,
            value: value.into(),
        });
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn click_event(&self) -> Option<&ClickEvent> {
        self.click_event.as_ref()
    }

    /// Hover tooltip content, if one is attached
    pub fn hover_text(&self) -> Option<&str> {
        self.hover_event.as_ref().map(|h| h.value.as_str())
    }

    /// Legacy rendering of this span alone. Colored runs are explicitly
    /// terminated with `§r` so adjacent unstyled text stays unstyled.
    pub fn to_legacy(&self) -> String {
        match self.color {
            Some(color) => format!("\u{a7}{}{}\u{a7}r", color.code(), self.text),
            None => self.text.clone(),
        }
    }
}

/// An ordered sequence of spans, sent to a recipient as one chat message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append
    pub fn with(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Append every span of `other` to this line
    pub fn append(&mut self, other: Line) {
        self.spans.extend(other.spans);
    }

    /// Join spans with a plain-text separator between each pair
    pub fn join(separator: &str, items: impl IntoIterator<Item = Span>) -> Self {
        let mut line = Self::new();
        for span in items {
            if !line.spans.is_empty() {
                line.push(Span::plain(separator));
            }
            line.push(span);
        }
        line
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Render with legacy `§` format codes
    pub fn to_legacy(&self) -> String {
        self.spans.iter().map(Span::to_legacy).collect()
    }

    /// Render the bare text, styling and interaction hints stripped
    pub fn to_plain(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

impl FromIterator<Span> for Line {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self {
            spans: iter.into_iter().collect(),
        }
    }
}

// The component tree the host's messaging facility expects: a blank root
// with the styled spans as `extra` children, so no span inherits another's
// styling.
impl Serialize for Line {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("text", "")?;
        map.serialize_entry("extra", &self.spans)?;
        map.end()
    }
}
