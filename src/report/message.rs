use super::escape::escape;
use std::fmt;
use std::io::{self, Write};

/// Opener that marks a line as a service message.
pub const MESSAGE_OPENER: &str = "##teamcity";

/// Service message names understood by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    TestCount,
    TestSuiteStarted,
    TestSuiteFinished,
    TestStarted,
    TestFinished,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::TestCount => "testCount",
            MessageKind::TestSuiteStarted => "testSuiteStarted",
            MessageKind::TestSuiteFinished => "testSuiteFinished",
            MessageKind::TestStarted => "testStarted",
            MessageKind::TestFinished => "testFinished",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute value. Text is escaped when written, integers are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Int(u64),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(u64::from(value))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Int(value as u64)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(&escape(text)),
            Value::Int(number) => write!(f, "{}", number),
        }
    }
}

/// A single service message: a name plus ordered attributes.
///
/// Keys are fixed literals owned by this crate and are written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceMessage {
    kind: MessageKind,
    attributes: Vec<(&'static str, Value)>,
}

impl ServiceMessage {
    pub fn new(kind: MessageKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, keeping insertion order
    pub fn attr(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    /// Append `flowId` when a non-zero flow id has been established
    pub fn with_flow_id(self, flow_id: Option<u32>) -> Self {
        match flow_id {
            Some(id) if id != 0 => self.attr("flowId", id),
            _ => self,
        }
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    /// Write the rendered message to `out`
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for ServiceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}[{}", MESSAGE_OPENER, self.kind)?;
        for (key, value) in &self.attributes {
            write!(f, " {}='{}'", key, value)?;
        }
        f.write_str("]\n")
    }
}
