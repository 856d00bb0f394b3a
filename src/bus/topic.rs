//! Topic parsing
//!
//! A topic names an event, a namespace, or an event inside a namespace.
//! With the default `.` separator:
//!
//! - `.ns` is namespace-only (everything after the leading separator)
//! - `test.ns` is the event `test` in the namespace `ns`; the split happens
//!   at the *last* separator, so `a.b.c` is the event `a.b` in `c`
//! - anything else, including `test`, `.` and `test.`, is a plain event
//!
//! Parsing never fails. Whether a namespace-only topic is acceptable is up
//! to the caller (`trigger` rejects it).

pub const DEFAULT_SEPARATOR: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic<'a> {
    pub event: Option<&'a str>,
    pub namespace: Option<&'a str>,
}

impl<'a> Topic<'a> {
    pub fn parse(topic: &'a str, separator: char) -> Self {
        let sep_len = separator.len_utf8();

        if topic.starts_with(separator) && topic.len() > sep_len {
            return Self {
                event: None,
                namespace: Some(&topic[sep_len..]),
            };
        }

        match topic.rfind(separator) {
            Some(idx) if idx + sep_len != topic.len() => Self {
                event: Some(&topic[..idx]),
                namespace: Some(&topic[idx + sep_len..]),
            },
            _ => Self {
                event: Some(topic),
                namespace: None,
            },
        }
    }

    /// True when the topic addresses a namespace without naming an event.
    pub fn is_namespace_only(&self) -> bool {
        self.event.is_none()
    }
}
