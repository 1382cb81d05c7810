// crates/shared-kernel/src/value_objects/line.rs

/// One line of text exactly as read, trailing terminator included.
///
/// Equality is on the decoded text as-is: `"a\n"`, `"a\r\n"` and `"a"`
/// are three different lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Line(String);

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}
