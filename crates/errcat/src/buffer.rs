//! Fixed-capacity message storage.
//!
//! Rendering writes through a [`BoundedWriter`], which copies as much text
//! as fits and silently drops the rest. Truncation always lands on a UTF-8
//! character boundary, so the stored bytes are valid text.

use std::fmt::{self, Debug, Display, Formatter, Write};

/// Upper bound, in bytes, on every rendered message.
pub const MAX_MESSAGE_LEN: usize = 1024;

/// A `fmt::Write` sink over a borrowed byte slice.
///
/// Capacity is the smaller of the slice length and [`MAX_MESSAGE_LEN`].
/// Once a write has been cut short, later writes are dropped too so that
/// no text appears after a gap.
pub(crate) struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl<'a> BoundedWriter<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        let capacity = buf.len().min(MAX_MESSAGE_LEN);
        Self {
            buf: &mut buf[..capacity],
            len: 0,
            truncated: false,
        }
    }

    /// Bytes written so far.
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }

        let room = self.buf.len() - self.len;
        let take = if s.len() <= room {
            s.len()
        } else {
            self.truncated = true;
            floor_char_boundary(s, room)
        };

        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;

        Ok(())
    }
}

/// Largest char boundary in `s` that is `<= index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Caller-owned storage for one rendered message.
///
/// Holds exactly [`MAX_MESSAGE_LEN`] bytes inline and never allocates. A
/// buffer can be reused; each render replaces the previous contents.
///
/// # Example
///
/// ```rust
/// use errcat::{ErrorCode, MessageBuffer};
///
/// let mut buf = MessageBuffer::new();
/// errcat::format_into!(&mut buf, ErrorCode::InvalidPool);
/// assert_eq!(buf.as_str(), "NJS-002: invalid pool");
/// ```
#[derive(Clone)]
pub struct MessageBuffer {
    bytes: [u8; MAX_MESSAGE_LEN],
    len: usize,
}

impl MessageBuffer {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0; MAX_MESSAGE_LEN],
            len: 0,
        }
    }

    /// Replaces the contents with whatever `fill` writes, truncated to
    /// capacity.
    pub(crate) fn fill(&mut self, fill: impl FnOnce(&mut BoundedWriter<'_>)) {
        let mut writer = BoundedWriter::new(&mut self.bytes);
        fill(&mut writer);
        self.len = writer.len();
    }

    /// The rendered text.
    pub fn as_str(&self) -> &str {
        // Only `BoundedWriter` writes here, and it stops on char boundaries.
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    /// The rendered bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Length of the rendered text in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been rendered yet.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Always [`MAX_MESSAGE_LEN`].
    pub const fn capacity(&self) -> usize {
        MAX_MESSAGE_LEN
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for MessageBuffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for MessageBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for MessageBuffer {}

impl Display for MessageBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for MessageBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuffer")
            .field("message", &self.as_str())
            .finish()
    }
}
