//! # Stream Framer
//!
//! Splits an unframed byte stream into candidate sentences. A candidate starts at the
//! most recent `$` and ends with the first `\n` after it; everything outside of a
//! candidate is discarded.
//!
//! The framer does not validate what it emits. Checksums and delimiters are checked by
//! the [`Receiver`](crate::Receiver).

/// Buffer size used by [`Framer::new`], well above the 82 bytes allowed by the standard.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Where the framer is within a sentence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FramerState {
    /// Waiting for a `$`
    #[default]
    Idle,
    /// Buffering bytes until `\n`
    Payload,
}

/// Accumulates bytes into candidate sentences with a fixed-size buffer.
///
/// When the buffer fills up before a `\n` arrives, the partial sentence is dropped
/// silently and the framer starts over with the next byte.
///
/// ```rust
/// use nmea0183_receiver::Framer;
///
/// let mut framer = Framer::new();
/// let mut sentences = Vec::new();
///
/// framer.append(b"noise$GPHDT,75.5664,T*36\r\n$GPHD", |sentence| {
///     sentences.push(sentence.to_vec())
/// });
///
/// assert_eq!(sentences, [b"$GPHDT,75.5664,T*36\r\n".to_vec()]);
/// assert_eq!(framer.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Framer<const N: usize = DEFAULT_CAPACITY> {
    buffer: heapless::Vec<u8, N>,
    state: FramerState,
}

impl Framer<DEFAULT_CAPACITY> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<const N: usize> Default for Framer<N> {
    fn default() -> Self {
        Self {
            buffer: heapless::Vec::new(),
            state: FramerState::Idle,
        }
    }
}

impl<const N: usize> Framer<N> {
    /// Feeds a single byte, calling `on_sentence` if it completes a sentence.
    pub fn push(&mut self, byte: u8, mut on_sentence: impl FnMut(&[u8])) {
        self.step(byte, &mut on_sentence);
    }

    /// Feeds every byte of `bytes` in order.
    ///
    /// `on_sentence` runs once per completed sentence, before the next byte is read.
    pub fn append(&mut self, bytes: &[u8], mut on_sentence: impl FnMut(&[u8])) {
        for &byte in bytes {
            self.step(byte, &mut on_sentence);
        }
    }

    fn step(&mut self, byte: u8, on_sentence: &mut impl FnMut(&[u8])) {
        if self.buffer.is_full() {
            tracing::trace!(capacity = N, "framer buffer full, dropping partial sentence");
            self.reset();
        }

        match (self.state, byte) {
            (FramerState::Idle, b'$') => {
                self.store(byte);
                self.state = FramerState::Payload;
            }
            (FramerState::Idle, _) => {}
            (FramerState::Payload, b'$') => {
                tracing::trace!(
                    discarded = self.buffer.len(),
                    "start delimiter inside sentence, resynchronizing"
                );
                self.buffer.clear();
                self.store(byte);
            }
            (FramerState::Payload, b'\n') => {
                self.store(byte);
                on_sentence(&self.buffer);
                self.reset();
            }
            (FramerState::Payload, _) => self.store(byte),
        }
    }

    fn store(&mut self, byte: u8) {
        // Fullness is handled at the top of `step`, and N == 0 can never buffer.
        let _ = self.buffer.push(byte);
    }

    /// Drops any buffered partial sentence.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = FramerState::Idle;
    }

    /// The bytes of the sentence currently being assembled.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Bytes left before the next overflow reset.
    pub fn available(&self) -> usize {
        N - self.buffer.len()
    }

    pub fn state(&self) -> FramerState {
        self.state
    }
}
