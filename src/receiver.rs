//! # Receiver
//!
//! Turns a raw byte stream into handler callbacks. Bytes go through a [`Framer`], each
//! candidate sentence is validated and decoded on the spot, and the outcome is reported
//! to an [`NmeaHandler`] before [`Receiver::receive`] returns.
//!
//! Nothing here fails: malformed input is reported through the diagnostic callbacks
//! and the stream carries on with the next sentence.

use core::ops::Range;

use crate::{
    nmea_content::{GGA, GSA, GST, GSV, HDT, NmeaSentence, RMC, SentenceKind, VTG},
    nmea0183::{
        FrameViolation, FramingMode, MIN_SENTENCE_LEN, checksum, format_checksum, parse_checksum,
        read_checksum_lossy, structural_violations,
    },
    stream::{DEFAULT_CAPACITY, Framer},
};

/// Callbacks invoked by a [`Receiver`].
///
/// Every method has an empty default body, so an implementation only overrides what
/// it is interested in. Decoded sentences arrive through [`on_sentence`], which by
/// default routes each variant to its own method.
///
/// For every diagnostic callback `raw` is the whole candidate as framed, starting with
/// `$` and normally ending with `\r\n`, and `span` is a range into `raw`.
///
/// [`on_sentence`]: NmeaHandler::on_sentence
pub trait NmeaHandler {
    fn on_gga(&mut self, _sentence: GGA) {}
    fn on_gsa(&mut self, _sentence: GSA) {}
    fn on_gst(&mut self, _sentence: GST) {}
    fn on_gsv(&mut self, _sentence: GSV) {}
    fn on_hdt(&mut self, _sentence: HDT) {}
    fn on_rmc(&mut self, _sentence: RMC) {}
    fn on_vtg(&mut self, _sentence: VTG) {}

    /// Called once per successfully decoded sentence.
    fn on_sentence(&mut self, sentence: NmeaSentence) {
        match sentence {
            NmeaSentence::GGA(s) => self.on_gga(s),
            NmeaSentence::GSA(s) => self.on_gsa(s),
            NmeaSentence::GST(s) => self.on_gst(s),
            NmeaSentence::GSV(s) => self.on_gsv(s),
            NmeaSentence::HDT(s) => self.on_hdt(s),
            NmeaSentence::RMC(s) => self.on_rmc(s),
            NmeaSentence::VTG(s) => self.on_vtg(s),
        }
    }

    /// The transmitted checksum does not match the payload.
    ///
    /// `span` covers the payload between `$` and `*`, `expected` is the checksum
    /// computed over it and `actual` the one found on the wire. Under
    /// [`FramingMode::CheckAll`] checksum characters that are not hex digits also land
    /// here, with each bad character read as the nibble `-1`.
    fn on_checksum_failed(
        &mut self,
        _raw: &[u8],
        _span: Range<usize>,
        _expected: u8,
        _actual: u8,
    ) {}

    /// The candidate is malformed or a field could not be decoded.
    ///
    /// `span` covers the whole candidate. Under [`FramingMode::CheckAll`] a single
    /// candidate may be dropped several times, once per structural violation.
    fn on_dropped(&mut self, _raw: &[u8], _span: Range<usize>, _reason: &str) {}

    /// The checksum is valid but the sentence type is not one this crate decodes.
    ///
    /// `span` covers the whole candidate.
    fn on_ignored(&mut self, _raw: &[u8], _span: Range<usize>) {}
}

impl<H: NmeaHandler + ?Sized> NmeaHandler for &mut H {
    fn on_gga(&mut self, sentence: GGA) {
        (**self).on_gga(sentence)
    }

    fn on_gsa(&mut self, sentence: GSA) {
        (**self).on_gsa(sentence)
    }

    fn on_gst(&mut self, sentence: GST) {
        (**self).on_gst(sentence)
    }

    fn on_gsv(&mut self, sentence: GSV) {
        (**self).on_gsv(sentence)
    }

    fn on_hdt(&mut self, sentence: HDT) {
        (**self).on_hdt(sentence)
    }

    fn on_rmc(&mut self, sentence: RMC) {
        (**self).on_rmc(sentence)
    }

    fn on_vtg(&mut self, sentence: VTG) {
        (**self).on_vtg(sentence)
    }

    fn on_sentence(&mut self, sentence: NmeaSentence) {
        (**self).on_sentence(sentence)
    }

    fn on_checksum_failed(&mut self, raw: &[u8], span: Range<usize>, expected: u8, actual: u8) {
        (**self).on_checksum_failed(raw, span, expected, actual)
    }

    fn on_dropped(&mut self, raw: &[u8], span: Range<usize>, reason: &str) {
        (**self).on_dropped(raw, span, reason)
    }

    fn on_ignored(&mut self, raw: &[u8], span: Range<usize>) {
        (**self).on_ignored(raw, span)
    }
}

/// Routes every decoded sentence to a single closure.
///
/// Diagnostics are not forwarded; the receiver still logs them through `tracing`.
///
/// ```rust
/// use nmea0183_receiver::{CallbackHandler, NmeaSentence, Receiver, SentenceKind};
///
/// let mut kinds = Vec::new();
/// let mut receiver = Receiver::new(CallbackHandler(|sentence: NmeaSentence| {
///     kinds.push(sentence.kind())
/// }));
///
/// receiver.receive(b"$GNHDT,75.5554,T*28\r\n");
/// drop(receiver);
///
/// assert_eq!(kinds, [SentenceKind::HDT]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CallbackHandler<F>(pub F);

impl<F: FnMut(NmeaSentence)> NmeaHandler for CallbackHandler<F> {
    fn on_sentence(&mut self, sentence: NmeaSentence) {
        (self.0)(sentence)
    }
}

/// Configures and creates a [`Receiver`].
///
/// ```rust
/// use nmea0183_receiver::{FramingMode, NmeaHandler, ReceiverBuilder};
///
/// struct Quiet;
/// impl NmeaHandler for Quiet {}
///
/// let receiver = ReceiverBuilder::new()
///     .framing_mode(FramingMode::Strict)
///     .build_with_capacity::<_, 128>(Quiet);
///
/// assert_eq!(receiver.framing_mode(), FramingMode::Strict);
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct ReceiverBuilder {
    framing_mode: FramingMode,
}

impl ReceiverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets what happens after a structural violation, [`FramingMode::CheckAll`] by default.
    pub fn framing_mode(mut self, mode: FramingMode) -> Self {
        self.framing_mode = mode;
        self
    }

    /// Creates a receiver with a [`DEFAULT_CAPACITY`] byte buffer.
    pub fn build<H: NmeaHandler>(self, handler: H) -> Receiver<H> {
        self.build_with_capacity(handler)
    }

    /// Creates a receiver whose framer buffers at most `N` bytes per sentence.
    pub fn build_with_capacity<H: NmeaHandler, const N: usize>(self, handler: H) -> Receiver<H, N> {
        Receiver {
            framer: Framer::default(),
            handler,
            framing_mode: self.framing_mode,
        }
    }
}

/// Stream receiver and sentence dispatcher.
///
/// Candidates are processed in four steps:
/// 1. Structural checks: leading `$`, `*` before the checksum, trailing `\r\n`.
/// 2. Checksum validation, reported through [`NmeaHandler::on_checksum_failed`].
/// 3. Tokenization of the payload on `,`, keeping empty fields.
/// 4. Classification by the last three characters of the tag, then decoding.
///
/// # Example
///
/// ```rust
/// use nmea0183_receiver::{GGA, NmeaHandler, Receiver};
///
/// #[derive(Default)]
/// struct Fixes(Vec<GGA>);
///
/// impl NmeaHandler for Fixes {
///     fn on_gga(&mut self, sentence: GGA) {
///         self.0.push(sentence);
///     }
/// }
///
/// let mut receiver = Receiver::new(Fixes::default());
/// receiver.receive(b"$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76\r\n");
///
/// let fixes = receiver.into_handler();
/// assert_eq!(fixes.0.len(), 1);
/// assert_eq!(fixes.0[0].satellite_count, 8);
/// ```
#[derive(Debug)]
pub struct Receiver<H, const N: usize = DEFAULT_CAPACITY> {
    framer: Framer<N>,
    handler: H,
    framing_mode: FramingMode,
}

impl<H: NmeaHandler> Receiver<H> {
    /// Creates a receiver with the default configuration.
    pub fn new(handler: H) -> Self {
        ReceiverBuilder::new().build(handler)
    }
}

impl<H: NmeaHandler, const N: usize> Receiver<H, N> {
    /// Feeds bytes from the stream.
    ///
    /// Chunks may split sentences anywhere. Callbacks for every sentence completed by
    /// `bytes` run before this returns, in stream order.
    pub fn receive(&mut self, bytes: &[u8]) {
        let Self {
            framer,
            handler,
            framing_mode,
        } = self;

        framer.append(bytes, |raw| dispatch(*framing_mode, handler, raw));
    }

    /// Discards a partially received sentence.
    pub fn reset(&mut self) {
        self.framer.reset();
    }

    /// Bytes of the sentence currently being assembled.
    pub fn buffered(&self) -> &[u8] {
        self.framer.buffered()
    }

    pub fn framing_mode(&self) -> FramingMode {
        self.framing_mode
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }
}

fn drop_sentence(handler: &mut impl NmeaHandler, raw: &[u8], reason: &str) {
    tracing::warn!(sentence = %raw.escape_ascii(), reason, "dropping sentence");
    handler.on_dropped(raw, 0..raw.len(), reason);
}

fn dispatch(mode: FramingMode, handler: &mut impl NmeaHandler, raw: &[u8]) {
    let len = raw.len();
    if len < MIN_SENTENCE_LEN {
        drop_sentence(handler, raw, &FrameViolation::InsufficientBytes.to_string());
        return;
    }

    for violation in structural_violations(raw) {
        drop_sentence(handler, raw, &violation.to_string());
        if mode == FramingMode::Strict {
            return;
        }
    }

    let span = 1..len - 5;
    let digits = [raw[len - 4], raw[len - 3]];
    let (actual, digits_valid) = match parse_checksum(&digits) {
        Some(actual) => (actual, true),
        None if mode == FramingMode::Strict => {
            drop_sentence(handler, raw, &FrameViolation::InvalidChecksumDigits.to_string());
            return;
        }
        None => (read_checksum_lossy(digits), false),
    };

    let expected = checksum(&raw[span.clone()]);
    if expected != actual || !digits_valid {
        tracing::warn!(
            sentence = %raw.escape_ascii(),
            expected = %format_checksum(expected),
            actual = %format_checksum(actual),
            "checksum mismatch"
        );
        handler.on_checksum_failed(raw, span, expected, actual);
        return;
    }

    let payload = match core::str::from_utf8(&raw[span.clone()]) {
        Ok(payload) if payload.is_ascii() => payload,
        _ => {
            drop_sentence(handler, raw, &FrameViolation::NonAscii.to_string());
            return;
        }
    };

    let tokens: Vec<&str> = payload.split(',').collect();
    let tag = tokens[0];

    let Some(kind) = SentenceKind::from_tag(tag) else {
        tracing::debug!(tag, "ignoring unsupported sentence type");
        handler.on_ignored(raw, 0..len);
        return;
    };

    match NmeaSentence::decode_as(kind, &tokens) {
        Ok(sentence) => {
            tracing::debug!(%kind, tag, "decoded sentence");
            handler.on_sentence(sentence);
        }
        Err(error) => drop_sentence(handler, raw, &error.to_string()),
    }
}
