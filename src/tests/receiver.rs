use core::ops::Range;

use assert_matches::assert_matches;

use crate::{FramingMode, NmeaHandler, NmeaSentence, Receiver, ReceiverBuilder, SentenceKind};

const SAMPLES: [(&[u8], SentenceKind); 7] = [
    (
        b"$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76\r\n",
        SentenceKind::GGA,
    ),
    (
        b"$GPGSA,A,3,10,07,05,02,29,04,08,13,,,,,1.72,1.03,1.38*0A\r\n",
        SentenceKind::GSA,
    ),
    (
        b"$GNGST,143333.00,7.38,1.49,1.30,68.1409,1.47,1.33,2.07*4A\r\n",
        SentenceKind::GST,
    ),
    (
        b"$GPGSV,3,1,11,10,63,137,17,07,61,098,15,05,59,290,20,08,54,157,30*70\r\n",
        SentenceKind::GSV,
    ),
    (b"$GNHDT,75.5554,T*28\r\n", SentenceKind::HDT),
    (
        b"$GPRMC,092750.000,A,5321.6802,N,00630.3372,W,0.02,31.66,280511,,,A*43\r\n",
        SentenceKind::RMC,
    ),
    (
        b"$GPVTG,172.516,T,155.295,M,0.049,N,0.090,K,D*2B\r\n",
        SentenceKind::VTG,
    ),
];

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Decoded(SentenceKind),
    ChecksumFailed {
        span: Range<usize>,
        expected: u8,
        actual: u8,
    },
    Dropped {
        span: Range<usize>,
        reason: String,
    },
    Ignored {
        raw: Vec<u8>,
        span: Range<usize>,
    },
}

#[derive(Debug, Default)]
struct Recorder {
    events: Vec<Event>,
    sentences: Vec<NmeaSentence>,
}

impl NmeaHandler for Recorder {
    fn on_gga(&mut self, sentence: crate::GGA) {
        self.record(sentence.into());
    }

    fn on_gsa(&mut self, sentence: crate::GSA) {
        self.record(sentence.into());
    }

    fn on_gst(&mut self, sentence: crate::GST) {
        self.record(sentence.into());
    }

    fn on_gsv(&mut self, sentence: crate::GSV) {
        self.record(sentence.into());
    }

    fn on_hdt(&mut self, sentence: crate::HDT) {
        self.record(sentence.into());
    }

    fn on_rmc(&mut self, sentence: crate::RMC) {
        self.record(sentence.into());
    }

    fn on_vtg(&mut self, sentence: crate::VTG) {
        self.record(sentence.into());
    }

    fn on_checksum_failed(&mut self, _raw: &[u8], span: Range<usize>, expected: u8, actual: u8) {
        self.events.push(Event::ChecksumFailed {
            span,
            expected,
            actual,
        });
    }

    fn on_dropped(&mut self, _raw: &[u8], span: Range<usize>, reason: &str) {
        self.events.push(Event::Dropped {
            span,
            reason: reason.to_owned(),
        });
    }

    fn on_ignored(&mut self, raw: &[u8], span: Range<usize>) {
        self.events.push(Event::Ignored {
            raw: raw.to_vec(),
            span,
        });
    }
}

impl Recorder {
    fn record(&mut self, sentence: NmeaSentence) {
        self.events.push(Event::Decoded(sentence.kind()));
        self.sentences.push(sentence);
    }
}

fn receive(mode: FramingMode, bytes: &[u8]) -> Recorder {
    let mut receiver = ReceiverBuilder::new()
        .framing_mode(mode)
        .build(Recorder::default());
    receiver.receive(bytes);
    receiver.into_handler()
}

fn dropped(len: usize, reason: &str) -> Event {
    Event::Dropped {
        span: 0..len,
        reason: reason.to_owned(),
    }
}

#[test]
fn test_each_sample_reaches_its_handler() {
    for (sentence, kind) in SAMPLES {
        let recorder = receive(FramingMode::CheckAll, sentence);
        assert_eq!(
            recorder.events,
            [Event::Decoded(kind)],
            "{}",
            sentence.escape_ascii()
        );
    }
}

#[test]
fn test_samples_reencode_to_the_same_wire_form() {
    let recorder = receive(FramingMode::CheckAll, &SAMPLES[4].0);
    assert_matches!(&recorder.sentences[..], [NmeaSentence::HDT(hdt)] if hdt.heading == 75.5554);
    assert_eq!(
        recorder.sentences[0].to_sentence().as_bytes(),
        SAMPLES[4].0
    );

    let recorder = receive(FramingMode::CheckAll, &SAMPLES[0].0);
    assert_eq!(recorder.sentences[0].to_string().as_bytes(), SAMPLES[0].0);
}

#[test]
fn test_stream_of_samples() {
    let mut stream = b"garbage\r\n".to_vec();
    for (sentence, _) in SAMPLES {
        stream.extend_from_slice(sentence);
    }

    let recorder = receive(FramingMode::CheckAll, &stream);
    let kinds: Vec<_> = SAMPLES
        .iter()
        .map(|&(_, kind)| Event::Decoded(kind))
        .collect();
    assert_eq!(recorder.events, kinds);
}

#[test]
fn test_chunked_input() {
    let mut receiver = Receiver::new(Recorder::default());

    for chunk in SAMPLES[3].0.chunks(5) {
        assert!(receiver.handler().events.is_empty());
        receiver.receive(chunk);
    }

    assert_eq!(
        receiver.handler().events,
        [Event::Decoded(SentenceKind::GSV)]
    );
    assert!(receiver.buffered().is_empty());
}

#[test]
fn test_corrupted_checksum() {
    let recorder = receive(FramingMode::CheckAll, b"$GNHDT,75.5554,T*29\r\n");
    assert_eq!(
        recorder.events,
        [Event::ChecksumFailed {
            span: 1..16,
            expected: 0x28,
            actual: 0x29,
        }]
    );

    let recorder = receive(FramingMode::CheckAll, b"$GNHDT,75.5555,T*28\r\n");
    assert_matches!(
        &recorder.events[..],
        [Event::ChecksumFailed { expected: 0x29, actual: 0x28, .. }]
    );
}

#[test]
fn test_lowercase_checksum_digits() {
    let recorder = receive(
        FramingMode::CheckAll,
        b"$GPGSA,A,3,10,07,05,02,29,04,08,13,,,,,1.72,1.03,1.38*0a\r\n",
    );
    assert_eq!(recorder.events, [Event::Decoded(SentenceKind::GSA)]);
}

#[test]
fn test_unsupported_sentence_type() {
    let raw = b"$XXZZZ,1,2*59\r\n";
    let recorder = receive(FramingMode::CheckAll, raw);
    assert_eq!(
        recorder.events,
        [Event::Ignored {
            raw: raw.to_vec(),
            span: 0..15,
        }]
    );

    let recorder = receive(FramingMode::CheckAll, b"$XXZZZ,1,2*00\r\n");
    assert_eq!(
        recorder.events,
        [Event::ChecksumFailed {
            span: 1..10,
            expected: 0x59,
            actual: 0x00,
        }]
    );

    let recorder = receive(FramingMode::CheckAll, b"$PGRME,15.0,M,45.0,M,25.0,M*1C\r\n");
    assert_matches!(&recorder.events[..], [Event::Ignored { .. }]);
}

#[test]
fn test_check_all_keeps_going_after_violation() {
    // The checksum is still read from the last two digits and matches.
    let raw = b"$GNHDT,75.5554,T,28\r\n";

    let recorder = receive(FramingMode::CheckAll, raw);
    assert_eq!(
        recorder.events,
        [
            dropped(raw.len(), "Invalid checksum delimiter"),
            Event::Decoded(SentenceKind::HDT),
        ]
    );
}

#[test]
fn test_check_all_reports_every_violation() {
    let raw = b"$GNHDT,75.5554,T*28\n";

    let recorder = receive(FramingMode::CheckAll, raw);
    assert_eq!(
        recorder.events,
        [
            dropped(raw.len(), "Invalid end of message delimiter (no CR)"),
            dropped(raw.len(), "Invalid checksum delimiter"),
            Event::ChecksumFailed {
                span: 1..15,
                expected: 0x7C,
                actual: 0xF2,
            },
        ]
    );
}

#[test]
fn test_non_hex_checksum_digits() {
    let raw = b"$GNHDT,75.5554,T*zz\r\n";

    let recorder = receive(FramingMode::CheckAll, raw);
    assert_eq!(
        recorder.events,
        [Event::ChecksumFailed {
            span: 1..16,
            expected: 0x28,
            actual: 0xEF,
        }]
    );

    let recorder = receive(FramingMode::Strict, raw);
    assert_eq!(
        recorder.events,
        [dropped(raw.len(), "Invalid checksum digits")]
    );
}

#[test]
fn test_non_hex_digits_fail_even_when_the_value_matches() {
    // `zz` reads as 0xEF, which is also the checksum of this payload
    let raw = b"$GPHDT,1\xC5,T*zz\r\n";
    let recorder = receive(FramingMode::CheckAll, raw);
    assert_eq!(
        recorder.events,
        [Event::ChecksumFailed {
            span: 1..11,
            expected: 0xEF,
            actual: 0xEF,
        }]
    );
}

#[test]
fn test_strict_stops_at_first_violation() {
    let raw = b"$GNHDT,75.5554,T*28\n";
    let recorder = receive(FramingMode::Strict, raw);
    assert_eq!(
        recorder.events,
        [dropped(raw.len(), "Invalid end of message delimiter (no CR)")]
    );

    let recorder = receive(FramingMode::Strict, b"$GNHDT,75.5554,T,28\r\n");
    assert_eq!(recorder.events, [dropped(21, "Invalid checksum delimiter")]);

    let recorder = receive(FramingMode::Strict, SAMPLES[6].0);
    assert_eq!(recorder.events, [Event::Decoded(SentenceKind::VTG)]);
}

#[test]
fn test_short_candidates() {
    let recorder = receive(FramingMode::CheckAll, b"$*\r\n$GP\r\n");
    assert_eq!(
        recorder.events,
        [
            dropped(4, "Insufficient number of bytes"),
            dropped(5, "Insufficient number of bytes"),
        ]
    );
}

#[test]
fn test_decode_errors_are_dropped() {
    let raw = b"$GPGGA,092750.000,5321.6802,N,00630.3372,W,9,8,1.03,61.7,M,55.2,M,,*7E\r\n";
    let recorder = receive(FramingMode::CheckAll, raw);
    assert_eq!(
        recorder.events,
        [dropped(raw.len(), "unsupported FixQuality value \"9\"")]
    );

    let raw = b"$GPHDT,abc,T*7B\r\n";
    let recorder = receive(FramingMode::CheckAll, raw);
    assert_eq!(
        recorder.events,
        [dropped(raw.len(), "field 1 is malformed: \"abc\"")]
    );
}

#[test]
fn test_non_ascii_payload() {
    // 0xB0 on its own is not valid UTF-8, the checksum still matches
    let raw = b"$GPHDT,1\xB0,T*9A\r\n";
    let recorder = receive(FramingMode::CheckAll, raw);
    assert_eq!(recorder.events, [dropped(raw.len(), "Non-ASCII payload")]);
}

#[test]
fn test_resync_recovers_after_truncated_sentence() {
    let mut stream = b"$GPGGA,092750.000,5321.68".to_vec();
    stream.extend_from_slice(SAMPLES[5].0);

    let recorder = receive(FramingMode::CheckAll, &stream);
    assert_eq!(recorder.events, [Event::Decoded(SentenceKind::RMC)]);
}

#[test]
fn test_sentence_split_by_overflow() {
    let mut receiver = ReceiverBuilder::new().build_with_capacity::<_, 16>(Recorder::default());
    receiver.receive(SAMPLES[0].0);
    receiver.receive(b"$GNHDT,75.5554,T*28\r\n");
    receiver.receive(SAMPLES[6].0);

    // None of these sentences fit in 16 bytes, so nothing is ever emitted.
    assert!(receiver.handler().events.is_empty());
}
