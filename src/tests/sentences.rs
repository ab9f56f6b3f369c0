use assert_matches::assert_matches;

use crate::{
    AngleFormat, EnglishDescriptions, Error, FixQuality, FormatStyle, GeoAngle, NmeaMessage,
    NmeaSentence, SentenceKind, Status, checksum, parse_checksum,
};

const PAYLOADS: [&str; 7] = [
    "GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76",
    "GPGSA,A,3,10,07,05,02,29,04,08,13,,,,,1.72,1.03,1.38*0A",
    "GNGST,143333.00,7.38,1.49,1.30,68.1409,1.47,1.33,2.07*4A",
    "GPGSV,3,1,11,10,63,137,17,07,61,098,15,05,59,290,20,08,54,157,30*70",
    "GNHDT,75.5554,T*28",
    "GPRMC,092750.000,A,5321.6802,N,00630.3372,W,0.02,31.66,280511,,,A*43",
    "GPVTG,172.516,T,155.295,M,0.049,N,0.090,K,D*2B",
];

fn decode(payload: &str) -> crate::Result<NmeaSentence> {
    NmeaSentence::decode(&payload.split(',').collect::<Vec<_>>())
}

#[test]
fn test_sample_checksums() {
    for line in PAYLOADS {
        let (payload, digits) = line.split_once('*').unwrap();
        assert_eq!(
            Some(checksum(payload.as_bytes())),
            parse_checksum(digits.as_bytes()),
            "{line}"
        );
    }
}

#[test]
fn test_decode_by_tag() {
    for (line, kind) in PAYLOADS.iter().zip(SentenceKind::ALL) {
        let (payload, _) = line.split_once('*').unwrap();
        let sentence = decode(payload).unwrap();

        assert_eq!(sentence.kind(), kind);
        assert_eq!(sentence.data_type(), &payload[..5]);
    }
}

#[test]
fn test_decode_fields_from_samples() {
    let gga = assert_matches!(
        decode("GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,"),
        Ok(NmeaSentence::GGA(gga)) => gga
    );
    assert_eq!(gga.fix_quality, FixQuality::Gps);
    assert_eq!(
        gga.longitude
            .unwrap()
            .format(AngleFormat::Dmm, FormatStyle::Compact),
        "00630.3372,W"
    );

    let rmc = assert_matches!(
        decode("GPRMC,092750.000,A,5321.6802,N,00630.3372,W,0.02,31.66,280511,,,A"),
        Ok(NmeaSentence::RMC(rmc)) => rmc
    );
    assert_eq!(rmc.status, Status::Active);
    assert_eq!(rmc.latitude, gga.latitude);
    assert_eq!(rmc.fix_time, gga.fix_time);
}

#[test]
fn test_gsv_absent_fields_survive_encoding() {
    let payload = "GPGSV,3,3,11,29,09,301,24,16,09,020,,36,,,";
    let sentence = decode(payload).unwrap();

    let gsv = assert_matches!(&sentence, NmeaSentence::GSV(gsv) => gsv);
    assert_eq!(gsv.satellites[1].snr, None);
    assert_eq!(gsv.satellites[2].elevation, None);
    assert_eq!(gsv.satellites[2].azimuth, None);

    assert_eq!(sentence.encode().join(","), payload);
    assert_eq!(sentence.to_sentence(), crate::to_sentence(payload));
}

#[test]
fn test_decode_rejects_unknown_tags() {
    assert_matches!(
        decode("GPZDA,201530.00,04,07,2002,00,00"),
        Err(Error::UnrecognizedSentence(tag)) if tag == "GPZDA"
    );
    assert_matches!(decode(""), Err(Error::UnrecognizedSentence(_)));
}

#[test]
fn test_decode_as_checks_the_tag() {
    assert_matches!(
        NmeaSentence::decode_as(SentenceKind::VTG, &["GNHDT", "75.5554", "T"]),
        Err(Error::UnexpectedSentence { expected: "VTG", .. })
    );
}

#[test]
fn test_descriptions() {
    let hdt = decode("GNHDT,75.5554,T").unwrap();
    assert_eq!(hdt.description(&EnglishDescriptions), "Heading, True");

    let localized = |tag: &str| format!("Satz {tag}");
    assert_eq!(hdt.description(&localized), "Satz HDT");

    let vtg = assert_matches!(
        decode("GPVTG,172.516,T,155.295,M,0.049,N,0.090,K,D"),
        Ok(NmeaSentence::VTG(vtg)) => vtg
    );
    assert_eq!(
        vtg.description(&EnglishDescriptions),
        "Track Made Good and Ground Speed"
    );
}
