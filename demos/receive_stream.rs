use nmea0183_receiver::{AngleFormat, FormatStyle, GGA, GSV, GeoAngle, NmeaHandler, RMC, Receiver};
use tracing_subscriber::EnvFilter;

const STREAM: &[u8] = b"\
$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76\r\n\
$GPGSV,3,1,11,10,63,137,17,07,61,098,15,05,59,290,20,08,54,157,30*70\r\n\
$GPRMC,092750.000,A,5321.6802,N,00630.3372,W,0.02,31.66,280511,,,A*43\r\n\
$GNHDT,75.5554,T*29\r\n\
$PGRME,15.0,M,45.0,M,25.0,M*1C\r\n\
$GPGGA,0927";

#[derive(Default)]
struct Printer;

impl NmeaHandler for Printer {
    fn on_gga(&mut self, sentence: GGA) {
        if let (Some(latitude), Some(longitude)) = (sentence.latitude, sentence.longitude) {
            println!(
                "{}: fix at {} {} ({} satellites)",
                sentence.data_type,
                latitude.format(AngleFormat::Dms, FormatStyle::ShowUnits),
                longitude.format(AngleFormat::Dms, FormatStyle::ShowUnits),
                sentence.satellite_count,
            );
        }
    }

    fn on_gsv(&mut self, sentence: GSV) {
        for satellite in &sentence.satellites {
            println!("{}: satellite {:?}", sentence.data_type, satellite);
        }
    }

    fn on_rmc(&mut self, sentence: RMC) {
        println!(
            "{}: {:?} moving at {:?} knots",
            sentence.data_type,
            sentence.date_time(),
            sentence.speed_over_ground
        );
    }

    fn on_checksum_failed(
        &mut self,
        raw: &[u8],
        _span: std::ops::Range<usize>,
        expected: u8,
        actual: u8,
    ) {
        println!(
            "checksum mismatch in {}: expected {expected:02X}, got {actual:02X}",
            raw.escape_ascii()
        );
    }

    fn on_ignored(&mut self, raw: &[u8], span: std::ops::Range<usize>) {
        println!("ignored {}", raw[span].escape_ascii());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut receiver = Receiver::new(Printer);

    // Serial ports hand out data in arbitrary pieces.
    for chunk in STREAM.chunks(17) {
        receiver.receive(chunk);
    }

    println!(
        "{} bytes still waiting for the end of a sentence",
        receiver.buffered().len()
    );
}
