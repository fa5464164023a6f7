extern crate clap;
extern crate mpeg2ts_packet;
#[macro_use]
extern crate trackable;

use clap::{App, Arg};
use mpeg2ts_packet::ts::{TsPacket, TsPacketReader};
use std::io::Read;
use trackable::error::Failure;

fn main() {
    let matches = App::new("parse")
        .arg(
            Arg::with_name("OUTPUT_TYPE")
                .long("output-type")
                .short("o")
                .takes_value(true)
                .possible_values(&["header", "pid", "pcr", "adaptation-field"])
                .default_value("header"),
        )
        .arg(
            Arg::with_name("LEADING_BYTES")
                .long("leading-bytes")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("SKIP_INVALID")
                .long("skip-invalid")
                .takes_value(false),
        )
        .get_matches();
    let leading_bytes: usize = track_try_unwrap!(matches
        .value_of("LEADING_BYTES")
        .unwrap()
        .parse()
        .map_err(Failure::from_error));
    let skip_invalid = matches.is_present("SKIP_INVALID");

    let mut buf = Vec::new();
    track_try_unwrap!(std::io::stdin()
        .read_to_end(&mut buf)
        .map_err(Failure::from_error));
    let mut reader = TsPacketReader::new(&buf).with_leading_bytes(leading_bytes);

    let mut seen: Vec<u16> = Vec::new();
    loop {
        let packet = if skip_invalid {
            reader.next_valid_packet()
        } else {
            track_try_unwrap!(reader.read_ts_packet())
        };
        let packet = match packet {
            Some(packet) => packet,
            None => break,
        };
        match matches.value_of("OUTPUT_TYPE").unwrap() {
            "header" => println!("{:?}", packet.header),
            "pid" => {
                let pid = packet.header.pid.as_u16();
                if !seen.contains(&pid) {
                    seen.push(pid);
                    println!("0x{:04X}", pid);
                }
            }
            "pcr" => {
                if let Some(pcr) = packet.pcr() {
                    println!(
                        "pid=0x{:04X} base={} extension={} 27mhz={}",
                        packet.header.pid.as_u16(),
                        pcr.base,
                        pcr.extension,
                        pcr.as_27mhz()
                    );
                }
            }
            "adaptation-field" => {
                if let Some(ref af) = packet.adaptation_field {
                    println!(
                        "pid=0x{:04X} payload_offset={}/{} {:?}",
                        packet.header.pid.as_u16(),
                        packet.payload_offset(),
                        TsPacket::SIZE,
                        af
                    );
                }
            }
            _ => unreachable!(),
        }
    }
}
