use std::fmt::Debug;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cql_common::{init_logging, LoggingConfig};
use cql_protocol::primitives::*;
use cql_protocol::{Encodable, Error};
use tracing::{debug, Level};

/// Inspect CQL native protocol primitives
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error); overrides CQLPRIM_LOG
    #[arg(short, long, global = true)]
    log_level: Option<Level>,

    /// Disable colored log output
    #[arg(long, global = true)]
    no_ansi: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a hex-encoded primitive and report what was consumed
    Decode {
        #[arg(value_enum)]
        kind: Primitive,
        /// Input bytes as hex, e.g. 000568656c6c6f
        hex: String,
    },
    /// Print the encoded length of a text value
    Length {
        #[arg(value_enum)]
        kind: Text,
        value: String,
    },
    /// Encode a text value and print it as hex
    Encode {
        #[arg(value_enum)]
        kind: Text,
        text: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Primitive {
    Byte,
    Short,
    Int,
    Long,
    String,
    LongString,
    Bytes,
    ShortBytes,
    Uuid,
    Inet,
    StringList,
    StringMap,
    StringMultimap,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Text {
    String,
    LongString,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = LoggingConfig::from_env()?;
    if let Some(level) = args.log_level {
        config.level = level;
    }
    if args.no_ansi {
        config.ansi = false;
    }
    init_logging(&config);

    match args.command {
        Command::Decode { kind, hex } => decode(kind, &hex),
        Command::Length { kind, value } => {
            println!("{}", text_length(kind, &value));
            Ok(ExitCode::SUCCESS)
        }
        Command::Encode { kind, text } => {
            println!("{}", hex::encode(encode_text(kind, &text)?));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn decode(kind: Primitive, input: &str) -> Result<ExitCode> {
    let source = hex::decode(input.trim()).context("input is not valid hex")?;
    debug!(?kind, len = source.len(), "decoding");

    match describe(kind, &source) {
        Ok((value, rest)) => {
            println!("{value}");
            println!(
                "consumed {} bytes, {} remaining",
                source.len() - rest.len(),
                rest.len()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprint!("{}", failure_report(&err, source.len()));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn show<T: Debug>(decoded: cql_protocol::Result<(T, &[u8])>) -> cql_protocol::Result<(String, &[u8])> {
    decoded.map(|(value, rest)| (format!("{value:?}"), rest))
}

/// Decode one primitive from the front of `source` and render it for display.
fn describe(kind: Primitive, source: &[u8]) -> cql_protocol::Result<(String, &[u8])> {
    match kind {
        Primitive::Byte => show(read_byte(source)),
        Primitive::Short => show(read_short(source)),
        Primitive::Int => show(read_int(source)),
        Primitive::Long => show(read_long(source)),
        Primitive::String => show(read_string(source)),
        Primitive::LongString => show(read_long_string(source)),
        Primitive::Bytes => read_bytes(source).map(|(value, rest)| {
            let shown = value.map_or_else(|| "null".to_string(), hex::encode);
            (shown, rest)
        }),
        Primitive::ShortBytes => {
            read_short_bytes(source).map(|(value, rest)| (hex::encode(value), rest))
        }
        Primitive::Uuid => read_uuid(source).map(|(value, rest)| (value.to_string(), rest)),
        Primitive::Inet => read_inet(source).map(|(value, rest)| (value.to_string(), rest)),
        Primitive::StringList => show(read_string_list(source)),
        Primitive::StringMap => show(read_string_map(source)),
        Primitive::StringMultimap => show(read_string_multimap(source)),
    }
}

/// One line for the failure, one per level of the chain, then the position.
fn failure_report(err: &Error, input_len: usize) -> String {
    let mut report = format!("error: {err}\n");
    for (depth, level) in err.chain().enumerate() {
        let line = match level.context() {
            Some(field) => format!("in {field}"),
            None => level.to_string(),
        };
        report.push_str(&format!("{:indent$}{line}\n", "", indent = 2 * (depth + 1)));
    }
    report.push_str(&format!(
        "at byte offset {} ({} bytes remaining)\n",
        err.offset(input_len),
        err.remaining()
    ));
    report
}

fn text_length(kind: Text, value: &str) -> usize {
    match kind {
        Text::String => cql_protocol::length_of_string(value),
        Text::LongString => cql_protocol::length_of_long_string(value),
    }
}

fn encode_text(kind: Text, value: &str) -> Result<Vec<u8>> {
    let encoded = match kind {
        Text::String => value.to_string().to_bytes()?,
        Text::LongString => LongString::from(value).to_bytes()?,
    };
    Ok(encoded.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();

        let args = Args::try_parse_from(["cqlprim", "decode", "string-multimap", "0000"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Decode {
                kind: Primitive::StringMultimap,
                ..
            }
        ));

        let args =
            Args::try_parse_from(["cqlprim", "encode", "long-string", "hi", "--log-level", "debug"])
                .unwrap();
        assert_eq!(args.log_level, Some(Level::DEBUG));
    }

    #[test]
    fn test_describe() {
        let (value, rest) = describe(Primitive::String, b"\x00\x05hello\x01").unwrap();
        assert_eq!(value, "\"hello\"");
        assert_eq!(rest, &[1]);

        let (value, _) = describe(Primitive::Bytes, &[0xff, 0xff, 0xff, 0xff]).unwrap();
        assert_eq!(value, "null");

        let (value, _) = describe(Primitive::Inet, &[4, 127, 0, 0, 1, 0, 0, 0x23, 0x52]).unwrap();
        assert_eq!(value, "127.0.0.1:9042");
    }

    #[test]
    fn test_failure_report() {
        let source = [0u8, 1, 0, 1, b'k', 0, 2, 0];
        let err = describe(Primitive::StringMap, &source).unwrap_err();
        assert_eq!(
            failure_report(&err, source.len()),
            "error: cannot read [string map] value: not enough bytes to read [string] content\n\
             \x20 in [string map] value\n\
             \x20   not enough bytes to read [string] content\n\
             at byte offset 7 (1 bytes remaining)\n"
        );
    }

    #[test]
    fn test_text_commands() {
        assert_eq!(text_length(Text::String, "hello"), 7);
        assert_eq!(text_length(Text::LongString, "hello"), 9);
        assert_eq!(encode_text(Text::String, "hi").unwrap(), b"\x00\x02hi");
        assert_eq!(encode_text(Text::LongString, "hi").unwrap(), b"\x00\x00\x00\x02hi");
    }
}
