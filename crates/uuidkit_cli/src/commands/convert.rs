//! Str and blob command implementations.

use serde::Serialize;
use tracing::debug;
use uuidkit_codec::{uuid_blob, uuid_str, Outcome, Value};

/// A normalized UUID blob, for JSON output.
#[derive(Debug, Serialize)]
struct NormalizedBlob {
    /// The 16 bytes as 32 hex digits.
    hex: String,
}

/// Runs the str command: normalize input to the canonical 36-char string.
pub fn run_str(input: &str, hex: bool) -> Result<(), Box<dyn std::error::Error>> {
    let value = input_value(input, hex)?;
    debug!("Normalizing {} input to canonical text", value.kind_name());
    match uuid_str(&value) {
        Outcome::Value(text) => {
            println!("{text}");
            Ok(())
        }
        Outcome::Null => Err("no result: input is not a valid UUID".into()),
    }
}

/// Runs the blob command: normalize input to the 16-byte form.
pub fn run_blob(input: &str, hex: bool, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let value = input_value(input, hex)?;
    debug!("Normalizing {} input to blob form", value.kind_name());
    match uuid_blob(&value) {
        Outcome::Value(bytes) => {
            let hex_out = encode_hex(&bytes);
            match format {
                "json" => println!(
                    "{}",
                    serde_json::to_string_pretty(&NormalizedBlob { hex: hex_out })?
                ),
                "hex" => println!("{hex_out}"),
                other => return Err(format!("unknown output format: {other}").into()),
            }
            Ok(())
        }
        Outcome::Null => Err("no result: input is not a valid UUID".into()),
    }
}

/// Builds the codec input: text by default, a blob when `--hex` is given.
fn input_value(input: &str, hex: bool) -> Result<Value, Box<dyn std::error::Error>> {
    if hex {
        Ok(Value::Bytes(decode_hex(input)?))
    } else {
        Ok(Value::from(input))
    }
}

fn decode_hex(input: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if input.len() % 2 != 0 {
        return Err("hex input must contain an even number of digits".into());
    }
    input
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let hi = hex_digit(pair[0])?;
            let lo = hex_digit(pair[1])?;
            Ok((hi << 4) | lo)
        })
        .collect()
}

fn hex_digit(byte: u8) -> Result<u8, Box<dyn std::error::Error>> {
    (byte as char)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| format!("invalid hex digit: {:?}", byte as char).into())
}

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
