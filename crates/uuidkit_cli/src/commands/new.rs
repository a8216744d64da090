//! New command implementation.

use serde::Serialize;
use tracing::debug;

/// A generated UUID, for JSON output.
#[derive(Debug, Serialize)]
struct Generated {
    /// Canonical UUID string.
    uuid: String,
}

/// Runs the new command.
pub fn run(count: usize, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Generating {} UUIDs", count);
    match format {
        "json" => {
            let generated: Vec<Generated> = (0..count)
                .map(|_| Generated {
                    uuid: uuidkit_codec::uuid4(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&generated)?);
        }
        "text" => {
            for _ in 0..count {
                println!("{}", uuidkit_codec::uuid4());
            }
        }
        other => return Err(format!("unknown output format: {other}").into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_accepts_text_and_json_formats() {
        assert!(run(2, "text").is_ok());
        assert!(run(2, "json").is_ok());
    }

    #[test]
    fn run_rejects_unknown_format() {
        assert!(run(1, "yaml").is_err());
    }
}
