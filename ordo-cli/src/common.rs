use std::io;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use anyhow::Context;

/// Reads JSON input from a file or stdin.
pub(crate) fn input_json(infile: &Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(input_path) = infile {
        log::debug!("reading input from {}", input_path.display());
        std::fs::read_to_string(input_path).with_context(|| {
            format!("Failed to read input JSON file: {}", input_path.display())
        })
    } else {
        log::debug!("reading input from stdin");
        let mut input_reader = BufReader::new(io::stdin());
        let mut input_json = String::new();
        input_reader
            .read_to_string(&mut input_json)
            .context("Failed to read JSON from stdin")?;
        Ok(input_json)
    }
}
