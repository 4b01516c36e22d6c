pub mod chronometer;
pub mod configuration;
pub mod logger;

use self::{
    configuration::{Codec, Configuration, Mode, Output},
    logger::Logger,
};
use basen::{base16, base32, base58, base58_check, base64, Error};
use serde_json::json;
use std::{
    io::{self, Read, Write},
    process,
};

fn encode(codec: Codec, padded: Option<bool>, input: &[u8]) -> String {
    match codec {
        Codec::Base16(variant) => base16::Encoder::new(variant.alphabet()).encode(input),
        Codec::Base32(variant) => {
            let format = variant.format();
            base32::Encoder::new(format.with_padding(padded.unwrap_or(format.is_padded()))).encode(input)
        }
        Codec::Base58(variant) => base58::Encoder::new(variant.alphabet()).encode(input),
        Codec::Base58Check(variant) => base58_check::Encoder::new(variant.alphabet()).encode(input),
        Codec::Base64(variant) => {
            let format = variant.format();
            base64::Encoder::new(format.with_padding(padded.unwrap_or(format.is_padded()))).encode(input)
        }
    }
}

fn decode(codec: Codec, padded: Option<bool>, input: &[u8]) -> Result<Vec<u8>, Error> {
    let output = match codec {
        Codec::Base16(variant) => base16::Decoder::new(variant.alphabet()).decode(input)?,
        Codec::Base32(variant) => {
            let format = variant.format();
            base32::Decoder::new(format.with_padding(padded.unwrap_or(format.is_padded()))).decode(input)?
        }
        Codec::Base58(variant) => base58::Decoder::new(variant.alphabet()).decode(input)?,
        Codec::Base58Check(variant) => base58_check::Decoder::new(variant.alphabet()).decode(input)?,
        Codec::Base64(variant) => {
            let format = variant.format();
            base64::Decoder::new(format.with_padding(padded.unwrap_or(format.is_padded()))).decode(input)?
        }
    };
    Ok(output)
}

/// Runs the configured codec over `input` and returns the bytes to write to stdout.
fn run(configuration: &Configuration, input: &[u8], logger: &Logger) -> Result<Vec<u8>, Error> {
    let codec = configuration.codec();
    let text = match configuration.mode() {
        Mode::Encode => {
            let output = encode(codec, configuration.padded(), input);
            logger.log(format!("Encoded {} bytes into {} symbols", input.len(), output.len()));
            match configuration.output() {
                Output::Text => return Ok(format!("{}\n", output).into_bytes()),
                Output::Json => output,
            }
        }
        Mode::Decode => {
            let input = configuration.ignore().replace_all(input, &b""[..]);
            let output = decode(codec, configuration.padded(), &input)?;
            logger.log(format!("Decoded {} symbols into {} bytes", input.len(), output.len()));
            match configuration.output() {
                Output::Text => return Ok(output),
                Output::Json => base16::Encoder::new(&base16::LOWERCASE).encode(output),
            }
        }
    };
    let report = json!({
        "codec": codec.name(),
        "variant": codec,
        "mode": configuration.mode(),
        "input_length": input.len(),
        "output": text,
    });
    Ok(format!("{}\n", report).into_bytes())
}

fn main() {
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    let logger = Logger::new(configuration.verbose());
    logger.log(format!(
        "{} {} ({})",
        configuration.mode(),
        configuration.codec().name(),
        configuration.codec().variant()
    ));

    let mut input = Vec::new();
    if let Err(error) = io::stdin().read_to_end(&mut input) {
        eprintln!("Could not read input: {}", error);
        process::exit(1);
    }
    logger.log(format!("Read {} bytes", input.len()));

    match run(&configuration, &input, &logger) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(error) = stdout.write_all(&output).and_then(|_| stdout.flush()) {
                eprintln!("Could not write output: {}", error);
                process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("{}: {}", error.kind(), error);
            process::exit(1);
        }
    }
}
