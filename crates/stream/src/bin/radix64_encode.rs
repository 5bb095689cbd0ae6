//! `radix64-encode` — encode raw bytes (stdin) to base64 text (stdout).
//!
//! Usage:
//!   radix64-encode < input > output.b64

use radix64_stream::{Base64Encoder, ByteSink, IoSink};
use std::io::{self, Read};

fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut encoder = Base64Encoder::new(IoSink::new(stdout.lock()));

    let mut chunk = [0u8; 3 * 1024];
    loop {
        let n = match input.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        encoder.write(&chunk[..n])?;
    }
    encoder.close()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
