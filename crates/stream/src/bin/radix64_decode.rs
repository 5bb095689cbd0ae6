//! `radix64-decode` — decode base64 text (stdin) to raw bytes (stdout).
//!
//! Trailing ASCII whitespace (a shell-added newline) is tolerated; embedded
//! whitespace is not.
//!
//! Usage:
//!   radix64-decode < input.b64 > output

use radix64_stream::{Base64Decoder, ByteSource, Reader};
use std::io::{self, Read, Write};

fn run() -> io::Result<()> {
    let mut text = Vec::new();
    io::stdin().read_to_end(&mut text)?;
    let mut end = text.len();
    while end > 0 && text[end - 1].is_ascii_whitespace() {
        end -= 1;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut decoder = Base64Decoder::new(Reader::new(&text[..end]));

    let mut chunk = [0u8; 3 * 1024];
    loop {
        let n = decoder.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        out.write_all(&chunk[..n])?;
    }
    out.flush()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
