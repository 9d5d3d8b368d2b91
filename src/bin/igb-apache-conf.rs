//! Prints the Apache 2.4 directives that forward IGB headers.
//!
//! Requires `mod_setenvif` and `mod_headers`.

use std::io::{self, Write};

fn main() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(igb_headers::apache::render().as_bytes())?;
    stdout.flush()
}
