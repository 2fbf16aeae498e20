//! conforma CLI entry point
//!
//! Minimal entrypoint: dispatch to cli::run, print the error with its
//! stable code, exit non-zero on failure. A failed validation in
//! throwing mode lands here with every issue in the message, so an
//! uncaught failure terminates the process with the full diagnostic.

use conforma::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("[{}] {}", e.code(), e);
        std::process::exit(1);
    }
}
