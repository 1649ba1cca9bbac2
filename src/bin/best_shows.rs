use std::env;
use std::io::{self, BufWriter, Write};

use maxspan::ratings::run_session;

fn main() {
    for arg in env::args().skip(1) {
        if arg == "--help" || arg == "-h" {
            print_help();
            return;
        }
        eprintln!("best_shows: unrecognized argument '{arg}'");
        print_help();
        std::process::exit(2);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    if let Err(err) = run_session(stdin.lock(), &mut output) {
        eprintln!("best_shows: {err}");
        std::process::exit(1);
    }
    if let Err(err) = output.flush() {
        eprintln!("best_shows: {err}");
        std::process::exit(1);
    }
}

fn print_help() {
    println!(
        "\
Usage: best_shows < queries.txt

Reads queries from stdin. Each query is a header line with two integers,
FRIENDS and SHOWS, followed by FRIENDS x SHOWS ratings (whitespace
separated). For each query, prints the 1-based inclusive range of shows
whose aggregated ratings have the maximum sum. A '0 0' header ends the
session.

Example input:
  2 4
  1 -2 3 1
  0 -1 2 1
  0 0

Options:
  -h, --help    Print this help message
"
    );
}
