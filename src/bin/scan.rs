//! CLI demo: scans pre-coded lines (not Urdu script — the orthographic
//! transducer is out of scope) read from a file or stdin. One line of
//! input is `word1 word2 ...`, each word's alternatives `|`-separated, e.g.
//! `-===|==- -=== -=== -===`. Exercises the library end to end; not part of
//! the engine's tested surface beyond a couple of smoke tests.

use std::env;
use std::fs;
use std::io::{self, Read};

use taqti::{build_catalog, scan_line, scan_line_fuzzy, Line, ScanOptions, Word};

fn usage() -> ! {
    eprintln!("usage: scan [--fuzzy] [FILE]");
    std::process::exit(2);
}

fn parse_line(original: &str) -> Line {
    let words = original
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            let codes: Vec<String> = token.split('|').map(str::to_string).collect();
            Word::new(format!("w{i}"), codes)
        })
        .collect();
    Line::new(original, words)
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() {
    let mut fuzzy = false;
    let mut file = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--fuzzy" => fuzzy = true,
            "-h" | "--help" => usage(),
            other => {
                if file.is_some() {
                    usage();
                }
                file = Some(other.to_string());
            }
        }
    }

    let input = match read_input(file.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to read input: {e}");
            std::process::exit(1);
        }
    };

    let catalog = build_catalog();
    let options = ScanOptions::default();

    for raw in input.lines() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let line = parse_line(trimmed);

        println!("> {trimmed}");
        if fuzzy {
            match scan_line_fuzzy(&catalog, &line, &options) {
                Ok(results) => {
                    for hit in results {
                        println!("  [{}] {} — {}", hit.score, hit.meter_name, hit.feet);
                    }
                }
                Err(e) => eprintln!("  error: {e}"),
            }
        } else {
            match scan_line(&catalog, &line, &options) {
                Ok(results) => {
                    for hit in results {
                        println!("  {} — {}", hit.meter_name, hit.feet);
                    }
                }
                Err(e) => eprintln!("  error: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_splits_words_and_alternatives() {
        let line = parse_line("-===|==- -===");
        assert_eq!(line.words.len(), 2);
        assert_eq!(line.words[0].codes, vec!["-===".to_string(), "==-".to_string()]);
        assert_eq!(line.words[1].codes, vec!["-===".to_string()]);
    }
}
