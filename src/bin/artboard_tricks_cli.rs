//! CLI for artboard-tricks - tidies a JSON page document.
//!
//! Usage:
//!   artboard_tricks_cli <page.json>              # Output JSON to stdout
//!   artboard_tricks_cli <page.json> -o out.json  # Output JSON to file
//!
//! The document holds optional preferences plus an artboard list:
//!   { "prefs": { "x_spacing": 100.0 },
//!     "artboards": [ { "name": "Home", "left": 0.0, "top": 0.0,
//!                      "right": 375.0, "bottom": 667.0 } ] }

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use artboard_tricks::page::PageDocument;
use artboard_tricks::{rearrange_page, MemoryPage};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: artboard_tricks_cli <page.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read input document
    let json = match fs::read_to_string(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let doc = match PageDocument::from_json(&json) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error parsing {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    // Layout, then renumber
    let prefs = doc.prefs.clone();
    let mut page = MemoryPage::new(doc.artboards);
    if let Err(e) = rearrange_page(&mut page, &prefs) {
        eprintln!("Error rearranging page: {}", e);
        std::process::exit(1);
    }

    let out = PageDocument {
        prefs,
        artboards: page.into_boards(),
    };
    let json = match out.to_json() {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
