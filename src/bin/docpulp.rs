//! Command-line front end: extract one document and print it as JSON.
//!
//! Runs without an OCR engine, so scanned pages come back empty; wire a
//! real engine in via the library API for OCR workloads.

use docpulp::ocr::NoOcr;
use docpulp::pipeline::ExtractionPipeline;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <file.pdf|file.docx|image>", args[0]);
        return ExitCode::from(2);
    }

    let pipeline = ExtractionPipeline::new(Arc::new(NoOcr));
    match pipeline.extract(&args[1]) {
        Ok(document) => {
            match serde_json::to_string_pretty(&document) {
                Ok(json) => println!("{}", json),
                Err(err) => {
                    eprintln!("Failed to serialize output: {}", err);
                    return ExitCode::FAILURE;
                },
            }
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("Extraction failed: {}", err);
            ExitCode::FAILURE
        },
    }
}
