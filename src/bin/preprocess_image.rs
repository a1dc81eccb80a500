use digit_normalizer::config::load_config;
use digit_normalizer::diagnostics::PreprocessReport;
use digit_normalizer::image::io::{load_rgba_image, write_json_file};
use digit_normalizer::Preprocessor;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let rgba = load_rgba_image(&config.input)?;
    let pixels = rgba.as_view()?;
    let preprocessor = Preprocessor::new(config.options).map_err(|e| e.to_string())?;
    let (result, report) = preprocessor.process_with_diagnostics(&pixels);

    println!("{}", result.trace);

    let summary = PreprocessSummary {
        input: config.input.display().to_string(),
        debug: result.trace.to_string(),
        report,
        values: result.image.as_slice(),
    };
    write_json_file(&config.output.result_json, &summary)?;

    println!(
        "Saved normalized {}x{} image from {} to {}",
        digit_normalizer::CANVAS_SIZE,
        digit_normalizer::CANVAS_SIZE,
        config.input.display(),
        config.output.result_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: preprocess_image <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PreprocessSummary<'a> {
    input: String,
    debug: String,
    report: PreprocessReport,
    values: &'a [f32],
}
