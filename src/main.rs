use digit_normalizer::{preprocess_rgba, PreprocessOptions};

fn main() {
    // Demo stub: draws a thick "1" on a white 280×280 pad and normalizes it
    let (w, h) = (280usize, 280usize);
    let mut rgba = vec![255u8; w * h * 4];
    for y in 60..220 {
        for x in 130..150 {
            let i = (y * w + x) * 4;
            rgba[i..i + 3].copy_from_slice(&[0, 0, 0]);
        }
    }

    match preprocess_rgba(&rgba, w, h, PreprocessOptions::new(true, true)) {
        Ok(out) => {
            println!("{}", out.trace);
            for y in 0..digit_normalizer::CANVAS_SIZE {
                let line: String = (0..digit_normalizer::CANVAS_SIZE)
                    .map(|x| if out.image.get(x, y) > 0.5 { '#' } else { '.' })
                    .collect();
                println!("{line}");
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
