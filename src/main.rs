use clap::{Parser, ValueEnum};
use image::ImageReader;
use std::path::PathBuf;

use bagscreen::detection::alert;
use bagscreen::{LabelTable, ScreeningPipeline, SidecarDetector};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Lang {
    /// French display names
    Fr,
    /// Raw class keys
    En,
}

#[derive(Parser)]
#[command(name = "bagscreen")]
#[command(about = "Annotate X-ray baggage scans and grade the threat level")]
struct Cli {
    /// Path to the X-ray image to screen
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// JSON file with the detector's raw output for this image
    #[arg(short, long, value_name = "JSON")]
    detections: PathBuf,

    /// Minimum confidence passed to the detector
    #[arg(short, long, default_value_t = 0.5)]
    conf: f32,

    /// Language for class display names
    #[arg(long, value_enum, default_value_t = Lang::Fr)]
    lang: Lang,

    /// Where to save the annotated image
    #[arg(short, long, value_name = "FILE", default_value = "annotated.png")]
    output: PathBuf,

    /// Write the detection table and verdict as JSON
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Write the alert tone as a WAV file when the verdict warrants one
    #[arg(long, value_name = "FILE")]
    alert_wav: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let img = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;
    log::debug!("image loaded: {}x{}", img.width(), img.height());

    let mut detector = SidecarDetector::from_path(&args.detections)?;

    let labels = match args.lang {
        Lang::Fr => LabelTable::french(),
        Lang::En => LabelTable::english(),
    };
    let pipeline = ScreeningPipeline::with_labels(labels);
    let report = pipeline.process(&mut detector, Some(&img), args.conf)?;

    if let Some(annotated) = &report.annotated {
        annotated
            .save(&args.output)
            .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", args.output.display(), e))?;
        println!("Annotated image saved to {}", args.output.display());
    }

    let rows = report.detections.as_deref().unwrap_or(&[]);
    println!("\n=== Screening Results ===");
    println!("Objects detected: {}", rows.len());
    for row in rows {
        println!("  {:>3}  {:<12}  {:.4}", row.id, row.class, row.confidence);
    }

    if let Some(verdict) = &report.verdict {
        println!("\n{}", verdict.title);
        println!(
            "Objects: {}, max confidence: {:.2}",
            verdict.count, verdict.max_confidence
        );
    }

    if let Some(path) = &args.report {
        let payload = serde_json::json!({
            "detections": rows,
            "verdict": &report.verdict,
        });
        std::fs::write(path, serde_json::to_vec_pretty(&payload)?)?;
        println!("Report written to {}", path.display());
    }

    match (&args.alert_wav, &report.alert) {
        (Some(path), Some(signal)) => {
            alert::write_wav(signal, path)?;
            println!("Alert tone written to {}", path.display());
        }
        (Some(_), None) => println!("No alert tone for this verdict."),
        _ => {}
    }

    Ok(())
}
