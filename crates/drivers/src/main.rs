mod cli;
mod config;
mod logging;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use heic2png_adapters::{
    install_decoder, ConsoleReportSink, ImageCratePngEncoder, LocalFileStore, WalkdirScanner,
};
use heic2png_application::{
    ApplicationError, ConversionService, ImageDecoder, ReportSink, RunOutcome,
};
use tracing::{error, info};

use cli::Cli;
use config::AppConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);
    logging::init_logging(&config.log_filter);

    let Some(decoder) = install_or_explain(&mut std::io::stderr()) else {
        return ExitCode::from(1);
    };

    let service = build_conversion_service(decoder);
    let mut sink = ConsoleReportSink::new(std::io::stdout().lock());
    match run(&service, &config, &mut sink) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("conversion failed: {error}");
            ExitCode::from(1)
        }
    }
}

/// Prints the codec error to `err` once; the log event carries no copy of it.
fn install_or_explain(err: &mut dyn Write) -> Option<Box<dyn ImageDecoder>> {
    match install_decoder() {
        Ok(decoder) => Some(decoder),
        Err(error) => {
            error!("cannot start without a HEIC decoder");
            if let Err(write_error) = writeln!(err, "{error}") {
                error!(%write_error, "failed to print codec guidance");
            }
            None
        }
    }
}

fn build_conversion_service(decoder: Box<dyn ImageDecoder>) -> ConversionService {
    ConversionService::new(
        Box::new(WalkdirScanner),
        Box::new(LocalFileStore),
        decoder,
        Box::new(ImageCratePngEncoder),
    )
}

/// A missing folder has already been reported to the user and is not a
/// failure of the program.
fn run(
    service: &ConversionService,
    config: &AppConfig,
    sink: &mut dyn ReportSink,
) -> Result<(), ApplicationError> {
    match service.convert_directory(config.command(), sink) {
        Ok(RunOutcome::Completed(report)) => {
            info!(succeeded = report.succeeded, failed = report.failed, "done");
            Ok(())
        }
        Ok(RunOutcome::NoMatchingFiles { .. }) => Ok(()),
        Err(ApplicationError::DirectoryNotFound(directory)) => {
            info!(directory = %directory.display(), "nothing to convert");
            Ok(())
        }
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use heic2png_domain::{PixelImage, PixelLayout};
    use image::GenericImageView;
    use tempfile::TempDir;

    use super::*;

    /// Stands in for libheif: files that start with `HEIC` decode to a 2x1
    /// image, anything else is rejected.
    struct MagicDecoder;

    impl ImageDecoder for MagicDecoder {
        fn decode(&self, bytes: &[u8]) -> Result<PixelImage, ApplicationError> {
            if !bytes.starts_with(b"HEIC") {
                return Err(ApplicationError::Decode(
                    "invalid input: no ftyp box".to_string(),
                ));
            }
            Ok(PixelImage::new(
                2,
                1,
                PixelLayout::Rgb8,
                vec![200, 100, 50, 0, 0, 0],
            )?)
        }
    }

    fn config_for(dir: &Path) -> AppConfig {
        AppConfig {
            target_dir: dir.to_path_buf(),
            ..AppConfig::default()
        }
    }

    fn run_in(dir: &Path) -> (Result<(), ApplicationError>, String) {
        let service = build_conversion_service(Box::new(MagicDecoder));
        let mut sink = ConsoleReportSink::new(Vec::new());
        let result = run(&service, &config_for(dir), &mut sink);
        let output = String::from_utf8(sink.into_inner()).expect("utf8");
        (result, output)
    }

    fn assert_valid_png(path: &Path) {
        let decoded = image::open(path).expect("output should be a readable png");
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.to_rgb8().into_raw(), vec![200, 100, 50, 0, 0, 0]);
    }

    #[test]
    fn converts_single_valid_file() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("photo.heic"), b"HEIC photo").expect("write");

        let (result, output) = run_in(dir.path());

        assert!(result.is_ok());
        assert_valid_png(&dir.path().join("photo.png"));
        assert!(output.contains("Converting: photo.heic -> photo.png"));
        assert!(output.contains("succeeded: 1"));
        assert!(output.contains("failed: 0"));
        assert!(output.contains(&format!("PNG files saved in: {}", dir.path().display())));
    }

    #[test]
    fn corrupt_file_is_reported_and_not_written() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("bad.heic"), b"\x00\x00garbage").expect("write");

        let (result, output) = run_in(dir.path());

        assert!(result.is_ok());
        assert!(!dir.path().join("bad.png").exists());
        assert!(output.contains("✗ failed: decode error: invalid input: no ftyp box"));
        assert!(output.contains("succeeded: 0"));
        assert!(output.contains("failed: 1"));
        assert!(!output.contains("PNG files saved in"));
    }

    #[test]
    fn empty_directory_reports_no_files() {
        let dir = TempDir::new().expect("tempdir");

        let (result, output) = run_in(dir.path());

        assert!(result.is_ok());
        assert!(output.contains("No HEIC files found"));
        assert!(!output.contains("Conversion finished"));
    }

    #[test]
    fn missing_directory_ends_quietly() {
        let dir = TempDir::new().expect("tempdir");
        let missing = dir.path().join("does-not-exist");

        let (result, output) = run_in(&missing);

        assert!(result.is_ok());
        assert!(output.contains("Error: folder does not exist"));
        assert!(!output.contains("Conversion finished"));
    }

    #[test]
    fn every_input_ends_as_png_or_failure() {
        let dir = TempDir::new().expect("tempdir");
        let inputs = [
            ("a.HEIC", &b"HEIC a"[..]),
            ("b.heic", &b"HEIC b"[..]),
            ("c.heic", &b"nope"[..]),
            ("d.Heic", &b""[..]),
        ];
        for (name, bytes) in inputs {
            fs::write(dir.path().join(name), bytes).expect("write");
        }
        fs::write(dir.path().join("e.jpg"), b"HEIC but wrong extension").expect("write");

        let (result, output) = run_in(dir.path());

        assert!(result.is_ok());
        assert!(output.contains("Found 4 HEIC file(s)"));
        assert!(output.contains("succeeded: 2"));
        assert!(output.contains("failed: 2"));
        assert_valid_png(&dir.path().join("a.png"));
        assert_valid_png(&dir.path().join("b.png"));
        assert!(!dir.path().join("c.png").exists());
        assert!(!dir.path().join("d.png").exists());
        assert!(!dir.path().join("e.png").exists());
    }

    #[cfg(not(feature = "libheif"))]
    #[test]
    fn missing_codec_guidance_is_printed_once() {
        let mut err: Vec<u8> = Vec::new();

        let decoder = install_or_explain(&mut err);

        assert!(decoder.is_none());
        let printed = String::from_utf8(err).expect("utf8");
        assert_eq!(printed.matches(heic2png_adapters::INSTALL_GUIDANCE).count(), 1);
        assert!(printed.starts_with("image codec unavailable: "));
    }

    #[cfg(feature = "libheif")]
    #[test]
    fn codec_installs_silently() {
        let mut err: Vec<u8> = Vec::new();
        assert!(install_or_explain(&mut err).is_some());
        assert!(err.is_empty());
    }

    #[test]
    fn second_run_overwrites_and_classifies_the_same() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join("photo.heic"), b"HEIC photo").expect("write");
        fs::write(dir.path().join("bad.heic"), b"junk").expect("write");
        fs::write(dir.path().join("photo.png"), b"stale bytes").expect("write");

        let (first, first_output) = run_in(dir.path());
        let (second, second_output) = run_in(dir.path());

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(first_output, second_output);
        assert_valid_png(&dir.path().join("photo.png"));
        assert!(!dir.path().join("bad.png").exists());
    }
}
