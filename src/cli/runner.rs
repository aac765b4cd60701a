use tracing::info;

use dimprep::api::prepare_scene_to_path;

use super::args::CliArgs;
use super::errors::AppError;

/// Returns true when the path carries the `.dim` suffix, case-insensitively.
fn is_dim_header(path: &std::path::Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("dim"))
        .unwrap_or(false)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // Suffix check happens before any file is touched
    if !is_dim_header(&args.input) {
        return Err(AppError::NotDimapHeader {
            path: args.input.display().to_string(),
        }
        .into());
    }

    let written = prepare_scene_to_path(&args.input, args.output.as_deref())?;
    info!("Successfully described: {:?} -> {:?}", args.input, written);

    Ok(())
}
