use std::path::Path;
use std::process::ExitCode;

use glyph_icons::{DEFAULT_SIZES, IconRenderer};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let renderer = IconRenderer::default();
    match renderer.render_all(&DEFAULT_SIZES, Path::new(".")) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
