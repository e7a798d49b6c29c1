//! `fts build` command implementation.
//!
//! Drives the page orchestrator over every registered route of an
//! exported data set and writes one HTML document per route, plus the 404
//! experience.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use fts_app::{App, ROUTES};
use fts_config::Config;
use fts_render::escape_html;
use fts_store::FileStore;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover fts.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exported data file (default: the configured extract output).
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Output directory for the rendered pages.
    #[arg(long, default_value = "dist")]
    out_dir: PathBuf,
}

impl BuildArgs {
    /// Execute the build command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        let data_path = self
            .data
            .unwrap_or_else(|| config.extract_resolved.output.clone());

        output.info(&format!("Loading {}", data_path.display()));
        let store = FileStore::load(&data_path)?;
        let mut app = App::new(store, config.site.id.clone());

        fs::create_dir_all(&self.out_dir)?;

        let mut written = 0usize;
        for route in ROUTES {
            let Some(view) = app.navigate(route, false) else {
                continue;
            };
            let filename = route_filename(route);
            fs::write(self.out_dir.join(&filename), page_document(&view.title, &view.html))?;
            output.info(&format!("  {route} -> {filename}"));
            written += 1;
        }

        if let Some(view) = app.navigate("/404", false) {
            fs::write(self.out_dir.join("404.html"), page_document(&view.title, &view.html))?;
            output.info("  /404 -> 404.html");
            written += 1;
        }

        output.success(&format!(
            "Rendered {written} pages to {}",
            self.out_dir.display()
        ));
        Ok(())
    }
}

fn route_filename(route: &str) -> String {
    if route == "/" {
        "index.html".to_owned()
    } else {
        format!("{}.html", route.trim_start_matches('/'))
    }
}

/// Wrap a rendered body in a minimal HTML document shell.
fn page_document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{}</title></head><body><div id=\"app\">{body}</div></body></html>\n",
        escape_html(title)
    )
}
