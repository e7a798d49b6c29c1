//! `fts extract` command implementation.
//!
//! One-shot migration: parse the fixed static-page set, extract
//! navigation and footer from the home page, upload to the content store
//! when credentials are configured, and always write the full extracted
//! data set to the export file. Per-page failures are logged and the page
//! is omitted; they never abort the batch.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use fts_config::{CliSettings, Config, StoreConfig};
use fts_content::{Page, SiteData, SiteSettings};
use fts_extract::{
    Element, PAGE_FILES, extract_footer, extract_navigation, extract_page, parse_document,
};
use fts_store::{ContentSink, RestStore, StoreError};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the extract command.
#[derive(Args)]
pub(crate) struct ExtractArgs {
    /// Path to configuration file (default: auto-discover fts.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing the legacy static pages (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site identifier (overrides config).
    #[arg(long, env = "FTS_SITE_ID")]
    site_id: Option<String>,

    /// Output path for the exported data set (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (show extraction warnings).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExtractArgs {
    /// Execute the extract command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            site_id: self.site_id,
            source_dir: self.source_dir,
            output: self.output,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let source_dir = &config.extract_resolved.source_dir;
        let site_id = config.site.id.clone();

        output.separator();
        output.highlight("  FTS - static pages to content store");
        output.separator();

        let mut data = SiteData {
            site: SiteSettings {
                id: Some(site_id.clone()),
                ..SiteSettings::fallback()
            },
            ..SiteData::default()
        };

        // One page's failure never aborts the rest of the batch.
        for (page_id, filename) in PAGE_FILES {
            output.info(&format!("Parsing {filename}..."));
            match extract_page_file(&source_dir.join(filename), page_id) {
                Ok(page) => {
                    output.success(&format!("  {} blocks", page.blocks.len()));
                    data.pages.insert(page_id.to_owned(), page);
                }
                Err(e) => {
                    tracing::error!(page = page_id, error = %e, "page extraction failed");
                    output.error(&format!("  failed: {e}"));
                }
            }
        }

        match parse_page_file(&source_dir.join("index.html")) {
            Ok(doc) => {
                data.navigation = Some(extract_navigation(&doc));
                data.footer = Some(extract_footer(&doc));
                output.info("Extracted navigation and footer");
            }
            Err(e) => {
                tracing::error!(error = %e, "navigation extraction failed");
                output.error(&format!("Navigation extraction failed: {e}"));
            }
        }

        let uploaded = match &config.store_resolved {
            Some(store_config) => upload(store_config, &site_id, &data, output),
            None => {
                output.warning("No store credentials configured. Skipping upload.");
                false
            }
        };

        // The file export happens regardless of upload outcome.
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(&config.extract_resolved.output, json)?;
        output.info(&format!(
            "Saved complete data to {}",
            config.extract_resolved.output.display()
        ));

        output.separator();
        if uploaded {
            output.success(&format!(
                "Extraction complete: {} pages uploaded and exported",
                data.pages.len()
            ));
        } else {
            output.success(&format!(
                "Extraction complete: {} pages exported (not uploaded)",
                data.pages.len()
            ));
        }
        output.separator();

        Ok(())
    }
}

fn parse_page_file(path: &Path) -> Result<Element, CliError> {
    let html = fs::read_to_string(path)?;
    Ok(parse_document(&html)?)
}

fn extract_page_file(path: &Path, page_id: &str) -> Result<Page, CliError> {
    Ok(extract_page(&parse_page_file(path)?, page_id))
}

fn upload(store_config: &StoreConfig, site_id: &str, data: &SiteData, output: &Output) -> bool {
    output.info(&format!("Uploading to {}...", store_config.base_url));
    match try_upload(store_config, site_id, data) {
        Ok(()) => {
            output.success("Upload complete");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "store upload failed");
            output.warning(&format!("Store upload failed: {e}. Keeping file export only."));
            false
        }
    }
}

fn try_upload(
    store_config: &StoreConfig,
    site_id: &str,
    data: &SiteData,
) -> Result<(), StoreError> {
    let store = RestStore::from_token_file(&store_config.base_url, &store_config.token_path)?;

    store.put_site_settings(site_id, &data.site)?;
    for page in data.pages.values() {
        store.put_page(site_id, page)?;
    }
    if let Some(navigation) = &data.navigation {
        store.put_navigation(site_id, navigation)?;
    }
    if let Some(footer) = &data.footer {
        store.put_footer(site_id, footer)?;
    }
    Ok(())
}
