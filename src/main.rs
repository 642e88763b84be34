use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod domain;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridedit=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(feature = "desktop")]
    {
        let webview_data_dir =
            default_webview_data_dir().expect("should resolve and create WebView2 data directory");

        dioxus::LaunchBuilder::desktop()
            .with_cfg(
                dioxus::desktop::Config::new()
                    .with_window(dioxus::desktop::WindowBuilder::new().with_title("Grid Editor"))
                    .with_data_directory(webview_data_dir),
            )
            .launch(app::App);
    }
}

/// The demo dataset the dialog opens with: two rows matching the fixed
/// headers, with type-column values drawn from the choice set.
pub(crate) fn initial_rows() -> Vec<Vec<String>> {
    vec![
        vec!["Name", "type_2", "0.0", "0.0", "0.0"],
        vec!["Name", "type_3", "0.0", "0.0", "0.0"],
    ]
    .into_iter()
    .map(|row| row.into_iter().map(str::to_string).collect())
    .collect()
}

pub(crate) fn table_container_style() -> &'static str {
    "border: 1px solid #bbb; border-radius: 8px; overflow: auto; max-height: 70vh;"
}

pub(crate) fn table_header_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 6px 8px; background: #f3f3f3; text-align: left; position: sticky; top: 0;"
}

pub(crate) fn table_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px 8px;"
}

pub(crate) fn toolbar_button_style() -> &'static str {
    "border: 1px solid #bbb; background: #fff; padding: 6px 14px; border-radius: 6px; cursor: pointer;"
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "gridedit", "gridedit")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}
