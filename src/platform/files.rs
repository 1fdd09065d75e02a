//! CSV export to and import from files
//!
//! Natively these are plain filesystem paths. In the browser, export triggers
//! a download and import reads a user-picked `File`.

use crate::error::Result;
use crate::highscores::HighscoreManager;
use crate::platform::{Clock, HighscoreStore};

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

/// MIME type of exported files
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Write the board as CSV to `filename` (the configured export name if
/// `None`). Returns the path written.
#[cfg(not(target_arch = "wasm32"))]
pub fn export_highscores_to_file<S: HighscoreStore, C: Clock>(
    manager: &HighscoreManager<S, C>,
    filename: Option<&Path>,
) -> Result<PathBuf> {
    let path = filename
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&manager.config().export_filename));

    std::fs::write(&path, manager.to_csv()?)?;
    log::info!("Exported {} high scores to {}", manager.len(), path.display());
    Ok(path)
}

/// Read the whole file, then merge it into the board.
/// Resolves once with the number of rows imported.
#[cfg(not(target_arch = "wasm32"))]
pub async fn import_highscores_from_file<S: HighscoreStore, C: Clock>(
    file: impl AsRef<Path>,
    manager: &mut HighscoreManager<S, C>,
) -> Result<usize> {
    let content = tokio::fs::read_to_string(file.as_ref()).await?;
    log::debug!("Read {} bytes from {}", content.len(), file.as_ref().display());
    Ok(manager.import_from_csv(&content))
}

/// Offer the board as a CSV download named `filename` (the configured export
/// name if `None`).
#[cfg(target_arch = "wasm32")]
pub fn export_highscores_to_file<S: HighscoreStore, C: Clock>(
    manager: &HighscoreManager<S, C>,
    filename: Option<&str>,
) -> Result<()> {
    use wasm_bindgen::{JsCast, JsValue};

    let js_err = |e: JsValue| crate::Error::Download(format!("{e:?}"));
    let filename = filename.unwrap_or(manager.config().export_filename.as_str());

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&manager.to_csv()?));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(CSV_MIME);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| crate::Error::Download("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| crate::Error::Download("no document body".to_string()))?;
    let link: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| crate::Error::Download("not an anchor element".to_string()))?;
    link.set_href(&url);
    link.set_download(filename);

    // Detached anchors are ignored by some browsers
    body.append_child(&link).map_err(js_err)?;
    link.click();
    link.remove();

    let _ = web_sys::Url::revoke_object_url(&url);
    log::info!("Exported {} high scores as {}", manager.len(), filename);
    Ok(())
}

/// Read the whole `File`, then merge it into the board.
/// Resolves once with the number of rows imported.
#[cfg(target_arch = "wasm32")]
pub async fn import_highscores_from_file<S: HighscoreStore, C: Clock>(
    file: &web_sys::File,
    manager: &mut HighscoreManager<S, C>,
) -> Result<usize> {
    let text = wasm_bindgen_futures::JsFuture::from(file.text())
        .await
        .map_err(|e| crate::Error::Read(format!("{e:?}")))?;
    let content = text
        .as_string()
        .ok_or_else(|| crate::Error::Read("file contents are not text".to_string()))?;
    Ok(manager.import_from_csv(&content))
}
