use std::backtrace::Backtrace;
use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::documents::service as document_service;
use crate::model::error::document_errors::GetDocumentError;
use crate::model::error::preview_errors::{GetPageError, RenderError};
use crate::previews::{clamp_scale, open_pages, PageSource};
use crate::repository::VaultDb;

pub fn page_count(id: &str, db: &VaultDb) -> Result<u32, GetPageError> {
    Ok(load_pages(id, db)?.page_count())
}

/// renders a single page of the document as a png
pub fn render_page(
    id: &str,
    page: u32,
    scale: Option<f32>,
    db: &VaultDb,
) -> Result<Vec<u8>, GetPageError> {
    let pages = load_pages(id, db)?;
    let image = pages
        .render_page(page, clamp_scale(scale))
        .map_err(GetPageError::Render)?;
    encode_png(&image).map_err(GetPageError::Render)
}

/// the pages whose text contains `text`, ignoring case. A blank search matches nothing
pub fn search_pages(id: &str, text: &str, db: &VaultDb) -> Result<Vec<u32>, GetPageError> {
    let pages = load_pages(id, db)?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let query = text.to_lowercase();
    let mut matches = Vec::new();
    for page in 1..=pages.page_count() {
        let page_text = pages.page_text(page).map_err(GetPageError::Render)?;
        if page_text.to_lowercase().contains(&query) {
            matches.push(page);
        }
    }
    Ok(matches)
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut blob = Vec::<u8>::new();
    if let Err(e) = image.write_to(&mut Cursor::new(&mut blob), ImageFormat::Png) {
        log::error!(
            "Failed to write rendered page to blob array. Exception is {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(RenderError::EncodeFailure);
    }
    Ok(blob)
}

fn load_pages(id: &str, db: &VaultDb) -> Result<Box<dyn PageSource>, GetPageError> {
    let doc = match document_service::get_document(id, db) {
        Ok(doc) => doc,
        Err(GetDocumentError::NotFound) => return Err(GetPageError::DocumentNotFound),
        Err(_) => return Err(GetPageError::DbError),
    };
    open_pages(&doc).map_err(GetPageError::Render)
}
