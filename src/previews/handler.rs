use rocket::serde::json::Json;
use rocket::State;

use crate::guard::Unlocked;
use crate::model::error::preview_errors::{GetPageError, RenderError};
use crate::model::response::BasicMessage;
use crate::previews::{
    service, GetPageCountResponse, GetPageResponse, PageCount, PageMatches, SearchPagesResponse,
};
use crate::repository::VaultDb;

#[get("/<id>/pages")]
pub fn get_page_count(id: &str, _unlocked: Unlocked, db: &State<VaultDb>) -> GetPageCountResponse {
    match service::page_count(id, db) {
        Ok(page_count) => GetPageCountResponse::Success(Json(PageCount { page_count })),
        Err(GetPageError::DocumentNotFound) => GetPageCountResponse::NotFound(BasicMessage::new(
            "The document with the passed id could not be found.",
        )),
        Err(GetPageError::Render(RenderError::UnsupportedType(mime))) => {
            GetPageCountResponse::Unsupported(BasicMessage::new(&format!(
                "Documents of type {mime} cannot be viewed page by page."
            )))
        }
        Err(e) => GetPageCountResponse::GenericError(BasicMessage::new(&format!(
            "Failed to open document pages: {e:?}"
        ))),
    }
}

/// finds the pages whose text contains `text`
#[get("/<id>/pages/search?<text>")]
pub fn search_pages(
    id: &str,
    text: &str,
    _unlocked: Unlocked,
    db: &State<VaultDb>,
) -> SearchPagesResponse {
    match service::search_pages(id, text, db) {
        Ok(pages) => SearchPagesResponse::Success(Json(PageMatches { pages })),
        Err(GetPageError::DocumentNotFound) => SearchPagesResponse::NotFound(BasicMessage::new(
            "The document with the passed id could not be found.",
        )),
        Err(GetPageError::Render(RenderError::UnsupportedType(mime))) => {
            SearchPagesResponse::Unsupported(BasicMessage::new(&format!(
                "Documents of type {mime} cannot be searched page by page."
            )))
        }
        Err(e) => SearchPagesResponse::GenericError(BasicMessage::new(&format!(
            "Failed to search document pages: {e:?}"
        ))),
    }
}

/// renders one page as a png. `scale` defaults to 1 and is clamped between 0.25 and 5
#[get("/<id>/pages/<page>?<scale>", rank = 2)]
pub fn get_page(
    id: &str,
    page: u32,
    scale: Option<f32>,
    _unlocked: Unlocked,
    db: &State<VaultDb>,
) -> GetPageResponse {
    match service::render_page(id, page, scale, db) {
        Ok(png) => GetPageResponse::Success(png),
        Err(GetPageError::DocumentNotFound) => GetPageResponse::NotFound(BasicMessage::new(
            "The document with the passed id could not be found.",
        )),
        Err(GetPageError::Render(RenderError::PageOutOfRange { page, page_count })) => {
            GetPageResponse::BadRequest(BasicMessage::new(&format!(
                "Page {page} does not exist. This document has {page_count} page(s)."
            )))
        }
        Err(GetPageError::Render(RenderError::UnsupportedType(mime))) => {
            GetPageResponse::Unsupported(BasicMessage::new(&format!(
                "Documents of type {mime} cannot be viewed page by page."
            )))
        }
        Err(e) => GetPageResponse::GenericError(BasicMessage::new(&format!(
            "Failed to render page: {e:?}"
        ))),
    }
}
