use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbaImage};
use lopdf::Document;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};

use crate::documents::data_uri;
use crate::model::error::preview_errors::RenderError;
use crate::model::repository::DocumentRecord;
use crate::model::response::BasicMessage;

pub const MIN_SCALE: f32 = 0.25;
pub const MAX_SCALE: f32 = 5.0;
pub const DEFAULT_SCALE: f32 = 1.0;

/// clamps a requested render scale into the supported range. Missing or nonsense values render at full size
pub fn clamp_scale(scale: Option<f32>) -> f32 {
    match scale {
        Some(scale) if scale.is_finite() => scale.clamp(MIN_SCALE, MAX_SCALE),
        _ => DEFAULT_SCALE,
    }
}

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// a document that can be viewed one page at a time. Pages are numbered starting at 1
pub trait PageSource {
    fn page_count(&self) -> u32;

    fn render_page(&self, page: u32, scale: f32) -> Result<RgbaImage, RenderError>;

    /// the text on the page, as far as it can be extracted. Pages without a text layer give an empty string
    fn page_text(&self, page: u32) -> Result<String, RenderError>;
}

fn check_page(page: u32, page_count: u32) -> Result<(), RenderError> {
    if page == 0 || page > page_count {
        Err(RenderError::PageOutOfRange { page, page_count })
    } else {
        Ok(())
    }
}

/// a single image, shown as a one page document
pub struct ImagePages {
    image: DynamicImage,
}

impl ImagePages {
    pub fn decode(bytes: &[u8]) -> Result<Self, RenderError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| {
                log::error!("Failed to guess image format. Exception is {e:?}");
                RenderError::InvalidData
            })?;
        let image = reader.decode().map_err(|e| {
            log::error!("Failed to decode image. Exception is {e:?}");
            RenderError::InvalidData
        })?;
        Ok(Self { image })
    }
}

impl PageSource for ImagePages {
    fn page_count(&self) -> u32 {
        1
    }

    fn render_page(&self, page: u32, scale: f32) -> Result<RgbaImage, RenderError> {
        check_page(page, self.page_count())?;
        let scale = clamp_scale(Some(scale));
        if scale == DEFAULT_SCALE {
            return Ok(self.image.to_rgba8());
        }
        let width = scaled(self.image.width(), scale);
        let height = scaled(self.image.height(), scale);
        Ok(self
            .image
            .resize_exact(width, height, FilterType::Triangle)
            .to_rgba8())
    }

    fn page_text(&self, page: u32) -> Result<String, RenderError> {
        check_page(page, self.page_count())?;
        Ok(String::new())
    }
}

fn scaled(dimension: u32, scale: f32) -> u32 {
    ((dimension as f32 * scale).round() as u32).max(1)
}

/// a pdf. Pages can be counted and searched, but not rasterized
pub struct PdfPages {
    document: Document,
    /// page numbers as the pdf's page tree orders them
    pages: Vec<u32>,
}

impl PdfPages {
    pub fn load(bytes: &[u8]) -> Result<Self, RenderError> {
        let document = Document::load_mem(bytes).map_err(|e| {
            log::error!("Failed to parse pdf. Exception is {e:?}");
            RenderError::InvalidData
        })?;
        let pages = document.get_pages().keys().copied().collect();
        Ok(Self { document, pages })
    }
}

impl PageSource for PdfPages {
    fn page_count(&self) -> u32 {
        u32::try_from(self.pages.len()).unwrap_or(u32::MAX)
    }

    fn render_page(&self, page: u32, _scale: f32) -> Result<RgbaImage, RenderError> {
        check_page(page, self.page_count())?;
        Err(RenderError::UnsupportedType(PDF_MIME_TYPE.to_string()))
    }

    fn page_text(&self, page: u32) -> Result<String, RenderError> {
        check_page(page, self.page_count())?;
        let number = self.pages[page as usize - 1];
        self.document.extract_text(&[number]).map_err(|e| {
            log::error!("Failed to extract text from pdf page {page}. Exception is {e:?}");
            RenderError::InvalidData
        })
    }
}

/// opens the pages of a document. Images and pdfs have pages, everything else is unsupported
pub fn open_pages(doc: &DocumentRecord) -> Result<Box<dyn PageSource>, RenderError> {
    let is_pdf = doc.mime_type == PDF_MIME_TYPE;
    if !is_pdf && !doc.mime_type.starts_with("image/") {
        return Err(RenderError::UnsupportedType(doc.mime_type.clone()));
    }
    let content = data_uri::decode(&doc.data).map_err(|e| {
        log::error!("Document {} has unreadable data: {e:?}", doc.id);
        RenderError::InvalidData
    })?;
    if is_pdf {
        Ok(Box::new(PdfPages::load(&content.bytes)?))
    } else {
        Ok(Box::new(ImagePages::decode(&content.bytes)?))
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageCount {
    pub page_count: u32,
}

/// pages whose text contains the search, in page order
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PageMatches {
    pub pages: Vec<u32>,
}

#[derive(Responder)]
pub enum SearchPagesResponse {
    #[response(status = 200)]
    Success(Json<PageMatches>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 415, content_type = "json")]
    Unsupported(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    GenericError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetPageCountResponse {
    #[response(status = 200)]
    Success(Json<PageCount>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 415, content_type = "json")]
    Unsupported(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    GenericError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetPageResponse {
    #[response(status = 200, content_type = "image/png")]
    Success(Vec<u8>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 415, content_type = "json")]
    Unsupported(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    GenericError(Json<BasicMessage>),
}
