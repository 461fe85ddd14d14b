#[derive(PartialEq, Debug)]
pub enum RenderError {
    /// the document type has no page renderer
    UnsupportedType(String),
    /// the stored data could not be decoded into pages
    InvalidData,
    /// pages are 1-indexed, and must not go past the page count
    PageOutOfRange { page: u32, page_count: u32 },
    /// the rendered page could not be encoded
    EncodeFailure,
}

#[derive(PartialEq, Debug)]
pub enum GetPageError {
    DocumentNotFound,
    DbError,
    Render(RenderError),
}
