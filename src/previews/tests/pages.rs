use crate::documents::data_uri;
use crate::model::error::preview_errors::RenderError;
use crate::model::repository::DocumentRecord;
use crate::previews::*;
use crate::test::{document, pdf_document, tiny_png};

fn png_document() -> DocumentRecord {
    DocumentRecord {
        data: data_uri::encode("image/png", &tiny_png()),
        ..document("1", "board.png", None, 1)
    }
}

#[test]
fn clamp_scale_bounds() {
    assert_eq!(MIN_SCALE, clamp_scale(Some(0.01)));
    assert_eq!(MAX_SCALE, clamp_scale(Some(50.0)));
    assert_eq!(2.0, clamp_scale(Some(2.0)));
    assert_eq!(DEFAULT_SCALE, clamp_scale(None));
    assert_eq!(DEFAULT_SCALE, clamp_scale(Some(f32::NAN)));
}

#[test]
fn image_is_a_single_page() {
    let pages = open_pages(&png_document()).unwrap();
    assert_eq!(1, pages.page_count());
    let page = pages.render_page(1, 1.0).unwrap();
    assert_eq!((2, 1), page.dimensions());
    assert_eq!(image::Rgba([255, 0, 0, 255]), *page.get_pixel(0, 0));
}

#[test]
fn render_page_scales_image() {
    let pages = open_pages(&png_document()).unwrap();
    assert_eq!((4, 2), pages.render_page(1, 2.0).unwrap().dimensions());
    // never shrinks below one pixel
    assert_eq!((1, 1), pages.render_page(1, 0.25).unwrap().dimensions());
}

#[test]
fn render_page_out_of_range() {
    let pages = open_pages(&png_document()).unwrap();
    assert_eq!(
        Err(RenderError::PageOutOfRange {
            page: 2,
            page_count: 1
        }),
        pages.render_page(2, 1.0)
    );
    assert_eq!(
        Err(RenderError::PageOutOfRange {
            page: 0,
            page_count: 1
        }),
        pages.render_page(0, 1.0)
    );
}

#[test]
fn image_has_no_text() {
    let pages = open_pages(&png_document()).unwrap();
    assert_eq!(Ok(String::new()), pages.page_text(1));
}

#[test]
fn pdf_pages_are_counted() {
    let doc = pdf_document("1", "Notes.pdf", &["Matrices", "Vectors", "Eigenvalues"]);
    let pages = open_pages(&doc).unwrap();
    assert_eq!(3, pages.page_count());
}

#[test]
fn pdf_page_text() {
    let doc = pdf_document("1", "Notes.pdf", &["Matrices", "Vectors"]);
    let pages = open_pages(&doc).unwrap();
    assert!(pages.page_text(2).unwrap().contains("Vectors"));
    assert!(!pages.page_text(1).unwrap().contains("Vectors"));
    assert_eq!(
        Err(RenderError::PageOutOfRange {
            page: 3,
            page_count: 2
        }),
        pages.page_text(3)
    );
}

#[test]
fn pdf_pages_are_not_rendered() {
    let doc = pdf_document("1", "Notes.pdf", &["Matrices"]);
    let pages = open_pages(&doc).unwrap();
    assert_eq!(
        Err(RenderError::UnsupportedType("application/pdf".to_string())),
        pages.render_page(1, 1.0)
    );
}

#[test]
fn corrupt_pdf_is_invalid_data() {
    // the default fixture's contents are plain text, not a pdf
    let res = open_pages(&document("1", "Algebra.pdf", None, 1));
    assert_eq!(Some(RenderError::InvalidData), res.err());
}

#[test]
fn other_types_are_unsupported() {
    let res = open_pages(&document("1", "notes.txt", None, 1));
    assert_eq!(
        Some(RenderError::UnsupportedType("text/plain".to_string())),
        res.err()
    );
}

#[test]
fn corrupt_image_is_invalid_data() {
    let doc = DocumentRecord {
        data: "data:image/png;base64,aGVsbG8=".to_string(),
        ..document("1", "board.png", None, 1)
    };
    assert_eq!(Some(RenderError::InvalidData), open_pages(&doc).err());
}
