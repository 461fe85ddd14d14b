use std::sync::{Arc, Mutex};

use rocket::async_trait;
use rocket::http::Header;
use rocket::local::blocking::Client;
use tempfile::TempDir;

use crate::ai::client::TextGenerator;
use crate::ai::error::AiError;
use crate::ai::{AiState, PromptPart};
use crate::build_rocket;
use crate::config::VaultConfig;
use crate::documents::data_uri;
use crate::documents::repository as document_repository;
use crate::folders::repository as folder_repository;
use crate::guard::PASSCODE_HEADER;
use crate::model::repository::{DocumentMetadata, DocumentRecord, Folder};
use crate::repository::{metadata_repository, VaultDb};
use crate::settings::service::{hash_passcode, load_settings, PASSCODE_KEY};

pub static PASSCODE: &str = "123456";

pub fn passcode_header() -> Header<'static> {
    Header::new(PASSCODE_HEADER, PASSCODE)
}

/// a fresh vault database in its own temp directory. The directory (and database) go away when this is dropped
pub struct TestVault {
    _dir: TempDir,
    pub db: VaultDb,
}

impl TestVault {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = VaultDb::new(dir.path().join("vault.sqlite"));
        db.initialize().unwrap();
        Self { _dir: dir, db }
    }

    /// a vault that already has [`PASSCODE`] set
    pub fn locked() -> Self {
        let vault = Self::new();
        let con = vault.db.open_connection().unwrap();
        metadata_repository::set_value(PASSCODE_KEY, &hash_passcode(PASSCODE), &con).unwrap();
        vault
    }

    pub fn client(&self) -> Client {
        self.client_with_ai(AiState::disabled())
    }

    pub fn client_with_generator(&self, generator: Arc<dyn TextGenerator>) -> Client {
        self.client_with_ai(AiState::new(generator))
    }

    fn client_with_ai(&self, ai: AiState) -> Client {
        let settings = load_settings(&self.db).unwrap();
        let rocket = build_rocket(&VaultConfig::default(), self.db.clone(), settings, ai);
        Client::tracked(rocket).unwrap()
    }

    pub fn create_folder(&self, id: &str, name: &str, parent_id: Option<&str>) -> Folder {
        let folder = folder(id, name, parent_id);
        let con = self.db.open_connection().unwrap();
        folder_repository::save_folder(&folder, &con).unwrap();
        folder
    }

    pub fn save_folder(&self, folder: &Folder) {
        let con = self.db.open_connection().unwrap();
        folder_repository::save_folder(folder, &con).unwrap();
    }

    pub fn create_document(
        &self,
        id: &str,
        name: &str,
        folder_id: Option<&str>,
        uploaded_at: i64,
    ) -> DocumentRecord {
        let doc = document(id, name, folder_id, uploaded_at);
        self.save_document(&doc);
        doc
    }

    pub fn save_document(&self, doc: &DocumentRecord) {
        let con = self.db.open_connection().unwrap();
        document_repository::save_document(doc, &con).unwrap();
    }

    pub fn all_folders(&self) -> Vec<Folder> {
        let con = self.db.open_connection().unwrap();
        folder_repository::get_all_folders(&con).unwrap()
    }

    pub fn all_documents(&self) -> Vec<DocumentRecord> {
        let con = self.db.open_connection().unwrap();
        document_repository::get_all_documents(&con).unwrap()
    }
}

pub fn folder(id: &str, name: &str, parent_id: Option<&str>) -> Folder {
    Folder {
        id: id.to_string(),
        name: name.to_string(),
        parent_id: parent_id.map(str::to_string),
        icon: None,
        is_pinned: false,
        created_at: Some(0),
    }
}

/// a small text document. The mime type is guessed from the file extension
pub fn document(id: &str, name: &str, folder_id: Option<&str>, uploaded_at: i64) -> DocumentRecord {
    let mime_type = if name.ends_with(".pdf") {
        "application/pdf"
    } else if name.ends_with(".jpg") {
        "image/jpeg"
    } else if name.ends_with(".png") {
        "image/png"
    } else {
        "text/plain"
    };
    let contents = format!("contents of {name}");
    DocumentRecord {
        id: id.to_string(),
        name: name.to_string(),
        folder_id: folder_id.map(str::to_string),
        mime_type: mime_type.to_string(),
        data: data_uri::encode(mime_type, contents.as_bytes()),
        uploaded_at,
        size: contents.len() as u64,
        summary: None,
        tags: Vec::new(),
    }
}

/// [`document`] without its contents
pub fn listing(id: &str, name: &str, folder_id: Option<&str>, uploaded_at: i64) -> DocumentMetadata {
    DocumentMetadata::from(&document(id, name, folder_id, uploaded_at))
}

/// a 2x1 png, red then blue
pub fn tiny_png() -> Vec<u8> {
    let mut image = image::RgbaImage::new(2, 1);
    image.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
    image.put_pixel(1, 0, image::Rgba([0, 0, 255, 255]));
    crate::previews::service::encode_png(&image).unwrap()
}

/// a pdf with one page per entry in `pages`, each page showing that text
pub fn sample_pdf(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }
    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// a pdf document built from [`sample_pdf`]
pub fn pdf_document(id: &str, name: &str, pages: &[&str]) -> DocumentRecord {
    let bytes = sample_pdf(pages);
    DocumentRecord {
        data: data_uri::encode("application/pdf", &bytes),
        size: bytes.len() as u64,
        ..document(id, name, None, 1)
    }
}

/// text generator that never leaves the process. Records every prompt it's given
pub struct StubGenerator {
    reply: Option<String>,
    pub prompts: Mutex<Vec<Vec<PromptPart>>>,
}

impl StubGenerator {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// a generator whose every call fails like an unreachable api would
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, parts: Vec<PromptPart>) -> Result<String, AiError> {
        self.prompts.lock().unwrap().push(parts);
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(AiError::Api {
                status: 503,
                body: "unavailable".to_string(),
            }),
        }
    }
}
