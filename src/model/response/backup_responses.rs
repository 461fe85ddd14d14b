use rocket::http::Header;
use rocket::serde::json::Json;

use crate::model::response::BasicMessage;
use crate::model::snapshot::Snapshot;

type NoContent = ();

/// the exported snapshot, sent as a file download
#[derive(Responder)]
#[response(status = 200, content_type = "json")]
pub struct SnapshotDownload {
    pub snapshot: Json<Snapshot>,
    pub disposition: Header<'static>,
}

#[derive(Responder)]
pub enum ExportVaultResponse {
    Success(SnapshotDownload),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum ImportVaultResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 413, content_type = "json")]
    TooLarge(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}
