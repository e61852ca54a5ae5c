//! Response bodies shared by the API handlers.
//!
//! Read endpoints use a `{ "data": ... }` envelope. Authoring endpoints
//! answer `{ "ok": true, ... }` acknowledgements, which is what the
//! showcase client expects.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Acknowledgement of a collection reorder: the persisted id order.
#[derive(Debug, Serialize)]
pub struct ReorderAck {
    pub ok: bool,
    pub ids: Vec<String>,
}

/// Acknowledgement of a single-record patch.
#[derive(Debug, Serialize)]
pub struct PatchAck {
    pub ok: bool,
    pub id: String,
}

/// Acknowledgement of a gallery reorder: the persisted image order.
#[derive(Debug, Serialize)]
pub struct ImageOrderAck {
    pub ok: bool,
    pub images: Vec<String>,
}
