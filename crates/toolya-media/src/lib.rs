//! Single-shot media transforms for the Toolya tool set.
//!
//! Each transform is a pure request/response function: QR text encoding,
//! image format re-encoding, YouTube thumbnail URL derivation/fetch, and
//! the placeholder URL shortener.

mod convert;
mod error;
mod qr;
mod shorten;
mod youtube;

pub use convert::{OutputFormat, convert_image};
pub use error::*;
pub use qr::{encode_qr_png, qr_data_url, render_qr_image};
pub use shorten::{SHORT_URL_PREFIX, shorten_url};
pub use youtube::{extract_video_id, fetch_thumbnail, thumbnail_url};
