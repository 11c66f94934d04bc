pub mod convert;
pub mod merge;
pub mod qr;
pub mod shorten;
pub mod split;
pub mod thumbnail;

pub use convert::{ConvertState, show_convert};
pub use merge::{MergeState, show_merge};
pub use qr::{QrState, show_qr};
pub use shorten::{ShortenState, show_shorten};
pub use split::{SplitState, show_split};
pub use thumbnail::{ThumbnailState, show_thumbnail};
