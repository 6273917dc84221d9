pub mod cli;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod logging;
pub mod message;
pub mod tags;
pub mod urls;
pub mod utils;

pub use clipboard::{ClipboardError, ClipboardWriter, SystemClipboard, copy_text};
pub use config::Config;
pub use message::{MessageDisplay, MessageOptions, Notifier, Severity};
pub use tags::{string_to_tags, tags_to_string};
pub use urls::{get_server_media_url, get_server_url};
pub use utils::Profile;
