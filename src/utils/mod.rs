pub mod environment;
pub mod paths;
pub mod terminal;
pub mod timestamps;

pub use environment::{DATA_DIR_ENV, get_data_dir};
pub use paths::format_path_with_tilde;
pub use terminal::strip_ansi_codes;
pub use timestamps::format_timestamp;
