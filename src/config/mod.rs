pub mod links_file;
pub mod params;

pub use links_file::LinksFile;
pub use params::{bind_all, parse_param, value_from_yaml};
