pub mod dir;

pub mod error;

pub mod path;

pub mod temp;

// reexport
pub use error::FsUtilError;

pub use dir::{create_dir_for_file, create_dir_recursive, remove_dir_recursive};
pub use temp::{create_temp_file, create_temp_file_in, TempFile};
