pub mod output;
pub mod real;
pub mod traits;
pub mod walker;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use real::FsContentSource;
pub use traits::{ContentSource, MemorySource};
pub use walker::{default_extensions, select_files, FileWalker};
