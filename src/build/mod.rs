mod clean;
mod flags;
mod makefile;
mod sources;

pub use clean::{clean, ensure_build_dir};
pub use flags::{ResolvedFlags, resolve_flags};
pub use makefile::{generate_makefile, render_makefile};
pub use sources::{SOURCE_EXTENSION, base_dir, find_sources};
