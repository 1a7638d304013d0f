//! # gitsemver
//!
//! Deterministic SemVer 2.0 version calculation from Git tag history.
//!
//! Given a working directory, [`get_version`] walks the commit graph
//! reachable from `HEAD`, finds the most relevant reachable tag, and derives
//! a version from it and the number of commits ("height") between `HEAD`
//! and that tag. It never mutates the repository, never touches the
//! network, and never shells out to a `git` executable — repository access
//! goes through [`gix`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use gitsemver::{get_version, Config, NullLogger};
//!
//! let config = Config::default();
//! let version = get_version(".", &config, &NullLogger)?;
//! println!("{version}");
//! # Ok::<_, gitsemver::VersionerError>(())
//! ```

mod candidate;
pub mod config;
pub mod error;
pub mod git;
pub mod logger;
pub mod version;
mod versioner;

pub use config::{AutoIncrement, Config, MajorMinor};
pub use error::{Result, VersionerError};
pub use git::GitView;
pub use logger::{Logger, NullLogger, TracingLogger};
pub use version::{Identifier, InvalidVersion, Version};
pub use versioner::get_version;
