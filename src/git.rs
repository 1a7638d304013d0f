//! Git View: a read-only snapshot of a working directory's HEAD, tags, and
//! commit graph, built once per [`crate::get_version`] call on top of `gix`.
//!
//! All four operations in the contract are pure functions of the on-disk
//! repository at the moment [`GitView::open`] runs; nothing here mutates,
//! fetches, or pushes.

use std::path::Path;

use crate::error::{Result, VersionerError};

/// Opaque commit identity: a full sha plus parents in Git's own order
/// (first parent first).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Commit {
    pub sha: gix::ObjectId,
    pub parents: Vec<gix::ObjectId>,
}

impl Commit {
    /// First seven hex characters of `sha`, for logging only.
    pub fn short_sha(&self) -> String {
        short(&self.sha)
    }
}

pub(crate) fn short(sha: &gix::ObjectId) -> String {
    let hex = sha.to_string();
    hex[..hex.len().min(7)].to_string()
}

/// A tag resolved to the commit it targets. Annotated tags are dereferenced
/// to their target commit, never left pointing at the tag object.
#[derive(Debug, Clone)]
pub struct Tag {
    pub name: String,
    pub target: gix::ObjectId,
}

/// Read-only snapshot of a Git working directory.
pub struct GitView {
    repo: gix::Repository,
}

impl GitView {
    /// `true` if `work_dir` is, or is inside, a Git working directory.
    pub fn is_working_directory(work_dir: &Path) -> bool {
        gix::discover(work_dir).is_ok()
    }

    /// Opens the repository at (or above) `work_dir`.
    ///
    /// Returns `Ok(None)` — not an error — when `work_dir` simply isn't a
    /// Git working directory. Errors are reserved for failures after a
    /// repository has already been confirmed to exist.
    pub fn open(work_dir: &Path) -> Result<Option<Self>> {
        match gix::discover(work_dir) {
            Ok(repo) => Ok(Some(Self { repo })),
            Err(_) => Ok(None),
        }
    }

    /// HEAD's commit, or `None` if the repository has no commits yet.
    pub fn try_get_head(&self) -> Result<Option<Commit>> {
        let mut head = self
            .repo
            .head()
            .map_err(|e| VersionerError::git_unavailable("failed to read HEAD", e))?;

        let id = match head.try_peel_to_id() {
            Ok(Some(id)) => id.detach(),
            Ok(None) => return Ok(None),
            Err(e) => return Err(VersionerError::git_unavailable("failed to resolve HEAD", e)),
        };

        self.commit(id).map(Some)
    }

    /// The parents of `sha`, in Git's recorded order.
    pub fn commit_parents(&self, sha: gix::ObjectId) -> Result<Vec<gix::ObjectId>> {
        Ok(self.commit(sha)?.parents)
    }

    fn commit(&self, sha: gix::ObjectId) -> Result<Commit> {
        let object = self
            .repo
            .find_object(sha)
            .map_err(|e| VersionerError::git_unavailable(format!("commit {} not found", short(&sha)), e))?;

        let commit = object
            .try_into_commit()
            .map_err(|e| VersionerError::git_unavailable(format!("{} is not a commit", short(&sha)), e))?;

        let parents = commit.parent_ids().map(|id| id.detach()).collect();
        Ok(Commit { sha, parents })
    }

    /// Every tag reference in the repository, dereferenced to its target
    /// commit. A tag whose target cannot be resolved is skipped rather than
    /// failing the whole call — an unreadable tag is not a reason to refuse
    /// to compute a version.
    pub fn get_tags(&self) -> Result<Vec<Tag>> {
        let platform = self
            .repo
            .references()
            .map_err(|e| VersionerError::git_unavailable("failed to read references", e))?;

        let tag_refs = platform
            .tags()
            .map_err(|e| VersionerError::git_unavailable("failed to read tags", e))?;

        let mut tags = Vec::new();
        for mut tag_ref in tag_refs.flatten() {
            let name = tag_ref.name().shorten().to_string();
            let Ok(target) = tag_ref.peel_to_id() else {
                continue;
            };
            tags.push(Tag {
                name,
                target: target.detach(),
            });
        }
        Ok(tags)
    }
}
