//! The `Candidate` record built during the commit-graph walk (§3, §4.3).

use crate::version::Version;

/// One `(commit, height, tag, version, discovery-index)` tuple considered
/// for selection. `tag_name` is empty for a synthetic root candidate.
/// `index` is the candidate's position in discovery order and is the sole
/// tie-break when two candidates compare equal by version.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) commit: gix::ObjectId,
    pub(crate) height: u64,
    pub(crate) tag_name: String,
    pub(crate) version: Version,
    pub(crate) index: usize,
}
