//! The Versioner: orchestrates Git View and the Version Grammar into the
//! nine-step algorithm in spec §4.3.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::candidate::Candidate;
use crate::config::{Config, MajorMinor};
use crate::error::{Result, VersionerError};
use crate::git::{short, GitView};
use crate::logger::Logger;
use crate::version::Version;

/// Computes the version for the Git working directory at `work_dir`.
///
/// Never fails for an ordinary repository state: "not a working directory",
/// "no commits yet", and "tag does not parse as SemVer" all degrade to a
/// default version plus a log event (§4.3 Step 1, §7). The only failures
/// are [`VersionerError::InvalidConfiguration`] (checked eagerly, before any
/// Git work) and [`VersionerError::GitUnavailable`] (the Git mechanism
/// itself is broken).
pub fn get_version(work_dir: impl AsRef<Path>, config: &Config, logger: &dyn Logger) -> Result<Version> {
    config
        .validate()
        .map_err(VersionerError::InvalidConfiguration)?;

    let work_dir = work_dir.as_ref();
    let default_version = || default_version(config);

    if !GitView::is_working_directory(work_dir) {
        logger.warn(
            &format!("'{}' is not a Git working directory", work_dir.display()),
            Some(1001),
        );
        return Ok(default_version());
    }

    let view = match GitView::open(work_dir)? {
        Some(view) => view,
        None => {
            return Err(VersionerError::GitUnavailable {
                message: format!(
                    "'{}' was reported as a Git working directory but could not be opened",
                    work_dir.display()
                ),
                source: None,
            });
        }
    };

    let head = match view.try_get_head()? {
        Some(commit) => commit,
        None => {
            logger.info("no commits found; using the default version");
            return Ok(default_version());
        }
    };

    let tags_by_sha = intake_tags(&view, config, logger)?;
    let mut candidates = walk(&view, head.sha, &tags_by_sha, config, logger)?;

    candidates.sort_by(|a, b| a.version.cmp(&b.version).then_with(|| b.index.cmp(&a.index)));

    if logger.is_debug() {
        for c in &candidates {
            logger.debug(&format!(
                "{:>6}  {:<7}  {:<16}  {}",
                c.height,
                short(&c.commit),
                c.tag_name,
                c.version
            ));
        }
    }

    let last_release = candidates.iter().rev().find(|c| !c.version.is_prerelease());
    let last_prerelease = candidates.iter().rev().find(|c| c.version.is_prerelease());

    let selected = last_release
        .or(last_prerelease)
        .expect("the walk always records at least one candidate when HEAD exists");

    let pre_release_version = last_prerelease.map(|c| &c.version).unwrap_or(&selected.version);
    let pre_release_major_minor = MajorMinor::new(pre_release_version.major, pre_release_version.minor);

    let min = config.min_major_minor.unwrap_or_default();
    let effective = if min.major == pre_release_major_minor.major {
        MajorMinor::new(min.major, min.minor.max(pre_release_major_minor.minor))
    } else if min.major > pre_release_major_minor.major {
        min
    } else {
        pre_release_major_minor
    };

    let mut version = selected.version.satisfying(&effective, &config.default_pre_release_identifiers);
    if version != selected.version {
        logger.info(&format!(
            "bumped {} to {version} to satisfy minimum major.minor {effective}",
            selected.version
        ));
    }

    if !config.ignore_height {
        version = version.with_height(selected.height, config.auto_increment, &config.default_pre_release_identifiers);
    }

    if let Some(meta) = &config.build_metadata {
        version = version
            .add_build_metadata(meta)
            .expect("build_metadata was validated in Config::validate");
    }

    logger.info(&format!("calculated version {version}"));

    Ok(version)
}

fn default_version(config: &Config) -> Version {
    let version = Version::synthetic_root(&config.default_pre_release_identifiers);
    match &config.build_metadata {
        Some(meta) => version
            .add_build_metadata(meta)
            .expect("build_metadata was validated in Config::validate"),
        None => version,
    }
}

/// Step 2 — parse every tag, keep the ones matching `tag_prefix`, sort
/// ascending by `(version, name)`, and group by target commit.
fn intake_tags(
    view: &GitView,
    config: &Config,
    logger: &dyn Logger,
) -> Result<HashMap<gix::ObjectId, Vec<(String, Version)>>> {
    let mut parsed: Vec<(String, gix::ObjectId, Version)> = Vec::new();

    for tag in view.get_tags()? {
        match Version::parse(&tag.name, &config.tag_prefix) {
            Some(version) => parsed.push((tag.name, tag.target, version)),
            None => {
                if logger.is_debug() {
                    logger.debug(&format!(
                        "ignoring tag '{}': not SemVer 2.0 with prefix '{}'",
                        tag.name, config.tag_prefix
                    ));
                }
            }
        }
    }

    parsed.sort_by(|a, b| a.2.cmp(&b.2).then_with(|| a.0.cmp(&b.0)));

    let mut by_sha: HashMap<gix::ObjectId, Vec<(String, Version)>> = HashMap::new();
    for (name, sha, version) in parsed {
        by_sha.entry(sha).or_default().push((name, version));
    }
    Ok(by_sha)
}

/// Step 3 — reverse DFS from HEAD with an explicit LIFO worklist (never
/// native recursion — real histories run tens of thousands of commits deep).
fn walk(
    view: &GitView,
    head: gix::ObjectId,
    tags_by_sha: &HashMap<gix::ObjectId, Vec<(String, Version)>>,
    config: &Config,
    logger: &dyn Logger,
) -> Result<Vec<Candidate>> {
    let mut worklist: Vec<(gix::ObjectId, u64)> = vec![(head, 0)];
    let mut visited: HashSet<gix::ObjectId> = HashSet::new();
    let mut candidates: Vec<Candidate> = Vec::new();

    while let Some((sha, height)) = worklist.pop() {
        if !visited.insert(sha) {
            continue;
        }

        if logger.is_trace() {
            logger.trace(&format!("visiting {} at height {height}", short(&sha)));
        }

        let mut truncates = false;
        if let Some(tags_here) = tags_by_sha.get(&sha) {
            for (name, version) in tags_here {
                candidates.push(Candidate {
                    commit: sha,
                    height,
                    tag_name: name.clone(),
                    version: version.clone(),
                    index: candidates.len(),
                });
                if !version.is_prerelease() {
                    truncates = true;
                }
            }
        }

        if truncates {
            continue;
        }

        let parents = view.commit_parents(sha)?;
        if parents.is_empty() {
            candidates.push(Candidate {
                commit: sha,
                height,
                tag_name: String::new(),
                version: Version::synthetic_root(&config.default_pre_release_identifiers),
                index: candidates.len(),
            });
            continue;
        }

        for parent in parents.iter().rev() {
            worklist.push((*parent, height + 1));
        }
    }

    Ok(candidates)
}
