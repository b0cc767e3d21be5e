//! Git metadata helpers shared by the build script.

use std::path::{Path, PathBuf};

/// Returns the ref `HEAD` points at (`refs/heads/main`), or `None` when
/// `HEAD` is detached.
pub fn head_ref(head: &str) -> Option<&str> {
    head.trim()
        .strip_prefix("ref:")
        .map(str::trim)
        .filter(|r| !r.is_empty())
}

/// Files whose change means a new commit is checked out.
///
/// `git_dir` holds `HEAD`; `common_dir` holds branch refs and
/// `packed-refs` (they differ for linked worktrees). The ref's directory is
/// included so a loose ref created after `git pack-refs` is noticed.
pub fn watched_paths(git_dir: &Path, common_dir: &Path, head: &str) -> Vec<PathBuf> {
    let mut paths = vec![git_dir.join("HEAD")];
    if let Some(reference) = head_ref(head) {
        let ref_path = common_dir.join(reference);
        if let Some(parent) = ref_path.parent() {
            paths.push(parent.to_path_buf());
        }
        paths.push(ref_path);
        paths.push(common_dir.join("packed-refs"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_ref_on_branch() {
        assert_eq!(head_ref("ref: refs/heads/main\n"), Some("refs/heads/main"));
    }

    #[test]
    fn head_ref_detached() {
        assert_eq!(head_ref("6085002c1f0e4a7b9d3c2e1f0a9b8c7d6e5f4a3b\n"), None);
        assert_eq!(head_ref("ref: \n"), None);
    }

    #[test]
    fn watched_paths_on_branch() {
        let paths = watched_paths(
            Path::new(".git"),
            Path::new(".git"),
            "ref: refs/heads/feature/x\n",
        );
        assert_eq!(
            paths,
            [
                PathBuf::from(".git/HEAD"),
                PathBuf::from(".git/refs/heads/feature"),
                PathBuf::from(".git/refs/heads/feature/x"),
                PathBuf::from(".git/packed-refs"),
            ]
        );
    }

    #[test]
    fn watched_paths_in_worktree() {
        let paths = watched_paths(
            Path::new("/repo/.git/worktrees/wt"),
            Path::new("/repo/.git"),
            "ref: refs/heads/wt\n",
        );
        assert_eq!(paths[0], PathBuf::from("/repo/.git/worktrees/wt/HEAD"));
        assert_eq!(paths[1], PathBuf::from("/repo/.git/refs/heads"));
        assert_eq!(paths[2], PathBuf::from("/repo/.git/refs/heads/wt"));
    }

    #[test]
    fn watched_paths_detached_only_head() {
        let paths = watched_paths(Path::new(".git"), Path::new(".git"), "abc1234\n");
        assert_eq!(paths, [PathBuf::from(".git/HEAD")]);
    }
}
