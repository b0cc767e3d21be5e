use std::path::PathBuf;
use std::process::Command;

#[path = "src/git.rs"]
mod git;

fn main() {
    // Explicit values from the release pipeline win over local discovery.
    let commit = std::env::var("ADVERTISE_COMMIT")
        .ok()
        .filter(|c| !c.is_empty())
        .or_else(|| git(&["rev-parse", "--short", "HEAD"]));
    if let Some(commit) = commit {
        println!("cargo:rustc-env=ADVERTISE_COMMIT={commit}");
    }

    let build_time = std::env::var("ADVERTISE_BUILD_TIME")
        .ok()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| {
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        });
    println!("cargo:rustc-env=ADVERTISE_BUILD_TIME={build_time}");

    if let Some(rustc) = rustc_version() {
        println!("cargo:rustc-env=ADVERTISE_RUSTC_VERSION={rustc}");
    }

    // Rerun on a new commit or branch switch, not only on env changes.
    watch_git_head();
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/git.rs");
    println!("cargo:rerun-if-env-changed=ADVERTISE_VERSION");
    println!("cargo:rerun-if-env-changed=ADVERTISE_COMMIT");
    println!("cargo:rerun-if-env-changed=ADVERTISE_BUILD_TIME");
}

fn watch_git_head() {
    let (Some(git_dir), Some(common_dir)) = (
        git(&["rev-parse", "--absolute-git-dir"]),
        git(&["rev-parse", "--git-common-dir"]),
    ) else {
        return;
    };
    let git_dir = PathBuf::from(git_dir);
    // `--git-common-dir` may be relative to the current directory.
    let common_dir = std::env::current_dir()
        .map(|cwd| cwd.join(&common_dir))
        .unwrap_or_else(|_| PathBuf::from(&common_dir));

    let head = std::fs::read_to_string(git_dir.join("HEAD")).unwrap_or_default();
    // A missing path would count as changed on every build.
    for path in git::watched_paths(&git_dir, &common_dir, &head)
        .into_iter()
        .filter(|p| p.exists())
    {
        println!("cargo:rerun-if-changed={}", path.display());
    }
}

fn git(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8(out.stdout).ok()?.trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn rustc_version() -> Option<String> {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".into());
    let out = Command::new(rustc).arg("--version").output().ok()?;
    if !out.status.success() {
        return None;
    }
    let version = String::from_utf8(out.stdout).ok()?.trim().to_string();
    (!version.is_empty()).then_some(version)
}
