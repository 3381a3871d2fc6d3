use std::path::Path;
use std::process::Command;

/// Embeds the short commit hash as `STEPSKETCH_GIT_HASH` for `--version`.
fn main() {
    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=STEPSKETCH_GIT_HASH={hash}");

    let git_dir = git(&["rev-parse", "--git-dir"]);
    for name in ["HEAD", "refs", "packed-refs"] {
        let Some(dir) = git_dir.as_deref() else {
            break;
        };
        let path = Path::new(dir).join(name);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
