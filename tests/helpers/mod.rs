use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Install a fake svn binary that prints the given stdout for every
/// call, recording its argument vector and message locale next to
/// itself.
pub fn fake_svn(stdout: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stdout.txt"), stdout).unwrap();

    let script = concat!(
        "#!/bin/sh\n",
        "here=\"$(dirname \"$0\")\"\n",
        "printf '%s\\n' \"$@\" > \"$here/args.txt\"\n",
        "printf '%s' \"$LC_MESSAGES\" > \"$here/locale.txt\"\n",
        "cat \"$here/stdout.txt\"\n",
    );
    install(dir, script)
}

/// Install a fake svn binary that fails with the given stderr and exit
/// code.
pub fn failing_svn(stderr: &str, code: i32) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let script = format!("#!/bin/sh\necho \"{stderr}\" >&2\nexit {code}\n");
    install(dir, &script)
}

fn install(dir: TempDir, script: &str) -> (TempDir, PathBuf) {
    let path = dir.path().join("svn");
    fs::write(&path, script).unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();

    (dir, path)
}

/// Argument vector the fake binary was last invoked with.
pub fn recorded_args(dir: &TempDir) -> Vec<String> {
    fs::read_to_string(dir.path().join("args.txt"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// LC_MESSAGES value the fake binary last saw.
pub fn recorded_locale(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("locale.txt")).unwrap()
}
