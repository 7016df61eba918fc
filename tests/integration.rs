use dirscribe::{explore, explore_to_writer, ExploreBuilder, ExploreError, ExploreOptions};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
fn render(options: &ExploreOptions) -> String {
    let mut buf = Vec::new();
    explore_to_writer(options, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}
fn options_for(dirs: &[&Path]) -> ExploreOptions {
    ExploreBuilder::new("unused.txt")
        .directories(dirs.iter().map(|d| d.to_path_buf()))
        .build()
}
#[test]
fn integration_end_to_end_project() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("report.txt");
    let app = dir.path().join("app");
    fs::create_dir_all(app.join("node_modules")).unwrap();
    fs::write(app.join("page.tsx"), "export default function Page() {}\n").unwrap();
    fs::write(app.join("node_modules/x.js"), "module.exports = 1;").unwrap();
    let options = ExploreBuilder::new(&out)
        .directories(vec![app.clone(), dir.path().join("constants")])
        .build();
    let summary = explore(&options).unwrap();
    let report = fs::read_to_string(&out).unwrap();
    assert!(report.starts_with("Next.js Project Directory Explorer\nDate: "));
    assert_eq!(report.matches("EXPLORING DIRECTORY:").count(), 1);
    assert_eq!(report.matches("FILE: ").count(), 1);
    assert!(report.contains(&format!("FILE: {}", app.join("page.tsx").display())));
    assert!(report.contains("export default function Page() {}\n"));
    assert!(!report.contains("x.js"));
    assert!(report.contains(&format!(
        "[SKIP] Directory not found: {}\n\n",
        dir.path().join("constants").display()
    )));
    assert_eq!(summary.roots_explored, 1);
    assert_eq!(summary.roots_missing, 1);
    assert_eq!(summary.files_listed, 1);
    assert_eq!(summary.text_files, 1);
}
#[test]
fn integration_missing_root_does_not_stop_later_roots() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("config");
    fs::create_dir(&good).unwrap();
    fs::write(good.join("index.txt"), "base url").unwrap();
    let missing = dir.path().join("constants");
    let report = render(&options_for(&[&missing, &good]));
    let skip = report.find("[SKIP] Directory not found").unwrap();
    let banner = report.find("EXPLORING DIRECTORY").unwrap();
    assert!(skip < banner);
    assert!(report.contains("base url\n"));
}
#[test]
fn integration_ignored_extensions_emit_nothing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("logo.png"), "png").unwrap();
    fs::write(dir.path().join("backup.tar.gz"), "tgz").unwrap();
    fs::write(dir.path().join("keep.gz"), "gz").unwrap();
    let report = render(&options_for(&[dir.path()]));
    assert!(!report.contains("logo.png"));
    assert!(!report.contains("backup.tar.gz"));
    assert!(report.contains("keep.gz"));
}
#[test]
fn integration_pruned_dirs_at_any_depth() {
    let dir = tempdir().unwrap();
    let deep = dir.path().join("src/feature/.next/cache");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("hidden.txt"), "secret").unwrap();
    fs::create_dir_all(dir.path().join("src/build")).unwrap();
    fs::write(dir.path().join("src/build/out.txt"), "artifact").unwrap();
    fs::write(dir.path().join("src/feature/view.txt"), "visible").unwrap();
    let report = render(&options_for(&[dir.path()]));
    assert!(!report.contains("hidden.txt"));
    assert!(!report.contains("secret"));
    assert!(!report.contains("artifact"));
    assert!(report.contains("visible"));
}
#[test]
fn integration_hidden_files_are_listed() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env.example"), "API_URL=").unwrap();
    let report = render(&options_for(&[dir.path()]));
    assert!(report.contains("API_URL="));
}
#[test]
fn integration_oversized_file_shows_size_notice() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("big.txt"), "A".repeat(5000)).unwrap();
    let options = ExploreBuilder::new("unused.txt")
        .directory(dir.path())
        .max_file_size(100)
        .build();
    let report = render(&options);
    assert!(report.contains("big.txt"));
    assert!(report.contains("[File too large to display: 0.00 MB]"));
    assert!(!report.contains("AAAA"));
}
#[test]
fn integration_file_at_limit_is_shown() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("edge.txt"), "B".repeat(100)).unwrap();
    let options = ExploreBuilder::new("unused.txt")
        .directory(dir.path())
        .max_file_size(100)
        .build();
    let report = render(&options);
    assert!(report.contains(&"B".repeat(100)));
}
#[test]
fn integration_binary_content_not_displayed() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.txt"), b"head\0tail-marker").unwrap();
    let report = render(&options_for(&[dir.path()]));
    assert!(report.contains("data.txt"));
    assert!(report.contains("[Binary file - content not displayed]\n"));
    assert!(!report.contains("tail-marker"));
}
#[test]
fn integration_invalid_utf8_is_replaced() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("latin.txt"), b"caf\xe9 ok").unwrap();
    let report = render(&options_for(&[dir.path()]));
    assert!(report.contains("caf\u{FFFD} ok\n"));
}
#[test]
fn integration_reports_are_reproducible() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("app");
    fs::create_dir_all(root.join("b")).unwrap();
    fs::create_dir_all(root.join("a")).unwrap();
    fs::write(root.join("z.txt"), "z").unwrap();
    fs::write(root.join("b/two.txt"), "2").unwrap();
    fs::write(root.join("a/one.txt"), "1").unwrap();
    let first_out = dir.path().join("first.txt");
    let second_out = dir.path().join("second.txt");
    explore(&ExploreBuilder::new(&first_out).directory(&root).build()).unwrap();
    explore(&ExploreBuilder::new(&second_out).directory(&root).build()).unwrap();
    let strip_date = |s: String| {
        s.lines()
            .filter(|l| !l.starts_with("Date: "))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let first = strip_date(fs::read_to_string(&first_out).unwrap());
    let second = strip_date(fs::read_to_string(&second_out).unwrap());
    assert_eq!(first, second);
    let a = first.find("one.txt").unwrap();
    let b = first.find("two.txt").unwrap();
    let z = first.find("z.txt").unwrap();
    assert!(a < b && b < z);
}
#[test]
fn integration_output_is_truncated() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("report.txt");
    fs::write(&out, "stale content from an older run").unwrap();
    let options = ExploreBuilder::new(&out)
        .directory(dir.path().join("nothing-here"))
        .build();
    explore(&options).unwrap();
    let report = fs::read_to_string(&out).unwrap();
    assert!(!report.contains("stale content"));
}
#[test]
fn integration_unwritable_output_is_fatal() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("no/such/dir/report.txt");
    let options = ExploreBuilder::new(&out).directory(dir.path()).build();
    let err = explore(&options).unwrap_err();
    assert!(matches!(err, ExploreError::Io { ref path, .. } if path == &out));
}
#[cfg(unix)]
#[test]
fn integration_broken_symlink_is_skipped() {
    let dir = tempdir().unwrap();
    std::os::unix::fs::symlink(dir.path().join("target-gone"), dir.path().join("dangling.txt"))
        .unwrap();
    fs::write(dir.path().join("real.txt"), "real").unwrap();
    let report = render(&options_for(&[dir.path()]));
    assert!(!report.contains("dangling.txt"));
    assert_eq!(report.matches("FILE: ").count(), 1);
}
#[test]
fn integration_typescript_content_is_shown() {
    let dir = tempdir().unwrap();
    let app = dir.path().join("app");
    fs::create_dir(&app).unwrap();
    fs::write(app.join("api.ts"), "export const url = '/api';\n").unwrap();
    let report = render(&options_for(&[&app]));
    assert!(report.contains(&format!("FILE: {}", app.join("api.ts").display())));
    assert!(report.contains("export const url = '/api';\n"));
    assert!(!report.contains("[Binary file - content not displayed]"));
}
#[cfg(unix)]
#[test]
fn integration_unreadable_file_is_listed_as_binary() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked.txt");
    fs::write(&locked, "cannot see me").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::File::open(&locked).is_ok() {
        // Privileged users bypass permission bits.
        return;
    }
    let report = render(&options_for(&[dir.path()]));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
    let block = format!("FILE: {}\n{}\n", locked.display(), "=".repeat(80));
    let start = report.find(&block).unwrap() + block.len();
    assert!(report[start..].starts_with("[Binary file - content not displayed]\n"));
    assert!(!report.contains("cannot see me"));
}
#[cfg(unix)]
#[test]
fn integration_non_regular_files_are_skipped() {
    let dir = tempdir().unwrap();
    let _listener =
        std::os::unix::net::UnixListener::bind(dir.path().join("dev.sock")).unwrap();
    fs::write(dir.path().join("plain.txt"), "plain").unwrap();
    let report = render(&options_for(&[dir.path()]));
    assert!(!report.contains("dev.sock"));
    assert_eq!(report.matches("FILE: ").count(), 1);
}
struct BrokenPipe;
impl std::io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
#[test]
fn integration_writer_failure_has_no_path() {
    let dir = tempdir().unwrap();
    let err = explore_to_writer(&options_for(&[dir.path()]), BrokenPipe).unwrap_err();
    assert!(matches!(err, ExploreError::Write(_)));
    assert!(!err.to_string().contains("unused.txt"));
}
