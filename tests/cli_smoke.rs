use std::path::PathBuf;
use std::process::Command;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_signforge")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "signforge.exe"
            } else {
                "signforge"
            });
            p
        })
}

#[test]
fn cli_alphabet_writes_26_svgs() {
    let dir = PathBuf::from("target").join("cli_smoke_alphabet");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let status = Command::new(exe())
        .args(["alphabet", "--root"])
        .arg(&dir)
        .status()
        .unwrap();
    assert!(status.success());

    for letter in 'a'..='z' {
        assert!(
            dir.join("alphabet").join(format!("{letter}.svg")).exists(),
            "missing card for {letter}"
        );
    }
}

#[test]
fn cli_dictionary_then_verify_passes_offline() {
    let dir = PathBuf::from("target").join("cli_smoke_dictionary");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    for cmd in [["alphabet"], ["dictionary"]] {
        let status = Command::new(exe())
            .args(cmd)
            .arg("--root")
            .arg(&dir)
            .status()
            .unwrap();
        assert!(status.success());
    }
    assert!(dir.join("aslDictionaryData.json").exists());
    assert!(dir.join("dictionary").join("nice_to_meet_you.svg").exists());

    let status = Command::new(exe())
        .args(["verify", "--skip-http", "--root"])
        .arg(&dir)
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn cli_verify_fails_on_missing_assets() {
    let dir = PathBuf::from("target").join("cli_smoke_verify_empty");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let status = Command::new(exe())
        .args(["verify", "--skip-http", "--root"])
        .arg(&dir)
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn cli_extract_rejects_unknown_chart() {
    let status = Command::new(exe())
        .args([
            "extract",
            "--chart",
            "does-not-exist",
            "--image",
            "nope.png",
        ])
        .status()
        .unwrap();
    assert!(!status.success());
}
