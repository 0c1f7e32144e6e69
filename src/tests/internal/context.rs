//! 下载上下文解析测试。

use std::path::Path;

use crate::context::DownloadContext;
use crate::transfer::FetchError;

const DIGEST: &str = "d4c0a3bd1fe5a4b1e8f1c3ad2a6b2f5ab2e5d64c1ff2f1c0b4a7b23a4c0e9f11";

#[test]
fn parses_three_field_line() {
    let line = format!("{DIGEST}\tunused\tmojang_1.20.1.jar");
    let context = DownloadContext::parse_line(&line).unwrap();
    assert_eq!(context.expected_digest, DIGEST);
    assert_eq!(context.file_name, "mojang_1.20.1.jar");
    assert_eq!(context.version, "1.20.1");
}

#[test]
fn extra_fields_and_line_endings_are_ignored() {
    let line = format!("{DIGEST}\tx\tmojang_1.7.10-pre4.jar\textra\r\n");
    let context = DownloadContext::parse_line(&line).unwrap();
    assert_eq!(context.version, "1.7.10-pre4");
}

#[test]
fn too_few_or_empty_fields_are_context_missing() {
    let lines = [
        String::new(),
        DIGEST.to_string(),
        format!("{DIGEST}\tx"),
        "\tx\tmojang_1.20.1.jar".to_string(),
        format!("{DIGEST}\tx\t "),
    ];
    for line in &lines {
        let err = DownloadContext::parse_line(line).unwrap_err();
        assert!(matches!(err, FetchError::ContextMissing(_)), "{line:?} -> {err:?}");
    }
}

#[test]
fn unexpected_file_names_are_rejected() {
    for name in ["server.jar", "mojang_.jar", "mojang_1.20.1.zip", "xmojang_1.20.1.jar", "mojang_../../x.jar", "mojang_a\\b.jar"] {
        let line = format!("{DIGEST}\tx\t{name}");
        let err = DownloadContext::parse_line(&line).unwrap_err();
        assert!(matches!(err, FetchError::VersionUnparseable(_)), "{name} -> {err:?}");
    }
}

#[test]
fn download_url_and_destination() {
    let context = DownloadContext::parse_line(&format!("{DIGEST}\tx\tmojang_1.20.1.jar")).unwrap();

    let url = context.download_url("https://bmclapi2.bangbang93.com/").unwrap();
    assert_eq!(url.as_str(), "https://bmclapi2.bangbang93.com/version/1.20.1/server");

    assert_eq!(
        context.destination(Path::new("cache")),
        Path::new("cache").join("mojang_1.20.1.jar")
    );
    assert!(matches!(context.download_url("not a url"), Err(FetchError::InvalidUrl(_))));
}

#[tokio::test]
async fn load_reads_first_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("download-context");
    std::fs::write(&path, format!("{DIGEST}\tx\tmojang_1.19.4.jar\nignored\n")).unwrap();

    let context = DownloadContext::load(&path).await.unwrap();
    assert_eq!(context.version, "1.19.4");
}

#[tokio::test]
async fn load_missing_or_empty_file_is_context_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("download-context");
    assert!(matches!(DownloadContext::load(&path).await, Err(FetchError::ContextMissing(_))));

    std::fs::write(&path, "\n").unwrap();
    assert!(matches!(DownloadContext::load(&path).await, Err(FetchError::ContextMissing(_))));
}
