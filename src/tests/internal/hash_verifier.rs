//! 哈希校验测试。

use crate::verify::{compute_sha256, digests_match, is_verified};

const HELLO_DIGEST: &str = "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f";

#[tokio::test]
async fn computes_lowercase_hex_digest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    std::fs::write(&path, b"Hello, World!").unwrap();

    assert_eq!(compute_sha256(&path).await.unwrap(), HELLO_DIGEST);
}

#[tokio::test]
async fn digest_spans_multiple_read_buffers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.bin");
    let data = crate::tests::payload(200 * 1024 + 7, 1);
    std::fs::write(&path, data.as_slice()).unwrap();

    assert_eq!(compute_sha256(&path).await.unwrap(), crate::tests::sha256_hex(&data));
}

#[test]
fn comparison_ignores_case_and_whitespace() {
    assert!(digests_match(HELLO_DIGEST, &format!(" {}\n", HELLO_DIGEST.to_uppercase())));
    assert!(!digests_match(HELLO_DIGEST, &HELLO_DIGEST[1..]));
}

#[tokio::test]
async fn is_verified_checks_presence_and_digest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    assert!(!is_verified(&path, HELLO_DIGEST).await.unwrap());
    // 目录不算已校验的文件
    assert!(!is_verified(dir.path(), HELLO_DIGEST).await.unwrap());

    std::fs::write(&path, b"Hello, World!").unwrap();
    assert!(is_verified(&path, HELLO_DIGEST).await.unwrap());
    assert!(!is_verified(&path, &"0".repeat(64)).await.unwrap());
}
