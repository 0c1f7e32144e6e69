//! 响应式属性测试。

use crate::states::ReactiveProperty;
use crate::transfer::DownloadProgress;

#[tokio::test]
async fn update_and_read() {
    let prop = ReactiveProperty::new(0u64);
    prop.update(42);
    assert_eq!(prop.get_current(), 42);

    let clone = prop.clone();
    clone.update(50);
    assert_eq!(prop.get_current(), 50);
}

#[tokio::test]
async fn watcher_receives_latest_value() {
    let prop = ReactiveProperty::new(DownloadProgress::default());
    let mut watcher = prop.watch();

    prop.update(DownloadProgress::new(10, Some(100)));
    assert_eq!(watcher.changed().await.unwrap().bytes_done, 10);

    // 连续写入只保留最新值
    prop.update(DownloadProgress::new(20, Some(100)));
    prop.update(DownloadProgress::new(30, Some(100)));
    let latest = watcher.changed().await.unwrap();
    assert_eq!(latest.bytes_done, 30);
    assert_eq!(watcher.borrow().pct(), 30.0);
}

#[tokio::test]
async fn watcher_errors_after_property_dropped() {
    let prop = ReactiveProperty::new(1i32);
    let mut watcher = prop.watch();
    drop(prop);
    assert!(watcher.changed().await.is_err());
}

#[test]
fn progress_percentages() {
    assert_eq!(DownloadProgress::new(50, Some(200)).pct(), 25.0);
    assert!(DownloadProgress::new(50, None).pct().is_nan());
    assert!(DownloadProgress::new(0, Some(0)).pct().is_nan());

    assert_eq!(DownloadProgress::new(0, Some(100)).decile(), Some(0));
    assert_eq!(DownloadProgress::new(19, Some(100)).decile(), Some(1));
    assert_eq!(DownloadProgress::new(100, Some(100)).decile(), Some(10));
    assert_eq!(DownloadProgress::new(100, None).decile(), None);
}
