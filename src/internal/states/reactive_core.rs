//! # ReactiveProperty
//!
//! 下载进度等高频状态的发布通道，基于 [`tokio::sync::watch`]。
//! 写入方从不阻塞，监听方只会看到最新的值，中间值可能被合并。

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// 响应式属性错误
#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 所有属性句柄均已释放，不会再有新值
    #[error("属性已被销毁")]
    Destroyed,
}

/// 可克隆的响应式属性句柄，克隆体共享同一个值。
#[derive(Clone, Debug)]
pub struct ReactiveProperty<T> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(value: T) -> Self {
        let (sender, _) = watch::channel(value);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// 写入新值并通知所有监听者；没有监听者时同样生效。
    pub fn update(&self, new_value: T) {
        self.sender.send_replace(new_value);
    }

    /// 当前值的快照。
    pub fn get_current(&self) -> T {
        self.sender.borrow().clone()
    }

    /// 创建监听器。监听器创建前的值视为已读。
    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.sender.subscribe(),
        }
    }
}

/// 属性监听器，用于异步接收属性值的变化。
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<T>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 等待下一次变化，返回最新值。
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver
            .changed()
            .await
            .map_err(|_| ReactivePropertyError::Destroyed)?;
        Ok(self.receiver.borrow_and_update().clone())
    }

    pub fn borrow(&self) -> T {
        self.receiver.borrow().clone()
    }
}
