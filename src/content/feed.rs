use tokio::sync::broadcast;

use crate::types::Table;

const DEFAULT_CAPACITY: usize = 64;

/// Broadcasts the table touched by every write made through the content
/// repository. Subscribers that fall behind see `RecvError::Lagged` and are
/// expected to refetch.
#[derive(Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<Table>,
}

impl ChangeFeed {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, table: Table) {
        // No subscribers is the common case and not an error.
        let _ = self.sender.send(table);
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Table> {
        self.sender.subscribe()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_changes() {
        let feed = ChangeFeed::default();
        let mut rx = feed.subscribe();

        feed.publish(Table::Notices);
        feed.publish(Table::Stats);

        assert_eq!(rx.recv().await.unwrap(), Table::Notices);
        assert_eq!(rx.recv().await.unwrap(), Table::Stats);
    }

    #[test]
    fn test_publish_without_subscribers() {
        ChangeFeed::new(1).publish(Table::Hero);
    }
}
