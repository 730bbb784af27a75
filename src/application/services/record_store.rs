use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::application::ports::{RecordInvalidator, RecordSource};
use crate::domain::entities::TabRecord;
use crate::domain::value_objects::EntityRef;
use crate::infrastructure::cache::MemoryCache;
use crate::shared::error::AppError;

const CHANGE_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordChanged {
    Updated(EntityRef),
    /// 再取得時にサーバー側で見つからなかった
    Removed(EntityRef),
}

impl RecordChanged {
    pub fn entity(&self) -> &EntityRef {
        match self {
            RecordChanged::Updated(entity) | RecordChanged::Removed(entity) => entity,
        }
    }
}

/// 親ドキュメントのキャッシュ。保存後は該当エンティティだけを再取得して購読者に知らせる
pub struct RecordStore {
    source: Arc<dyn RecordSource>,
    cache: MemoryCache<EntityRef, Value>,
    changes: broadcast::Sender<RecordChanged>,
}

impl RecordStore {
    pub fn new(source: Arc<dyn RecordSource>, ttl: Duration) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            source,
            cache: MemoryCache::new(ttl),
            changes,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RecordChanged> {
        self.changes.subscribe()
    }

    pub async fn load(&self, entity: &EntityRef) -> Result<Value, AppError> {
        if let Some(cached) = self.cache.get(entity).await {
            debug!(%entity, "record cache hit");
            return Ok(cached);
        }
        let document = self.source.fetch_record(entity).await?;
        self.cache.set(entity.clone(), document.clone()).await;
        Ok(document)
    }

    pub async fn load_tab<T: TabRecord>(&self, entity: &EntityRef) -> Result<T, AppError> {
        let parent = self.load(entity).await?;
        T::from_parent(&parent)
    }

    /// 期限切れのキャッシュを捨てる。捨てた件数を返す
    pub async fn purge_expired(&self) -> usize {
        let removed = self.cache.cleanup_expired().await;
        if removed > 0 {
            debug!(removed, "expired records purged");
        }
        removed
    }

    /// キャッシュを無視して取り直す
    pub async fn refresh(&self, entity: &EntityRef) -> Result<Value, AppError> {
        match self.source.fetch_record(entity).await {
            Ok(document) => {
                self.cache.set(entity.clone(), document.clone()).await;
                info!(%entity, "record refreshed");
                // 購読者がいなければ送信失敗になるが問題ない
                let _ = self.changes.send(RecordChanged::Updated(entity.clone()));
                Ok(document)
            }
            Err(err) => {
                if err.is_not_found() {
                    self.cache.delete(entity).await;
                    let _ = self.changes.send(RecordChanged::Removed(entity.clone()));
                }
                Err(err)
            }
        }
    }
}

#[async_trait]
impl RecordInvalidator for RecordStore {
    async fn invalidate(&self, entity: &EntityRef) -> Result<(), AppError> {
        self.refresh(entity).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TaxInfo;
    use crate::domain::value_objects::EntityId;
    use mockall::mock;
    use serde_json::json;

    mock! {
        pub Source {}

        #[async_trait]
        impl RecordSource for Source {
            async fn fetch_record(&self, entity: &EntityRef) -> Result<Value, AppError>;
        }
    }

    fn biz(id: &str) -> EntityRef {
        EntityRef::business(EntityId::parse(id).unwrap())
    }

    #[tokio::test]
    async fn load_is_served_from_cache_after_first_fetch() {
        let mut source = MockSource::new();
        source
            .expect_fetch_record()
            .times(1)
            .returning(|_| Ok(json!({ "taxInfo": { "ein": "11-1111111" } })));
        let store = RecordStore::new(Arc::new(source), Duration::from_secs(60));

        let first: TaxInfo = store.load_tab(&biz("b1")).await.unwrap();
        let second: TaxInfo = store.load_tab(&biz("b1")).await.unwrap();

        assert_eq!(first.ein.as_deref(), Some("11-1111111"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn invalidate_refetches_only_that_entity_and_notifies() {
        let mut source = MockSource::new();
        source
            .expect_fetch_record()
            .withf(|entity| entity.id.as_str() == "b1")
            .times(2)
            .returning(|_| Ok(json!({ "id": "b1" })));
        source
            .expect_fetch_record()
            .withf(|entity| entity.id.as_str() == "b2")
            .times(1)
            .returning(|_| Ok(json!({ "id": "b2" })));
        let store = RecordStore::new(Arc::new(source), Duration::from_secs(60));
        let mut changes = store.subscribe();

        store.load(&biz("b1")).await.unwrap();
        store.load(&biz("b2")).await.unwrap();
        store.invalidate(&biz("b1")).await.unwrap();
        store.load(&biz("b2")).await.unwrap();

        assert_eq!(changes.recv().await.unwrap(), RecordChanged::Updated(biz("b1")));
        assert!(changes.try_recv().is_err());
    }

    #[tokio::test]
    async fn refresh_of_deleted_entity_drops_cache_and_reports_removal() {
        let mut source = MockSource::new();
        let mut seq = mockall::Sequence::new();
        source
            .expect_fetch_record()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(json!({ "id": "b1" })));
        source
            .expect_fetch_record()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::NotFound("business b1".to_string())));
        let store = RecordStore::new(Arc::new(source), Duration::from_secs(60));
        let mut changes = store.subscribe();

        store.load(&biz("b1")).await.unwrap();
        let err = store.refresh(&biz("b1")).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(changes.recv().await.unwrap(), RecordChanged::Removed(biz("b1")));

        // キャッシュが消えているので再度取得しに行く
        assert!(store.load(&biz("b1")).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn expired_documents_are_refetched() {
        let mut source = MockSource::new();
        source
            .expect_fetch_record()
            .times(2)
            .returning(|_| Ok(json!({ "id": "b1" })));
        let store = RecordStore::new(Arc::new(source), Duration::from_millis(10));

        store.load(&biz("b1")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(store.purge_expired().await, 1);
        store.load(&biz("b1")).await.unwrap();
    }
}
