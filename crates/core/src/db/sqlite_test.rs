#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::db::{load, persist, KvStore, SqliteStore, StoreKey};
    use crate::errors::Result;
    use crate::Prompt;

    fn prompt(id: &str, title: &str) -> Prompt {
        Prompt {
            id:         id.into(),
            title:      title.into(),
            tags:       vec!["tag1".into()],
            text:       "Body".into(),
            category:   Some("Work".into()),
            created_at: Some("2024-05-01T10:00:00Z".into()),
        }
    }

    #[tokio::test]
    async fn test_kv_operations() -> Result<()> {
        // Setup isolated DB in a directory that does not exist yet
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("prompts.db");

        let store = SqliteStore::open(&db_path).await?;
        assert_eq!(store.path(), Some(db_path.as_path()));
        assert!(db_path.exists());

        // 1. Absent key
        assert_eq!(store.read(StoreKey::Prompts).await?, None);

        // 2. Write + read
        let prompts = vec![prompt("1", "A"), prompt("2", "B")];
        persist(&store, StoreKey::Prompts, &prompts).await?;
        let loaded: Vec<Prompt> = load(&store, StoreKey::Prompts).await?;
        assert_eq!(loaded, prompts);

        // 3. Overwrite
        persist(&store, StoreKey::Prompts, &prompts[..1]).await?;
        let loaded: Vec<Prompt> = load(&store, StoreKey::Prompts).await?;
        assert_eq!(loaded.len(), 1);

        // 4. Clear
        persist(&store, StoreKey::Categories, &["Work"]).await?;
        store.clear().await?;
        assert_eq!(store.read(StoreKey::Prompts).await?, None);
        assert_eq!(store.read(StoreKey::Categories).await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_data_survives_reopen() -> Result<()> {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("prompts.db");

        {
            let store = SqliteStore::open(&db_path).await?;
            persist(&store, StoreKey::Prompts, &vec![prompt("1", "Kept")]).await?;
        }

        let store = SqliteStore::open(&db_path).await?;
        let loaded: Vec<Prompt> = load(&store, StoreKey::Prompts).await?;
        assert_eq!(loaded[0].title, "Kept");
        Ok(())
    }

    #[tokio::test]
    async fn test_in_memory_store() -> Result<()> {
        let store = SqliteStore::open_in_memory()?;
        assert!(store.path().is_none());
        store.write(StoreKey::Categories, "[\"A\"]".into()).await?;
        assert_eq!(
            store.read(StoreKey::Categories).await?.as_deref(),
            Some("[\"A\"]")
        );
        Ok(())
    }
}
