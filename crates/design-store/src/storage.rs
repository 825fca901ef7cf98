//! Storage backends for submitted designs

use anyhow::Result;
use async_trait::async_trait;
use axiom_common::Design;
use tracing::info;

/// Storage interface the route layer depends on.
///
/// Handlers never touch a concrete backend, so swapping the in-memory
/// store for a persistent one is a state-construction change only.
#[async_trait]
pub trait DesignStore: Send {
    /// Append a design record, returning the stored copy
    async fn create(&mut self, design: Design) -> Result<Design>;

    /// All stored designs in creation order
    async fn list(&mut self) -> Result<Vec<Design>>;

    /// Look up a single design by id
    async fn get_by_id(&mut self, id: &str) -> Result<Option<Design>>;

    /// Number of stored designs
    async fn count(&mut self) -> Result<usize>;
}

/// Process-memory backend: a plain append-only list, reset on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    designs: Vec<Design>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DesignStore for InMemoryStore {
    async fn create(&mut self, design: Design) -> Result<Design> {
        self.designs.push(design.clone());
        info!("Stored design: {} ({})", design.name, design.id);
        Ok(design)
    }

    async fn list(&mut self) -> Result<Vec<Design>> {
        Ok(self.designs.clone())
    }

    async fn get_by_id(&mut self, id: &str) -> Result<Option<Design>> {
        Ok(self.designs.iter().find(|d| d.id == id).cloned())
    }

    async fn count(&mut self) -> Result<usize> {
        Ok(self.designs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axiom_common::ComponentPlacement;

    fn sample_design(name: &str) -> Design {
        Design::new(
            name.to_string(),
            vec![ComponentPlacement {
                id: String::new(),
                component_type: "server".to_string(),
                x: 100.0,
                y: 100.0,
            }],
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let mut store = InMemoryStore::new();

        let created = store.create(sample_design("First")).await.unwrap();

        let retrieved = store
            .get_by_id(&created.id)
            .await
            .unwrap()
            .expect("Design not found");

        assert_eq!(retrieved, created);
    }

    #[tokio::test]
    async fn test_get_missing_id() {
        let mut store = InMemoryStore::new();
        let result = store.get_by_id("nope").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_creation_order() {
        let mut store = InMemoryStore::new();

        store.create(sample_design("First")).await.unwrap();
        store.create(sample_design("Second")).await.unwrap();
        store.create(sample_design("Third")).await.unwrap();

        let all = store.list().await.unwrap();
        let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();

        assert_eq!(names, vec!["First", "Second", "Third"]);
        assert_eq!(store.count().await.unwrap(), 3);
    }
}
