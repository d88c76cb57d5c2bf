// src/mongo.rs
use crate::board::{BoardStore, UpdateCount};
use crate::config::ConnectionConfig;
use crate::error::Result;
use async_trait::async_trait;
use bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::debug;

/// Builds a MongoDB URI from a bare host, keeping URIs that already have a scheme.
pub fn connection_uri(host: &str) -> String {
    if host.starts_with("mongodb://") || host.starts_with("mongodb+srv://") {
        host.to_string()
    } else {
        format!("mongodb://{}", host)
    }
}

/// An open client together with the board collection it serves.
pub struct Connection {
    client: Client,
    boards: Collection<Document>,
}

impl Connection {
    pub async fn open(config: &ConnectionConfig) -> Result<Self> {
        let uri = connection_uri(&config.host);
        debug!(%uri, db = %config.database, collection = %config.collection, "connecting");

        let client_options = ClientOptions::parse(&uri).await?;
        let client = Client::with_options(client_options)?;
        let db = client.database(&config.database);
        let boards = db.collection::<Document>(&config.collection);
        Ok(Self { client, boards })
    }

    pub fn boards(&self) -> &Collection<Document> {
        &self.boards
    }

    /// Shuts the client down. Callers close after the work future resolves,
    /// whether it succeeded or not.
    pub async fn close(self) {
        debug!("closing connection");
        self.client.shutdown().await;
    }
}

#[async_trait]
impl BoardStore for Collection<Document> {
    async fn find_board(&self, title: &str) -> Result<Option<Document>> {
        Ok(self.find_one(doc! { "title": title }).await?)
    }

    async fn count_boards(&self, title: &str) -> Result<u64> {
        Ok(self.count_documents(doc! { "title": title }).await?)
    }

    async fn set_board_type(&self, title: &str, new_type: &str) -> Result<UpdateCount> {
        let result = self
            .update_one(doc! { "title": title }, doc! { "$set": { "type": new_type } })
            .await?;
        Ok(UpdateCount {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }
}
