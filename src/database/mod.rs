use mongodb::{Client, Collection, Database};
use std::error::Error;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool: a handful of live connections is plenty here
        client_options.max_pool_size = Some(10);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        let db_name = database_name_from_uri(uri);
        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { client, db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the unique index the registration error path relies on: a
    /// duplicate email must fail at the store, not in application code.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::options::IndexOptions;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let users = self.database().collection::<mongodb::bson::Document>("users");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match users.create_index(email_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(email) unique"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Extract the database name from a connection URI, ignoring any query
/// string. Falls back to `user_auth` when the URI has no path component.
fn database_name_from_uri(uri: &str) -> &str {
    uri.split('/')
        .nth(3)
        .and_then(|s| s.split('?').next())
        .filter(|s| !s.is_empty())
        .unwrap_or("user_auth")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_name_from_uri() {
        assert_eq!(
            database_name_from_uri("mongodb://localhost:27017/user_auth"),
            "user_auth"
        );
        assert_eq!(
            database_name_from_uri("mongodb://localhost:27017/accounts?retryWrites=true"),
            "accounts"
        );
    }

    #[test]
    fn test_database_name_defaults_without_path() {
        assert_eq!(
            database_name_from_uri("mongodb://localhost:27017"),
            "user_auth"
        );
        assert_eq!(
            database_name_from_uri("mongodb://localhost:27017/"),
            "user_auth"
        );
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let db = MongoDB::new("mongodb://localhost:27017/user_auth_test").await;
        assert!(db.is_ok());
    }
}
