use crate::error::AppError;
use crate::models::{Doctor, DocumentRequirement, Hospital, Procedure};
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, to_document, Bson, Document},
    Client as MongoClient, Database,
};

/// Shared handle to the directory database. Clones share the same underlying
/// connection pool and are safe to use from concurrent requests.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Collection names known to the database, for the diagnostic route.
    pub async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.db.list_collection_names(None).await?)
    }

    /// Insert one record into the named collection and return the generated
    /// identifier in its canonical string form.
    pub async fn create(&self, collection: &str, record: Document) -> Result<String, AppError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(record, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert into {}: {}", collection, e);
                AppError::from(e)
            })?;

        match result.inserted_id {
            Bson::ObjectId(id) => Ok(id.to_hex()),
            other => Ok(other.to_string()),
        }
    }

    /// All records in the named collection matching `filter` (empty filter
    /// matches everything), with `_id` rewritten to its hex string form.
    pub async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, AppError> {
        let mut cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query {}: {}", collection, e);
                AppError::from(e)
            })?;

        let mut records = Vec::new();
        while let Some(mut record) = cursor.try_next().await? {
            if let Ok(id) = record.get_object_id("_id") {
                record.insert("_id", id.to_hex());
            }
            records.push(record);
        }
        Ok(records)
    }

    pub async fn create_hospital(&self, hospital: &Hospital) -> Result<String, AppError> {
        self.create(Hospital::COLLECTION, to_document(hospital)?).await
    }

    pub async fn list_hospitals(&self, filter: Document) -> Result<Vec<Document>, AppError> {
        self.find(Hospital::COLLECTION, filter).await
    }

    pub async fn create_doctor(&self, doctor: &Doctor) -> Result<String, AppError> {
        self.create(Doctor::COLLECTION, to_document(doctor)?).await
    }

    pub async fn list_doctors(&self, filter: Document) -> Result<Vec<Document>, AppError> {
        self.find(Doctor::COLLECTION, filter).await
    }

    pub async fn create_procedure(&self, procedure: &Procedure) -> Result<String, AppError> {
        self.create(Procedure::COLLECTION, to_document(procedure)?)
            .await
    }

    pub async fn list_procedures(&self, filter: Document) -> Result<Vec<Document>, AppError> {
        self.find(Procedure::COLLECTION, filter).await
    }

    pub async fn create_document_requirement(
        &self,
        requirement: &DocumentRequirement,
    ) -> Result<String, AppError> {
        self.create(DocumentRequirement::COLLECTION, to_document(requirement)?)
            .await
    }

    pub async fn list_document_requirements(
        &self,
        procedure_slug: &str,
    ) -> Result<Vec<Document>, AppError> {
        self.find(
            DocumentRequirement::COLLECTION,
            doc! { "procedure_slug": procedure_slug },
        )
        .await
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
