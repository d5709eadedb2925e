use std::env;
use std::sync::Arc;

use relevance_filter::domain::document::Document;
use relevance_filter::models::config::EngineConfig;
use relevance_filter::processing::filter::filter_documents;
use relevance_filter::recognition::lexicon::LexiconRecognizer;
use relevance_filter::repository::profile::InMemoryProfileStore;
use relevance_filter::scoring::RelevanceScorer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let profiles_path = env::var("PROFILES_PATH").unwrap_or_else(|_| "profiles.yaml".to_string());
    let config = match EngineConfig::from_file(&profiles_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load entity profiles from {profiles_path}: {e}");
            std::process::exit(1);
        }
    };
    let store = InMemoryProfileStore::from_config(&config);

    // No recognizer, no engine: a broken backend is fatal at startup.
    let recognizer = match LexiconRecognizer::try_new() {
        Ok(recognizer) => Arc::new(recognizer),
        Err(e) => {
            log::error!("Failed to initialize organization recognizer: {e}");
            std::process::exit(1);
        }
    };

    let entity_name = match env::var("ENTITY_NAME") {
        Ok(name) => name,
        Err(_) => {
            log::error!("ENTITY_NAME is not set");
            std::process::exit(1);
        }
    };

    let documents_path =
        env::var("DOCUMENTS_PATH").unwrap_or_else(|_| "documents.json".to_string());
    let raw = match std::fs::read_to_string(&documents_path) {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("Failed to read documents from {documents_path}: {e}");
            std::process::exit(1);
        }
    };
    let documents: Vec<Document> = match serde_json::from_str(&raw) {
        Ok(documents) => documents,
        Err(e) => {
            log::error!("Failed to parse documents from {documents_path}: {e}");
            std::process::exit(1);
        }
    };

    let scorer = Arc::new(RelevanceScorer::new(store, recognizer));
    let outcome = filter_documents(documents, &entity_name, scorer, true).await;

    match serde_json::to_string_pretty(&outcome.accepted) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize accepted documents: {e}");
            std::process::exit(1);
        }
    }
}
