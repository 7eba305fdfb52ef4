use anyhow::Result;
use colored::Colorize;
use hirely_core::storage::{BucketSpec, FileStore};
use hirely_infrastructure::RestFileStore;

use super::context::AppContext;

pub async fn ensure(context: &AppContext) -> Result<()> {
    let spec = BucketSpec::for_resumes(&context.config.resume);
    let store = RestFileStore::new(context.client.clone());

    if store.ensure_bucket(&spec).await? {
        println!("{} Created bucket '{}'", "✓".green(), spec.name);
    } else {
        println!("Bucket '{}' already exists", spec.name);
    }
    Ok(())
}
