use std::path::Path;

use anyhow::{Context, Result};
use hirely_application::OperationOutcome;
use hirely_core::profile::{FieldValue, ProfileField};
use hirely_core::storage::ResumeUpload;

use super::context::AppContext;
use super::render;

/// Turns a view-model outcome into a process result.
fn finish(outcome: OperationOutcome, what: &str) -> Result<()> {
    match outcome {
        OperationOutcome::Succeeded => Ok(()),
        OperationOutcome::Failed => anyhow::bail!("{} failed", what),
        OperationOutcome::Busy => anyhow::bail!("{} already in progress", what),
        OperationOutcome::Skipped => anyhow::bail!("{} skipped", what),
    }
}

pub async fn show(context: &AppContext, json: bool) -> Result<()> {
    let view_model = context.open_view_model().await?;
    view_model.settle_stats().await;
    let snapshot = view_model.snapshot().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        render::overview(&snapshot.overview, &snapshot.stats, &snapshot.resume);
    }
    Ok(())
}

pub async fn set(context: &AppContext, field: &str, value: String) -> Result<()> {
    if let Ok(parsed) = field.parse::<ProfileField>() {
        render::suggestions(parsed, &value);
    }

    let view_model = context.open_view_model().await?;
    view_model
        .set_field_by_name(field, FieldValue::Text(value))
        .await?;

    let outcome = view_model.save().await;
    render::status(view_model.status().as_ref());
    finish(outcome, "Save")
}

pub async fn upload_resume(context: &AppContext, path: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Not a file path: {}", path.display()))?;
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let view_model = context.open_view_model().await?;
    let outcome = view_model
        .upload_resume(ResumeUpload::new(file_name, bytes))
        .await;
    render::status(view_model.status().as_ref());
    finish(outcome, "Resume upload")
}

pub async fn reset_password(context: &AppContext) -> Result<()> {
    let view_model = context.open_view_model().await?;
    let outcome = view_model.request_password_reset().await;

    if outcome == OperationOutcome::Skipped {
        anyhow::bail!("The signed-in account has no email address");
    }
    render::status(view_model.status().as_ref());
    finish(outcome, "Password reset")
}
