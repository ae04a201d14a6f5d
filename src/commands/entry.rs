use std::sync::Mutex;

use crate::errors::GatewayError;
use crate::models::{
    sample_entries, CollectionStats, Entry, EntryDraft, EntryPatch, QueryPage, ViewState,
};
use crate::services::{pipeline, store::RecordStore};

/// The collection as of the last successful list. Wholly replaced on every
/// refresh, never patched in place.
static COLLECTION: Mutex<Vec<Entry>> = Mutex::new(Vec::new());

/// Fetches everything from the store and replaces the held collection.
/// The frontend calls this at startup and again after every successful
/// mutation. An empty store shows the illustrative sample shelf instead.
#[tauri::command]
pub async fn list_entries() -> Result<Vec<Entry>, String> {
    let store = RecordStore::from_env().map_err(|e| e.to_string())?;
    let mut entries = store.list().await.map_err(|e| e.to_string())?;
    if entries.is_empty() {
        log::info!("store returned no rows; showing the sample shelf");
        entries = sample_entries();
    }
    *COLLECTION.lock().map_err(|e| e.to_string())? = entries.clone();
    Ok(entries)
}

/// Runs the pure pipeline over the held collection for the current toolbar
/// state. Safe to call on every keystroke.
#[tauri::command]
pub async fn query_entries(view: ViewState) -> Result<QueryPage, String> {
    let collection = COLLECTION.lock().map_err(|e| e.to_string())?;
    Ok(pipeline::run(&collection, &view))
}

/// Footer counts over the full unfiltered collection.
#[tauri::command]
pub async fn collection_stats() -> Result<CollectionStats, String> {
    let collection = COLLECTION.lock().map_err(|e| e.to_string())?;
    Ok(CollectionStats::of(&collection))
}

#[tauri::command]
pub async fn create_entry(draft: EntryDraft, password: String) -> Result<String, String> {
    validate_draft(&draft, &password).map_err(|e| e.to_string())?;
    let store = RecordStore::from_env().map_err(|e| e.to_string())?;
    store
        .create(draft, &password)
        .await
        .map_err(|e| e.to_string())?;
    Ok("登記成功！".to_string())
}

#[tauri::command]
pub async fn update_entry(id: String, patch: EntryPatch, password: String) -> Result<String, String> {
    validate_patch(&patch, &password).map_err(|e| e.to_string())?;
    let store = RecordStore::from_env().map_err(|e| e.to_string())?;
    store
        .update(&id, patch, &password)
        .await
        .map_err(|e| e.to_string())?;
    Ok("編輯成功！".to_string())
}

#[tauri::command]
pub async fn delete_entry(id: String, password: String) -> Result<String, String> {
    if password.trim().is_empty() {
        return Err(GatewayError::Validation("請輸入管理員密碼".to_string()).to_string());
    }
    let store = RecordStore::from_env().map_err(|e| e.to_string())?;
    store
        .delete(&id, &password)
        .await
        .map_err(|e| e.to_string())?;
    Ok("刪除成功！".to_string())
}

/// Form-level check, before any request leaves the process: a new work
/// needs a title, an author and the password.
fn validate_draft(draft: &EntryDraft, password: &str) -> Result<(), GatewayError> {
    if draft.title.trim().is_empty() || draft.author.trim().is_empty() || password.trim().is_empty()
    {
        return Err(GatewayError::Validation(
            "請填寫完整資訊與密碼".to_string(),
        ));
    }
    Ok(())
}

/// An edit may leave fields untouched, but it must not blank out a required
/// one, and it still needs the password.
fn validate_patch(patch: &EntryPatch, password: &str) -> Result<(), GatewayError> {
    let blanked =
        |field: &Option<String>| field.as_deref().is_some_and(|v| v.trim().is_empty());
    if blanked(&patch.title) || blanked(&patch.author) || password.trim().is_empty() {
        return Err(GatewayError::Validation(
            "請填寫完整資訊與密碼".to_string(),
        ));
    }
    Ok(())
}
