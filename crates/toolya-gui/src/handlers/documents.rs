use std::path::PathBuf;
use tokio::sync::mpsc;
use toolya_pdf::{load_document, load_documents, merge_documents_with, save_document, split};
use toolya_runtime::ToolUpdate;

pub async fn handle_merge(
    input_paths: Vec<PathBuf>,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ToolUpdate>,
) {
    let total = input_paths.len();
    let _ = update_tx.send(ToolUpdate::Progress {
        operation: "Loading documents".to_string(),
        completed: 0,
        total,
    });

    // Fail fast: one unparsable input aborts the whole merge with no output.
    let documents = match load_documents(&input_paths).await {
        Ok(documents) => documents,
        Err(e) => {
            let _ = update_tx.send(ToolUpdate::Error {
                message: format!("Failed to load PDFs: {e}"),
            });
            return;
        }
    };

    let progress_tx = update_tx.clone();
    let merged = tokio::task::spawn_blocking(move || {
        merge_documents_with(&documents, |progress| {
            let _ = progress_tx.send(ToolUpdate::Progress {
                operation: "Merging documents".to_string(),
                completed: progress.completed,
                total: progress.total,
            });
        })
    })
    .await;

    let merged = match merged {
        Ok(Ok(document)) => document,
        Ok(Err(e)) => {
            let _ = update_tx.send(ToolUpdate::Error {
                message: format!("Merge failed: {e}"),
            });
            return;
        }
        Err(e) => {
            let _ = update_tx.send(ToolUpdate::Error {
                message: format!("Merge task failed: {e}"),
            });
            return;
        }
    };

    let page_count = merged.get_pages().len();
    if let Err(e) = save_document(merged, &output_path).await {
        let _ = update_tx.send(ToolUpdate::Error {
            message: format!("Failed to save merged PDF: {e}"),
        });
        return;
    }

    log::info!(
        "Merged {total} documents ({page_count} pages) into {}",
        output_path.display()
    );
    let _ = update_tx.send(ToolUpdate::MergeComplete {
        path: output_path,
        page_count,
    });
}

pub async fn handle_split(
    input_path: PathBuf,
    page_range: String,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ToolUpdate>,
) {
    let document = match load_document(&input_path).await {
        Ok(document) => document,
        Err(e) => {
            let _ = update_tx.send(ToolUpdate::Error {
                message: format!("Failed to load PDF: {e}"),
            });
            return;
        }
    };

    let result = match split(document, page_range).await {
        Ok(result) => result,
        Err(e) => {
            let _ = update_tx.send(ToolUpdate::Error {
                message: format!("Split failed: {e}"),
            });
            return;
        }
    };

    let page_count = result.get_pages().len();
    if let Err(e) = save_document(result, &output_path).await {
        let _ = update_tx.send(ToolUpdate::Error {
            message: format!("Failed to save split PDF: {e}"),
        });
        return;
    }

    log::info!(
        "Extracted {page_count} pages into {}",
        output_path.display()
    );
    let _ = update_tx.send(ToolUpdate::SplitComplete {
        path: output_path,
        page_count,
    });
}
