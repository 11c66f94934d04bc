use tokio::sync::mpsc;
use toolya_runtime::{ToolCommand, ToolUpdate};

use crate::handlers;

/// Async worker task that runs tool commands and reports updates.
///
/// Commands are processed one at a time; the UI keeps its triggers
/// disabled while one is in flight, so nothing queues up behind a running
/// operation.
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<ToolCommand>,
    update_tx: mpsc::UnboundedSender<ToolUpdate>,
) {
    while let Some(command) = command_rx.recv().await {
        match command {
            ToolCommand::Merge {
                input_paths,
                output_path,
            } => {
                handlers::documents::handle_merge(input_paths, output_path, &update_tx).await;
            }
            ToolCommand::Split {
                input_path,
                page_range,
                output_path,
            } => {
                handlers::documents::handle_split(input_path, page_range, output_path, &update_tx)
                    .await;
            }
            ToolCommand::RenderQr { content } => {
                handlers::media::handle_render_qr(content, &update_tx).await;
            }
            ToolCommand::SaveQr {
                content,
                output_path,
            } => {
                handlers::media::handle_save_qr(content, output_path, &update_tx).await;
            }
            ToolCommand::FetchThumbnail {
                video_url,
                output_path,
            } => {
                handlers::media::handle_fetch_thumbnail(video_url, output_path, &update_tx).await;
            }
            ToolCommand::ConvertImage {
                input_path,
                format,
                output_path,
            } => {
                handlers::media::handle_convert(input_path, format, output_path, &update_tx).await;
            }
        }
    }
}
