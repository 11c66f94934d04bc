use std::path::PathBuf;
use tokio::sync::mpsc;
use toolya_media::OutputFormat;
use toolya_runtime::ToolUpdate;

pub async fn handle_render_qr(content: String, update_tx: &mpsc::UnboundedSender<ToolUpdate>) {
    let rendered =
        tokio::task::spawn_blocking(move || toolya_media::render_qr_image(&content)).await;

    match rendered {
        Ok(Ok(image)) => {
            let (width, height) = image.dimensions();
            let rgba = image::DynamicImage::ImageLuma8(image).to_rgba8();
            let _ = update_tx.send(ToolUpdate::QrRendered {
                rgba_data: rgba.into_raw(),
                width: width as usize,
                height: height as usize,
            });
        }
        Ok(Err(e)) => {
            let _ = update_tx.send(ToolUpdate::Error {
                message: format!("Failed to render QR code: {e}"),
            });
        }
        Err(e) => {
            let _ = update_tx.send(ToolUpdate::Error {
                message: format!("QR task failed: {e}"),
            });
        }
    }
}

pub async fn handle_save_qr(
    content: String,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ToolUpdate>,
) {
    let png = match tokio::task::spawn_blocking(move || toolya_media::encode_qr_png(&content)).await
    {
        Ok(Ok(png)) => png,
        Ok(Err(e)) => {
            let _ = update_tx.send(ToolUpdate::Error {
                message: format!("Failed to encode QR code: {e}"),
            });
            return;
        }
        Err(e) => {
            let _ = update_tx.send(ToolUpdate::Error {
                message: format!("QR task failed: {e}"),
            });
            return;
        }
    };

    if let Err(e) = tokio::fs::write(&output_path, png).await {
        let _ = update_tx.send(ToolUpdate::Error {
            message: format!("Failed to save QR code: {e}"),
        });
        return;
    }

    log::info!("QR code saved to {}", output_path.display());
    let _ = update_tx.send(ToolUpdate::QrSaved { path: output_path });
}

pub async fn handle_fetch_thumbnail(
    video_url: String,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ToolUpdate>,
) {
    let bytes = match toolya_media::fetch_thumbnail(&video_url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            let _ = update_tx.send(ToolUpdate::Error {
                message: format!("Failed to fetch thumbnail: {e}"),
            });
            return;
        }
    };

    if let Err(e) = tokio::fs::write(&output_path, bytes).await {
        let _ = update_tx.send(ToolUpdate::Error {
            message: format!("Failed to save thumbnail: {e}"),
        });
        return;
    }

    log::info!("Thumbnail saved to {}", output_path.display());
    let _ = update_tx.send(ToolUpdate::ThumbnailFetched { path: output_path });
}

pub async fn handle_convert(
    input_path: PathBuf,
    format: OutputFormat,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<ToolUpdate>,
) {
    let bytes = match tokio::fs::read(&input_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            let _ = update_tx.send(ToolUpdate::Error {
                message: format!("Failed to read image: {e}"),
            });
            return;
        }
    };

    let converted =
        match tokio::task::spawn_blocking(move || toolya_media::convert_image(&bytes, format))
            .await
        {
            Ok(Ok(converted)) => converted,
            Ok(Err(e)) => {
                let _ = update_tx.send(ToolUpdate::Error {
                    message: format!("Conversion failed: {e}"),
                });
                return;
            }
            Err(e) => {
                let _ = update_tx.send(ToolUpdate::Error {
                    message: format!("Conversion task failed: {e}"),
                });
                return;
            }
        };

    if let Err(e) = tokio::fs::write(&output_path, converted).await {
        let _ = update_tx.send(ToolUpdate::Error {
            message: format!("Failed to save converted image: {e}"),
        });
        return;
    }

    log::info!("Converted image saved to {}", output_path.display());
    let _ = update_tx.send(ToolUpdate::ConvertComplete { path: output_path });
}
