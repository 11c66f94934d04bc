use eframe::egui;
use tokio::sync::mpsc;
use toolya_runtime::{ToolCommand, ToolUpdate};

use crate::logger::AppLogger;
use crate::views::{
    ConvertState, MergeState, QrState, ShortenState, SplitState, ThumbnailState, show_convert,
    show_merge, show_qr, show_shorten, show_split, show_thumbnail,
};

#[derive(Default, PartialEq)]
enum Tool {
    #[default]
    Merge,
    Split,
    QrCode,
    Thumbnail,
    Convert,
    Shorten,
}

#[derive(Clone)]
struct ProgressState {
    operation: String,
    completed: usize,
    total: usize,
}

pub struct ToolyaApp {
    tool: Tool,
    status: String,

    /// True while a command is in flight; every launch button is disabled
    /// until the terminal update arrives, so an operation can never run
    /// concurrently with itself.
    busy: bool,
    progress: Option<ProgressState>,

    merge: MergeState,
    split: SplitState,
    qr: QrState,
    thumbnail: ThumbnailState,
    convert: ConvertState,
    shorten: ShortenState,

    command_tx: mpsc::UnboundedSender<ToolCommand>,
    update_rx: mpsc::UnboundedReceiver<ToolUpdate>,

    logger: AppLogger,
    show_log: bool,

    _tokio_handle: tokio::runtime::Handle,
}

impl ToolyaApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn the worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            tool: Tool::default(),
            status: String::new(),
            busy: false,
            progress: None,
            merge: MergeState::default(),
            split: SplitState::default(),
            qr: QrState::default(),
            thumbnail: ThumbnailState::default(),
            convert: ConvertState::default(),
            shorten: ShortenState::default(),
            command_tx,
            update_rx,
            logger,
            show_log: false,
            _tokio_handle: tokio_handle,
        }
    }

    fn dispatch(&mut self, command: ToolCommand) {
        self.busy = true;
        self.progress = None;
        if self.command_tx.send(command).is_err() {
            self.busy = false;
            self.status = "Worker is gone; restart the application".to_string();
        }
    }

    fn process_updates(&mut self, ctx: &egui::Context) {
        while let Ok(update) = self.update_rx.try_recv() {
            if update.is_terminal() {
                self.busy = false;
                self.progress = None;
            }

            match update {
                ToolUpdate::Progress {
                    operation,
                    completed,
                    total,
                } => {
                    self.progress = Some(ProgressState {
                        operation,
                        completed,
                        total,
                    });
                    ctx.request_repaint();
                }
                ToolUpdate::MergeComplete { path, page_count } => {
                    self.status = format!("Merged {page_count} pages → {}", path.display());
                }
                ToolUpdate::SplitComplete { path, page_count } => {
                    self.status = format!("Extracted {page_count} pages → {}", path.display());
                }
                ToolUpdate::QrRendered {
                    rgba_data,
                    width,
                    height,
                } => {
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied([width, height], &rgba_data);
                    if let Some(texture) = &mut self.qr.preview {
                        texture.set(color_image, egui::TextureOptions::default());
                    } else {
                        self.qr.preview = Some(ctx.load_texture(
                            "qr_preview",
                            color_image,
                            egui::TextureOptions::default(),
                        ));
                    }
                    self.status = "QR code ready".to_string();
                }
                ToolUpdate::QrSaved { path } => {
                    self.status = format!("QR code → {}", path.display());
                }
                ToolUpdate::ThumbnailFetched { path } => {
                    self.status = format!("Thumbnail → {}", path.display());
                }
                ToolUpdate::ConvertComplete { path } => {
                    self.status = format!("Converted image → {}", path.display());
                }
                ToolUpdate::Error { message } => {
                    log::error!("{message}");
                    self.status = format!("Error: {message}");
                }
            }
        }
    }
}

impl eframe::App for ToolyaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Dropped PDF files feed the merge queue
        ctx.input(|i| {
            for file in &i.raw.dropped_files {
                if let Some(path) = &file.path {
                    if path.extension().and_then(|s| s.to_str()) == Some("pdf") {
                        self.merge.files.push(path.clone());
                        self.tool = Tool::Merge;
                    }
                }
            }
        });

        self.process_updates(ctx);

        egui::TopBottomPanel::top("tools").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tool, Tool::Merge, "📄 Merge PDFs");
                ui.selectable_value(&mut self.tool, Tool::Split, "✂ Split PDF");
                ui.selectable_value(&mut self.tool, Tool::QrCode, "🔳 QR Code");
                ui.selectable_value(&mut self.tool, Tool::Thumbnail, "🖼 Thumbnail");
                ui.selectable_value(&mut self.tool, Tool::Convert, "🎨 Convert Image");
                ui.selectable_value(&mut self.tool, Tool::Shorten, "🔗 Shorten URL");
            });
        });

        egui::TopBottomPanel::bottom("log").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.toggle_value(&mut self.show_log, "Log");
                if self.show_log && ui.small_button("Clear").clicked() {
                    self.logger.clear();
                }
            });
            if self.show_log {
                egui::ScrollArea::vertical()
                    .max_height(120.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in self.logger.entries() {
                            ui.monospace(format!(
                                "{} [{}] {}",
                                entry.timestamp.format("%H:%M:%S"),
                                entry.level,
                                entry.message
                            ));
                        }
                    });
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let busy = self.busy;
            let command = match self.tool {
                Tool::Merge => show_merge(ui, &mut self.merge, busy),
                Tool::Split => show_split(ui, &mut self.split, busy),
                Tool::QrCode => show_qr(ui, &mut self.qr, busy),
                Tool::Thumbnail => show_thumbnail(ui, &mut self.thumbnail, busy),
                Tool::Convert => show_convert(ui, &mut self.convert, busy),
                Tool::Shorten => {
                    show_shorten(ui, &mut self.shorten);
                    None
                }
            };
            if let Some(command) = command {
                self.dispatch(command);
            }

            if let Some(ref progress) = self.progress {
                ui.separator();
                ui.label(&progress.operation);
                ui.add(
                    egui::ProgressBar::new(
                        progress.completed as f32 / progress.total.max(1) as f32,
                    )
                    .show_percentage(),
                );
                ctx.request_repaint();
            }

            if !self.status.is_empty() {
                ui.separator();
                ui.label(&self.status);
            }
        });
    }
}
