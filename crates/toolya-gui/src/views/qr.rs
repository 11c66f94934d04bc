use eframe::egui;
use toolya_runtime::ToolCommand;

pub struct QrState {
    pub content: String,
    /// The content the current preview was rendered from; save and copy
    /// act on this, not on edits made since.
    pub rendered: Option<String>,
    pub preview: Option<egui::TextureHandle>,
}

impl Default for QrState {
    fn default() -> Self {
        Self {
            content: String::new(),
            rendered: None,
            preview: None,
        }
    }
}

pub fn show_qr(ui: &mut egui::Ui, state: &mut QrState, busy: bool) -> Option<ToolCommand> {
    let mut command = None;

    ui.heading("QR Code Generator");
    ui.add_space(5.0);

    ui.add(
        egui::TextEdit::singleline(&mut state.content)
            .hint_text("Enter text or URL")
            .desired_width(f32::INFINITY),
    );

    ui.add_space(5.0);

    ui.horizontal(|ui| {
        let can_generate = !busy && !state.content.is_empty();
        if ui
            .add_enabled(can_generate, egui::Button::new("Generate"))
            .clicked()
        {
            state.rendered = Some(state.content.clone());
            command = Some(ToolCommand::RenderQr {
                content: state.content.clone(),
            });
        }

        let has_preview = state.preview.is_some() && state.rendered.is_some();
        if ui
            .add_enabled(has_preview && !busy, egui::Button::new("💾 Save PNG..."))
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PNG", &["png"])
                .set_file_name("qrcode.png")
                .save_file()
            {
                if let Some(rendered) = &state.rendered {
                    command = Some(ToolCommand::SaveQr {
                        content: rendered.clone(),
                        output_path: path,
                    });
                }
            }
        }

        if ui
            .add_enabled(has_preview, egui::Button::new("Copy data URL"))
            .clicked()
        {
            if let Some(rendered) = &state.rendered {
                match toolya_media::qr_data_url(rendered) {
                    Ok(url) => ui.ctx().copy_text(url),
                    Err(e) => log::error!("Failed to build QR data URL: {e}"),
                }
            }
        }
    });

    if let Some(texture) = &state.preview {
        ui.add_space(10.0);
        ui.image((texture.id(), egui::vec2(256.0, 256.0)));
    }

    command
}
