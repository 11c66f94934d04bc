use eframe::egui;
use toolya_runtime::ToolCommand;

#[derive(Default)]
pub struct ThumbnailState {
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub error: Option<String>,
}

pub fn show_thumbnail(
    ui: &mut egui::Ui,
    state: &mut ThumbnailState,
    busy: bool,
) -> Option<ToolCommand> {
    let mut command = None;

    ui.heading("YouTube Thumbnail");
    ui.add_space(5.0);

    ui.add(
        egui::TextEdit::singleline(&mut state.video_url)
            .hint_text("youtube.com/watch?v=... or youtu.be/...")
            .desired_width(f32::INFINITY),
    );

    ui.add_space(5.0);

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!state.video_url.is_empty(), egui::Button::new("Generate"))
            .clicked()
        {
            match toolya_media::thumbnail_url(&state.video_url) {
                Ok(url) => {
                    state.thumbnail_url = Some(url);
                    state.error = None;
                }
                Err(e) => {
                    state.thumbnail_url = None;
                    state.error = Some(e.to_string());
                }
            }
        }

        let has_url = state.thumbnail_url.is_some();
        if ui
            .add_enabled(has_url && !busy, egui::Button::new("⬇ Download..."))
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JPEG", &["jpg", "jpeg"])
                .set_file_name("youtube_thumbnail.jpg")
                .save_file()
            {
                command = Some(ToolCommand::FetchThumbnail {
                    video_url: state.video_url.clone(),
                    output_path: path,
                });
            }
        }

        if ui
            .add_enabled(has_url, egui::Button::new("Copy URL"))
            .clicked()
        {
            if let Some(url) = &state.thumbnail_url {
                ui.ctx().copy_text(url.clone());
            }
        }
    });

    if let Some(url) = &state.thumbnail_url {
        ui.add_space(5.0);
        ui.monospace(url);
    }
    if let Some(error) = &state.error {
        ui.add_space(5.0);
        ui.colored_label(ui.visuals().error_fg_color, error);
    }

    command
}
