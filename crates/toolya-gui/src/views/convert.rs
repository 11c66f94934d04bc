use eframe::egui;
use std::path::PathBuf;
use toolya_media::OutputFormat;
use toolya_runtime::ToolCommand;

pub struct ConvertState {
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Default for ConvertState {
    fn default() -> Self {
        Self {
            input: None,
            format: OutputFormat::Png,
        }
    }
}

pub fn show_convert(
    ui: &mut egui::Ui,
    state: &mut ConvertState,
    busy: bool,
) -> Option<ToolCommand> {
    let mut command = None;

    ui.heading("Image Converter");
    ui.add_space(5.0);

    ui.horizontal(|ui| {
        if ui.button("🖼 Choose image").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter(
                    "Images",
                    &["png", "jpg", "jpeg", "webp", "bmp", "gif", "tif", "tiff"],
                )
                .pick_file()
            {
                state.input = Some(path);
            }
        }
        match &state.input {
            Some(path) => ui.label(path.display().to_string()),
            None => ui.label("No file selected"),
        };
    });

    let options: Vec<(OutputFormat, &str)> = OutputFormat::ALL
        .iter()
        .map(|&format| (format, format.label()))
        .collect();
    crate::ui_components::enum_selector(ui, "convert_format", "Target format:", &mut state.format, &options);

    ui.add_space(10.0);

    let can_convert = !busy && state.input.is_some();
    if ui
        .add_enabled(can_convert, egui::Button::new("🎨 Convert..."))
        .clicked()
    {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(state.format.label(), &[state.format.extension()])
            .set_file_name(state.format.suggested_filename())
            .save_file()
        {
            if let Some(input) = &state.input {
                log::info!(
                    "Converting {} to {}",
                    input.display(),
                    state.format.label()
                );
                command = Some(ToolCommand::ConvertImage {
                    input_path: input.clone(),
                    format: state.format,
                    output_path: path,
                });
            }
        }
    }

    command
}
