use eframe::egui;
use std::path::PathBuf;
use toolya_runtime::ToolCommand;

#[derive(Default)]
pub struct SplitState {
    pub input: Option<PathBuf>,
    pub page_range: String,
}

pub fn show_split(ui: &mut egui::Ui, state: &mut SplitState, busy: bool) -> Option<ToolCommand> {
    let mut command = None;

    ui.heading("Split PDF");
    ui.label("Extract pages by number. Order and duplicates in the expression are honored literally.");
    ui.add_space(5.0);

    ui.horizontal(|ui| {
        if ui.button("📂 Choose PDF").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("PDF", &["pdf"])
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

    ui.horizontal(|ui| {
        ui.label("Pages:");
        ui.add(
            egui::TextEdit::singleline(&mut state.page_range)
                .hint_text("e.g. 1-3,5")
                .desired_width(160.0),
        );
    });

    ui.add_space(10.0);

    let can_split = !busy && state.input.is_some() && !state.page_range.trim().is_empty();
    if ui
        .add_enabled(can_split, egui::Button::new("✂ Split PDF"))
        .clicked()
    {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name("split.pdf")
            .save_file()
        {
            if let Some(input) = &state.input {
                log::info!("Splitting {} with \"{}\"", input.display(), state.page_range);
                command = Some(ToolCommand::Split {
                    input_path: input.clone(),
                    page_range: state.page_range.clone(),
                    output_path: path,
                });
            }
        }
    }

    command
}
