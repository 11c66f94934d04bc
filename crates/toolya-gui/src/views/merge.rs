use eframe::egui;
use std::path::PathBuf;
use toolya_runtime::ToolCommand;

use crate::ui_components::file_list_editor;

/// The merge tool's file queue: ordered, fed by the picker and by
/// drag-and-drop, merged top to bottom.
#[derive(Default)]
pub struct MergeState {
    pub files: Vec<PathBuf>,
}

pub fn show_merge(ui: &mut egui::Ui, state: &mut MergeState, busy: bool) -> Option<ToolCommand> {
    let mut command = None;

    ui.heading("Merge PDFs");
    ui.label("Drop PDF files anywhere in the window or add them below. Pages are joined in list order.");
    ui.add_space(5.0);

    ui.horizontal(|ui| {
        if ui.button("➕ Add PDF files").clicked() {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter("PDF", &["pdf"])
                .pick_files()
            {
                state.files.extend(paths);
            }
        }
        if ui
            .add_enabled(!state.files.is_empty(), egui::Button::new("Clear"))
            .clicked()
        {
            state.files.clear();
        }
    });

    ui.add_space(5.0);
    file_list_editor(ui, &mut state.files);
    ui.add_space(10.0);

    let can_merge = !busy && state.files.len() >= 2;
    if ui
        .add_enabled(can_merge, egui::Button::new("📄 Merge PDFs"))
        .clicked()
    {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name("merged.pdf")
            .save_file()
        {
            log::info!("Merging {} documents", state.files.len());
            command = Some(ToolCommand::Merge {
                input_paths: state.files.clone(),
                output_path: path,
            });
        }
    }

    if state.files.len() == 1 {
        ui.label("Select at least 2 PDF files to merge.");
    }

    command
}
