use eframe::egui;
use std::path::PathBuf;

/// Ordered file queue editor with reordering and removal.
pub fn file_list_editor(ui: &mut egui::Ui, files: &mut Vec<PathBuf>) {
    if files.is_empty() {
        ui.label("No files selected");
        return;
    }

    let mut to_remove = None;
    let mut to_swap = None;

    for (idx, path) in files.iter().enumerate() {
        ui.horizontal(|ui| {
            if idx > 0 && ui.small_button("▲").clicked() {
                to_swap = Some((idx, idx - 1));
            }
            if idx < files.len() - 1 && ui.small_button("▼").clicked() {
                to_swap = Some((idx, idx + 1));
            }

            ui.label(format!("{}. {}", idx + 1, path.display()));

            if ui.small_button("✖").clicked() {
                to_remove = Some(idx);
            }
        });
    }

    if let Some((from, to)) = to_swap {
        files.swap(from, to);
    }
    if let Some(idx) = to_remove {
        files.remove(idx);
    }
}

/// ComboBox selector over a fixed set of values.
pub fn enum_selector<T>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[(T, &str)],
) where
    T: PartialEq + Copy,
{
    ui.horizontal(|ui| {
        ui.label(label);

        let current = options
            .iter()
            .find(|(option, _)| option == value)
            .map(|(_, text)| *text)
            .unwrap_or("—");

        egui::ComboBox::from_id_salt(id)
            .selected_text(current)
            .show_ui(ui, |ui| {
                for &(option, text) in options {
                    ui.selectable_value(value, option, text);
                }
            });
    });
}
