use eframe::egui;

#[derive(Default)]
pub struct ShortenState {
    pub long_url: String,
    pub short_url: Option<String>,
    pub error: Option<String>,
}

/// Pure view: the short link is derived in place, no worker involved.
pub fn show_shorten(ui: &mut egui::Ui, state: &mut ShortenState) {
    ui.heading("URL Shortener");
    ui.label("Derives a deterministic placeholder link. The result is not a real short URL and does not resolve.");
    ui.add_space(5.0);

    ui.add(
        egui::TextEdit::singleline(&mut state.long_url)
            .hint_text("Enter long URL")
            .desired_width(f32::INFINITY),
    );

    ui.add_space(5.0);

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!state.long_url.is_empty(), egui::Button::new("Shorten"))
            .clicked()
        {
            match toolya_media::shorten_url(&state.long_url) {
                Ok(url) => {
                    state.short_url = Some(url);
                    state.error = None;
                }
                Err(e) => {
                    state.short_url = None;
                    state.error = Some(e.to_string());
                }
            }
        }

        if ui
            .add_enabled(state.short_url.is_some(), egui::Button::new("Copy URL"))
            .clicked()
        {
            if let Some(url) = &state.short_url {
                ui.ctx().copy_text(url.clone());
            }
        }
    });

    if let Some(url) = &state.short_url {
        ui.add_space(5.0);
        ui.monospace(url);
    }
    if let Some(error) = &state.error {
        ui.add_space(5.0);
        ui.colored_label(ui.visuals().error_fg_color, error);
    }
}
