// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption form and speech controls.
//!
//! This module provides the form for entering captions, the
//! generate/clear/read buttons, the voice selector and the volume slider.
//! Enabled states come from the controller's affordances.

use crate::controller::MemeController;
use crate::models::ui_state::Affordance;

/// Result of form interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsAction {
    None,
    OpenImage,
    Generate,
    Clear,
    ReadAloud,
    SelectVoice(usize),
    SetVolume(u8),
}

/// Display the form and report what the user did.
pub fn show(ui: &mut egui::Ui, controller: &mut MemeController) -> ControlsAction {
    let mut action = ControlsAction::None;
    let affordances = controller.affordances();

    ui.spacing_mut().item_spacing.y = 8.0;

    if ui.button("Open Image...").clicked() {
        action = ControlsAction::OpenImage;
    }

    ui.separator();

    ui.label("Top text");
    let top = ui.text_edit_singleline(&mut controller.captions_mut().top);
    ui.label("Bottom text");
    let bottom = ui.text_edit_singleline(&mut controller.captions_mut().bottom);

    // Enter in either field submits the form
    let submitted = (top.lost_focus() || bottom.lost_focus())
        && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.horizontal(|ui| {
        if ui.button("Generate").clicked() || submitted {
            action = ControlsAction::Generate;
        }
        let clear_enabled = affordances.is_enabled(Affordance::Clear);
        if ui.add_enabled(clear_enabled, egui::Button::new("Clear")).clicked() {
            action = ControlsAction::Clear;
        }
        let read_enabled = affordances.is_enabled(Affordance::ReadAloud);
        if ui.add_enabled(read_enabled, egui::Button::new("Read Text")).clicked() {
            action = ControlsAction::ReadAloud;
        }
    });

    ui.separator();

    let options = controller.voice_options();
    let current = controller.selected_voice_index();
    let mut selected = current;
    ui.add_enabled_ui(affordances.is_enabled(Affordance::VoiceSelection), |ui| {
        egui::ComboBox::from_id_source("voice_selection")
            .width(ui.available_width())
            .selected_text(options.get(selected).cloned().unwrap_or_default())
            .show_ui(ui, |ui| {
                for (i, label) in options.iter().enumerate() {
                    ui.selectable_value(&mut selected, i, label.as_str());
                }
            });
    });
    if selected != current {
        action = ControlsAction::SelectVoice(selected);
    }

    let current_level = controller.volume().level();
    let mut level = current_level;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(controller.volume_tier().glyph()).size(18.0))
            .on_hover_text(controller.volume_tier().icon_path());
        ui.add(egui::Slider::new(&mut level, 0..=100).show_value(false));
    });
    if level != current_level {
        action = ControlsAction::SetVolume(level);
    }

    action
}
