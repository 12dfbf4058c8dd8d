//! Control panel: a play/pause toggle and one button per clip.
//!
//! The panel keeps no playback state. It reads the current state from, and
//! sends commands to, whatever [`PlaybackCommands`] it is handed.

use crate::viewer::playback::PlaybackState;

/// Command interface the panel drives.
pub trait PlaybackCommands {
    fn playback(&self) -> PlaybackState;
    /// Clips that can be selected, or `None` while no asset is bound.
    fn bound_clip_count(&self) -> Option<usize>;
    fn select_clip(&mut self, index: usize);
    fn toggle_playback(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelButton {
    TogglePlayback,
    SelectClip(usize),
}

/// One button as it should be drawn this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub button: PanelButton,
    pub label: String,
    /// Highlight hint for the active clip's button.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPanel {
    clip_labels: Vec<String>,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new((1..=6).map(|i| format!("Animation {i}")))
    }
}

impl ControlPanel {
    #[must_use]
    pub fn new(clip_labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            clip_labels: clip_labels.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn clip_labels(&self) -> &[String] {
        &self.clip_labels
    }

    #[must_use]
    pub fn toggle_label(state: PlaybackState) -> &'static str {
        if state.is_playing { "Pause Animation" } else { "Play Animation" }
    }

    /// Toggle first, then the clip buttons in index order. With an asset
    /// bound, labels past its clip count are left out.
    #[must_use]
    pub fn buttons(&self, state: PlaybackState, clip_count: Option<usize>) -> Vec<ButtonSpec> {
        let shown = clip_count.map_or(self.clip_labels.len(), |n| n.min(self.clip_labels.len()));
        let toggle = ButtonSpec {
            button: PanelButton::TogglePlayback,
            label: Self::toggle_label(state).to_string(),
            active: false,
        };
        let clips = self.clip_labels[..shown].iter().enumerate().map(|(i, label)| ButtonSpec {
            button: PanelButton::SelectClip(i),
            label: label.clone(),
            active: i == state.active_clip,
        });
        std::iter::once(toggle).chain(clips).collect()
    }

    /// Forwards `button`. A clip index the bound asset does not have is
    /// dropped here, so `select_clip` only ever sees valid indices.
    pub fn dispatch(button: PanelButton, commands: &mut impl PlaybackCommands) {
        match button {
            PanelButton::TogglePlayback => commands.toggle_playback(),
            PanelButton::SelectClip(index) => match commands.bound_clip_count() {
                Some(count) if index >= count => {
                    log::warn!("No clip {index} to select ({count} clips)");
                }
                _ => commands.select_clip(index),
            },
        }
    }

    /// Draws the panel in the top-left corner and forwards a click, if any.
    pub fn show(&self, ctx: &egui::Context, commands: &mut impl PlaybackCommands) {
        let buttons = self.buttons(commands.playback(), commands.bound_clip_count());
        let mut clicked = None;

        egui::Area::new(egui::Id::new("turntable_controls"))
            .fixed_pos(egui::pos2(20.0, 20.0))
            .show(ctx, |ui| {
                let (toggle, clips) = buttons.split_at(1);
                for spec in toggle {
                    if ui.button(spec.label.as_str()).clicked() {
                        clicked = Some(spec.button);
                    }
                }
                ui.horizontal_wrapped(|ui| {
                    for spec in clips {
                        let text = if spec.active {
                            egui::RichText::new(spec.label.as_str()).strong()
                        } else {
                            egui::RichText::new(spec.label.as_str())
                        };
                        if ui.button(text).clicked() {
                            clicked = Some(spec.button);
                        }
                    }
                });
            });

        if let Some(button) = clicked {
            Self::dispatch(button, commands);
        }
    }
}
