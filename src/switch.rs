// src/switch.rs

use egui::{self, epaint::Shadow, Color32, Pos2, Rect, Response, Rounding, Sense, Ui, Vec2};

use crate::{
    animation::ValueAnimation,
    constants::{
        ANIMATION_DURATION_SECS, GLOW_BLUR, GLOW_COLOR, GROOVE_HEIGHT, GROOVE_WIDTH, KNOB_MARGIN,
        KNOB_WIDTH, VALUE_MAX, VALUE_MIN,
    },
    skin::{self, SkinTextures, SwitchStyle},
};

// Stand-in colors when the image skin is unavailable.
const FALLBACK_TRACK_ON: Color32 = Color32::from_rgb(0, 180, 200);
const FALLBACK_TRACK_OFF: Color32 = Color32::from_rgb(70, 72, 80);
const FALLBACK_KNOB: Color32 = Color32::WHITE;

/// What the switch reported for one frame.
#[derive(Clone, Debug)]
pub struct SwitchResponse {
    pub response: Response,
    /// The pointer activated the switch this frame. Fires on the press
    /// itself, not on the later release.
    pub clicked: bool,
    /// The toggle animation reached its target this frame.
    pub animation_finished: bool,
}

/// A slider-shaped switch with exactly two stable states.
///
/// The value travels between [`VALUE_MIN`] and [`VALUE_MAX`] over a fixed
/// one-second ease-out transition; only the two extremes are stable and the
/// in-between values are not reachable from outside. The groove artwork and
/// the glow follow the applied style, which flips the moment a transition
/// starts.
pub struct ToggleSwitch {
    value: i32,
    animation: ValueAnimation,
    style: SwitchStyle,
    glow_enabled: bool,
    textures: Option<SkinTextures>,
    skin_unavailable: bool,
}

impl Default for ToggleSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleSwitch {
    pub fn new() -> Self {
        Self {
            value: VALUE_MIN,
            animation: ValueAnimation::new(f64::from(VALUE_MIN), ANIMATION_DURATION_SECS),
            style: SwitchStyle::Off,
            glow_enabled: false,
            textures: None,
            skin_unavailable: false,
        }
    }

    /// True when the switch sits at the on extreme.
    pub fn is_on(&self) -> bool {
        self.value == VALUE_MAX
    }

    /// Current integer value. Sits at an extreme except mid-animation.
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn style(&self) -> SwitchStyle {
        self.style
    }

    pub fn glow_enabled(&self) -> bool {
        self.glow_enabled
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Flips the switch, animating toward the opposite extreme.
    ///
    /// Toggling again mid-transition does not reverse or queue: unless the
    /// value already sits at the on extreme the switch restarts the rise in
    /// place, snapping back to the off extreme first.
    pub fn toggle(&mut self) {
        if self.value == VALUE_MAX {
            self.animation
                .restart(f64::from(VALUE_MAX), f64::from(VALUE_MIN));
            self.style = SwitchStyle::Off;
            self.glow_enabled = false;
            tracing::debug!("Switch toggled off");
        } else {
            self.animation
                .restart(f64::from(VALUE_MIN), f64::from(VALUE_MAX));
            self.style = SwitchStyle::On;
            self.glow_enabled = true;
            tracing::debug!("Switch toggled on");
        }
    }

    /// Animates to the on state. Does nothing unless the value currently
    /// sits at the off extreme.
    pub fn set_on(&mut self) {
        if self.value == VALUE_MIN {
            self.animation
                .restart(f64::from(VALUE_MIN), f64::from(VALUE_MAX));
            self.style = SwitchStyle::On;
            self.glow_enabled = true;
            tracing::debug!("Switch set on");
        }
    }

    /// Animates to the off state. Does nothing unless the value currently
    /// sits at the on extreme.
    pub fn set_off(&mut self) {
        if self.value == VALUE_MAX {
            self.animation
                .restart(f64::from(VALUE_MAX), f64::from(VALUE_MIN));
            self.style = SwitchStyle::Off;
            self.glow_enabled = false;
            tracing::debug!("Switch set off");
        }
    }

    /// Draws the switch and handles its input for this frame.
    pub fn show(&mut self, ui: &mut Ui) -> SwitchResponse {
        let desired_size = Vec2::new(GROOVE_WIDTH, GROOVE_HEIGHT);
        let (rect, mut response) = ui.allocate_exact_size(desired_size, Sense::click());

        // Activate on the press itself, not the later click release.
        let clicked =
            ui.input(|i| i.pointer.any_pressed()) && response.interact_pointer_pos().is_some();
        if clicked {
            self.toggle();
            response.mark_changed();
        }

        let now = ui.input(|i| i.time);
        let animation_finished = self.advance(now);
        if self.animation.is_running() {
            ui.ctx().request_repaint();
        }

        response.widget_info(|| {
            egui::WidgetInfo::selected(egui::WidgetType::Checkbox, ui.is_enabled(), self.is_on(), "")
        });

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect);
        }

        SwitchResponse {
            response,
            clicked,
            animation_finished,
        }
    }

    /// Advances the animation from the host clock and keeps the integer
    /// value in step with it.
    fn advance(&mut self, now: f64) -> bool {
        let frame = self.animation.tick(now);
        self.value = frame.value.round() as i32;
        if frame.just_finished {
            tracing::debug!("Toggle animation finished at value {}", self.value);
        }
        frame.just_finished
    }

    fn travel_fraction(&self) -> f32 {
        let span = f64::from(VALUE_MAX - VALUE_MIN);
        ((self.animation.value() - f64::from(VALUE_MIN)) / span).clamp(0.0, 1.0) as f32
    }

    fn knob_rect(rect: Rect, fraction: f32) -> Rect {
        let travel = rect.width() - KNOB_WIDTH - 2.0 * KNOB_MARGIN;
        let min = Pos2::new(
            rect.left() + KNOB_MARGIN + travel * fraction,
            rect.top() + KNOB_MARGIN,
        );
        Rect::from_min_size(min, Vec2::new(KNOB_WIDTH, rect.height() - 2.0 * KNOB_MARGIN))
    }

    fn paint(&mut self, ui: &Ui, rect: Rect) {
        let rounding = Rounding::same(rect.height() / 2.0);

        if self.glow_enabled {
            let glow = Shadow {
                offset: Vec2::ZERO,
                blur: GLOW_BLUR,
                spread: 0.0,
                color: GLOW_COLOR,
            };
            ui.painter().add(glow.as_shape(rect, rounding));
        }

        let fraction = self.travel_fraction();

        if self.textures.is_none() && !self.skin_unavailable {
            match skin::load_textures(ui.ctx()) {
                Some(textures) => self.textures = Some(textures),
                None => self.skin_unavailable = true,
            }
        }

        if let Some(textures) = &self.textures {
            let uv = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
            let groove = match self.style {
                SwitchStyle::Off => &textures.off,
                SwitchStyle::On => &textures.on,
            };
            ui.painter().image(groove.id(), rect, uv, Color32::WHITE);

            let knob = Self::knob_rect(rect, fraction);
            ui.painter().image(textures.knob.id(), knob, uv, Color32::WHITE);
        } else {
            // Painted stand-in for the image skin.
            let track_color = match self.style {
                SwitchStyle::Off => FALLBACK_TRACK_OFF,
                SwitchStyle::On => FALLBACK_TRACK_ON,
            };
            ui.painter().rect_filled(rect, rounding, track_color);

            let radius = rect.height() / 2.0;
            let knob_x = rect.left() + radius + fraction * (rect.width() - 2.0 * radius);
            ui.painter().circle_filled(
                Pos2::new(knob_x, rect.center().y),
                radius * 0.75,
                FALLBACK_KNOB,
            );
        }
    }
}

impl egui::Widget for &mut ToggleSwitch {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui).response
    }
}
