use {
    crate::{config::PLOT_CONFIG, domain::TrendDirection},
    eframe::egui::{Color32, RichText, Ui},
};

pub trait DirectionColor {
    fn color(&self) -> Color32;
}

impl DirectionColor for TrendDirection {
    fn color(&self) -> Color32 {
        match self {
            Self::Up => PLOT_CONFIG.color_trend_up,
            Self::Down => PLOT_CONFIG.color_trend_down,
            Self::Flat => PLOT_CONFIG.color_trend_flat,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn message_list(&mut self, heading: &str, messages: &[String], color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.vertical(|ui| {
            ui.label_subdued(label);
            ui.label(RichText::new(value).strong().color(color));
        });
    }

    fn message_list(&mut self, heading: &str, messages: &[String], color: Color32) {
        self.label(RichText::new(heading).strong().color(color));
        for message in messages {
            self.label(RichText::new(format!("• {}", message)).color(color));
        }
    }
}
