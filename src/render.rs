use crate::constants::*;
use crate::core::PulseSnapshot;
use crate::dom;
use web_sys as web;

/// Handles to every element the page updates.
pub struct View {
    root: web::Element,
    enable_button: web::Element,
    readout: web::Element,
    heart: web::Element,
    ping: web::Element,
    rate: web::Element,
    status: web::Element,
    shake_badge: web::Element,
}

impl View {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            root: dom::element(document, ROOT_ID)?,
            enable_button: dom::element(document, ENABLE_BUTTON_ID)?,
            readout: dom::element(document, READOUT_ID)?,
            heart: dom::element(document, HEART_ID)?,
            ping: dom::element(document, PING_ID)?,
            rate: dom::element(document, RATE_ID)?,
            status: dom::element(document, STATUS_ID)?,
            shake_badge: dom::element(document, SHAKE_BADGE_ID)?,
        })
    }

    pub fn render(&self, snap: &PulseSnapshot) {
        let tier = snap.color_tier();
        self.root.set_class_name(&format!(
            "{} {}",
            ROOT_BASE_CLASS,
            snap.background_tier().background_class()
        ));
        _ = self.root.set_attribute("data-tier", tier.as_str());

        dom::set_hidden(&self.enable_button, snap.permission_granted);
        dom::set_hidden(&self.readout, !snap.permission_granted);

        let scale = if snap.beat {
            HEART_BEAT_CLASS
        } else {
            HEART_IDLE_CLASS
        };
        // SVG elements expose className as an animated string, so go through
        // the attribute instead.
        _ = self.heart.set_attribute(
            "class",
            &format!("{} {} {}", HEART_BASE_CLASS, tier.heart_class(), scale),
        );
        dom::set_hidden(&self.ping, !snap.beat);

        self.rate.set_text_content(Some(&snap.heart_rate.to_string()));
        self.status.set_text_content(Some(snap.status_text()));
        dom::set_hidden(&self.shake_badge, !snap.is_shaking);
    }
}
