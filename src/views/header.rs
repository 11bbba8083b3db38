// ============================================================================
// HEADER VIEW - Logo y enlaces sociales
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::{append_child, ElementBuilder};

/// Contenedor de cabecera (el bloque CTA se añade desde render_app)
pub fn render_header(config: &AppConfig) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("header-container")
        .child(ElementBuilder::new("div")?.class("background-image").build())?
        .build();

    let logo = ElementBuilder::new("div")?
        .class("logo_toadverse")
        .child(
            ElementBuilder::new("img")?
                .attr("src", "assets/logo_toadverse.png")?
                .attr("alt", "ToadVerse")?
                .build(),
        )?
        .build();
    append_child(&header, &logo)?;

    let links = &config.links;
    let social = ElementBuilder::new("div")?
        .class("social-links")
        .child(render_social_link(&links.twitter_url(), "assets/twitter-logo.svg", "twitter-logo", &links.twitter_handle)?)?
        .child(render_social_link(&links.opensea_collection_url, "assets/opensea-logo.svg", "opensea-logo", "OpenSea")?)?
        .child(render_social_link(&links.discord_url, "assets/discord-logo.png", "opensea-logo", "Discord")?)?
        .build();
    append_child(&header, &social)?;

    Ok(header)
}

fn render_social_link(href: &str, icon: &str, icon_class: &str, label: &str) -> Result<Element, JsValue> {
    let icon = ElementBuilder::new("img")?
        .class(icon_class)
        .attr("src", icon)?
        .attr("alt", icon_class)?
        .build();

    let anchor = ElementBuilder::new("a")?
        .class("opensea-button")
        .external_link(href)?
        .child(icon)?
        .append_text(label)?
        .build();

    Ok(ElementBuilder::new("div")?.class("social-link").child(anchor)?.build())
}
