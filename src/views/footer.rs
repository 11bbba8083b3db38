// ============================================================================
// FOOTER VIEW - Aviso CC0
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::ElementBuilder;

const CC0_URL: &str = "http://creativecommons.org/publicdomain/zero/1.0/";
const CC0_BADGE: &str = "http://i.creativecommons.org/p/zero/1.0/88x31.png";

pub fn render_footer(config: &AppConfig) -> Result<Element, JsValue> {
    let badge = ElementBuilder::new("a")?
        .class("pr-3")
        .external_link(CC0_URL)?
        .child(ElementBuilder::new("img")?.attr("src", CC0_BADGE)?.attr("alt", "CC0")?.build())?
        .build();

    let publisher = ElementBuilder::new("a")?
        .attr("rel", "dct:publisher")?
        .attr("href", &config.links.website_url)?
        .child(
            ElementBuilder::new("span")?
                .class("px-1")
                .attr("property", "dct:title")?
                .text("\u{a0}NNN collective\u{a0}")
                .build(),
        )?
        .build();

    let notice = ElementBuilder::new("div")?
        .class("px-2")
        .append_text("To the extent possible under law,")?
        .child(publisher)?
        .append_text("has waived all copyright and related or neighboring rights to")?
        .child(
            ElementBuilder::new("span")?
                .class("pl-1")
                .attr("property", "dct:title")?
                .text("\u{a0}Toadverse by NNN")
                .build(),
        )?
        .append_text(". This work is published from:")?
        .child(
            ElementBuilder::new("span")?
                .class("px-1")
                .attr("property", "vcard:Country")?
                .attr("datatype", "dct:ISO4269")?
                .attr("about", &config.links.website_url)?
                .text("\u{a0}Grempland")
                .build(),
        )?
        .append_text(".")?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("footer-container")
        .child(badge)?
        .child(notice)?
        .build())
}
