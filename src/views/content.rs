// ============================================================================
// CONTENT VIEWS - Lore, NNN, Vibemap y equipo (texto estático)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};

const INTRO_TEXT: &str = "Spys among the highest ranks of the Evil King Gremplin sent the news of the upcoming \
invasion to the Uniswamp. Given the hint from Colonel Floorbin, Toad Rick opened the first portal into \
mysterious dimension of Polygon to ensuare preservation of the vibes. Colonel Rotebal Ganov was appointed to \
lead the first colonists. Many brave Cyrptoadz volunteered but only a few were selected to advance into the \
unknown world. Away from home they were the Toadversal insuarance to preserve the sacred !vibe.";

const ABOUT_TEXT: &str = "On a Septemper of 2022, vibes were unsually strong. Those vibes reached the fabric of \
the Metaverse itself resulting in creation of something particular comfy and strange. NNN emerged as the \
Collective Unconsciousness living as the information flashes between the lines. As zeros hidden among ones.";

const VIBEMAP_TEXT: &str = "No toadmap just vibes. That's why we have the Vibemap which is used to track how vibes \
radiate through Toadverse. First of all we plan on giving NFT-enthusiasts opportunity to explore different \
parallel chains by giving them limited free mints. Those explorers and researchers will receive generated Toadz \
or custom made Toadz, which will serve as a WL pass for the upcoming Mainnet drop. Timing is subject to change, \
we do enjoy gradually building the lore and have immence fun in the process.";

const INHABITANTS: [(&str, &str); 4] = [
    ("assets/31.png", "imgBox"),
    ("assets/74.png", "imgBox i2"),
    ("assets/171.png", "imgBox i3"),
    ("assets/506.png", "imgBox i4"),
];

const TIMELINE: [(&str, &str); 3] = [
    ("February:", " Polygon, Arbitrum"),
    ("~March:", " Fantom, Avax, zkSync, StarkNet"),
    ("Mainnet Drop:", " March-April"),
];

const TEAM: [(&str, &str); 4] = [
    ("assets/cryptoad_rick.jpg", "Toad Rick"),
    ("assets/rotebal_ganov.jpg", "Rotebal Ganov"),
    ("assets/anon_serge.jpg", "Anon Serge"),
    ("assets/nnn_kolectiv.jpg", "NNN Collective"),
];

fn text_column(title: Element, body: &str) -> Result<Element, JsValue> {
    let inner = ElementBuilder::new("div")?.child(title)?.append_text(body)?.build();
    Ok(ElementBuilder::new("div")?.class("textBlockColumn").child(inner)?.build())
}

fn image(src: &str, alt: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("img")?.attr("src", src)?.attr("alt", alt)?.build())
}

fn wide_image(src: &str, alt: &str) -> Result<Element, JsValue> {
    let img = ElementBuilder::new("img")?
        .attr("width", "400")?
        .attr("src", src)?
        .attr("alt", alt)?
        .build();
    Ok(ElementBuilder::new("div")?.id("nnn-collectiv-big")?.child(img)?.build())
}

/// "Toadverse inhabitants" + rejilla de imágenes
pub fn render_intro() -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h1")?.text("Toadverse inhabitants").build();
    let column = text_column(title, INTRO_TEXT)?;
    column.set_id("toadverseIntro");

    let grid = ElementBuilder::new("div")?.class("inhabitantsContainer").build();
    for (src, class) in INHABITANTS {
        let tile = ElementBuilder::new("div")?
            .class(class)
            .child(image(src, "Toadverse inhabitant")?)?
            .build();
        append_child(&grid, &tile)?;
    }

    Ok(ElementBuilder::new("div")?
        .id("faq")?
        .class("textBlock row")
        .child(column)?
        .child(
            ElementBuilder::new("div")?
                .id("imgGrid")?
                .class("textBlockColumn inhabitantsContainer")
                .child(grid)?
                .build(),
        )?
        .build())
}

pub fn render_about() -> Result<Element, JsValue> {
    let picture = ElementBuilder::new("div")?
        .class("textBlockColumn")
        .child(wide_image("assets/nnn_kolectiv.jpg", "nnn kolectiv")?)?
        .build();
    let title = ElementBuilder::new("h1")?.text("NNN").build();

    Ok(ElementBuilder::new("div")?
        .id("about")?
        .class("textBlock row")
        .child(picture)?
        .child(text_column(title, ABOUT_TEXT)?)?
        .build())
}

pub fn render_vibemap() -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h1")?
        .child(ElementBuilder::new("span")?.class("strike").text("Toadmap").build())?
        .append_text(" Vibemap")?
        .build();

    let timeline = ElementBuilder::new("div")?.id("launch-timeline")?.build();
    for (when, chains) in TIMELINE {
        let row = ElementBuilder::new("div")?
            .child(ElementBuilder::new("strong")?.text(when).build())?
            .append_text(chains)?
            .build();
        append_child(&timeline, &row)?;
    }

    let map_column = ElementBuilder::new("div")?
        .id("vibemap")?
        .class("textBlockColumn")
        .child(wide_image("assets/vibemap.jpg", "Vibemap")?)?
        .child(timeline)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("textBlock row")
        .child(text_column(title, VIBEMAP_TEXT)?)?
        .child(map_column)?
        .build())
}

pub fn render_team() -> Result<Element, JsValue> {
    let members = ElementBuilder::new("div")?.id("teamMembers")?.build();
    for (src, name) in TEAM {
        let member = ElementBuilder::new("div")?
            .class("teamMember")
            .child(ElementBuilder::new("img")?.class("teamImg").attr("src", src)?.attr("alt", name)?.build())?
            .child(ElementBuilder::new("div")?.class("nameTag").text(name).build())?
            .build();
        append_child(&members, &member)?;
    }

    Ok(ElementBuilder::new("div")?
        .id("team")?
        .class("text row")
        .child(ElementBuilder::new("h1")?.text("Made With Love,").build())?
        .child(members)?
        .build())
}
