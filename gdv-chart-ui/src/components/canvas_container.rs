//! Sized drawing surface for the SVG charts.

use dioxus::prelude::*;
use gdv_chart::CanvasSize;

/// Props for CanvasContainer
#[derive(Props, Clone, PartialEq)]
pub struct CanvasContainerProps {
    /// DOM id of the container div
    pub id: String,
    /// Fixed height in pixels; the width follows the parent
    #[props(default = 500)]
    pub height: u32,
    /// Fired with the content box size whenever the container is resized
    pub on_resize: EventHandler<CanvasSize>,
    pub children: Element,
}

/// A full-width div that reports its size so charts can lay out to it.
#[component]
pub fn CanvasContainer(props: CanvasContainerProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);
    let on_resize = props.on_resize;

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
            onresize: move |evt: Event<ResizeData>| {
                match evt.get_content_box_size() {
                    Ok(size) => on_resize.call(CanvasSize::new(size.width, size.height)),
                    Err(_) => log::warn!("canvas: resize event without a content box size"),
                }
            },
            {props.children}
        }
    }
}
