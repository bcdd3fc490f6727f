// src/app/dom_layout.rs
//! ブラウザの DOM からパイルの位置を読むレイアウト。

use log::warn;
use web_sys::{Document, Window};

use crate::components::pile::PileId;
use crate::logic::drop_target::{HorizontalBounds, PileLayout};

/// `document.getElementById(dom_id)` の `getBoundingClientRect()` と
/// `window.innerHeight` を使うよ。
pub struct DomPileLayout {
    window: Window,
    document: Document,
}

impl DomPileLayout {
    /// window か document が取れない環境 (Worker など) では `None`。
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl PileLayout for DomPileLayout {
    fn viewport_height(&self) -> f64 {
        match self.window.inner_height() {
            Ok(height) => height.as_f64().unwrap_or(0.0),
            Err(err) => {
                warn!("innerHeight is not available: {:?}", err);
                0.0
            }
        }
    }

    fn pile_bounds(&self, pile: PileId) -> Option<HorizontalBounds> {
        let element = self.document.get_element_by_id(&pile.dom_id())?;
        let rect = element.get_bounding_client_rect();
        Some(HorizontalBounds::new(rect.left(), rect.right()))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_pile(document: &Document, pile: PileId, left: f64, width: f64) -> web_sys::Element {
        let element = document.create_element("div").unwrap();
        element.set_id(&pile.dom_id());
        element
            .set_attribute(
                "style",
                &format!("position:fixed;top:0;left:{}px;width:{}px;height:10px;", left, width),
            )
            .unwrap();
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn reads_bounds_from_the_dom() {
        let layout = DomPileLayout::from_window().unwrap();
        let element = mount_pile(&layout.document, PileId::Column(2), 30.0, 80.0);

        let bounds = layout.pile_bounds(PileId::Column(2)).unwrap();
        assert_eq!(bounds, HorizontalBounds::new(30.0, 110.0));
        assert!(layout.viewport_height() > 0.0);
        element.remove();
        console_log!("reads_bounds_from_the_dom テスト成功！🎉");
    }

    #[wasm_bindgen_test]
    fn missing_element_has_no_bounds() {
        let layout = DomPileLayout::from_window().unwrap();
        assert_eq!(layout.pile_bounds(PileId::Goal(3)), None);
        console_log!("missing_element_has_no_bounds テスト成功！🎉");
    }
}
