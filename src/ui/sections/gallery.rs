// SPDX-License-Identifier: MPL-2.0
//! Gallery section hosting the carousel.

use super::titled;
use crate::i18n::fluent::I18n;
use crate::ui::carousel::{self, CarouselState};
use iced::widget::image::Handle;
use iced::Element;

/// Titled carousel, or `None` when the gallery is empty.
pub fn view<'a>(
    i18n: &'a I18n,
    state: Option<&'a CarouselState>,
    handles: &'a [Option<Handle>],
) -> Option<Element<'a, carousel::Message>> {
    let state = state?;
    Some(titled(
        i18n.tr("section-gallery"),
        carousel::view(carousel::ViewContext {
            i18n,
            state,
            handles,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MediaItem;
    use crate::ui::state::AutoAdvanceInterval;

    #[test]
    fn empty_gallery_renders_nothing() {
        let i18n = I18n::default();
        assert!(view(&i18n, None, &[]).is_none());
    }

    #[test]
    fn gallery_renders_carousel() {
        let i18n = I18n::default();
        let items = vec![
            MediaItem::new("gallery/a.jpg", "Team offsite"),
            MediaItem::new("gallery/b.jpg", "Conference talk"),
        ];
        let handles = carousel::resolve_handles(&items, None);
        let state = CarouselState::new(items, AutoAdvanceInterval::default()).expect("non-empty");
        assert!(view(&i18n, Some(&state), &handles).is_some());
    }
}
