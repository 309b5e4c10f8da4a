// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports how its content sits inside the viewport.
//!
//! The sensor compares its own bounds with the viewport it is drawn in on
//! every event. It can publish a message once the visible share of its height
//! reaches a threshold, and another whenever its bounds change (used to
//! remember where each page section starts).

use crate::app::config::COUNTER_VISIBILITY_THRESHOLD;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

#[derive(Debug, Default)]
struct State {
    last_bounds: Option<Rectangle>,
}

/// Wraps content and watches its position inside the viewport.
pub struct Sensor<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_visible: Option<Message>,
    on_bounds: Option<Box<dyn Fn(Rectangle) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> Sensor<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_visible: None,
            on_bounds: None,
        }
    }

    /// Message published while at least half of the content is visible.
    /// `None` leaves the sensor unarmed.
    #[must_use]
    pub fn on_visible_maybe(mut self, message: Option<Message>) -> Self {
        self.on_visible = message;
        self
    }

    /// Called with the new layout bounds every time they change.
    #[must_use]
    pub fn on_bounds(mut self, f: impl Fn(Rectangle) -> Message + 'a) -> Self {
        self.on_bounds = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.on_visible.is_some()
    }

    /// The visibility message due for content at `bounds` inside `viewport`.
    fn visibility_report(&self, bounds: Rectangle, viewport: Rectangle) -> Option<&Message> {
        self.on_visible
            .as_ref()
            .filter(|_| visible_fraction(bounds, viewport) >= COUNTER_VISIBILITY_THRESHOLD)
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Sensor<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let bounds = layout.bounds();

        if let Some(on_bounds) = &self.on_bounds {
            let state = tree.state.downcast_mut::<State>();
            if state.last_bounds != Some(bounds) {
                state.last_bounds = Some(bounds);
                shell.publish(on_bounds(bounds));
            }
        }

        if let Some(message) = self.visibility_report(bounds, *viewport) {
            shell.publish(message.clone());
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Sensor<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(sensor: Sensor<'a, Message, Theme, Renderer>) -> Self {
        Self::new(sensor)
    }
}

/// Helper function to wrap content in a [`Sensor`].
pub fn sensor<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Sensor<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Sensor::new(content)
}

/// Share of `bounds` height lying inside `viewport`, in `[0, 1]`.
///
/// Zero-height content counts as visible as soon as its top edge is inside
/// the viewport.
#[must_use]
pub fn visible_fraction(bounds: Rectangle, viewport: Rectangle) -> f32 {
    if bounds.height <= 0.0 {
        let inside = bounds.y >= viewport.y && bounds.y <= viewport.y + viewport.height;
        return if inside { 1.0 } else { 0.0 };
    }

    let top = bounds.y.max(viewport.y);
    let bottom = (bounds.y + bounds.height).min(viewport.y + viewport.height);
    ((bottom - top).max(0.0) / bounds.height).clamp(0.0, 1.0)
}
