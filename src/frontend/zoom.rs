//! Click-to-zoom state shared by every [`Figure`](super::components::Figure).
//!
//! A figure is either zoomed or not. At most one figure on the page is zoomed
//! at a time: the [`ZoomController`] provided by the `App` holds the id of the
//! figure whose overlay is open.

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ZoomState {
    #[default]
    Unzoomed,
    Zoomed,
}

impl ZoomState {
    pub fn activate(self) -> Self {
        Self::Zoomed
    }

    pub fn dismiss(self) -> Self {
        Self::Unzoomed
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Unzoomed => Self::Zoomed,
            Self::Zoomed => Self::Unzoomed,
        }
    }

    pub fn is_zoomed(self) -> bool {
        self == Self::Zoomed
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unzoomed => "unzoomed",
            Self::Zoomed => "zoomed",
        }
    }
}

impl std::fmt::Display for ZoomState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ZoomId(u64);

static NEXT_ZOOM_ID: AtomicU64 = AtomicU64::new(0);

impl ZoomId {
    fn next() -> Self {
        Self(NEXT_ZOOM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ZoomController {
    active: RwSignal<Option<ZoomId>>,
    registered: RwSignal<Vec<ZoomId>>,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomController {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            registered: RwSignal::new(Vec::new()),
        }
    }

    /// Returns the controller from context, or a private one when none was provided.
    pub fn use_or_local() -> Self {
        use_context::<Self>().unwrap_or_default()
    }

    pub fn register(&self) -> ZoomId {
        let id = ZoomId::next();
        self.registered.update_untracked(|ids| ids.push(id));
        id
    }

    /// Releases `id`, closing its overlay if it was open.
    pub fn unregister(&self, id: ZoomId) {
        self.dismiss(id);
        self.registered.update_untracked(|ids| ids.retain(|other| *other != id));
    }

    /// Figures currently using this controller, in mount order.
    pub fn registered(&self) -> Vec<ZoomId> {
        self.registered.get_untracked()
    }

    /// Tracked read of a figure's state.
    pub fn state_of(&self, id: ZoomId) -> ZoomState {
        if self.active.get() == Some(id) {
            ZoomState::Zoomed
        } else {
            ZoomState::Unzoomed
        }
    }

    pub fn active(&self) -> Option<ZoomId> {
        self.active.get_untracked()
    }

    /// Zooms `id`, closing whichever overlay was open before.
    pub fn activate(&self, id: ZoomId) {
        if self.active.get_untracked() != Some(id) {
            log::debug!("zoom: activate {:?}", id);
            self.active.set(Some(id));
        }
    }

    pub fn dismiss(&self, id: ZoomId) {
        if self.active.get_untracked() == Some(id) {
            log::debug!("zoom: dismiss {:?}", id);
            self.active.set(None);
        }
    }

    /// Keyboard handling for a zoomed figure: Escape closes it.
    ///
    /// Returns `true` when the key dismissed `id`.
    pub fn dismiss_on_key(&self, id: ZoomId, key: &str) -> bool {
        if key == "Escape" && self.active.get_untracked() == Some(id) {
            self.dismiss(id);
            true
        } else {
            false
        }
    }

    pub fn toggle(&self, id: ZoomId) {
        if self.active.get_untracked() == Some(id) {
            self.dismiss(id);
        } else {
            self.activate(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_machine_has_two_states() {
        let state = ZoomState::default();
        assert_eq!(state, ZoomState::Unzoomed);

        let zoomed = state.activate();
        assert_eq!(zoomed, ZoomState::Zoomed);
        assert_eq!(zoomed.activate(), ZoomState::Zoomed);

        let back = zoomed.dismiss();
        assert_eq!(back, ZoomState::Unzoomed);
        assert_eq!(back.dismiss(), ZoomState::Unzoomed);

        assert_eq!(ZoomState::Unzoomed.toggle().toggle(), ZoomState::Unzoomed);
    }

    #[test]
    fn controller_round_trips_one_figure() {
        let owner = Owner::new();
        owner.with(|| {
            let zoom = ZoomController::new();
            let id = zoom.register();

            assert_eq!(zoom.state_of(id), ZoomState::Unzoomed);
            zoom.activate(id);
            assert_eq!(zoom.state_of(id), ZoomState::Zoomed);
            zoom.dismiss(id);
            assert_eq!(zoom.state_of(id), ZoomState::Unzoomed);

            zoom.toggle(id);
            assert!(zoom.state_of(id).is_zoomed());
            zoom.toggle(id);
            assert!(!zoom.state_of(id).is_zoomed());
        });
    }

    #[test]
    fn only_one_figure_is_zoomed_at_a_time() {
        let owner = Owner::new();
        owner.with(|| {
            let zoom = ZoomController::new();
            let first = zoom.register();
            let second = zoom.register();
            assert_ne!(first, second);

            zoom.activate(first);
            zoom.activate(second);
            assert_eq!(zoom.state_of(first), ZoomState::Unzoomed);
            assert_eq!(zoom.state_of(second), ZoomState::Zoomed);
            assert_eq!(zoom.active(), Some(second));
        });
    }

    #[test]
    fn escape_only_closes_the_zoomed_figure() {
        let owner = Owner::new();
        owner.with(|| {
            let zoom = ZoomController::new();
            let first = zoom.register();
            let second = zoom.register();

            assert!(!zoom.dismiss_on_key(first, "Escape"));

            zoom.activate(first);
            assert!(!zoom.dismiss_on_key(first, "Enter"));
            assert!(!zoom.dismiss_on_key(second, "Escape"));
            assert_eq!(zoom.active(), Some(first));

            assert!(zoom.dismiss_on_key(first, "Escape"));
            assert_eq!(zoom.state_of(first), ZoomState::Unzoomed);
        });
    }

    #[test]
    fn unregister_forgets_and_closes_the_figure() {
        let owner = Owner::new();
        owner.with(|| {
            let zoom = ZoomController::new();
            let first = zoom.register();
            let second = zoom.register();
            assert_eq!(zoom.registered(), vec![first, second]);

            zoom.activate(second);
            zoom.unregister(second);
            assert_eq!(zoom.registered(), vec![first]);
            assert_eq!(zoom.active(), None);
        });
    }

    #[test]
    fn dismissing_an_inactive_figure_leaves_the_open_one() {
        let owner = Owner::new();
        owner.with(|| {
            let zoom = ZoomController::new();
            let first = zoom.register();
            let second = zoom.register();

            zoom.activate(first);
            zoom.dismiss(second);
            assert_eq!(zoom.active(), Some(first));
        });
    }
}
