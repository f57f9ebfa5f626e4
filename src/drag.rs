//! Drag session manager.
//!
//! At most one pointer gesture is active at a time. It either pans the viewport,
//! moves a panel or resizes a panel. Every delta is measured from the snapshot taken
//! when the gesture started, never accumulated, so replaying the same pointer
//! position always yields the same geometry.
//!
//! While a session is alive it holds a [`ListenerGuard`]; the host keeps routing
//! pointer move/up/cancel events to the manager for as long as
//! [`PointerListeners::is_active`] reports true. Ending the session by any path drops
//! the guard.

use crate::geometry::clamp;
use crate::layout::PanelLayout;
use crate::types::{HitTarget, PanelId, PanelState, PointerButton, PointerEvent};
use crate::viewport::Viewport;
use eframe::egui;
use std::cell::Cell;
use std::rc::Rc;

/// An in-progress pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSession {
    /// Dragging the workspace background
    Pan {
        /// Pointer position when the gesture started
        start_pointer: egui::Pos2,
        /// Viewport offset when the gesture started
        start_offset: egui::Vec2,
    },
    /// Dragging a panel by its header or frame
    MovePanel {
        /// Panel being moved
        panel: PanelId,
        /// Pointer position when the gesture started
        start_pointer: egui::Pos2,
        /// Panel geometry when the gesture started
        start_panel: PanelState,
    },
    /// Dragging a panel's bottom-right corner
    ResizePanel {
        /// Panel being resized
        panel: PanelId,
        /// Pointer position when the gesture started
        start_pointer: egui::Pos2,
        /// Panel geometry when the gesture started
        start_panel: PanelState,
    },
}

impl DragSession {
    /// The panel this session manipulates, if any.
    pub fn panel(&self) -> Option<PanelId> {
        match self {
            DragSession::Pan { .. } => None,
            DragSession::MovePanel { panel, .. } | DragSession::ResizePanel { panel, .. } => {
                Some(*panel)
            }
        }
    }

    /// Whether this session pans the viewport.
    pub fn is_pan(&self) -> bool {
        matches!(self, DragSession::Pan { .. })
    }

    fn start_pointer(&self) -> egui::Pos2 {
        match self {
            DragSession::Pan { start_pointer, .. }
            | DragSession::MovePanel { start_pointer, .. }
            | DragSession::ResizePanel { start_pointer, .. } => *start_pointer,
        }
    }
}

/// Tracks whether global pointer listeners are currently registered.
#[derive(Debug, Clone, Default)]
pub struct PointerListeners {
    registered: Rc<Cell<usize>>,
}

impl PointerListeners {
    /// Registers the listeners until the returned guard is dropped.
    pub fn acquire(&self) -> ListenerGuard {
        self.registered.set(self.registered.get() + 1);
        ListenerGuard {
            registered: Rc::clone(&self.registered),
        }
    }

    /// Whether any guard is alive.
    pub fn is_active(&self) -> bool {
        self.registered.get() > 0
    }
}

/// Keeps global pointer listeners registered while alive.
#[derive(Debug)]
pub struct ListenerGuard {
    registered: Rc<Cell<usize>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registered.set(self.registered.get().saturating_sub(1));
    }
}

#[derive(Debug)]
struct ActiveSession {
    session: DragSession,
    _listeners: ListenerGuard,
}

/// Result of feeding one pointer event to the manager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Nothing happened
    Ignored,
    /// A new session started
    Started(DragSession),
    /// The active session wrote new geometry
    Updated,
    /// The active session ended
    Ended(DragSession),
}

/// Single-slot owner of the active [`DragSession`].
#[derive(Debug, Default)]
pub struct DragSessionManager {
    slot: Option<ActiveSession>,
    listeners: PointerListeners,
}

impl DragSessionManager {
    /// Creates an idle manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.slot.as_ref().map(|active| &active.session)
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.slot.is_some()
    }

    /// Listener registry shared with the host.
    pub fn listeners(&self) -> &PointerListeners {
        &self.listeners
    }

    /// Routes one pointer event to the session slot.
    ///
    /// This is the only code path that reads or writes the slot.
    pub fn dispatch(
        &mut self,
        event: PointerEvent,
        viewport: &mut Viewport,
        layout: &mut PanelLayout,
    ) -> DragOutcome {
        match event {
            PointerEvent::Down {
                pos,
                button,
                target,
            } => self.start(pos, button, target, viewport, layout),
            PointerEvent::Move { pos } => self.update(pos, viewport, layout),
            PointerEvent::Up { .. } | PointerEvent::Cancel => self.end(),
        }
    }

    fn start(
        &mut self,
        pos: egui::Pos2,
        button: PointerButton,
        target: HitTarget,
        viewport: &Viewport,
        layout: &mut PanelLayout,
    ) -> DragOutcome {
        if self.slot.is_some() {
            return DragOutcome::Ignored;
        }

        let panel_snapshot = |panel: PanelId| layout.get(panel).map(|state| (panel, state));
        let session = match (target, button) {
            (HitTarget::Background, PointerButton::Other) => None,
            (HitTarget::Background, _) if viewport.locked => None,
            (HitTarget::Background, _) => Some(DragSession::Pan {
                start_pointer: pos,
                start_offset: viewport.offset(),
            }),
            (HitTarget::DragHandle(panel), _) | (HitTarget::PanelSurface(panel), PointerButton::Primary) => {
                panel_snapshot(panel).map(|(panel, start_panel)| DragSession::MovePanel {
                    panel,
                    start_pointer: pos,
                    start_panel,
                })
            }
            (HitTarget::ResizeHandle(panel), _) => {
                panel_snapshot(panel).map(|(panel, start_panel)| DragSession::ResizePanel {
                    panel,
                    start_pointer: pos,
                    start_panel,
                })
            }
            (HitTarget::PanelSurface(_), _) | (HitTarget::Exempt, _) => None,
        };

        let Some(session) = session else {
            return DragOutcome::Ignored;
        };
        if let Some(panel) = session.panel() {
            layout.raise(panel);
        }
        log::debug!("drag session started: {session:?}");
        self.slot = Some(ActiveSession {
            session,
            _listeners: self.listeners.acquire(),
        });
        DragOutcome::Started(session)
    }

    fn update(
        &mut self,
        pos: egui::Pos2,
        viewport: &mut Viewport,
        layout: &mut PanelLayout,
    ) -> DragOutcome {
        let Some(active) = &self.slot else {
            return DragOutcome::Ignored;
        };
        let session = active.session;
        let delta = pos - session.start_pointer();

        match session {
            DragSession::Pan { start_offset, .. } => {
                if viewport.locked {
                    return DragOutcome::Ignored;
                }
                // Screen-space pan tracks the pointer 1:1, independent of scale.
                viewport.set_offset(start_offset + delta);
            }
            DragSession::MovePanel {
                panel, start_panel, ..
            } => {
                let world_delta = delta / viewport.scale();
                layout.update(
                    panel,
                    PanelState {
                        x: start_panel.x + world_delta.x,
                        y: start_panel.y + world_delta.y,
                        ..start_panel
                    },
                );
            }
            DragSession::ResizePanel {
                panel, start_panel, ..
            } => {
                let world_delta = delta / viewport.scale();
                let limits = *layout.limits();
                layout.update(
                    panel,
                    PanelState {
                        width: clamp(
                            start_panel.width + world_delta.x,
                            limits.min_width,
                            limits.max_width,
                        ),
                        height: clamp(
                            start_panel.height + world_delta.y,
                            limits.min_height,
                            limits.max_height,
                        ),
                        ..start_panel
                    },
                );
            }
        }
        DragOutcome::Updated
    }

    fn end(&mut self) -> DragOutcome {
        match self.slot.take() {
            Some(active) => {
                log::debug!("drag session ended: {:?}", active.session);
                DragOutcome::Ended(active.session)
            }
            None => DragOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkspaceConfig;

    const EPS: f32 = 1e-3;

    fn fixture() -> (DragSessionManager, Viewport, PanelLayout) {
        let config = WorkspaceConfig::default();
        let layout = PanelLayout::from_panels(
            config.panel_limits,
            [
                (PanelId::Modeling, PanelState::new(0.0, 0.0, 800.0, 600.0)),
                (PanelId::NodeGraph, PanelState::new(900.0, 0.0, 600.0, 600.0)),
            ],
        );
        (DragSessionManager::new(), Viewport::new(&config), layout)
    }

    fn down(x: f32, y: f32, button: PointerButton, target: HitTarget) -> PointerEvent {
        PointerEvent::Down {
            pos: egui::pos2(x, y),
            button,
            target,
        }
    }

    fn move_to(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Move {
            pos: egui::pos2(x, y),
        }
    }

    #[test]
    fn background_press_pans_one_to_one_at_any_scale() {
        let (mut drag, mut viewport, mut layout) = fixture();
        viewport.apply_zoom(2.0, egui::Pos2::ZERO);
        viewport.set_offset(egui::vec2(10.0, 20.0));

        let outcome = drag.dispatch(
            down(100.0, 100.0, PointerButton::Middle, HitTarget::Background),
            &mut viewport,
            &mut layout,
        );
        assert!(matches!(outcome, DragOutcome::Started(DragSession::Pan { .. })));

        drag.dispatch(move_to(130.0, 90.0), &mut viewport, &mut layout);
        assert_eq!(viewport.offset(), egui::vec2(40.0, 10.0));
    }

    #[test]
    fn every_standard_button_pans_background() {
        for button in [
            PointerButton::Primary,
            PointerButton::Middle,
            PointerButton::Secondary,
        ] {
            let (mut drag, mut viewport, mut layout) = fixture();
            drag.dispatch(
                down(0.0, 0.0, button, HitTarget::Background),
                &mut viewport,
                &mut layout,
            );
            assert!(drag.session().is_some_and(DragSession::is_pan));
        }
        let (mut drag, mut viewport, mut layout) = fixture();
        drag.dispatch(
            down(0.0, 0.0, PointerButton::Other, HitTarget::Background),
            &mut viewport,
            &mut layout,
        );
        assert!(!drag.is_active());
    }

    #[test]
    fn panel_move_divides_delta_by_scale() {
        let (mut drag, mut viewport, mut layout) = fixture();
        viewport.apply_zoom(2.0, egui::Pos2::ZERO);
        let start = layout.get(PanelId::Modeling).unwrap();

        drag.dispatch(
            down(100.0, 100.0, PointerButton::Primary, HitTarget::DragHandle(PanelId::Modeling)),
            &mut viewport,
            &mut layout,
        );
        drag.dispatch(move_to(140.0, 180.0), &mut viewport, &mut layout);

        let moved = layout.get(PanelId::Modeling).unwrap();
        assert!((moved.x - start.x - 20.0).abs() < EPS);
        assert!((moved.y - start.y - 40.0).abs() < EPS);
        assert_eq!((moved.width, moved.height), (start.width, start.height));
    }

    #[test]
    fn repeated_move_to_same_point_is_idempotent() {
        let (mut drag, mut viewport, mut layout) = fixture();
        drag.dispatch(
            down(0.0, 0.0, PointerButton::Primary, HitTarget::PanelSurface(PanelId::NodeGraph)),
            &mut viewport,
            &mut layout,
        );
        drag.dispatch(move_to(25.0, 5.0), &mut viewport, &mut layout);
        let once = layout.get(PanelId::NodeGraph);
        drag.dispatch(move_to(25.0, 5.0), &mut viewport, &mut layout);
        assert_eq!(layout.get(PanelId::NodeGraph), once);
        assert_eq!(once.unwrap().x, 925.0);
    }

    #[test]
    fn surface_press_needs_primary_button() {
        let (mut drag, mut viewport, mut layout) = fixture();
        let outcome = drag.dispatch(
            down(0.0, 0.0, PointerButton::Secondary, HitTarget::PanelSurface(PanelId::Modeling)),
            &mut viewport,
            &mut layout,
        );
        assert_eq!(outcome, DragOutcome::Ignored);
        assert!(!drag.is_active());
    }

    #[test]
    fn exempt_region_never_starts_a_session() {
        let (mut drag, mut viewport, mut layout) = fixture();
        let outcome = drag.dispatch(
            down(0.0, 0.0, PointerButton::Primary, HitTarget::Exempt),
            &mut viewport,
            &mut layout,
        );
        assert_eq!(outcome, DragOutcome::Ignored);
    }

    #[test]
    fn resize_grows_with_pointer_and_clamps_to_minimum() {
        let (mut drag, mut viewport, mut layout) = fixture();
        let limits = *layout.limits();
        drag.dispatch(
            down(800.0, 600.0, PointerButton::Primary, HitTarget::ResizeHandle(PanelId::Modeling)),
            &mut viewport,
            &mut layout,
        );

        drag.dispatch(move_to(850.0, 620.0), &mut viewport, &mut layout);
        let grown = layout.get(PanelId::Modeling).unwrap();
        assert_eq!((grown.width, grown.height), (850.0, 620.0));
        assert_eq!((grown.x, grown.y), (0.0, 0.0));

        drag.dispatch(move_to(-5000.0, -5000.0), &mut viewport, &mut layout);
        let shrunk = layout.get(PanelId::Modeling).unwrap();
        assert_eq!(shrunk.width, limits.min_width);
        assert_eq!(shrunk.height, limits.min_height);
    }

    #[test]
    fn resize_clamps_to_maximum() {
        let (mut drag, mut viewport, mut layout) = fixture();
        let limits = *layout.limits();
        drag.dispatch(
            down(0.0, 0.0, PointerButton::Primary, HitTarget::ResizeHandle(PanelId::NodeGraph)),
            &mut viewport,
            &mut layout,
        );
        drag.dispatch(move_to(1e6, 1e6), &mut viewport, &mut layout);
        let panel = layout.get(PanelId::NodeGraph).unwrap();
        assert_eq!(panel.width, limits.max_width);
        assert_eq!(panel.height, limits.max_height);
    }

    #[test]
    fn move_without_session_changes_nothing() {
        let (mut drag, mut viewport, mut layout) = fixture();
        let viewport_before = viewport.state();
        let layout_before = layout.clone();

        assert_eq!(
            drag.dispatch(move_to(500.0, 500.0), &mut viewport, &mut layout),
            DragOutcome::Ignored
        );
        assert_eq!(
            drag.dispatch(PointerEvent::Up { pos: egui::Pos2::ZERO }, &mut viewport, &mut layout),
            DragOutcome::Ignored
        );
        assert_eq!(viewport.state(), viewport_before);
        assert_eq!(layout, layout_before);
    }

    #[test]
    fn second_press_during_session_is_ignored() {
        let (mut drag, mut viewport, mut layout) = fixture();
        drag.dispatch(
            down(0.0, 0.0, PointerButton::Primary, HitTarget::DragHandle(PanelId::Modeling)),
            &mut viewport,
            &mut layout,
        );
        let outcome = drag.dispatch(
            down(0.0, 0.0, PointerButton::Primary, HitTarget::Background),
            &mut viewport,
            &mut layout,
        );
        assert_eq!(outcome, DragOutcome::Ignored);
        assert_eq!(drag.session().and_then(DragSession::panel), Some(PanelId::Modeling));
    }

    #[test]
    fn listeners_are_released_on_up_and_cancel() {
        for exit in [PointerEvent::Up { pos: egui::Pos2::ZERO }, PointerEvent::Cancel] {
            let (mut drag, mut viewport, mut layout) = fixture();
            assert!(!drag.listeners().is_active());
            drag.dispatch(
                down(0.0, 0.0, PointerButton::Primary, HitTarget::Background),
                &mut viewport,
                &mut layout,
            );
            assert!(drag.listeners().is_active());

            let outcome = drag.dispatch(exit, &mut viewport, &mut layout);
            assert!(matches!(outcome, DragOutcome::Ended(_)));
            assert!(!drag.listeners().is_active());
            assert!(!drag.is_active());
        }
    }

    #[test]
    fn locked_viewport_refuses_background_pan_but_not_panel_drag() {
        let (mut drag, mut viewport, mut layout) = fixture();
        viewport.locked = true;
        let before = viewport.state();

        let outcome = drag.dispatch(
            down(0.0, 0.0, PointerButton::Primary, HitTarget::Background),
            &mut viewport,
            &mut layout,
        );
        assert_eq!(outcome, DragOutcome::Ignored);
        drag.dispatch(move_to(50.0, 50.0), &mut viewport, &mut layout);
        assert_eq!(viewport.state(), before);

        drag.dispatch(
            down(0.0, 0.0, PointerButton::Primary, HitTarget::DragHandle(PanelId::Modeling)),
            &mut viewport,
            &mut layout,
        );
        drag.dispatch(move_to(50.0, 50.0), &mut viewport, &mut layout);
        assert_eq!(layout.get(PanelId::Modeling).unwrap().x, 50.0);
    }

    #[test]
    fn locking_mid_pan_freezes_offset() {
        let (mut drag, mut viewport, mut layout) = fixture();
        drag.dispatch(
            down(0.0, 0.0, PointerButton::Primary, HitTarget::Background),
            &mut viewport,
            &mut layout,
        );
        drag.dispatch(move_to(10.0, 10.0), &mut viewport, &mut layout);
        viewport.locked = true;
        drag.dispatch(move_to(90.0, 90.0), &mut viewport, &mut layout);
        assert_eq!(viewport.offset(), egui::vec2(10.0, 10.0));
    }

    #[test]
    fn starting_panel_drag_raises_panel() {
        let (mut drag, mut viewport, mut layout) = fixture();
        drag.dispatch(
            down(0.0, 0.0, PointerButton::Primary, HitTarget::ResizeHandle(PanelId::Modeling)),
            &mut viewport,
            &mut layout,
        );
        assert_eq!(layout.paint_order().last(), Some(&PanelId::Modeling));
    }

    #[test]
    fn pressing_missing_panel_is_ignored() {
        let config = WorkspaceConfig::default();
        let mut layout = PanelLayout::new(config.panel_limits);
        let mut viewport = Viewport::new(&config);
        let mut drag = DragSessionManager::new();
        let outcome = drag.dispatch(
            down(0.0, 0.0, PointerButton::Primary, HitTarget::DragHandle(PanelId::NodeGraph)),
            &mut viewport,
            &mut layout,
        );
        assert_eq!(outcome, DragOutcome::Ignored);
    }
}
