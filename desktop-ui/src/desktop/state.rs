use shared_types::{AppDescriptor, DesktopState, OpenWindow};

/// Mutations accepted by the window manager
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCommand {
    Open(AppDescriptor),
    Close(String),
}

/// What a command did to the open-window sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowChange {
    Opened,
    /// Already open; moved to the top of the stack
    Raised,
    Closed,
    Unchanged,
}

impl WindowChange {
    pub fn is_change(self) -> bool {
        !matches!(self, WindowChange::Unchanged)
    }
}

pub fn open_app_window(state: &mut DesktopState, app: &AppDescriptor) -> WindowChange {
    let was_open = state.is_open(&app.id);
    state.windows.retain(|w| w.id != app.id);
    state.windows.push(OpenWindow::from(app));

    if was_open {
        WindowChange::Raised
    } else {
        WindowChange::Opened
    }
}

pub fn close_app_window(state: &mut DesktopState, app_id: &str) -> WindowChange {
    let before = state.windows.len();
    state.windows.retain(|w| w.id != app_id);

    if state.windows.len() < before {
        WindowChange::Closed
    } else {
        WindowChange::Unchanged
    }
}

/// Stacking value for the window at `position` (0 = bottom)
pub fn window_z_index(base: u32, position: usize) -> u32 {
    base.saturating_add(u32::try_from(position).unwrap_or(u32::MAX))
}

pub type WindowListener = Box<dyn FnMut(&DesktopState)>;

/// Owns the open-window sequence and tells listeners about every change.
///
/// Listeners receive the full snapshot after the mutation; a command that
/// leaves the sequence untouched does not notify.
#[derive(Default)]
pub struct WindowManager {
    state: DesktopState,
    listeners: Vec<WindowListener>,
}

impl std::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManager")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&DesktopState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn open(&mut self, app: &AppDescriptor) -> WindowChange {
        let change = open_app_window(&mut self.state, app);
        self.notify(change);
        change
    }

    pub fn close(&mut self, app_id: &str) -> WindowChange {
        let change = close_app_window(&mut self.state, app_id);
        self.notify(change);
        change
    }

    pub fn apply(&mut self, command: &WindowCommand) -> WindowChange {
        match command {
            WindowCommand::Open(app) => self.open(app),
            WindowCommand::Close(app_id) => self.close(app_id),
        }
    }

    fn notify(&mut self, change: WindowChange) {
        if !change.is_change() {
            return;
        }
        for listener in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn app(id: &str) -> AppDescriptor {
        AppDescriptor::new(id, id.to_uppercase(), format!("/assets/icons/{id}.png"))
    }

    fn ids(state: &DesktopState) -> Vec<String> {
        state.windows.iter().map(|w| w.id.clone()).collect()
    }

    #[test]
    fn reopen_moves_window_to_top_then_close() {
        let mut state = DesktopState::default();
        open_app_window(&mut state, &app("pet"));
        open_app_window(&mut state, &app("paint"));
        let change = open_app_window(&mut state, &app("pet"));

        assert_eq!(change, WindowChange::Raised);
        assert_eq!(ids(&state), vec!["paint", "pet"]);

        assert_eq!(close_app_window(&mut state, "paint"), WindowChange::Closed);
        assert_eq!(ids(&state), vec!["pet"]);
    }

    #[test]
    fn open_then_close_single_window() {
        let mut state = DesktopState::default();
        assert_eq!(open_app_window(&mut state, &app("dino")), WindowChange::Opened);
        assert_eq!(ids(&state), vec!["dino"]);

        close_app_window(&mut state, "dino");
        assert!(state.windows.is_empty());
    }

    #[test]
    fn double_open_keeps_single_entry() {
        let mut once = DesktopState::default();
        open_app_window(&mut once, &app("cards"));

        let mut twice = DesktopState::default();
        open_app_window(&mut twice, &app("cards"));
        open_app_window(&mut twice, &app("cards"));

        assert_eq!(once, twice);
    }

    #[test]
    fn raise_preserves_relative_order_of_others() {
        let mut state = DesktopState::default();
        for id in ["pet", "paint", "piano", "cards", "dino"] {
            open_app_window(&mut state, &app(id));
        }

        open_app_window(&mut state, &app("piano"));
        assert_eq!(ids(&state), vec!["pet", "paint", "cards", "dino", "piano"]);
    }

    #[test]
    fn close_absent_id_is_noop() {
        let mut state = DesktopState::default();
        open_app_window(&mut state, &app("pet"));
        open_app_window(&mut state, &app("paint"));
        let before = state.clone();

        assert_eq!(close_app_window(&mut state, "dino"), WindowChange::Unchanged);
        assert_eq!(state, before);
    }

    #[test]
    fn close_keeps_order_of_remaining() {
        let mut state = DesktopState::default();
        for id in ["pet", "paint", "piano", "cards"] {
            open_app_window(&mut state, &app(id));
        }

        close_app_window(&mut state, "paint");
        assert_eq!(ids(&state), vec!["pet", "piano", "cards"]);
    }

    #[test]
    fn reopen_copies_current_descriptor_fields() {
        let mut state = DesktopState::default();
        open_app_window(&mut state, &app("pet"));

        let renamed = AppDescriptor::new("pet", "Pet v2", "/assets/icons/pet_small.png");
        open_app_window(&mut state, &renamed);

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].title, "Pet v2");
    }

    #[test]
    fn arbitrary_command_sequences_never_duplicate_ids() {
        let pool = ["pet", "paint", "piano", "cards", "dino"];
        // Deterministic LCG so the sequence is reproducible.
        let mut seed: u64 = 0x5eed;
        let mut manager = WindowManager::new();

        for _ in 0..2_000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let id = pool[(seed >> 33) as usize % pool.len()];
            let command = if (seed >> 17) % 3 == 0 {
                WindowCommand::Close(id.to_string())
            } else {
                WindowCommand::Open(app(id))
            };

            let before = ids(manager.state());
            let change = manager.apply(&command);
            let after = ids(manager.state());

            let unique: HashSet<_> = after.iter().collect();
            assert_eq!(unique.len(), after.len());

            match (&command, change) {
                (WindowCommand::Open(_), _) => {
                    assert_eq!(after.last().map(String::as_str), Some(id));
                    let others_before: Vec<_> = before.iter().filter(|w| *w != id).collect();
                    let others_after: Vec<_> = after.iter().filter(|w| *w != id).collect();
                    assert_eq!(others_before, others_after);
                }
                (WindowCommand::Close(_), WindowChange::Closed) => {
                    assert_eq!(after.len(), before.len() - 1);
                    let expected: Vec<_> = before.iter().filter(|w| *w != id).cloned().collect();
                    assert_eq!(after, expected);
                }
                (WindowCommand::Close(_), _) => assert_eq!(after, before),
            }
        }
    }

    #[test]
    fn z_index_follows_position() {
        assert_eq!(window_z_index(100, 0), 100);
        assert_eq!(window_z_index(100, 4), 104);
        assert_eq!(window_z_index(u32::MAX, 3), u32::MAX);
    }

    #[test]
    fn manager_notifies_listeners_with_snapshot() {
        let seen = Rc::new(RefCell::new(Vec::<Vec<String>>::new()));
        let mut manager = WindowManager::new();
        {
            let seen = seen.clone();
            manager.subscribe(move |state| seen.borrow_mut().push(ids(state)));
        }

        manager.open(&app("pet"));
        manager.open(&app("paint"));
        manager.close("pet");

        assert_eq!(
            *seen.borrow(),
            vec![
                vec!["pet".to_string()],
                vec!["pet".to_string(), "paint".to_string()],
                vec!["paint".to_string()],
            ]
        );
    }

    #[test]
    fn manager_skips_notification_on_noop_close() {
        let calls = Rc::new(RefCell::new(0usize));
        let mut manager = WindowManager::new();
        {
            let calls = calls.clone();
            manager.subscribe(move |_| *calls.borrow_mut() += 1);
        }

        assert_eq!(manager.close("dino"), WindowChange::Unchanged);
        assert_eq!(*calls.borrow(), 0);

        manager.apply(&WindowCommand::Open(app("dino")));
        manager.apply(&WindowCommand::Open(app("dino")));
        assert_eq!(*calls.borrow(), 2);
        assert_eq!(ids(manager.state()), vec!["dino"]);
    }

    #[test]
    fn apply_dispatches_to_open_and_close() {
        let mut via_apply = WindowManager::new();
        let mut direct = WindowManager::new();

        assert_eq!(
            via_apply.apply(&WindowCommand::Open(app("paint"))),
            direct.open(&app("paint"))
        );
        assert_eq!(
            via_apply.apply(&WindowCommand::Open(app("paint"))),
            WindowChange::Raised
        );
        assert_eq!(
            via_apply.apply(&WindowCommand::Close("paint".to_string())),
            direct.close("paint")
        );
        assert_eq!(via_apply.state(), direct.state());
    }
}
