use crate::domain::{
    matcher,
    models::{Command, Registry, Target},
    ports::{ActionDispatcher, MenuSurface, Navigator},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuState {
    pub is_open: bool,
    pub query: String,
    pub filtered: Vec<usize>, // Indices into the registry
    pub selected_index: Option<usize>,
}

impl MenuState {
    fn first_selection(&self) -> Option<usize> {
        if self.filtered.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}

/// Keyboard/pointer driven command menu.
///
/// Owns the registry and the transient menu state; the rendering surface,
/// the navigation collaborator and the action dispatcher are injected.
/// Every operation runs to completion before returning.
pub struct CommandMenu<S, N, A> {
    registry: Registry,
    state: MenuState,
    surface: S,
    navigator: N,
    actions: A,
}

impl<S, N, A> CommandMenu<S, N, A>
where
    S: MenuSurface,
    N: Navigator,
    A: ActionDispatcher,
{
    pub fn new(registry: Registry, surface: S, navigator: N, actions: A) -> Self {
        let filtered = (0..registry.len()).collect();
        Self {
            registry,
            state: MenuState {
                filtered,
                ..Default::default()
            },
            surface,
            navigator,
            actions,
        }
    }

    // --- Transitions ---

    pub fn open(&mut self) {
        self.state.is_open = true;
        self.state.query.clear();
        self.surface.set_visible(true);
        self.refilter();
        tracing::debug!(items = self.state.filtered.len(), "command menu opened");
    }

    /// Hides the menu. Query and selection are kept until the next `open`.
    pub fn close(&mut self) {
        if self.state.is_open {
            tracing::debug!(query = %self.state.query, "command menu closed");
        }
        self.state.is_open = false;
        self.surface.set_visible(false);
    }

    pub fn set_query(&mut self, query: &str) {
        if !self.state.is_open {
            tracing::trace!("set_query ignored while closed");
            return;
        }
        self.state.query = query.to_string();
        self.refilter();
    }

    pub fn move_selection(&mut self, direction: Direction) {
        if !self.state.is_open {
            return;
        }
        let len = self.state.filtered.len();
        let Some(current) = self.state.selected_index.filter(|_| len > 0) else {
            return;
        };

        let next = match direction {
            Direction::Next => (current + 1) % len,
            Direction::Prev => (current + len - 1) % len,
        };
        self.state.selected_index = Some(next);
        self.surface.highlight(next);
    }

    /// Pointer equivalent of `move_selection`: jump straight to `index`.
    pub fn hover(&mut self, index: usize) {
        if !self.state.is_open || index >= self.state.filtered.len() {
            return;
        }
        if self.state.selected_index != Some(index) {
            self.state.selected_index = Some(index);
            self.surface.highlight(index);
        }
    }

    /// Runs the selected command. Closes first, then dispatches (if anything is selected).
    pub fn execute(&mut self) {
        let index = self.state.selected_index;
        self.execute_at(index);
    }

    /// Runs the command at a position in the filtered list (pointer click).
    pub fn execute_index(&mut self, index: usize) {
        self.execute_at(Some(index));
    }

    fn execute_at(&mut self, index: Option<usize>) {
        let was_open = self.state.is_open;
        let target = index
            .and_then(|i| self.state.filtered.get(i))
            .and_then(|&i| self.registry.get(i))
            .map(|cmd| (cmd.id.clone(), cmd.target.clone()));

        self.close();

        if !was_open {
            return;
        }
        let Some((id, target)) = target else {
            tracing::debug!("execute with nothing selected");
            return;
        };

        tracing::debug!(command = %id, "dispatching command");
        match target {
            Target::Navigate { destination } => self.navigator.navigate(&destination),
            Target::Action { action_id } => self.actions.dispatch(&action_id),
        }
    }

    fn refilter(&mut self) {
        self.state.filtered = matcher::filter(&self.registry, &self.state.query);
        self.state.selected_index = self.state.first_selection();

        let items: Vec<&Command> = self
            .state
            .filtered
            .iter()
            .filter_map(|&i| self.registry.get(i))
            .collect();
        self.surface.render_items(&items, self.state.selected_index);
        if items.is_empty() {
            self.surface.show_no_results();
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.state.query
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index
    }

    #[must_use]
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Command> {
        self.state
            .filtered
            .iter()
            .filter_map(|&i| self.registry.get(i))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }
}
