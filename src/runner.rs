//! Live evaluation: wires field-change triggers to the shared visibility
//! algorithm and applies the results to the host's rendered controls.
//!
//! The runner is event-driven and single-threaded. Value changes are
//! coalesced through a cancel-on-retrigger debounce so typing does not
//! re-evaluate on every keystroke; render and navigation events evaluate
//! immediately. Each pass is a pure computation over a snapshot of the
//! view's values taken at the start of the pass.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use tracing::trace;

use crate::evaluate::is_visible;
use crate::lookup::ValueSource;
use crate::map::LogicMap;
use crate::types::FieldType;

/// Debounce window applied to value-change triggers.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Host adapter over the rendered form.
///
/// The engine never assumes a concrete UI type; the host implements this
/// over whatever it renders with. Value reads follow the live-context
/// conventions: radio groups yield the checked value or an empty string,
/// checkbox groups and multi-selects yield the ordered sequence of
/// checked/selected values (possibly empty).
pub trait FormView: ValueSource {
    /// Whether the host's own field-level logic currently hides the field.
    fn is_field_hidden(&self, field_id: &str) -> bool;

    /// Show or hide one choice control. For dropdown options this also
    /// toggles the option's disabled state.
    fn set_choice_visible(&mut self, field_id: &str, choice: &str, visible: bool);

    /// Whether the given choice is currently selected/checked.
    fn is_choice_selected(&self, field_id: &str, choice: &str) -> bool;

    /// Clear the selection of one choice (uncheck / deselect).
    fn clear_choice(&mut self, field_id: &str, choice: &str);
}

/// Events that drive re-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A field value changed; coalesced through the debounce window.
    ValueChanged,
    /// The form (re-)rendered.
    Rendered,
    /// A page of a multi-page form was entered.
    PageLoaded,
    /// The host recomputed its own field-level conditional logic.
    FieldLogicRecomputed,
}

/// Cancel-on-retrigger debounce: one pending deadline, replaced on every
/// schedule, never accumulated. A stale evaluation can therefore never
/// apply after a newer trigger fired; scheduling discards the old
/// deadline outright.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Schedule (or reschedule) the deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True while a deadline is pending.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has come due.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Drives choice visibility for one rendered form instance.
///
/// Owns the [`LogicMap`] and the applied per-choice hidden state; borrows
/// the host view only for the duration of a call. When the map is empty
/// every entry point is a no-op, since most forms carry no choice-level
/// logic.
#[derive(Debug)]
pub struct LiveRunner {
    map: LogicMap,
    debounce: Debouncer,
    hidden: HashMap<String, HashSet<String>>,
}

impl LiveRunner {
    #[must_use]
    pub fn new(map: LogicMap) -> Self {
        Self::with_debounce(map, DEFAULT_DEBOUNCE)
    }

    #[must_use]
    pub fn with_debounce(map: LogicMap, window: Duration) -> Self {
        Self {
            map,
            debounce: Debouncer::new(window),
            hidden: HashMap::new(),
        }
    }

    #[must_use]
    pub fn map(&self) -> &LogicMap {
        &self.map
    }

    /// Whether the last pass left the given choice hidden.
    #[must_use]
    pub fn is_choice_hidden(&self, field_id: &str, choice: &str) -> bool {
        self.hidden
            .get(field_id)
            .is_some_and(|choices| choices.contains(choice))
    }

    /// True while a coalesced evaluation is waiting on the debounce.
    #[must_use]
    pub fn evaluation_pending(&self) -> bool {
        self.debounce.pending()
    }

    /// Route a trigger. Value changes wait out the debounce window;
    /// render and navigation events evaluate immediately and then re-check
    /// for selections hiding under the UI.
    pub fn notify(&mut self, trigger: Trigger, now: Instant, view: &mut impl FormView) {
        if self.map.is_empty() {
            return;
        }
        match trigger {
            Trigger::ValueChanged => self.debounce.schedule(now),
            Trigger::Rendered | Trigger::PageLoaded => {
                self.run_pass(now, view);
                self.sanity_pass(view);
            }
            Trigger::FieldLogicRecomputed => self.run_pass(now, view),
        }
    }

    /// Fire the debounce if due. Returns whether a pass ran.
    pub fn poll(&mut self, now: Instant, view: &mut impl FormView) -> bool {
        if self.map.is_empty() || !self.debounce.fire(now) {
            return false;
        }
        self.run_pass(now, view);
        true
    }

    /// One evaluation pass: decide visibility for every mapped choice
    /// against a snapshot of the view's values, then apply the decisions.
    fn run_pass(&mut self, now: Instant, view: &mut impl FormView) {
        trace!(form_id = %self.map.form_id, "evaluating choice logic");

        let mut decisions: Vec<(String, FieldType, String, bool)> = Vec::new();
        for (field_id, field) in &self.map.fields {
            if view.is_field_hidden(field_id) {
                continue;
            }
            for (choice, logic) in &field.choices {
                let visible = is_visible(logic, &*view);
                decisions.push((field_id.clone(), field.field_type, choice.clone(), visible));
            }
        }

        for (field_id, field_type, choice, visible) in decisions {
            view.set_choice_visible(&field_id, &choice, visible);

            if visible {
                if let Some(choices) = self.hidden.get_mut(&field_id) {
                    choices.remove(&choice);
                }
            } else {
                self.hidden
                    .entry(field_id.clone())
                    .or_default()
                    .insert(choice.clone());
            }

            // A dropdown option that vanishes out from under its own
            // selection is cleared, and the cleared value feeds dependent
            // logic through the next coalesced pass.
            if !visible
                && matches!(field_type, FieldType::Select | FieldType::Multiselect)
                && view.is_choice_selected(&field_id, &choice)
            {
                view.clear_choice(&field_id, &choice);
                self.debounce.schedule(now);
            }
        }
    }

    /// Uncheck any control whose containing choice is currently flagged
    /// hidden, so an invisible choice cannot stay selected underneath the
    /// UI. Runs after render and page-navigation triggers; dropdowns are
    /// already handled during the pass itself.
    fn sanity_pass(&self, view: &mut impl FormView) {
        for (field_id, field) in &self.map.fields {
            if !matches!(
                field.field_type,
                FieldType::Radio | FieldType::Checkbox | FieldType::MultiChoice
            ) {
                continue;
            }
            for choice in field.choices.keys() {
                if self.is_choice_hidden(field_id, choice) && view.is_choice_selected(field_id, choice)
                {
                    trace!(field = %field_id, choice = %choice, "clearing hidden selection");
                    view.clear_choice(field_id, choice);
                }
            }
        }
    }
}
