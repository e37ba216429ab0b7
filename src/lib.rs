//! Per-choice conditional visibility for multi-choice form fields.
//!
//! A form designer attaches show/hide rules to *individual choices* of a
//! radio, checkbox, dropdown or multi-select field; each choice is then
//! shown or hidden based on the live values of other fields. The same
//! evaluation algorithm runs in two contexts: live in the rendering
//! client ([`LiveRunner`]) and authoritatively on the server
//! ([`validate_submission`] / [`sanitize_submission`]). Divergence
//! between the two would let a hidden choice be silently accepted, so
//! both are thin adapters over one shared core ([`is_visible`]).
//!
//! # Example
//!
//! ```
//! use choicegate::{
//!     is_visible, ActionType, ChoiceLogic, LogicType, Operator, Rule, SubmittedValues,
//! };
//!
//! // Show this choice only while field 2 is "b".
//! let logic = ChoiceLogic::new(
//!     ActionType::Show,
//!     LogicType::All,
//!     vec![Rule::new("2", Operator::Is, "b")],
//! );
//!
//! let values = SubmittedValues::new().set("2", "b");
//! assert!(is_visible(&logic, &values));
//!
//! let values = SubmittedValues::new().set("2", "a");
//! assert!(!is_visible(&logic, &values));
//! ```

mod compare;
mod error;
mod evaluate;
mod guard;
mod lookup;
mod map;
mod runner;
mod types;

pub use compare::compare;
pub use error::ChoicegateError;
pub use evaluate::{is_visible, visible_choices};
pub use guard::{sanitize_submission, validate_submission};
pub use lookup::{SubmittedValues, ValueSource};
pub use map::{LogicMap, LogicMapField};
pub use runner::{Debouncer, FormView, LiveRunner, Trigger, DEFAULT_DEBOUNCE};
pub use types::{
    ActionType, Choice, ChoiceLogic, FieldDef, FieldType, FieldValue, FormDef, LogicType,
    Operator, Rule, ValidationFailure, ValidationReport,
};
