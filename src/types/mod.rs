mod field;
mod operator;
mod report;
mod rule;
mod value;

pub use field::{Choice, FieldDef, FieldType, FormDef};
pub use operator::Operator;
pub use report::{ValidationFailure, ValidationReport};
pub use rule::{ActionType, ChoiceLogic, LogicType, Rule};
pub use value::FieldValue;
