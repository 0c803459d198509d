//! The validation rule catalog.
//!
//! Every rule is a pure predicate over [`Value`](fieldcheck_model::Value):
//! same input, same answer, no I/O, no mutation. None of them can fail —
//! a wrong-variant input or an unparseable string yields `false`, so the
//! caller's aggregation loop never needs error handling around a rule call.
//!
//! Rules are deliberately independent primitives. Composition (which rules
//! run per field, short-circuit vs exhaustive evaluation, message wording)
//! belongs to the model layer.

mod datatype;
mod format;
mod numeric;
mod sequence;
mod text;

pub use datatype::{is_array, is_boolean, is_required, is_string};
pub use format::{is_date_string, is_email, is_phone_number, is_url, is_uuid};
pub use numeric::{is_float, is_int, is_number, max, min};
pub use sequence::{array_length, array_max_length, array_min_length};
pub use text::{is_not_empty, length, max_length, min_length};
