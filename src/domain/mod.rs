//! Domain logic for project stage transitions

mod bulk;
mod states;
mod transitions;
mod validation;


pub use bulk::{check_bulk_eligibility, plan_bulk_status_change, BulkEligibility, BulkMoveInput};
pub use states::TransitionPolicy;
pub use transitions::{
    can_transition, get_available_statuses, plan_status_change, StatusChangeContext,
    StatusChangeInput,
};
pub use validation::{
    answer_key, build_field_responses, is_answered, validate_custom_field_responses,
    FieldAnswers, ValidationResult,
};
