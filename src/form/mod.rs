mod controller;
mod field;
mod transport;
mod validation;


pub use controller::{
    ContactFormController, ContactFormOptions, DEFAULT_STATUS_TIMEOUT, ERROR_BODY, ERROR_TITLE,
    FormError, FormResult, FormSnapshot, SUCCESS_BODY, SUCCESS_TITLE, StatusBanner, StatusTicket,
    SubmissionStatus, SubmitOutcome, SubmitState,
};
pub use field::{Field, FieldErrors, FieldValidationError, FormFields, UnknownField};
pub use transport::{
    Ack, BoxedTransportFuture, DEFAULT_SUBMIT_LATENCY, SimulatedTransport, Transport,
    TransportError,
};
pub use validation::{
    EMAIL_INVALID, EMAIL_REQUIRED, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS, MESSAGE_REQUIRED,
    MESSAGE_TOO_LONG, MESSAGE_TOO_SHORT, NAME_INVALID, NAME_MIN_CHARS, NAME_REQUIRED,
    NAME_TOO_SHORT, validate_email, validate_field, validate_form, validate_message,
    validate_name,
};
