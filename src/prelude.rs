pub use crate::content::{
    Certification, ChannelKind, ContactChannel, ContentError, ContentResult, Education,
    Experience, Personal, Profile, Project, Skills, SocialLink, Training, render_markdown,
};
pub use crate::form::{
    Ack, ContactFormController, ContactFormOptions, Field, FieldErrors, FieldValidationError,
    FormError, FormFields, FormResult, FormSnapshot, SimulatedTransport, StatusBanner,
    SubmissionStatus, SubmitOutcome, SubmitState, Transport, TransportError, validate_email,
    validate_field, validate_form, validate_message, validate_name,
};
pub use crate::motion::{Easing, MotionLevel, Reveal, RevealPreset, ScrollTrigger, Stagger};
pub use crate::section::Section;
