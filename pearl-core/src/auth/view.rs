//! Authentication presentation contract

pub trait AuthView {
    /// Login was refused. One message for every refusal reason.
    fn show_invalid_credentials(&self);

    /// The credential store cannot be reached.
    fn show_data_not_ready(&self);
}
