use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

/// Element keys of the contact form inputs.
///
/// The serialized names are shared by the host document and the webhook
/// payload. Variants are declared in the order the form is checked.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    IntoStaticStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
pub enum Field {
    #[strum(serialize = "nombre")]
    Name,
    #[strum(serialize = "empresa")]
    Company,
    #[strum(serialize = "correo")]
    Email,
    #[strum(serialize = "telefono")]
    Phone,
    #[strum(serialize = "mensaje")]
    Message,
}

impl Field {
    /// Name of the matching attribute on [`crate::ContactFields`], as reported
    /// by `validator`.
    pub(crate) fn attribute(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Company => "company",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}
