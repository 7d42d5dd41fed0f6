use mkfly_contact::{ContactFields, Field};

pub fn value(field: Field) -> &'static str {
    match field {
        Field::Name => "María López",
        Field::Company => "Transportes del Bajío",
        Field::Email => "maria@bajio.mx",
        Field::Phone => "+1 (555) 123-4567",
        Field::Message => "Quiero automatizar mis cotizaciones.",
    }
}

pub fn fields() -> ContactFields {
    ContactFields::collect(|field| value(field).to_owned())
}
