//! Choices offered by the public forms.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> FormOption {
    FormOption { value, label }
}

pub const DOCUMENT_TYPES: [FormOption; 5] = [
    option("CC", "Cédula de Ciudadanía"),
    option("TI", "Tarjeta de Identidad"),
    option("CE", "Cédula de Extranjería"),
    option("PAS", "Pasaporte"),
    option("Otro", "Otro"),
];

pub const VOLUNTEER_TYPES: [FormOption; 6] = [
    option("docencia", "Docencia"),
    option("arte", "Arte y Creatividad"),
    option("deportes", "Deportes y Recreación"),
    option("logistica", "Apoyo Logístico"),
    option("eventos", "Organización de Eventos"),
    option("otro", "Otro"),
];

/// Preset donation amounts, in pesos
pub const DONATION_PRESETS: [u64; 3] = [30_000, 50_000, 100_000];
pub const DEFAULT_DONATION: u64 = 50_000;

/// Marks a donation whose amount is in `customAmount`
pub const CUSTOM_AMOUNT: &str = "custom";

pub fn is_volunteer_type(value: &str) -> bool {
    VOLUNTEER_TYPES.iter().any(|t| t.value == value)
}
