//! Shop settings singleton.

use serde::{Deserialize, Serialize};

/// Shop-wide settings.
///
/// A singleton with no id, identified by its storage slot alone. Field
/// names serialize in camelCase to keep the persisted document shape stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Business display name.
    pub business_name: String,
    /// Sales tax rate, percent.
    pub tax_rate: f64,
    /// Street address.
    pub address: String,
    /// Shop phone number.
    pub shop_phone: String,
    /// Shop email address.
    pub shop_email: String,
}

/// Raw field set submitted for settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    /// Business display name.
    pub business_name: String,
    /// Sales tax rate; unparsable input resolves to 0.
    pub tax_rate: String,
    /// Street address.
    pub address: String,
    /// Shop phone number.
    pub shop_phone: String,
    /// Shop email address.
    pub shop_email: String,
}

impl Settings {
    /// Builds settings from a submitted form.
    #[must_use]
    pub fn from_form(form: &SettingsForm) -> Self {
        Self {
            business_name: form.business_name.trim().to_string(),
            tax_rate: form
                .tax_rate
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .unwrap_or(0.0),
            address: form.address.trim().to_string(),
            shop_phone: form.shop_phone.trim().to_string(),
            shop_email: form.shop_email.trim().to_string(),
        }
    }

    /// Extracts the current values for pre-populating the settings form.
    #[must_use]
    pub fn to_form(&self) -> SettingsForm {
        SettingsForm {
            business_name: self.business_name.clone(),
            tax_rate: self.tax_rate.to_string(),
            address: self.address.clone(),
            shop_phone: self.shop_phone.clone(),
            shop_email: self.shop_email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("7.5", 7.5; "plain rate")]
    #[test_case("abc", 0.0; "unparsable resolves to zero")]
    #[test_case("", 0.0; "empty resolves to zero")]
    fn test_tax_rate_coercion(raw: &str, expected: f64) {
        let settings = Settings::from_form(&SettingsForm {
            tax_rate: raw.to_string(),
            ..SettingsForm::default()
        });
        assert!((settings.tax_rate - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serializes_in_camel_case() {
        let settings = Settings {
            business_name: "Tints & Audio".to_string(),
            tax_rate: 7.5,
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"businessName\""));
        assert!(json.contains("\"taxRate\""));
    }

    #[test]
    fn test_deserializes_partial_object() {
        let settings: Settings =
            serde_json::from_str(r#"{"businessName":"Tints & Audio"}"#).unwrap();
        assert_eq!(settings.business_name, "Tints & Audio");
        assert!((settings.tax_rate - 0.0).abs() < f64::EPSILON);
    }
}
