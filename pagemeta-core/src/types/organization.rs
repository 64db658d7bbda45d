//! Organization structured-data field types

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use pagemeta_schema::{OpenHours, OrganizationType, StructuredDataAction};

/// Postal address of an organization. All fields optional; blank
/// fields are omitted from the assembled mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    /// House number and street, e.g. `"55 Public Square Suite 1710"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub street: String,
    /// City or locality, e.g. `"Cleveland"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub locality: String,
    /// State, province, county, or region, e.g. `"OH"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,
    /// Zip or postal code, e.g. `"44113"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    /// Country name or two-letter ISO 3166-1 alpha-2 code.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
}

impl PostalAddress {
    /// Whether every address field is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .all(|field| field.trim().is_empty())
    }

    /// Builds the schema.org `PostalAddress` sub-mapping, or `None`
    /// when every field is blank.
    #[must_use]
    pub fn to_schema_value(&self) -> Option<Value> {
        if self.is_empty() {
            return None;
        }
        let mut map = Map::new();
        map.insert("@type".to_string(), json!("PostalAddress"));
        let fields = [
            ("streetAddress", &self.street),
            ("addressLocality", &self.locality),
            ("addressRegion", &self.region),
            ("postalCode", &self.postal_code),
            ("addressCountry", &self.country),
        ];
        for (key, value) in fields {
            if !value.trim().is_empty() {
                map.insert(key.to_string(), json!(value));
            }
        }
        Some(Value::Object(map))
    }
}

/// Organization structured-data fields stored on a page.
///
/// An unset [`org_type`](Self::org_type) disables structured data for
/// the page entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSeo {
    /// Organization type from the fixed schema.org vocabulary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_type: Option<OrganizationType>,
    /// Organization name. Blank falls back to the site name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Telephone number, ideally with country code.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub telephone: String,
    /// Postal address.
    #[serde(default, skip_serializing_if = "PostalAddress::is_empty")]
    pub address: PostalAddress,
    /// Geographic latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_lat: Option<f64>,
    /// Geographic longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_lng: Option<f64>,
    /// Hours of operation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hours: Vec<OpenHours>,
    /// Actions offered by the organization.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<StructuredDataAction>,
    /// Additional JSON-LD merged into the Organization mapping. Must
    /// be properties of schema.org/Organization or the selected
    /// organization type.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra_json: String,
}

impl OrganizationSeo {
    /// Whether structured data is enabled for the owning page.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.org_type.is_some()
    }

    /// Builds the schema.org `GeoCoordinates` sub-mapping, present
    /// only when both coordinates are set.
    #[must_use]
    pub fn geo_value(&self) -> Option<Value> {
        match (self.geo_lat, self.geo_lng) {
            (Some(lat), Some(lng)) => Some(json!({
                "@type": "GeoCoordinates",
                "latitude": lat,
                "longitude": lng,
            })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_disabled() {
        let org = OrganizationSeo::default();
        assert!(!org.is_enabled());
        assert_eq!(org.geo_value(), None);
    }

    #[test]
    fn geo_requires_both_coordinates() {
        let mut org = OrganizationSeo {
            geo_lat: Some(41.499_32),
            ..OrganizationSeo::default()
        };
        assert_eq!(org.geo_value(), None);

        org.geo_lng = Some(-81.694_36);
        let geo_res = org.geo_value();
        assert!(geo_res.is_some(), "expected Some(..), got None");
        let Some(geo) = geo_res else {
            return;
        };
        assert_eq!(geo["@type"], "GeoCoordinates");
        assert_eq!(geo["latitude"], 41.499_32);
        assert_eq!(geo["longitude"], -81.694_36);
    }

    #[test]
    fn geo_longitude_alone_is_omitted() {
        let org = OrganizationSeo {
            geo_lng: Some(-81.694_36),
            ..OrganizationSeo::default()
        };
        assert_eq!(org.geo_value(), None);
    }

    #[test]
    fn empty_address_yields_no_mapping() {
        assert!(PostalAddress::default().is_empty());
        assert_eq!(PostalAddress::default().to_schema_value(), None);
    }

    #[test]
    fn partial_address_keeps_only_set_fields() {
        let address = PostalAddress {
            locality: "Cleveland".to_string(),
            region: "OH".to_string(),
            ..PostalAddress::default()
        };
        let value_res = address.to_schema_value();
        assert!(value_res.is_some(), "expected Some(..), got None");
        let Some(value) = value_res else {
            return;
        };
        assert_eq!(value["@type"], "PostalAddress");
        assert_eq!(value["addressLocality"], "Cleveland");
        assert_eq!(value["addressRegion"], "OH");
        assert!(value.get("streetAddress").is_none());
        assert!(value.get("postalCode").is_none());
        assert!(value.get("addressCountry").is_none());
    }

    #[test]
    fn whitespace_address_counts_as_empty() {
        let address = PostalAddress {
            street: "   ".to_string(),
            ..PostalAddress::default()
        };
        assert!(address.is_empty());
        assert_eq!(address.to_schema_value(), None);
    }

    #[test]
    fn serde_roundtrip() {
        let org = OrganizationSeo {
            org_type: Some(OrganizationType::Restaurant),
            name: "Example Diner".to_string(),
            telephone: "+1-216-555-8000".to_string(),
            address: PostalAddress {
                street: "55 Public Square".to_string(),
                locality: "Cleveland".to_string(),
                region: "OH".to_string(),
                postal_code: "44113".to_string(),
                country: "US".to_string(),
            },
            geo_lat: Some(41.5),
            geo_lng: Some(-81.7),
            ..OrganizationSeo::default()
        };
        let json_res = serde_json::to_string(&org);
        assert!(
            json_res.is_ok(),
            "serde_json::to_string failed: {json_res:?}"
        );
        let Ok(json) = json_res else {
            return;
        };
        assert!(json.contains("\"orgType\":\"Restaurant\""));

        let back_res: serde_json::Result<OrganizationSeo> = serde_json::from_str(&json);
        assert!(back_res.is_ok(), "serde_json::from_str failed: {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        assert_eq!(back, org);
    }

    #[test]
    fn deserialize_minimal_object() {
        let res: serde_json::Result<OrganizationSeo> = serde_json::from_str("{}");
        assert!(res.is_ok(), "serde_json::from_str failed: {res:?}");
        let Ok(org) = res else {
            return;
        };
        assert!(!org.is_enabled());
        assert!(org.address.is_empty());
    }
}
