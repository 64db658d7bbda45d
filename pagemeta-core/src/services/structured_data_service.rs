//! Organization structured-data assembly

use serde_json::{json, Map, Value};

use pagemeta_schema::{utils::extra_json, OpenHours, StructuredDataAction, SCHEMA_CONTEXT};

use crate::traits::{renditions, SeoPage};
use crate::utils::urls;

/// Structured-data assembler (stateless, all methods are associated
/// functions).
pub struct StructuredDataService;

impl StructuredDataService {
    /// Assembles the schema.org Organization mapping for `page`.
    ///
    /// Returns `None` when the page has no organization type set
    /// (structured data disabled). The organization name falls back to
    /// the site name, the geo sub-mapping appears only when both
    /// coordinates are set, and `extra_json` keys merge last and
    /// override assembled keys on collision. Malformed extra JSON is
    /// logged at `warn` and skipped; image rendition failures degrade
    /// to omitting the affected key.
    #[must_use]
    pub fn assemble(page: &dyn SeoPage) -> Option<Map<String, Value>> {
        let org = page.organization();
        let org_type = org.org_type?;
        let site = page.site();

        let mut map = Map::new();
        map.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
        map.insert("@type".to_string(), json!(org_type.as_str()));
        map.insert("url".to_string(), json!(page.seo_canonical_url()));

        let name = if org.name.trim().is_empty() {
            site.name.clone()
        } else {
            org.name.clone()
        };
        map.insert("name".to_string(), json!(name));

        if let Some(logo) = page.organization_logo() {
            match logo.rendition_url(renditions::ORIGINAL) {
                Ok(path) => {
                    map.insert(
                        "logo".to_string(),
                        json!({
                            "@type": "ImageObject",
                            "url": urls::absolutize(&site.media_base_url, &path),
                        }),
                    );
                }
                Err(e) => log::warn!("Organization logo rendition failed: {e}"),
            }
        }

        if let Some(photo) = page.organization_image() {
            let mut images = Vec::new();
            for spec in [
                renditions::SQUARE,
                renditions::FOUR_BY_THREE,
                renditions::SIXTEEN_BY_NINE,
            ] {
                match photo.rendition_url(spec) {
                    Ok(path) => images.push(json!(urls::absolutize(&site.media_base_url, &path))),
                    Err(e) => log::warn!("Organization photo rendition '{spec}' failed: {e}"),
                }
            }
            if !images.is_empty() {
                map.insert("image".to_string(), Value::Array(images));
            }
        }

        if !org.telephone.trim().is_empty() {
            map.insert("telephone".to_string(), json!(org.telephone));
        }
        if let Some(address) = org.address.to_schema_value() {
            map.insert("address".to_string(), address);
        }
        if let Some(geo) = org.geo_value() {
            map.insert("geo".to_string(), geo);
        }
        if !org.hours.is_empty() {
            let hours: Vec<Value> = org.hours.iter().map(OpenHours::to_schema_value).collect();
            map.insert("openingHours".to_string(), Value::Array(hours));
        }
        if !org.actions.is_empty() {
            let actions: Vec<Value> = org
                .actions
                .iter()
                .map(StructuredDataAction::to_schema_value)
                .collect();
            map.insert("potentialAction".to_string(), Value::Array(actions));
        }

        extra_json::merge_into(&mut map, &org.extra_json);
        Some(map)
    }

    /// Renders the assembled mapping as pretty-printed JSON-LD for
    /// template embedding, or `None` when structured data is disabled.
    #[must_use]
    pub fn render(page: &dyn SeoPage) -> Option<String> {
        let map = Self::assemble(page)?;
        match serde_json::to_string_pretty(&Value::Object(map)) {
            Ok(rendered) => Some(rendered),
            Err(e) => {
                log::error!("Failed to serialize structured data: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use pagemeta_schema::{ActionType, OrganizationType, ReservationType, Weekday};

    use crate::test_utils::{test_organization, TestImage, TestPage};
    use crate::types::PostalAddress;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
    }

    #[test]
    fn disabled_without_org_type() {
        let page = TestPage::new("Contact");
        assert_eq!(StructuredDataService::assemble(&page), None);
        assert_eq!(StructuredDataService::render(&page), None);
    }

    #[test]
    fn assembles_type_url_and_name() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();

        let map_res = StructuredDataService::assemble(&page);
        assert!(map_res.is_some(), "expected Some(..), got None");
        let Some(map) = map_res else {
            return;
        };
        assert_eq!(map["@context"], "http://schema.org");
        assert_eq!(map["@type"], "Restaurant");
        assert_eq!(map["url"], "https://example.com/contact/");
        assert_eq!(map["name"], "Example Diner");
    }

    #[test]
    fn blank_org_name_falls_back_to_site_name() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();
        page.organization.name = String::new();

        let Some(map) = StructuredDataService::assemble(&page) else {
            return;
        };
        assert_eq!(map["name"], "Example Site");
    }

    #[test]
    fn logo_and_photo_renditions() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();
        page.logo = Some(TestImage::new("logo"));
        page.photo = Some(TestImage::new("storefront"));

        let Some(map) = StructuredDataService::assemble(&page) else {
            return;
        };
        assert_eq!(map["logo"]["@type"], "ImageObject");
        assert_eq!(
            map["logo"]["url"],
            "https://example.com/media/images/logo.original.jpg"
        );
        let images_res = map["image"].as_array();
        assert!(images_res.is_some(), "expected Some(..), got None");
        let Some(images) = images_res else {
            return;
        };
        assert_eq!(images.len(), 3);
        assert_eq!(
            images[0],
            "https://example.com/media/images/storefront.fill-10000x10000.jpg"
        );
    }

    #[test]
    fn no_images_no_image_keys() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();

        let Some(map) = StructuredDataService::assemble(&page) else {
            return;
        };
        assert!(map.get("logo").is_none());
        assert!(map.get("image").is_none());
    }

    #[test]
    fn geo_lat_alone_omits_geo() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();
        page.organization.geo_lng = None;

        let Some(map) = StructuredDataService::assemble(&page) else {
            return;
        };
        assert!(map.get("geo").is_none());
    }

    #[test]
    fn geo_present_with_both_coordinates() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();

        let Some(map) = StructuredDataService::assemble(&page) else {
            return;
        };
        assert_eq!(map["geo"]["@type"], "GeoCoordinates");
        assert_eq!(map["geo"]["latitude"], 41.499_32);
        assert_eq!(map["geo"]["longitude"], -81.694_36);
    }

    #[test]
    fn address_sub_mapping() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();
        page.organization.address = PostalAddress {
            street: "55 Public Square".to_string(),
            locality: "Cleveland".to_string(),
            region: "OH".to_string(),
            postal_code: "44113".to_string(),
            country: "US".to_string(),
        };

        let Some(map) = StructuredDataService::assemble(&page) else {
            return;
        };
        assert_eq!(map["address"]["@type"], "PostalAddress");
        assert_eq!(map["address"]["streetAddress"], "55 Public Square");
        assert_eq!(map["address"]["addressCountry"], "US");
    }

    #[test]
    fn opening_hours_render_as_strings() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();
        page.organization.hours = vec![pagemeta_schema::OpenHours::new(
            vec![Weekday::Monday, Weekday::Tuesday],
            time(9, 0),
            time(17, 0),
        )];

        let Some(map) = StructuredDataService::assemble(&page) else {
            return;
        };
        assert_eq!(map["openingHours"], json!(["Monday,Tuesday 09:00-17:00"]));
    }

    #[test]
    fn actions_render_as_mappings() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();
        let mut action =
            StructuredDataAction::new(ActionType::ReserveAction, "https://example.com/book");
        action.result_type = Some(ReservationType::FoodEstablishmentReservation);
        action.result_name = "Reserve a table".to_string();
        page.organization.actions = vec![action];

        let Some(map) = StructuredDataService::assemble(&page) else {
            return;
        };
        assert_eq!(map["potentialAction"][0]["@type"], "ReserveAction");
        assert_eq!(
            map["potentialAction"][0]["result"]["name"],
            "Reserve a table"
        );
    }

    #[test]
    fn extra_json_merges_new_keys() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();
        page.organization.extra_json = r#"{"foo": "bar"}"#.to_string();

        let Some(map) = StructuredDataService::assemble(&page) else {
            return;
        };
        assert_eq!(map["foo"], "bar");
    }

    #[test]
    fn extra_json_overrides_assembled_keys() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();
        page.organization.extra_json = r#"{"name": "Overridden Name"}"#.to_string();

        let Some(map) = StructuredDataService::assemble(&page) else {
            return;
        };
        assert_eq!(map["name"], "Overridden Name");
    }

    #[test]
    fn malformed_extra_json_is_ignored() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();
        page.organization.extra_json = "{broken".to_string();

        let Some(map) = StructuredDataService::assemble(&page) else {
            return;
        };
        assert_eq!(map["name"], "Example Diner");
        assert!(map.get("broken").is_none());
    }

    #[test]
    fn minimal_org_omits_optional_keys() {
        let mut page = TestPage::new("Contact");
        page.organization.org_type = Some(OrganizationType::Organization);

        let Some(map) = StructuredDataService::assemble(&page) else {
            return;
        };
        assert!(map.get("telephone").is_none());
        assert!(map.get("address").is_none());
        assert!(map.get("geo").is_none());
        assert!(map.get("openingHours").is_none());
        assert!(map.get("potentialAction").is_none());
        assert_eq!(map["name"], "Example Site");
    }

    #[test]
    fn render_produces_embeddable_json() {
        let mut page = TestPage::new("Contact");
        page.organization = test_organization();

        let rendered_res = StructuredDataService::render(&page);
        assert!(rendered_res.is_some(), "expected Some(..), got None");
        let Some(rendered) = rendered_res else {
            return;
        };
        assert!(rendered.contains("\"@context\": \"http://schema.org\""));
        assert!(rendered.contains("\"@type\": \"Restaurant\""));

        let parsed_res: serde_json::Result<Value> = serde_json::from_str(&rendered);
        assert!(parsed_res.is_ok(), "rendered JSON-LD does not parse: {parsed_res:?}");
    }
}
