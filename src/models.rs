//! Frontend Models
//!
//! Data structures matching the items API.

use serde::{Deserialize, Deserializer, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub category: String,
    #[serde(default, alias = "image", deserialize_with = "non_empty")]
    pub image_name: Option<String>,
}

/// Items in server-returned order, as produced by one fetch or search
pub type ItemPage = Vec<Item>;

/// Body of `GET /items` and `GET /search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: ItemPage,
}

/// A new listing as entered in the listing form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewListing {
    pub name: String,
    pub category: String,
    pub image: Option<ImageUpload>,
}

/// Image file picked in the listing form
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

// "" and null both mean no image
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_response_keeps_server_order() {
        let json = r#"{"items":[
            {"id":2,"name":"B","category":"Y","image_name":"b.jpg"},
            {"id":1,"name":"A","category":"X"}
        ]}"#;
        let resp: ItemsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.items[0].id, 2);
        assert_eq!(resp.items[0].image_name.as_deref(), Some("b.jpg"));
        assert_eq!(resp.items[1].name, "A");
        assert_eq!(resp.items[1].image_name, None);
    }

    #[test]
    fn test_item_accepts_image_key_and_missing_id() {
        let item: Item =
            serde_json::from_str(r#"{"name":"jacket","category":"fashion","image":"abc.jpg"}"#).unwrap();
        assert_eq!(item.id, 0);
        assert_eq!(item.image_name.as_deref(), Some("abc.jpg"));
    }

    #[test]
    fn test_empty_image_name_is_absent() {
        let item: Item =
            serde_json::from_str(r#"{"id":3,"name":"cup","category":"kitchen","image_name":""}"#).unwrap();
        assert_eq!(item.image_name, None);
    }

    #[test]
    fn test_missing_items_key_is_empty_page() {
        let resp: ItemsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.items.is_empty());
    }
}
