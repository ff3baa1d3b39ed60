use serde::{Deserialize, Serialize};

/// Course fields embedded in a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCourse {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub course: CartCourse,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(course_id: &str, title: &str, price: f64, quantity: u32) -> Self {
        Self {
            course: CartCourse {
                id: course_id.to_string(),
                title: title.to_string(),
                price,
                original_price: None,
            },
            quantity,
        }
    }

    pub fn with_original_price(mut self, original: f64) -> Self {
        self.course.original_price = Some(original);
        self
    }

    pub fn line_total(&self) -> f64 {
        self.course.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartLineItem>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.items.iter().any(|i| i.course.id == course_id)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub course_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub order_id: String,
    #[serde(default)]
    pub enrolled_course_ids: Vec<String>,
    #[serde(default)]
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_cart_defaults_quantity() {
        let cart: Cart = serde_json::from_value(json!({
            "items": [
                { "course": { "_id": "c-1", "title": "Rust", "price": 10, "originalPrice": 50 } },
                { "course": { "id": "c-2", "title": "Go", "price": 5.5 }, "quantity": 2 }
            ]
        }))
        .unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.items[0].course.original_price, Some(50.0));
        assert_eq!(cart.items[1].line_total(), 11.0);
        assert!(cart.contains("c-2"));
    }

    #[test]
    fn test_serialize_checkout_request() {
        let body = serde_json::to_value(CheckoutRequest {
            promo_code: Some("SAVE20".to_string()),
        })
        .unwrap();
        assert_eq!(body["promoCode"], "SAVE20");

        let body = serde_json::to_value(CheckoutRequest { promo_code: None }).unwrap();
        assert!(body.get("promoCode").is_none());
    }
}
