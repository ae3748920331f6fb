use poem_openapi::Object;

use business::domain::capture::model::ScannedPrice;

#[derive(Debug, Clone, Object)]
pub struct ExtractPriceRequest {
    /// JPEG still as base64 or a `data:image/...;base64,` URL
    pub image_base64: String,
}

#[derive(Debug, Clone, Object)]
pub struct ExtractedPriceResponse {
    /// Parsed price
    pub price: f64,
    /// The price as it should appear in the original price field
    pub original_price: String,
    /// Verbatim text returned by the recognition service
    pub raw_text: String,
}

impl From<ScannedPrice> for ExtractedPriceResponse {
    fn from(scanned: ScannedPrice) -> Self {
        Self {
            price: scanned.price,
            original_price: scanned.price.to_string(),
            raw_text: scanned.raw_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_original_price_field_from_scanned_price() {
        let response: ExtractedPriceResponse = ScannedPrice {
            price: 19.99,
            raw_text: "$19.99 only".to_string(),
        }
        .into();

        assert_eq!(response.original_price, "19.99");
        assert_eq!(response.raw_text, "$19.99 only");
    }
}
