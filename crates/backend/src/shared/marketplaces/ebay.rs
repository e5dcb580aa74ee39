/// Публичная карточка позиции на сайте eBay
pub fn item_url(domain: &str, item_id: &str) -> String {
    format!("https://www.{}/itm/{}", domain, urlencoding::encode(item_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url_uses_marketplace_domain() {
        assert_eq!(
            item_url("ebay.de", "110553964953"),
            "https://www.ebay.de/itm/110553964953"
        );
    }
}
