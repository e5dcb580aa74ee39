/// Публичная карточка товара на сайте Amazon (по ASIN)
pub fn item_url(domain: &str, asin: &str) -> String {
    format!("https://www.{}/dp/{}", domain, urlencoding::encode(asin))
}
