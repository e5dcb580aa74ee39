/// Публичная карточка товара на сайте Walmart
pub fn item_url(domain: &str, item_id: &str) -> String {
    format!("https://www.{}/ip/{}", domain, urlencoding::encode(item_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url() {
        assert_eq!(
            item_url("walmart.com", "123456"),
            "https://www.walmart.com/ip/123456"
        );
    }

    #[test]
    fn test_item_url_escapes_path_segment() {
        assert_eq!(
            item_url("walmart.com", "AB#1 2"),
            "https://www.walmart.com/ip/AB%231%202"
        );
    }
}
