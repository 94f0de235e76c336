//! Page container for list responses.

use serde::Serialize;

/// A bounded slice of a larger ordered collection, plus metadata
/// describing total size and position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Builds a page from a slice window and the collection total.
    pub fn new(content: Vec<T>, page: u32, size: u32, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(u64::from(size))
        };

        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3], 0, 10, 23);
        assert_eq!(page.total_pages, 3);

        let exact = Page::<i32>::new(vec![], 0, 10, 20);
        assert_eq!(exact.total_pages, 2);

        let empty = Page::<i32>::new(vec![], 0, 10, 0);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn zero_size_does_not_divide_by_zero() {
        let page = Page::<i32>::new(vec![], 0, 0, 5);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn serializes_with_camel_case_metadata() {
        let page = Page::new(vec![1], 0, 10, 1);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["content"], serde_json::json!([1]));
        assert_eq!(json["page"], 0);
        assert_eq!(json["size"], 10);
        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["totalPages"], 1);
    }
}
