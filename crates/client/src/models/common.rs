//! Common types shared across PagerDuty API models.
//!
//! This module contains generic wrappers used by every resource listing. It
//! does NOT contain resource-specific models.

use serde::{Deserialize, Serialize};

/// Ordered result of a list operation.
///
/// Serializes as `{"response": [...]}`. Records keep the order in which the
/// pagination engine received them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponseModel<T> {
    response: Vec<T>,
}

impl<T> ListResponseModel<T> {
    pub fn new(response: Vec<T>) -> Self {
        Self { response }
    }

    pub fn response(&self) -> &[T] {
        &self.response
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.response.iter()
    }

    pub fn len(&self) -> usize {
        self.response.len()
    }

    pub fn is_empty(&self) -> bool {
        self.response.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.response
    }
}

impl<T> Default for ListResponseModel<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> IntoIterator for ListResponseModel<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.response.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListResponseModel<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.response.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Alert;
    use serde_json::json;

    #[test]
    fn test_preserves_order() {
        let list = ListResponseModel::new(vec!["c", "a", "b"]);
        assert_eq!(list.response(), &["c", "a", "b"]);
        let collected: Vec<_> = list.into_iter().collect();
        assert_eq!(collected, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_empty_serializes_as_empty_response() {
        let list: ListResponseModel<Alert> = ListResponseModel::default();
        assert!(list.is_empty());
        assert_eq!(serde_json::to_value(&list).unwrap(), json!({"response": []}));
    }

    #[test]
    fn test_serializes_alerts_under_response() {
        let list = ListResponseModel::new(vec![Alert::new("A1"), Alert::new("A2")]);
        assert_eq!(list.len(), 2);
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({"response": [
                {"id": "A1", "type": "alert"},
                {"id": "A2", "type": "alert"}
            ]})
        );
    }
}
