use crate::domain::record::Record;
use std::str::FromStr;

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Invalid sort order '{}'. Valid orders: asc, desc",
                s
            )),
        }
    }
}

/// Sorts a snapshot of records by one column
///
/// The sort is stable (rows with equal keys keep their relative order) and
/// works on a caller-owned slice; the store itself is never reordered.
///
/// # Arguments
/// * `records` - Mutable slice of records to sort
/// * `field` - The column to sort by
/// * `order` - The sort direction (ascending or descending)
///
/// # Examples
/// ```
/// use camelia_core::domain::order::OrderField;
/// use camelia_core::domain::record::Record;
/// use camelia_core::domain::sorting::{sort_records, SortOrder};
/// use camelia_core::seed;
///
/// let mut orders = seed::orders();
///
/// sort_records(&mut orders, OrderField::DeliveryDate, SortOrder::Ascending);
/// assert_eq!(orders[0].id().as_str(), "ORD-001");
/// assert_eq!(orders[0].delivery_date().to_string(), "2023-10-30");
/// ```
pub fn sort_records<R: Record>(records: &mut [R], field: R::Field, order: SortOrder) {
    records.sort_by(|a, b| {
        let cmp = a.get(field).compare(&b.get(field));
        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
}

/// A table header's sort state
///
/// Clicking the column already sorted on flips the direction; clicking a new
/// column resets to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    pub field: Option<F>,
    pub order: SortOrder,
}

impl<F: PartialEq + Copy> SortSpec<F> {
    pub fn new() -> Self {
        Self {
            field: None,
            order: SortOrder::Ascending,
        }
    }

    pub fn request(&mut self, field: F) {
        if self.field == Some(field) {
            self.order = match self.order {
                SortOrder::Ascending => SortOrder::Descending,
                SortOrder::Descending => SortOrder::Ascending,
            };
        } else {
            self.field = Some(field);
            self.order = SortOrder::Ascending;
        }
    }

    pub fn apply<R: Record<Field = F>>(&self, records: &mut [R]) {
        if let Some(field) = self.field {
            sort_records(records, field, self.order);
        }
    }
}

impl<F: PartialEq + Copy> Default for SortSpec<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows whose status equals `name`, in store order
pub fn filter_by_status<'a, R: Record>(records: &'a [R], name: &str) -> Vec<&'a R> {
    records.iter().filter(|r| r.status() == name).collect()
}

/// Case-insensitive substring search across every column and the id
pub fn search<'a, R: Record>(records: &'a [R], query: &str) -> Vec<&'a R> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| r.search_text().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{Order, OrderField};
    use crate::domain::record::RecordId;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(seq: u32, customer: &str, delivery: NaiveDate, status: &str) -> Order {
        Order::new(
            RecordId::new("ORD", seq),
            format!("F-{:03}", seq),
            customer,
            date(2023, 10, 26),
            delivery,
            status,
            "Matutino",
            "Centro",
            "Juan Pérez",
            "Ramo de 24 Rosas Rojas",
        )
    }

    fn delivery_dates() -> Vec<Order> {
        vec![
            order(1, "A", date(2023, 11, 5), "En Espera"),
            order(2, "B", date(2023, 10, 30), "En Espera"),
            order(3, "C", date(2023, 11, 2), "En Espera"),
        ]
    }

    #[test]
    fn test_sort_by_delivery_date_ascending_then_descending() {
        let mut orders = delivery_dates();

        sort_records(&mut orders, OrderField::DeliveryDate, SortOrder::Ascending);
        let asc: Vec<_> = orders
            .iter()
            .map(|o| o.delivery_date().to_string())
            .collect();
        assert_eq!(asc, ["2023-10-30", "2023-11-02", "2023-11-05"]);

        sort_records(&mut orders, OrderField::DeliveryDate, SortOrder::Descending);
        let desc: Vec<_> = orders
            .iter()
            .map(|o| o.delivery_date().to_string())
            .collect();
        assert_eq!(desc, ["2023-11-05", "2023-11-02", "2023-10-30"]);
    }

    #[test]
    fn test_sort_by_text_is_case_sensitive_lexicographic() {
        let same_day = date(2023, 11, 1);
        let mut orders = vec![
            order(1, "apple", same_day, "En Espera"),
            order(2, "BANANA", same_day, "En Espera"),
        ];

        sort_records(&mut orders, OrderField::Customer, SortOrder::Ascending);

        // Plain string order: uppercase code units sort first
        let customers: Vec<_> = orders.iter().map(|o| o.customer()).collect();
        assert_eq!(customers, ["BANANA", "apple"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let same_day = date(2023, 11, 2);
        let mut orders = vec![
            order(1, "Zeta", same_day, "En Espera"),
            order(2, "Alfa", same_day, "En Espera"),
            order(3, "Beta", same_day, "En Espera"),
        ];

        sort_records(&mut orders, OrderField::DeliveryDate, SortOrder::Ascending);

        let ids: Vec<_> = orders.iter().map(|o| o.id().as_str()).collect();
        assert_eq!(ids, ["ORD-001", "ORD-002", "ORD-003"]);
    }

    #[test]
    fn test_sort_spec_toggles_and_resets() {
        let mut spec = SortSpec::new();

        spec.request(OrderField::DeliveryDate);
        assert_eq!(spec.field, Some(OrderField::DeliveryDate));
        assert_eq!(spec.order, SortOrder::Ascending);

        spec.request(OrderField::DeliveryDate);
        assert_eq!(spec.order, SortOrder::Descending);

        spec.request(OrderField::Customer);
        assert_eq!(spec.field, Some(OrderField::Customer));
        assert_eq!(spec.order, SortOrder::Ascending);
    }

    #[test]
    fn test_sort_spec_apply_without_field_is_noop() {
        let spec: SortSpec<OrderField> = SortSpec::new();
        let mut orders = delivery_dates();
        spec.apply(&mut orders);

        let ids: Vec<_> = orders.iter().map(|o| o.id().as_str()).collect();
        assert_eq!(ids, ["ORD-001", "ORD-002", "ORD-003"]);
    }

    #[test]
    fn test_filter_by_status() {
        let mut orders = delivery_dates();
        orders[1].set_status("Entregado");

        let waiting = filter_by_status(&orders, "En Espera");
        assert_eq!(waiting.len(), 2);
        assert!(waiting.iter().all(|o| o.status() == "En Espera"));
    }

    #[test]
    fn test_search_matches_any_column() {
        let orders = delivery_dates();

        assert_eq!(search(&orders, "ord-002").len(), 1);
        assert_eq!(search(&orders, "rosas").len(), 3);
        assert_eq!(search(&orders, "girasol").len(), 0);
        assert_eq!(search(&orders, "").len(), 3);
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!(SortOrder::from_str("asc").unwrap(), SortOrder::Ascending);
        assert_eq!(SortOrder::from_str("DESC").unwrap(), SortOrder::Descending);
        assert!(SortOrder::from_str("sideways").is_err());
    }
}
