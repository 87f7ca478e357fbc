/// Edit to an optional card field.
///
/// `NoChange` leaves the stored value alone, `Set` replaces it and `Clear`
/// unsets it. Unset is always `None`, never an empty string.
///
/// ```
/// use kanbanity_domain::FieldUpdate;
///
/// let mut due_date = Some("2024-05-01".to_string());
/// FieldUpdate::Set("2024-06-01".to_string()).apply_to(&mut due_date);
/// assert_eq!(due_date.as_deref(), Some("2024-06-01"));
///
/// FieldUpdate::<String>::Clear.apply_to(&mut due_date);
/// assert_eq!(due_date, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    NoChange,
    Set(T),
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }
}

/// `Some` sets, `None` clears.
impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldUpdate::Clear, FieldUpdate::Set)
    }
}
