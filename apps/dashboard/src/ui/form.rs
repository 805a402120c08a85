use std::sync::{Mutex, MutexGuard};

use super::FormSource;

/// A form with a fixed action. Field values can change after construction,
/// the way a select or text input does on a live page.
#[derive(Debug, Default)]
pub struct StaticForm {
    action: Option<String>,
    fields: Mutex<Vec<(String, String)>>,
}

impl StaticForm {
    pub fn new(action: Option<String>) -> Self {
        Self {
            action,
            fields: Mutex::new(Vec::new()),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .push((name.into(), value.into()));
        self
    }

    /// Replaces the value of the first field called `name`, or appends it.
    pub fn set_field(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let mut fields = self.lock_fields();
        match fields.iter().position(|(n, _)| n == name) {
            Some(index) => fields[index].1 = value,
            None => fields.push((name.to_string(), value)),
        }
    }

    fn lock_fields(&self) -> MutexGuard<'_, Vec<(String, String)>> {
        self.fields.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FormSource for StaticForm {
    fn action(&self) -> Option<String> {
        self.action.clone()
    }

    fn fields(&self) -> Vec<(String, String)> {
        self.lock_fields().clone()
    }
}
