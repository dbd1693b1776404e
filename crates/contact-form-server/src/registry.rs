// File: src/registry.rs
// Purpose: Mounted forms keyed by id, with idle expiry and a capacity bound

use contact_form::FormState;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

struct MountedForm {
    state: FormState,
    last_seen: Instant,
}

/// Registry of every form currently mounted in a browser
pub struct FormRegistry {
    forms: HashMap<Uuid, MountedForm>,
    max_forms: usize,
}

impl FormRegistry {
    pub fn new(max_forms: usize) -> Self {
        Self {
            forms: HashMap::new(),
            max_forms: max_forms.max(1),
        }
    }

    /// Mount a fresh form, evicting the least recently used one when full
    pub fn mount(&mut self) -> Uuid {
        if self.forms.len() >= self.max_forms {
            let oldest = self
                .forms
                .iter()
                .min_by_key(|(_, form)| form.last_seen)
                .map(|(id, _)| *id);
            if let Some(id) = oldest {
                self.forms.remove(&id);
                tracing::debug!(form_id = %id, "evicted least recently used form");
            }
        }

        let id = Uuid::new_v4();
        self.forms.insert(
            id,
            MountedForm {
                state: FormState::new(),
                last_seen: Instant::now(),
            },
        );
        id
    }

    /// Get a mounted form for an event, refreshing its idle timer
    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut FormState> {
        self.forms.get_mut(id).map(|form| {
            form.last_seen = Instant::now();
            &mut form.state
        })
    }

    pub fn get(&self, id: &Uuid) -> Option<&FormState> {
        self.forms.get(id).map(|form| &form.state)
    }

    /// Drop a form. Returns false if it was not mounted.
    pub fn unmount(&mut self, id: &Uuid) -> bool {
        self.forms.remove(id).is_some()
    }

    /// Unmount forms idle for longer than `ttl`, returning how many were dropped
    pub fn sweep(&mut self, ttl: Duration) -> usize {
        self.sweep_at(Instant::now(), ttl)
    }

    fn sweep_at(&mut self, now: Instant, ttl: Duration) -> usize {
        let before = self.forms.len();
        self.forms
            .retain(|_, form| now.saturating_duration_since(form.last_seen) <= ttl);
        before - self.forms.len()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_form::Field;

    #[test]
    fn test_mount_and_unmount() {
        let mut registry = FormRegistry::new(10);
        let id = registry.mount();
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&id).is_some());

        assert!(registry.unmount(&id));
        assert!(!registry.unmount(&id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_forms_are_independent() {
        let mut registry = FormRegistry::new(10);
        let a = registry.mount();
        let b = registry.mount();

        registry.get_mut(&a).unwrap().on_field_change(Field::FirstName, "Jack");

        assert!(registry.get(&a).unwrap().errors().has_error(Field::FirstName));
        assert!(registry.get(&b).unwrap().errors().is_empty());
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let mut registry = FormRegistry::new(2);
        let first = registry.mount();
        let second = registry.mount();
        // touching the first makes the second the eviction candidate
        std::thread::sleep(Duration::from_millis(2));
        registry.get_mut(&first);

        let third = registry.mount();
        assert_eq!(registry.len(), 2);
        assert!(registry.get(&first).is_some());
        assert!(registry.get(&second).is_none());
        assert!(registry.get(&third).is_some());
    }

    #[test]
    fn test_sweep_drops_idle_forms() {
        let mut registry = FormRegistry::new(10);
        registry.mount();
        registry.mount();

        assert_eq!(registry.sweep(Duration::from_secs(60)), 0);

        let later = Instant::now() + Duration::from_secs(61);
        assert_eq!(registry.sweep_at(later, Duration::from_secs(60)), 2);
        assert!(registry.is_empty());
    }
}
