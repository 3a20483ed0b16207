use crate::window_host::WindowHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostEvent {
    SessionOpened,
    SessionClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListenerId(u64);

type HostEventListener = Box<dyn Fn(HostEvent, &dyn WindowHost) + Send + Sync>;

/// Lifecycle emitter owned by `HostState`. Controllers publish here instead
/// of reaching into each other.
#[derive(Default)]
pub(crate) struct HostEvents {
    next_id: u64,
    listeners: Vec<(ListenerId, HostEventListener)>,
}

impl HostEvents {
    pub(crate) fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(HostEvent, &dyn WindowHost) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes exactly the listener registered under `id`.
    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub(crate) fn publish(&self, event: HostEvent, host: &dyn WindowHost) {
        for (_, listener) in &self.listeners {
            listener(event, host);
        }
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::window_host::fake::FakeHost;

    #[test]
    fn publish_reaches_every_listener_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut events = HostEvents::default();
        for tag in ["first", "second"] {
            let seen = Arc::clone(&seen);
            events.subscribe(move |event, _| seen.lock().unwrap().push((tag, event)));
        }

        events.publish(HostEvent::SessionOpened, &FakeHost::default());

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                ("first", HostEvent::SessionOpened),
                ("second", HostEvent::SessionOpened)
            ]
        );
    }

    #[test]
    fn unsubscribe_removes_only_the_matching_listener() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut events = HostEvents::default();
        let first = {
            let seen = Arc::clone(&seen);
            events.subscribe(move |_, _| seen.lock().unwrap().push("first"))
        };
        {
            let seen = Arc::clone(&seen);
            events.subscribe(move |_, _| seen.lock().unwrap().push("second"));
        }

        assert!(events.unsubscribe(first));
        assert!(!events.unsubscribe(first));
        assert_eq!(events.listener_count(), 1);

        events.publish(HostEvent::SessionClosed, &FakeHost::default());
        assert_eq!(*seen.lock().unwrap(), vec!["second"]);
    }
}
