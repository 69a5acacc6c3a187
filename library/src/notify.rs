use crate::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(Phase)>;

/// Phase-change observers, called synchronously in registration order.
#[derive(Default)]
pub struct PhaseListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl PhaseListeners {
    pub fn register(&mut self, listener: impl FnMut(Phase) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub(crate) fn notify(&mut self, phase: Phase) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(phase);
        }
    }
}

impl std::fmt::Debug for PhaseListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhaseListeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}
