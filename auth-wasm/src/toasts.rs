use auth_core::Toast;

const MAX_VISIBLE: usize = 3;

/// Очередь показанных toast-уведомлений. Старые вытесняются, когда их
/// становится больше `MAX_VISIBLE`.
#[derive(Debug, Clone, Default)]
pub(crate) struct ToastQueue {
    next_id: u64,
    items: Vec<(u64, Toast)>,
}

impl ToastQueue {
    pub(crate) fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, toast));
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub(crate) fn dismiss(&mut self, id: u64) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }

    pub(crate) fn items(&self) -> &[(u64, Toast)] {
        &self.items
    }
}
