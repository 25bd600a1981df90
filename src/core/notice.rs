use super::constants::NOTICE_LIFETIME_MS;
use super::schedule::Deferred;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Full class attribute for the banner, e.g. `notification notification-error`.
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoticeId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shown<B> {
    pub id: NoticeId,
    /// Banner that held the slot before; the caller takes it off the page.
    pub replaced: Option<B>,
    pub dismiss: Deferred<NoticeId>,
}

/// The single notification slot. `B` is whatever represents the banner on
/// screen. It stays owned here after a close click and is only handed back
/// on replacement or dismissal.
#[derive(Clone, Debug)]
pub struct NoticeSlot<B> {
    current: Option<(NoticeId, B)>,
    showing: bool,
    next_id: u64,
}

impl<B> Default for NoticeSlot<B> {
    fn default() -> Self {
        Self {
            current: None,
            showing: false,
            next_id: 0,
        }
    }
}

impl<B> NoticeSlot<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, banner: B) -> Shown<B> {
        self.show_with(|_| banner)
    }

    /// Like [`NoticeSlot::show`] for banners that need their own id.
    pub fn show_with(&mut self, build: impl FnOnce(NoticeId) -> B) -> Shown<B> {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        let replaced = self.current.replace((id, build(id))).map(|(_, b)| b);
        self.showing = true;
        Shown {
            id,
            replaced,
            dismiss: Deferred::after(NOTICE_LIFETIME_MS, id),
        }
    }

    /// Close click. Returns the banner to take off the page, or `None` when
    /// `id` is no longer showing.
    pub fn close(&mut self, id: NoticeId) -> Option<&B> {
        match &self.current {
            Some((cur, banner)) if *cur == id && self.showing => {
                self.showing = false;
                Some(banner)
            }
            _ => None,
        }
    }

    /// Auto-dismiss timer. Releases the banner if `id` still holds the slot,
    /// closed or not.
    pub fn dismiss(&mut self, id: NoticeId) -> Option<B> {
        match self.current {
            Some((cur, _)) if cur == id => {
                self.showing = false;
                self.current.take().map(|(_, b)| b)
            }
            _ => None,
        }
    }

    /// Banner currently on screen.
    pub fn current(&self) -> Option<&B> {
        self.current
            .as_ref()
            .filter(|_| self.showing)
            .map(|(_, b)| b)
    }

    pub fn current_id(&self) -> Option<NoticeId> {
        self.current
            .as_ref()
            .filter(|_| self.showing)
            .map(|(id, _)| *id)
    }
}
