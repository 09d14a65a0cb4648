//! Version-guarded request slots.
//!
//! Each data source on a page owns one [`FetchSlot`] keyed by its input tuple.
//! Issuing a request bumps the slot's generation and hands out a
//! [`RequestToken`]; a response is only applied when its token still matches
//! the slot's generation, so a slow response for an abandoned tuple can never
//! overwrite newer state.  Successful results are cached per key and served
//! immediately when the same tuple comes back, while a revalidation request
//! runs in the background.  Only the most recent [`CACHE_LIMIT`] keys are
//! kept.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::error::ApiError;

/// Cached keys per slot; the oldest key is evicted first.
pub const CACHE_LIMIT: usize = 16;

/// Identifies one issued request.  Opaque to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

/// What a page knows about one data source.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested (no inputs yet, or a no-op input such as an empty
    /// username).
    Idle,
    Pending,
    Failed(ApiError),
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            FetchState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct FetchSlot<K, T> {
    key: Option<K>,
    generation: u64,
    state: FetchState<T>,
    cache: HashMap<K, T>,
    /// Cached keys, oldest first.
    recent: VecDeque<K>,
}

impl<K, T> Default for FetchSlot<K, T> {
    fn default() -> Self {
        Self {
            key: None,
            generation: 0,
            state: FetchState::Idle,
            cache: HashMap::new(),
            recent: VecDeque::new(),
        }
    }
}

impl<K, T> FetchSlot<K, T>
where
    K: Eq + Hash + Clone,
    T: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_pending()
    }

    /// Point the slot at `key`.  Returns a token when a request has to be
    /// sent, `None` when the slot already holds (or awaits) data for `key`.
    pub fn request(&mut self, key: K) -> Option<RequestToken> {
        if self.key.as_ref() == Some(&key)
            && matches!(self.state, FetchState::Pending | FetchState::Ready(_))
        {
            return None;
        }
        self.state = match self.cache.get(&key) {
            Some(cached) => FetchState::Ready(cached.clone()),
            None => FetchState::Pending,
        };
        self.key = Some(key);
        Some(self.next_token())
    }

    /// Re-issue the request for the current key (retry after a failure).
    pub fn refresh(&mut self) -> Option<RequestToken> {
        self.key.as_ref()?;
        if !matches!(self.state, FetchState::Ready(_)) {
            self.state = FetchState::Pending;
        }
        Some(self.next_token())
    }

    /// Resolve `key` locally without a request.  Outstanding responses are
    /// invalidated.
    pub fn settle(&mut self, key: K, value: T) {
        self.next_token();
        self.remember(key.clone(), value.clone());
        self.key = Some(key);
        self.state = FetchState::Ready(value);
    }

    /// Forget the current key; outstanding responses become stale.
    pub fn clear(&mut self) {
        self.next_token();
        self.key = None;
        self.state = FetchState::Idle;
    }

    /// Apply a response.  Returns `false` (and changes nothing) when the token
    /// was superseded.
    pub fn resolve(&mut self, token: RequestToken, result: Result<T, ApiError>) -> bool {
        if token.generation != self.generation {
            return false;
        }
        let Some(key) = self.key.clone() else {
            return false;
        };
        self.state = match result {
            Ok(value) => {
                self.remember(key, value.clone());
                FetchState::Ready(value)
            }
            Err(e) => {
                self.forget(&key);
                FetchState::Failed(e)
            }
        };
        true
    }

    /// True when `token` is the newest request of this slot.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.generation == self.generation
    }

    fn remember(&mut self, key: K, value: T) {
        if self.cache.insert(key.clone(), value).is_some() {
            self.recent.retain(|k| k != &key);
        }
        self.recent.push_back(key);
        while self.recent.len() > CACHE_LIMIT {
            if let Some(oldest) = self.recent.pop_front() {
                self.cache.remove(&oldest);
            }
        }
    }

    fn forget(&mut self, key: &K) {
        if self.cache.remove(key).is_some() {
            self.recent.retain(|k| k != key);
        }
    }

    fn next_token(&mut self) -> RequestToken {
        self.generation += 1;
        RequestToken { generation: self.generation }
    }
}
