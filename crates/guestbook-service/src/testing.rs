//! In-memory repositories for tests
//!
//! One [`InMemoryStore`] implements all four repository traits over a single
//! mutex, mirroring the constraints the PostgreSQL schema enforces: unique
//! emails, one upvote per (user, message) and cascading message deletes.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use guestbook_common::{hash_password, PaginationConfig};
use guestbook_core::entities::{
    ActivationToken, Message, MessageUpdate, NewMessage, NewUpvote, NewUser, RankedMessage,
    Upvote, User,
};
use guestbook_core::error::DomainError;
use guestbook_core::traits::{
    ActivationTokenRepository, MessageRepository, RepoResult, UpvoteRepository, UserRepository,
};
use guestbook_core::value_objects::{MessageId, UpvoteId, UserId};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::services::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    tokens: Vec<ActivationToken>,
    messages: Vec<Message>,
    upvotes: Vec<Upvote>,
    next_id: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared in-memory backing store
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Service context whose repositories all point at this store
    pub fn context(self: &Arc<Self>) -> ServiceContext {
        self.context_with(PaginationConfig::default())
    }

    pub fn context_with(self: &Arc<Self>, pagination: PaginationConfig) -> ServiceContext {
        ServiceContextBuilder::new()
            .user_repo(self.clone())
            .token_repo(self.clone())
            .message_repo(self.clone())
            .upvote_repo(self.clone())
            .pagination(pagination)
            .build()
            .expect("every repository is supplied")
    }

    /// Insert an already-activated account with a real argon2 hash
    pub fn insert_active_user(&self, email: &str, password: &str) -> UserId {
        let hash = hash_password(password).expect("hashing test password");
        let mut state = self.state.lock();
        let id = UserId::new(state.next_id());
        let user = User {
            id,
            email: email.to_string(),
            active: true,
            activated_at: Some(Utc::now()),
            created_at: Utc::now(),
        };
        state.users.push((user, hash));
        id
    }

    /// Insert a message directly, bypassing the services
    pub fn insert_message(&self, author_id: UserId, body: &str, private: bool) -> MessageId {
        let mut state = self.state.lock();
        let id = MessageId::new(state.next_id());
        state.messages.push(Message {
            id,
            author_id,
            body: body.to_string(),
            private,
            created_at: Utc::now(),
        });
        id
    }

    /// Activation token issued to `email`, if it registered
    pub fn token_for(&self, email: &str) -> Option<Uuid> {
        let state = self.state.lock();
        let (user, _) = state.users.iter().find(|(u, _)| u.email == email)?;
        state
            .tokens
            .iter()
            .find(|t| t.user_id == user.id)
            .map(|t| t.token)
    }

    pub fn upvote_count(&self, message_id: MessageId) -> usize {
        self.state
            .lock()
            .upvotes
            .iter()
            .filter(|u| u.message_id == message_id)
            .count()
    }

    pub fn message(&self, id: MessageId) -> Option<Message> {
        self.state.lock().messages.iter().find(|m| m.id == id).cloned()
    }

    pub fn user(&self, id: UserId) -> Option<User> {
        self.state
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone())
    }
}

fn visible(message: &Message, requester: UserId) -> bool {
    !message.private || message.author_id == requester
}

fn newest_first(mut messages: Vec<Message>, limit: i64) -> Vec<Message> {
    messages.sort_by(|a, b| b.id.cmp(&a.id));
    messages.truncate(usize::try_from(limit).unwrap_or(0));
    messages
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.user(id))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let state = self.state.lock();
        Ok(state
            .users
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn create(&self, new_user: &NewUser) -> RepoResult<User> {
        let mut state = self.state.lock();
        if state.users.iter().any(|(u, _)| u.email == new_user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let user = User {
            id: UserId::new(state.next_id()),
            email: new_user.email.clone(),
            active: false,
            activated_at: None,
            created_at: Utc::now(),
        };
        state.tokens.push(ActivationToken {
            token: new_user.activation_token,
            user_id: user.id,
            created_at: Utc::now(),
            redeemed_at: None,
        });
        state
            .users
            .push((user.clone(), new_user.password_hash.clone()));
        Ok(user)
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        let state = self.state.lock();
        Ok(state
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, hash)| hash.clone()))
    }
}

#[async_trait]
impl ActivationTokenRepository for InMemoryStore {
    async fn find(&self, token: Uuid) -> RepoResult<Option<ActivationToken>> {
        let state = self.state.lock();
        Ok(state.tokens.iter().find(|t| t.token == token).cloned())
    }

    async fn redeem(&self, token: Uuid) -> RepoResult<()> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let record = state
            .tokens
            .iter_mut()
            .find(|t| t.token == token && t.redeemed_at.is_none())
            .ok_or(DomainError::AccountAlreadyActive)?;
        let (user, _) = state
            .users
            .iter_mut()
            .find(|(u, _)| u.id == record.user_id && !u.active)
            .ok_or(DomainError::AccountAlreadyActive)?;

        let now = Utc::now();
        record.redeemed_at = Some(now);
        user.active = true;
        user.activated_at = Some(now);
        Ok(())
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>> {
        Ok(self.message(id))
    }

    async fn list_visible(&self, requester: UserId, limit: i64) -> RepoResult<Vec<Message>> {
        let state = self.state.lock();
        let hits = state
            .messages
            .iter()
            .filter(|m| visible(m, requester))
            .cloned()
            .collect();
        Ok(newest_first(hits, limit))
    }

    async fn search_visible(
        &self,
        requester: UserId,
        term: &str,
        limit: i64,
    ) -> RepoResult<Vec<Message>> {
        let state = self.state.lock();
        let hits = state
            .messages
            .iter()
            .filter(|m| visible(m, requester) && m.body.contains(term))
            .cloned()
            .collect();
        Ok(newest_first(hits, limit))
    }

    async fn most_upvoted(&self, limit: i64) -> RepoResult<Vec<RankedMessage>> {
        let state = self.state.lock();
        let mut ranked: Vec<RankedMessage> = state
            .messages
            .iter()
            .filter(|m| !m.private)
            .map(|m| RankedMessage {
                id: m.id,
                body: m.body.clone(),
                upvotes: state.upvotes.iter().filter(|u| u.message_id == m.id).count() as i64,
            })
            .filter(|r| r.upvotes > 0)
            .collect();

        ranked.sort_by(|a, b| b.upvotes.cmp(&a.upvotes).then(a.id.cmp(&b.id)));
        ranked.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(ranked)
    }

    async fn create(&self, new_message: &NewMessage) -> RepoResult<Message> {
        let mut state = self.state.lock();
        let message = Message {
            id: MessageId::new(state.next_id()),
            author_id: new_message.author_id,
            body: new_message.body.clone(),
            private: new_message.private,
            created_at: Utc::now(),
        };
        state.messages.push(message.clone());
        Ok(message)
    }

    async fn update(&self, id: MessageId, update: &MessageUpdate) -> RepoResult<u64> {
        let mut state = self.state.lock();
        match state.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.apply(update.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: MessageId) -> RepoResult<u64> {
        let mut state = self.state.lock();
        let before = state.messages.len();
        state.messages.retain(|m| m.id != id);
        if state.messages.len() == before {
            return Ok(0);
        }
        state.upvotes.retain(|u| u.message_id != id);
        Ok(1)
    }
}

#[async_trait]
impl UpvoteRepository for InMemoryStore {
    async fn create(&self, upvote: &NewUpvote) -> RepoResult<Upvote> {
        let mut state = self.state.lock();
        if !state.messages.iter().any(|m| m.id == upvote.message_id) {
            return Err(DomainError::MessageNotFound(upvote.message_id));
        }
        if state
            .upvotes
            .iter()
            .any(|u| u.user_id == upvote.user_id && u.message_id == upvote.message_id)
        {
            return Err(DomainError::AlreadyUpvoted);
        }

        let stored = Upvote {
            id: UpvoteId::new(state.next_id()),
            user_id: upvote.user_id,
            message_id: upvote.message_id,
            created_at: Utc::now(),
        };
        state.upvotes.push(stored.clone());
        Ok(stored)
    }
}
