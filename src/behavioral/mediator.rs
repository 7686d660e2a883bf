//! Behavioral pattern: Mediator
//! Example: chat users who only ever talk to the room
//!
//! Users hold no references to each other. A user hands a message to the
//! mediator, which decides who receives it.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::console::Console;
use crate::error::{PatternError, Result};

pub type UserId = usize;

// Ids are unique across every room, so a membership check by id cannot
// confuse a stranger with a local member.
static NEXT_USER_ID: AtomicUsize = AtomicUsize::new(0);

pub trait Mediator {
    /// Delivers `message` from `from` to everyone else, returning what each
    /// recipient observed.
    fn relay(&self, from: UserId, message: &str) -> Result<Vec<String>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
}

impl User {
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn send(&self, mediator: &dyn Mediator, message: &str) -> Result<Vec<String>> {
        let mut lines = vec![format!("{} is sending: {}", self.name, message)];
        lines.extend(mediator.relay(self.id, message)?);
        Ok(lines)
    }

    pub fn receive(&self, message: &str) -> String {
        format!("{} received the message: {}", self.name, message)
    }
}

#[derive(Debug, Default)]
pub struct ChatRoom {
    users: Vec<User>,
}

impl ChatRoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&mut self, name: impl Into<String>) -> User {
        let user = User {
            id: NEXT_USER_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
        };
        self.users.push(user.clone());
        user
    }

    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(User::name)
    }
}

impl Mediator for ChatRoom {
    fn relay(&self, from: UserId, message: &str) -> Result<Vec<String>> {
        if !self.users.iter().any(|user| user.id == from) {
            return Err(PatternError::UnknownParticipant(from));
        }
        Ok(self
            .users
            .iter()
            .filter(|user| user.id != from)
            .map(|user| user.receive(message))
            .collect())
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let mut room = ChatRoom::new();
    let joao = room.join("João");
    let maria = room.join("Maria");
    let carlos = room.join("Carlos");

    console.lines(joao.send(&room, "Hello, everyone!")?)?;
    console.lines(maria.send(&room, "Hi João, how are you?")?)?;
    console.lines(carlos.send(&room, "Hi Maria and João!")?)?;
    Ok(())
}
