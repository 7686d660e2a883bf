//! Behavioral pattern: Observer
//! Example: people subscribed to an event
//!
//! The subject keeps `Rc<dyn Observer>` handles; unsubscribing compares by
//! pointer identity, not by value.

use std::cell::RefCell;
use std::rc::Rc;

use crate::console::Console;
use crate::error::Result;

pub trait Observer {
    /// Reacts to a notification and returns what the observer reported.
    fn update(&self, message: &str) -> String;
}

pub struct Event {
    name: String,
    observers: Vec<Rc<dyn Observer>>,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Event {
            name: name.into(),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Returns `true` if the observer was subscribed.
    pub fn unsubscribe(&mut self, observer: &Rc<dyn Observer>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
        self.observers.len() != before
    }

    pub fn notify(&self) -> Vec<String> {
        let message = format!("The event '{}' has happened!", self.name);
        self.observers
            .iter()
            .map(|observer| observer.update(&message))
            .collect()
    }

    /// Announces the event, then notifies every subscriber.
    pub fn occur(&self) -> Vec<String> {
        let mut lines = vec![format!("The event '{}' is happening!", self.name)];
        lines.extend(self.notify());
        lines
    }
}

pub struct Person {
    name: String,
    inbox: RefCell<Vec<String>>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            inbox: RefCell::new(Vec::new()),
        }
    }

    pub fn inbox(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }
}

impl Observer for Person {
    fn update(&self, message: &str) -> String {
        self.inbox.borrow_mut().push(message.to_string());
        format!("{} received the notification: {}", self.name, message)
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let mut concert = Event::new("Rock Concert");

    let joao: Rc<dyn Observer> = Rc::new(Person::new("João"));
    let maria: Rc<dyn Observer> = Rc::new(Person::new("Maria"));
    let carlos: Rc<dyn Observer> = Rc::new(Person::new("Carlos"));

    concert.subscribe(Rc::clone(&joao));
    concert.subscribe(Rc::clone(&maria));
    concert.subscribe(Rc::clone(&carlos));

    console.lines(concert.occur())?;
    console.blank()?;

    concert.unsubscribe(&maria);
    console.lines(concert.occur())?;
    Ok(())
}
