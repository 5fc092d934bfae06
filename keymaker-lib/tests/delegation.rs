//! End-to-end delegation scenarios.

use keymaker_lib::prelude::*;
use keymaker_lib::test_utils::RecordingDelegate;
use std::rc::Rc;

/// Passes every key it receives on to a person through its own keymaker.
struct Courier {
    recipient: Rc<Person>,
}

impl Keymaking for Courier {
    fn on_key_produced(&self, producer: &Keymaker, key: Key) {
        // Delivery happens while the producer still sees its delegate.
        assert!(producer.has_delegate());
        let mut relay = Keymaker::new();
        self.recipient.register_with(&mut relay);
        relay.produce_key(key);
    }
}

#[test]
fn test_lost_house_key_walkthrough() {
    let me = Rc::new(Person::default());
    assert!(me.key().is_none());

    let mut keymaker = Keymaker::new();
    me.register_with(&mut keymaker);

    let delivery = keymaker.produce_key(Key::new("Basic"));

    assert_eq!(delivery, Delivery::Delivered);
    assert_eq!(me.key(), Some(Key::new("Basic")));
}

#[test]
fn test_producing_for_nobody_changes_nothing() {
    let bystander = Rc::new(Person::new("Bystander"));
    let keymaker = Keymaker::new();

    let delivery = keymaker.produce_key(Key::new("X"));

    assert_eq!(delivery, Delivery::NoDelegate);
    assert!(!keymaker.has_delegate());
    assert!(bystander.key().is_none());
}

#[test]
fn test_exactly_one_notification_per_key() {
    let recorder = Rc::new(RecordingDelegate::new());
    let mut keymaker = Keymaker::new();
    keymaker.register(&recorder);

    keymaker.produce_key(Key::new("Warded"));

    assert_eq!(recorder.count(), 1);
    assert_eq!(recorder.last(), Some(Key::new("Warded")));
}

#[test]
fn test_second_registration_overwrites_first() {
    let alice = Rc::new(Person::new("Alice"));
    let bob = Rc::new(Person::new("Bob"));
    let mut keymaker = Keymaker::new();

    alice.register_with(&mut keymaker);
    bob.register_with(&mut keymaker);
    keymaker.produce_key(Key::new("Basic"));

    assert!(alice.key().is_none());
    assert_eq!(bob.key(), Some(Key::new("Basic")));
}

#[test]
fn test_mixed_delegate_types_share_one_slot() {
    let person = Rc::new(Person::default());
    let recorder = Rc::new(RecordingDelegate::new());
    let mut keymaker = Keymaker::new();

    person.register_with(&mut keymaker);
    keymaker.produce_key(Key::new("First"));
    keymaker.register(&recorder);
    keymaker.produce_key(Key::new("Second"));

    assert_eq!(person.key(), Some(Key::new("First")));
    assert_eq!(recorder.received(), vec![Key::new("Second")]);
}

#[test]
fn test_delegate_can_forward_through_another_keymaker() {
    let person = Rc::new(Person::new("Recipient"));
    let courier = Rc::new(Courier {
        recipient: person.clone(),
    });
    let mut keymaker = Keymaker::new();
    keymaker.register(&courier);

    assert_eq!(keymaker.produce_key(Key::new("Basic")), Delivery::Delivered);
    assert_eq!(person.key(), Some(Key::new("Basic")));
    assert_eq!(Rc::strong_count(&courier), 1);
}

#[test]
fn test_dropped_person_stops_receiving() {
    let mut keymaker = Keymaker::new();
    {
        let temporary = Rc::new(Person::new("Temporary"));
        temporary.register_with(&mut keymaker);
        assert!(keymaker.has_delegate());
    }

    assert!(keymaker.delegate().is_none());
    assert_eq!(
        keymaker.produce_key(Key::new("Basic")),
        Delivery::DelegateDropped
    );

    let err = keymaker
        .produce_key_required(Key::new("Basic"))
        .unwrap_err();
    assert_eq!(err, KeymakerError::DelegateDropped(Key::new("Basic")));
    assert_eq!(err.into_key().shape(), "Basic");
}

#[test]
fn test_set_delegate_with_weak_trait_object() {
    let person = Rc::new(Person::default());
    let shared: Rc<dyn Keymaking> = person.clone();
    let mut keymaker = Keymaker::new();
    keymaker.set_delegate(Rc::downgrade(&shared));

    keymaker.produce_key(Key::new("Basic"));
    assert_eq!(person.key(), Some(Key::new("Basic")));
}
