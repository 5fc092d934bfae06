//! Commission command - have a keymaker cut one key for one person

use anyhow::{Context, Result};
use keymaker_lib::{Delivery, Key, Keymaker, Person};
use serde::Serialize;
use std::rc::Rc;

use crate::ui;

/// What happened to a commissioned key.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub person: String,
    pub delivery: Delivery,
    pub key: Option<Key>,
}

/// Runs one commission without printing anything.
pub fn commission(name: &str, shape: &str, register: bool) -> Outcome {
    let person = Rc::new(Person::new(name));
    let mut keymaker = Keymaker::new();
    if register {
        person.register_with(&mut keymaker);
    }

    let delivery = keymaker.produce_key(Key::new(shape));

    Outcome {
        person: person.name().to_string(),
        delivery,
        key: person.key(),
    }
}

#[tracing::instrument]
pub fn run(name: &str, shape: &str, register: bool, json: bool, verbose: bool) -> Result<()> {
    tracing::debug!("Commissioning key");
    let outcome = commission(name, shape, register);

    if json {
        let rendered =
            serde_json::to_string_pretty(&outcome).context("Failed to serialize outcome")?;
        println!("{rendered}");
        return Ok(());
    }

    ui::header("Commission");
    ui::key_value("Person", &outcome.person);
    ui::key_value("Shape", shape);
    ui::key_value("Delivery", &outcome.delivery.to_string());
    match &outcome.key {
        Some(key) => ui::success(&format!("{} now holds a {key} key", outcome.person)),
        None => {
            ui::warning(&format!("{} did not receive a key", outcome.person));
            if verbose && !register {
                ui::info("Nobody was registered with the keymaker, so the key was dropped");
            }
        }
    }

    Ok(())
}
