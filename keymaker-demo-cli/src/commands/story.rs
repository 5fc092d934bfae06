//! Story command - replay the lost house key walkthrough

use anyhow::{ensure, Result};
use keymaker_lib::{Key, Keymaker, Person};
use std::rc::Rc;

use crate::ui;

#[tracing::instrument]
pub fn run(verbose: bool) -> Result<()> {
    ui::header("The Lost House Key");

    let me = Rc::new(Person::default());
    let name = me.name().to_string();
    ui::says(&name, "I lost my house key...");
    ui::key_value("Holding", &super::describe_key(&me));

    let mut keymaker = Keymaker::new();
    ui::says(&name, "Hey, Mr Keymaker, please do make me a key");
    me.register_with(&mut keymaker);
    tracing::debug!(delegate = keymaker.has_delegate(), "registered with keymaker");

    ui::says("Keymaker", "Sure thing!");
    let key = Key::new("Basic");
    if verbose {
        ui::info(&format!("Keymaker is cutting a {key} key"));
    }
    ui::says("Keymaker", "Phew, this was a tough one. Let me call that guy...");
    let delivery = keymaker.produce_key(key);

    ensure!(
        delivery.is_delivered(),
        "keymaker could not reach {name}: {delivery}"
    );
    ui::says(&name, "Yay, can enter the house again! Thanks Mr Keymaker");
    ui::key_value("Holding", &super::describe_key(&me));
    ui::success("Key delivered through the delegate");

    Ok(())
}
