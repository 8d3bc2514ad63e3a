pub mod fpv;
pub mod fun;
pub mod help;

use crate::{Data, Error};

/// Every command the bot registers, in help order.
pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        fpv::fpv(),
        fun::dronejoke(),
        fun::motivation(),
        help::help(),
    ]
}
