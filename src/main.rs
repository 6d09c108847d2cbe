#![allow(warnings)]
//! Claim Queue Dashboard Entry Point

mod models;
mod error;
mod config;
mod pending;
mod schedule;
mod stats;
mod submit;
mod history;
mod security;
mod queue;
mod notify;
mod api;
mod context;
mod store;
mod poll;
mod controller;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
