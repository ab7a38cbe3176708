#![allow(warnings)]
//! Task Manager Frontend Entry Point

mod models;
mod api;
mod session;
mod auth;
mod context;
mod validate;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
